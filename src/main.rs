//
//  brightcove-mapi
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use brightcove_mapi::cli::{Cli, Commands};
use brightcove_mapi::{exit_codes, MediaApiError};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("MAPI_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Maps a failure to the process exit code
fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<MediaApiError>() {
        Some(MediaApiError::User { .. }) => exit_codes::USAGE,
        Some(MediaApiError::Application { .. }) => exit_codes::SERVICE_ERROR,
        Some(MediaApiError::RetryAbandoned { .. }) => exit_codes::RETRIES_EXHAUSTED,
        _ => exit_codes::ERROR,
    }
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Video(cmd) => cmd.run(&cli.global).await,
        Commands::Playlist(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("mapi version {}", brightcove_mapi::VERSION);
            Ok(())
        }
    }
}
