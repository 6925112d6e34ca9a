//
//  brightcove-mapi
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Brightcove Media API Client
//!
//! An async client for the Brightcove Media API, the HTTP/JSON service behind a
//! Video Cloud account's video library, plus the `mapi` command-line tool built on it.
//!
//! ## Features
//!
//! - **Typed Operations**: every read command and write method, with typed records
//! - **Pluggable Transport**: `reqwest` by default, any [`TransportFactory`](api::transport::TransportFactory) in tests
//! - **Uniform Errors**: one error type with a numeric code for every failure
//! - **Retries**: a caller-supplied handler decides whether a failed call runs again
//! - **Uploads**: multipart video and image uploads with MD5 checksums
//!
//! ## Module Structure
//!
//! - [`api`]: the Media API client, facades, and records
//! - [`config`]: endpoints, charset, timeout, and tokens from a TOML file
//! - [`cli`]: the `mapi` command-line interface
//! - [`util`]: time conversions, hashing, and formatting helpers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use brightcove_mapi::api::read::{FieldSelection, PageRequest};
//! use brightcove_mapi::{Config, ReadApi};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let api = ReadApi::from_config(&config)?;
//!
//! let page = api
//!     .find_all_playlists("read-token", &PageRequest::new().size(10), &FieldSelection::new())
//!     .await?;
//! println!("{} playlists", page.len());
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
///
/// Contains the `mapi` commands, arguments, and subcommands defined using the clap
/// derive API.
pub mod cli;

/// Media API client, facades, and records.
pub mod api;

/// Configuration file management.
///
/// Manages the configuration stored in platform-specific locations:
/// - Linux: `~/.config/mapi/config.toml`
/// - macOS: `~/Library/Application Support/mapi/config.toml`
/// - Windows: `%APPDATA%\mapi\config.toml`
pub mod config;

/// Utility functions and helpers.
///
/// - Epoch conversions (milliseconds and minutes)
/// - MD5 file checksums
/// - Size formatting (bytes to human-readable)
pub mod util;

/// Re-export of the main CLI struct for convenient access.
///
/// # Example
///
/// ```rust,no_run
/// use clap::Parser;
/// use brightcove_mapi::Cli;
///
/// let cli = Cli::parse();
/// ```
pub use cli::Cli;

/// Re-export of the configuration struct.
pub use config::Config;

/// Re-exports of the facades and their error type.
pub use api::{MediaApiClient, MediaApiError, ReadApi, WriteApi};

/// Application name constant.
///
/// The name of the CLI binary, used in the user agent and configuration paths.
///
/// # Value
///
/// `"mapi"`
pub const APP_NAME: &str = "mapi";

/// Application version constant.
///
/// ```rust
/// use brightcove_mapi::VERSION;
///
/// println!("mapi version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Example
///
/// ```rust,no_run
/// use brightcove_mapi::exit_codes;
/// use std::process;
///
/// process::exit(exit_codes::USAGE);
/// ```
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// Transport failures, unreadable configuration, or responses that could not be
    /// mapped. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    ///
    /// Also used when the Media API client rejects arguments before sending, such as
    /// an oversized page.
    pub const USAGE: i32 = 2;

    /// The Media API reported an error.
    pub const SERVICE_ERROR: i32 = 16;

    /// Retries were exhausted.
    pub const RETRIES_EXHAUSTED: i32 = 32;
}
