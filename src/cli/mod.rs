//
//  brightcove-mapi
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod playlist;
mod video;

pub use playlist::PlaylistCommand;
pub use video::VideoCommand;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::read::{FieldSelection, PageRequest, ReadApi};
use crate::api::retry::{RetryBudget, RetryHandler};
use crate::api::catalog::{PlaylistField, SortBy, SortOrder, VideoField};
use crate::api::write::WriteApi;
use crate::config::Config;

/// mapi - Work with the Brightcove Media API from the command line
#[derive(Parser, Debug)]
#[command(
    name = "mapi",
    version,
    about = "Work with the Brightcove Media API from the command line",
    long_about = "mapi works with the Brightcove Media API.\n\nIt reads and writes videos \
                  and playlists in a Brightcove Video Cloud account. Results are printed as JSON.",
    propagate_version = true,
    after_help = "Use 'mapi <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Configuration file to use instead of the default location
    #[arg(long, global = true, env = "MAPI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Read token (overrides the configuration file)
    #[arg(long, global = true, env = "MAPI_READ_TOKEN", hide_env_values = true)]
    pub read_token: Option<String>,

    /// Write token (overrides the configuration file)
    #[arg(long, global = true, env = "MAPI_WRITE_TOKEN", hide_env_values = true)]
    pub write_token: Option<String>,

    /// Retry transient failures up to this many times in total
    #[arg(long, global = true, default_value = "0")]
    pub retries: u32,

    /// Seconds to wait for each call before giving up
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

impl GlobalOptions {
    /// Loads the configuration and applies command-line overrides.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(timeout) = self.timeout {
            config.timeout_secs = Some(timeout);
        }
        if self.read_token.is_some() {
            config.read_token = self.read_token.clone();
        }
        if self.write_token.is_some() {
            config.write_token = self.write_token.clone();
        }
        Ok(config)
    }

    fn retry_handler(&self) -> Option<Arc<dyn RetryHandler>> {
        (self.retries > 0).then(|| {
            Arc::new(RetryBudget::new(self.retries).with_pause(Duration::from_secs(1)))
                as Arc<dyn RetryHandler>
        })
    }

    /// Builds the read facade and returns it with the read token.
    pub fn read_api(&self) -> Result<(ReadApi, String)> {
        let config = self.load_config()?;
        let token = config
            .read_token
            .clone()
            .context("No read token. Pass --read-token, set MAPI_READ_TOKEN, or add read_token to the config file")?;
        let mut api = ReadApi::from_config(&config)?;
        if let Some(handler) = self.retry_handler() {
            api = api.with_retry_handler(handler);
        }
        Ok((api, token))
    }

    /// Builds the write facade and returns it with the write token.
    pub fn write_api(&self) -> Result<(WriteApi, String)> {
        let config = self.load_config()?;
        let token = config
            .write_token
            .clone()
            .context("No write token. Pass --write-token, set MAPI_WRITE_TOKEN, or add write_token to the config file")?;
        let mut api = WriteApi::from_config(&config)?;
        if let Some(handler) = self.retry_handler() {
            api = api.with_retry_handler(handler);
        }
        Ok((api, token))
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read and manage videos
    #[command(visible_alias = "v")]
    Video(VideoCommand),

    /// Read and manage playlists
    #[command(visible_alias = "pl")]
    Playlist(PlaylistCommand),

    /// Print version information
    Version,
}

/// Paging and sorting flags shared by list commands
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Items per page (at most 100)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Zero-based page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Sort key, e.g. CREATION_DATE or PLAYS_TOTAL
    #[arg(long)]
    pub sort_by: Option<SortBy>,

    /// Sort direction (ASC or DESC)
    #[arg(long, requires = "sort_by")]
    pub sort_order: Option<SortOrder>,
}

impl PageArgs {
    pub fn to_request(&self) -> PageRequest {
        PageRequest {
            page_size: self.page_size,
            page_number: self.page,
            sort_by: self.sort_by,
            sort_order: self.sort_by.map(|_| self.sort_order.unwrap_or_default()),
        }
    }
}

/// Field selection flags shared by read commands
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    /// Video fields to return, e.g. id,name,tags
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<VideoField>,

    /// Custom metadata fields to return
    #[arg(long, value_delimiter = ',')]
    pub custom_fields: Vec<String>,

    /// Playlist fields to return, for playlist commands
    #[arg(long, value_delimiter = ',')]
    pub playlist_fields: Vec<PlaylistField>,
}

impl FieldArgs {
    pub fn to_selection(&self) -> FieldSelection {
        FieldSelection::new()
            .video_fields(self.fields.iter().copied())
            .custom_fields(self.custom_fields.iter().cloned())
            .playlist_fields(self.playlist_fields.iter().copied())
    }
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

/// Reads a JSON record from a file, or stdin when the path is `-`.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = if path.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// Parses an upper-case wire name for clap, e.g. `VIDEO_STILL`.
pub fn parse_wire_name<T: DeserializeOwned>(s: &str) -> std::result::Result<T, String> {
    let wire = s.trim().to_uppercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(wire))
        .map_err(|_| format!("unknown value '{}'", s))
}
