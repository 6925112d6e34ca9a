//
//  brightcove-mapi
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Read-only settings shared by the read and write facades: where each facade
//! sends requests, the character set, the per-call timeout, UDS delivery, and the
//! account tokens.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/mapi/config.toml`
//! - **macOS**: `~/Library/Application Support/mapi/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\mapi\config.toml`
//!
//! A missing file is not an error; every setting has a default.
//!
//! ## Example Configuration File
//!
//! ```toml
//! charset = "UTF-8"
//! timeout_secs = 30
//! enable_uds = false
//! read_token = "your-read-token"
//! write_token = "your-write-token"
//!
//! [read]
//! host = "api.brightcove.com"
//! path = "/services/library"
//!
//! [write]
//! scheme = "https"
//! port = 443
//! ```
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O operations
//! - [`endpoints`]: Service endpoints and their overrides

mod endpoints;
mod file;

pub use endpoints::*;
pub use file::*;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Character set used when no other is configured.
pub const DEFAULT_CHARSET: &str = "UTF-8";

/// Configuration for both Media API facades.
///
/// # Examples
///
/// ```rust
/// use brightcove_mapi::config::Config;
///
/// let config: Config = toml::from_str(r#"
///     timeout_secs = 10
///     [write]
///     scheme = "https"
///     port = 443
/// "#).unwrap();
///
/// assert_eq!(config.write_endpoint().scheme, "https");
/// assert_eq!(config.read_endpoint().port, 80);
/// assert_eq!(config.timeout().unwrap().as_secs(), 10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Character set for request encoding
    #[serde(default = "default_charset")]
    pub charset: String,

    /// Per-call deadline in seconds; no deadline when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Ask the read service for HTTP (UDS) media delivery
    #[serde(default)]
    pub enable_uds: bool,

    /// Read token for the account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_token: Option<String>,

    /// Write token for the account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_token: Option<String>,

    /// Read facade endpoint overrides
    #[serde(default)]
    pub read: EndpointConfig,

    /// Write facade endpoint overrides
    #[serde(default)]
    pub write: EndpointConfig,
}

fn default_charset() -> String {
    DEFAULT_CHARSET.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            charset: default_charset(),
            timeout_secs: None,
            enable_uds: false,
            read_token: None,
            write_token: None,
            read: EndpointConfig::default(),
            write: EndpointConfig::default(),
        }
    }
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A missing file yields [`Config::default`].
    ///
    /// ```rust,no_run
    /// use brightcove_mapi::config::Config;
    ///
    /// let config = Config::load()?;
    /// println!("Reading from {}", config.read_endpoint().host);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Loads the configuration from `path`, or defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Returns the path to the configuration file.
    ///
    /// The file may not exist; this only returns where it would be.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// The read facade endpoint, defaults merged with overrides.
    pub fn read_endpoint(&self) -> Endpoint {
        Endpoint::read_default().merged(&self.read)
    }

    /// The write facade endpoint, defaults merged with overrides.
    pub fn write_endpoint(&self) -> Endpoint {
        Endpoint::write_default().merged(&self.write)
    }

    /// The per-call deadline, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.charset, DEFAULT_CHARSET);
        assert!(!config.enable_uds);
        assert_eq!(config.read_endpoint(), Endpoint::read_default());
        assert_eq!(config.write_endpoint(), Endpoint::write_default());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_load_endpoint_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "enable_uds = true\nread_token = \"read-token\"\n\n[read]\nhost = \"localhost\"\nport = 8080\n",
        )
        .unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(loaded.enable_uds);
        assert_eq!(loaded.read_token.as_deref(), Some("read-token"));
        assert_eq!(loaded.read_endpoint().host, "localhost");
        assert_eq!(loaded.read_endpoint().port, 8080);
        assert_eq!(loaded.read_endpoint().path, DEFAULT_READ_PATH);
        assert_eq!(loaded.write_endpoint(), Endpoint::write_default());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timeout_secs = \"soon\"").unwrap();

        let error = Config::load_from(&path).unwrap_err();
        assert!(error.to_string().contains("Failed to parse config file"));
    }
}
