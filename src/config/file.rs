//
//  brightcove-mapi
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O Module
//!
//! Low-level file operations used by [`Config`](super::Config).
//!
//! ```rust,no_run
//! use std::path::Path;
//! use brightcove_mapi::config::{config_exists, read_config_file};
//!
//! let path = Path::new("/path/to/config.toml");
//!
//! if config_exists(path) {
//!     let content = read_config_file(path)?;
//!     println!("Config content: {}", content);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::path::Path;

use anyhow::{Context, Result};

/// Reads the configuration file into a string.
///
/// # Errors
///
/// Fails if the file does not exist, cannot be read, or is not valid UTF-8.
pub fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))
}

/// Returns `true` if a configuration file exists at `path`.
pub fn config_exists(path: &Path) -> bool {
    path.exists()
}
