//
//  brightcove-mapi
//  api/common/upload.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Upload file descriptors for write operations

use std::path::{Path, PathBuf};

use crate::util::md5_file_hex;

use super::{MediaApiError, Result, UserErrorKind};

/// A local file to send with a write request.
///
/// Size and checksum are computed once, when the descriptor is created, and sent as
/// the `maxsize` and `file_checksum` parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// Path the file is read from when the request is sent
    pub path: PathBuf,
    /// Base name, used as the multipart part name and the `filename` parameter
    pub file_name: String,
    /// Length in bytes
    pub size: u64,
    /// MD5 digest as lowercase hex
    pub checksum: String,
}

impl UploadFile {
    /// Describes the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`UserErrorKind::InvalidFile`] error if the path is not a readable
    /// regular file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let invalid = |reason: String| {
            MediaApiError::user(
                UserErrorKind::InvalidFile,
                format!("could not read '{}': {}", path.display(), reason),
            )
        };

        let metadata = std::fs::metadata(path).map_err(|e| invalid(e.to_string()))?;
        if !metadata.is_file() {
            return Err(invalid("not a regular file".to_string()));
        }

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| invalid("file name is not valid UTF-8".to_string()))?
            .to_string();

        let checksum = md5_file_hex(path).map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            size: metadata.len(),
            checksum,
        })
    }
}
