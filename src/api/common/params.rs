//
//  brightcove-mapi
//  api/common/params.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request parameter builders
//!
//! Read operations are described by an [`OperationRequest`]: a command name plus an
//! ordered list of string parameters, later encoded into a query string. Write
//! operations are described by a [`WriteRequest`]: a method name plus a JSON `params`
//! object and an optional file to upload.
//!
//! Both builders validate their input before any network activity. Unset optional
//! parameters are omitted from the request entirely.
//!
//! # Example
//!
//! ```rust
//! use brightcove_mapi::api::common::ParamBuilder;
//!
//! let request = ParamBuilder::new("find_videos_by_tags")
//!     .param("token", "read-token")
//!     .joined("and_tags", ["news", "sport"])
//!     .optional("page_size", None::<u32>)
//!     .build();
//!
//! assert_eq!(request.get("and_tags"), Some("news,sport"));
//! assert_eq!(request.get("page_size"), None);
//! ```

use serde::Serialize;
use serde_json::{json, Map, Value};

use super::{MappingErrorKind, MediaApiError, Result, UploadFile, UserErrorKind};

/// Largest page size the service accepts for video and playlist queries.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Which kind of item a paged query returns; selects the page-size error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagedItems {
    /// Video queries
    Videos,
    /// Playlist queries
    Playlists,
}

/// Fails with a user error when `page_size` exceeds [`MAX_PAGE_SIZE`].
///
/// # Example
///
/// ```rust
/// use brightcove_mapi::api::common::{check_page_size, PagedItems};
///
/// assert!(check_page_size(Some(100), PagedItems::Videos).is_ok());
/// assert!(check_page_size(None, PagedItems::Videos).is_ok());
/// assert_eq!(check_page_size(Some(101), PagedItems::Playlists).unwrap_err().code(), 510);
/// ```
pub fn check_page_size(page_size: Option<u32>, items: PagedItems) -> Result<()> {
    match page_size {
        Some(size) if size > MAX_PAGE_SIZE => {
            let (kind, noun) = match items {
                PagedItems::Videos => (UserErrorKind::TooManyVideosPerPage, "videos"),
                PagedItems::Playlists => (UserErrorKind::TooManyPlaylistsPerPage, "playlists"),
            };
            Err(MediaApiError::user(
                kind,
                format!(
                    "requested {} {} per page; maximum allowed is {} {} per page",
                    size, noun, MAX_PAGE_SIZE, noun
                ),
            ))
        }
        _ => Ok(()),
    }
}

/// Fails with a user error when any reference id contains a comma.
///
/// Commas delimit multi-value fields on the wire, so a reference id containing one
/// cannot be sent unambiguously.
pub fn check_reference_ids<S: AsRef<str>>(reference_ids: &[S]) -> Result<()> {
    match reference_ids.iter().find(|id| id.as_ref().contains(',')) {
        Some(id) => Err(MediaApiError::user(
            UserErrorKind::ReferenceIdWithComma,
            format!("reference id '{}' contains a comma", id.as_ref()),
        )),
        None => Ok(()),
    }
}

/// A built read request: a command and its ordered parameters.
///
/// Keys may repeat; repeated keys keep their relative order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRequest {
    command: String,
    params: Vec<(String, String)>,
}

impl OperationRequest {
    /// The command name, sent as the `command` parameter.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// All parameters except `command`, in insertion order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// First value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values for `key`, in order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.params
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Every pair that goes on the wire, `command` first.
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        std::iter::once(("command", self.command.as_str()))
            .chain(self.params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

/// Builder for [`OperationRequest`].
#[derive(Debug, Clone)]
pub struct ParamBuilder {
    command: String,
    params: Vec<(String, String)>,
}

impl ParamBuilder {
    /// Starts a request for the given command.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter.
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds a parameter only when `value` is set.
    pub fn optional<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Adds one parameter per value, all under the same key.
    pub fn repeated<I, V>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        for value in values {
            self.params.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Adds the values joined with commas; omitted when there are no values.
    pub fn joined<I, V>(self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        let joined = values
            .into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");

        if joined.is_empty() {
            self
        } else {
            self.param(key, joined)
        }
    }

    /// Adds comma-joined reference ids after checking none contains a comma.
    pub fn reference_ids<S: AsRef<str>>(self, key: &str, reference_ids: &[S]) -> Result<Self> {
        check_reference_ids(reference_ids)?;
        Ok(self.joined(key, reference_ids.iter().map(|id| id.as_ref())))
    }

    /// Finishes the request.
    pub fn build(self) -> OperationRequest {
        OperationRequest {
            command: self.command,
            params: self.params,
        }
    }
}

/// A built write request: a JSON-RPC style method call with an optional upload.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteRequest {
    method: String,
    params: Map<String, Value>,
    file: Option<UploadFile>,
}

impl WriteRequest {
    /// The method name.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The `params` object.
    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }

    /// The file to upload alongside the JSON part, if any.
    pub fn file(&self) -> Option<&UploadFile> {
        self.file.as_ref()
    }

    /// The `{"method": ..., "params": {...}}` envelope sent as the `JSON-RPC` part.
    pub fn to_json_rpc(&self) -> Value {
        json!({
            "method": self.method,
            "params": self.params,
        })
    }
}

/// Builder for [`WriteRequest`].
#[derive(Debug, Clone)]
pub struct WriteRequestBuilder {
    method: String,
    params: Map<String, Value>,
    file: Option<UploadFile>,
}

impl WriteRequestBuilder {
    /// Starts a request for the given method.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            params: Map::new(),
            file: None,
        }
    }

    /// Sets a parameter.
    pub fn param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    /// Sets a parameter only when `value` is set.
    pub fn optional<V: Into<Value>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Sets a parameter to the JSON form of a domain object.
    pub fn object<T: Serialize>(self, key: &str, value: &T) -> Result<Self> {
        let json = serde_json::to_value(value).map_err(|e| {
            MediaApiError::mapping(
                MappingErrorKind::Unparsable,
                self.method.clone(),
                format!("could not serialize '{}': {}", key, e),
            )
        })?;
        Ok(self.param(key, json))
    }

    /// Attaches a file and its `filename`, `maxsize`, and `file_checksum` parameters.
    pub fn file(mut self, file: UploadFile) -> Self {
        self.params
            .insert("filename".to_string(), Value::from(file.file_name.clone()));
        self.params.insert("maxsize".to_string(), Value::from(file.size));
        self.params
            .insert("file_checksum".to_string(), Value::from(file.checksum.clone()));
        self.file = Some(file);
        self
    }

    /// Finishes the request.
    pub fn build(self) -> WriteRequest {
        WriteRequest {
            method: self.method,
            params: self.params,
            file: self.file,
        }
    }
}
