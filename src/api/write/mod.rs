//
//  brightcove-mapi
//  api/write/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Write Facade
//!
//! [`WriteApi`] creates, updates, and deletes videos, playlists, and images. Each
//! call is a multipart POST carrying a `JSON-RPC` part and, for uploads, the file.
//! Every operation takes the account's write token first.
//!
//! Unlike reads, a write that comes back `null` is an error: it fails with
//! [`MappingErrorKind::NullResult`](crate::api::common::MappingErrorKind::NullResult).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use brightcove_mapi::api::catalog::Video;
//! use brightcove_mapi::api::write::{CreateVideoOptions, WriteApi};
//! use brightcove_mapi::config::Config;
//! use std::path::Path;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let api = WriteApi::from_config(&Config::load()?)?;
//!
//! let video = Video {
//!     name: Some("Launch".to_string()),
//!     short_description: Some("Launch day recap".to_string()),
//!     ..Default::default()
//! };
//! let id = api
//!     .create_video(
//!         "write-token",
//!         &video,
//!         Some(Path::new("launch.mp4")),
//!         &CreateVideoOptions::default(),
//!     )
//!     .await?;
//! println!("created video {}", id);
//! # Ok(())
//! # }
//! ```

mod images;
mod playlists;
mod videos;

pub use videos::CreateVideoOptions;

use std::sync::Arc;

use serde_json::Value;

use super::client::MediaApiClient;
use super::retry::RetryHandler;
use super::common::{
    MappingErrorKind, MediaApiError, Result, WriteRequest, WriteRequestBuilder,
};
use crate::config::Config;

/// Write-side Media API facade.
///
/// Immutable once built; share it freely between tasks.
#[derive(Debug, Clone)]
pub struct WriteApi {
    client: MediaApiClient,
}

impl WriteApi {
    /// Wraps a client already pointed at the write endpoint.
    pub fn new(client: MediaApiClient) -> Self {
        Self { client }
    }

    /// Builds a facade from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut client =
            MediaApiClient::new(config.write_endpoint())?.with_charset(config.charset.clone());
        if let Some(timeout) = config.timeout() {
            client = client.with_timeout(timeout);
        }
        Ok(Self::new(client))
    }

    /// Consults `handler` before retrying a failed call.
    pub fn with_retry_handler(mut self, handler: Arc<dyn RetryHandler>) -> Self {
        self.client = self.client.with_retry_handler(handler);
        self
    }

    /// The underlying client.
    pub fn client(&self) -> &MediaApiClient {
        &self.client
    }

    /// Starts a request with the method and token.
    fn method(&self, method: &str, token: &str) -> WriteRequestBuilder {
        WriteRequestBuilder::new(method).param("token", token)
    }

    /// Runs a write with retries. `extract` reads the result out of the envelope
    /// inside each attempt, so a `null` or malformed response reaches the retry
    /// handler like any other failure.
    async fn call<T, F, M>(&self, operation: &str, build: F, extract: M) -> Result<T>
    where
        F: Fn() -> Result<WriteRequest> + Sync,
        M: Fn(Value) -> Result<T> + Sync,
    {
        let build = &build;
        let extract = &extract;
        let client = &self.client;
        client
            .with_retry(operation, move || async move {
                let request = build()?;
                let envelope = client.execute_write(&request).await.into_result()?;
                let envelope = envelope.ok_or_else(|| {
                    MediaApiError::mapping(
                        MappingErrorKind::NullResult,
                        operation,
                        "null response from the Media API",
                    )
                })?;
                extract(envelope)
            })
            .await
    }
}

/// Converts a serialization failure into a mapping error for `operation`.
fn to_json(value: serde_json::Result<Value>, operation: &str) -> Result<Value> {
    value.map_err(|e| MediaApiError::mapping(MappingErrorKind::Unparsable, operation, e.to_string()))
}

/// Reads an id out of a `result` member.
fn result_id(result: &Value, operation: &str) -> Result<i64> {
    match result {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .ok_or_else(|| {
        MediaApiError::mapping(
            MappingErrorKind::Unparsable,
            operation,
            format!("expected an id in result, got {}", result),
        )
    })
}
