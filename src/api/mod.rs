//
//  brightcove-mapi
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Client for the Brightcove Media API, a JSON service for managing a video
//! library. Reads are URL-encoded GETs against `/services/library`; writes are
//! multipart POSTs against `/services/post` carrying a JSON-RPC payload.
//!
//! ## Architecture
//!
//! - [`transport`]: the pluggable HTTP seam ([`TransportFactory`](transport::TransportFactory))
//!   and its `reqwest` implementation
//! - [`client`]: executes one request and classifies the response
//! - [`retry`]: the retry decision point and a bounded retry budget
//! - [`read`]: every read command, typed
//! - [`write`]: every write method, typed
//! - [`catalog`]: video, playlist, and image records plus the enumerations
//! - [`common`]: errors, request builders, envelope classification
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use brightcove_mapi::api::retry::RetryBudget;
//! use brightcove_mapi::api::read::{FieldSelection, ReadApi};
//! use brightcove_mapi::api::MediaApiClient;
//! use brightcove_mapi::config::Endpoint;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = MediaApiClient::new(Endpoint::read_default())?
//!     .with_retry_handler(Arc::new(RetryBudget::new(3)));
//! let api = ReadApi::new(client);
//!
//! let video = api
//!     .find_video_by_id("read-token", 1234, &FieldSelection::new())
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation fails with a [`MediaApiError`] carrying a numeric code:
//!
//! - `100`-`300`: transport problems (bad URL, HTTP status, I/O, unparsable body)
//! - `499`, `301`, `406`: the response could not be mapped to the expected type
//! - `500`-`530`: the caller's arguments were rejected before sending
//! - `600`: the retry budget ran out
//! - anything else: an error code reported by the service itself

pub mod catalog;
pub mod client;
pub mod common;
pub mod read;
pub mod retry;
pub mod transport;
pub mod write;

pub use client::MediaApiClient;
pub use common::{MediaApiError, Result};
pub use read::ReadApi;
pub use write::WriteApi;
