//
//  brightcove-mapi
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Pluggable HTTP Transport
//!
//! The request executor never talks to `reqwest` directly. It asks a
//! [`TransportFactory`] for a [`Connection`] per round trip, sends one
//! [`HttpRequest`] on it, and reads the body back. Dropping the connection releases
//! it, so every exit path of a round trip releases exactly once.
//!
//! [`ReqwestTransport`] is the default factory. It shares one pooled
//! [`reqwest::Client`] between all connections it hands out.
//!
//! ## Custom Transports
//!
//! Tests and embedders can supply their own factory:
//!
//! ```rust
//! use async_trait::async_trait;
//! use brightcove_mapi::api::common::TransportFailure;
//! use brightcove_mapi::api::transport::{Connection, HttpRequest, TransportFactory};
//!
//! struct Canned;
//!
//! struct CannedConnection;
//!
//! #[async_trait]
//! impl Connection for CannedConnection {
//!     async fn send(&mut self, _request: HttpRequest) -> Result<u16, TransportFailure> {
//!         Ok(200)
//!     }
//!
//!     async fn read_body(&mut self) -> Result<String, TransportFailure> {
//!         Ok("null".to_string())
//!     }
//! }
//!
//! impl TransportFactory for Canned {
//!     fn connect(&self) -> Result<Box<dyn Connection>, TransportFailure> {
//!         Ok(Box::new(CannedConnection))
//!     }
//! }
//! ```

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use url::Url;

use super::common::{TransportErrorKind, TransportFailure, UploadFile};

/// Name of the multipart part carrying the JSON-RPC envelope.
pub const JSON_RPC_PART: &str = "JSON-RPC";

/// A fully built request, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub enum HttpRequest {
    /// Read call: all parameters are in the URL query
    Get {
        /// Request URL, including the query
        url: Url,
    },
    /// Write call: multipart body posted to a fixed URL
    Post {
        /// Request URL, without a query
        url: Url,
        /// Multipart body
        form: MultipartForm,
    },
}

impl HttpRequest {
    /// The request URL.
    pub fn url(&self) -> &Url {
        match self {
            Self::Get { url } | Self::Post { url, .. } => url,
        }
    }
}

/// The parts of a write request body.
#[derive(Debug, Clone, PartialEq)]
pub struct MultipartForm {
    /// Serialized `{"method": ..., "params": ...}` envelope
    pub json_rpc: String,
    /// File sent as a second part named after its base name
    pub file: Option<UploadFile>,
}

/// Hands out one [`Connection`] per round trip.
pub trait TransportFactory: Send + Sync {
    /// Acquires a connection.
    fn connect(&self) -> Result<Box<dyn Connection>, TransportFailure>;
}

/// One HTTP exchange. Released when dropped.
#[async_trait]
pub trait Connection: Send {
    /// Sends the request and returns the response status.
    async fn send(&mut self, request: HttpRequest) -> Result<u16, TransportFailure>;

    /// Reads the body of the response received by [`send`](Self::send).
    ///
    /// Fails with [`TransportErrorKind::IllegalState`] when there is no response to
    /// read, including when the body was already consumed.
    async fn read_body(&mut self) -> Result<String, TransportFailure>;
}

/// Default transport backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the crate's User-Agent.
    pub fn new() -> Result<Self, TransportFailure> {
        let client = Client::builder()
            .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
            .build()
            .map_err(map_reqwest_error)?;
        Ok(Self { client })
    }

    /// Wraps an existing client, for callers that need proxies or custom TLS.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl TransportFactory for ReqwestTransport {
    fn connect(&self) -> Result<Box<dyn Connection>, TransportFailure> {
        Ok(Box::new(ReqwestConnection {
            client: self.client.clone(),
            response: None,
        }))
    }
}

struct ReqwestConnection {
    client: Client,
    response: Option<Response>,
}

#[async_trait]
impl Connection for ReqwestConnection {
    async fn send(&mut self, request: HttpRequest) -> Result<u16, TransportFailure> {
        let builder = match request {
            HttpRequest::Get { url } => self.client.get(url),
            HttpRequest::Post { url, form } => {
                self.client.post(url).multipart(build_form(form).await?)
            }
        };

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        self.response = Some(response);
        Ok(status)
    }

    async fn read_body(&mut self) -> Result<String, TransportFailure> {
        let response = self.response.take().ok_or_else(|| {
            TransportFailure::new(
                TransportErrorKind::IllegalState,
                "no response available to read",
            )
        })?;
        response.text().await.map_err(map_reqwest_error)
    }
}

async fn build_form(form: MultipartForm) -> Result<Form, TransportFailure> {
    let json_part = Part::text(form.json_rpc)
        .mime_str("text/plain; charset=UTF-8")
        .map_err(map_reqwest_error)?;
    let mut multipart = Form::new().part(JSON_RPC_PART, json_part);

    if let Some(file) = form.file {
        let bytes = tokio::fs::read(&file.path).await.map_err(|e| {
            TransportFailure::new(
                TransportErrorKind::Io,
                format!("failed to read '{}': {}", file.path.display(), e),
            )
        })?;
        let file_part = Part::bytes(bytes)
            .file_name(file.file_name.clone())
            .mime_str("application/octet-stream")
            .map_err(map_reqwest_error)?;
        multipart = multipart.part(file.file_name, file_part);
    }

    Ok(multipart)
}

/// Attributes a `reqwest` error to a transport error kind.
///
/// Request building, redirect loops, and body encoding problems are protocol misuse;
/// everything else happened on the wire.
fn map_reqwest_error(error: reqwest::Error) -> TransportFailure {
    let kind = if error.is_builder() || error.is_redirect() {
        TransportErrorKind::ClientProtocol
    } else {
        TransportErrorKind::Io
    };
    TransportFailure::new(kind, error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_body_before_send_is_illegal_state() {
        let transport = ReqwestTransport::new().unwrap();
        let mut connection = transport.connect().unwrap();
        let failure = connection.read_body().await.unwrap_err();
        assert_eq!(failure.kind, TransportErrorKind::IllegalState);
    }

    #[tokio::test]
    async fn test_missing_upload_file_is_io_failure() {
        let form = MultipartForm {
            json_rpc: "{}".to_string(),
            file: Some(UploadFile {
                path: "/definitely/not/here.mp4".into(),
                file_name: "here.mp4".to_string(),
                size: 0,
                checksum: String::new(),
            }),
        };
        let failure = build_form(form).await.unwrap_err();
        assert_eq!(failure.kind, TransportErrorKind::Io);
    }

    #[test]
    fn test_request_url() {
        let url = Url::parse("http://api.brightcove.com/services/library?command=x").unwrap();
        let request = HttpRequest::Get { url: url.clone() };
        assert_eq!(request.url(), &url);
    }
}
