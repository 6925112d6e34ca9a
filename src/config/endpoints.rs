//
//  brightcove-mapi
//  config/endpoints.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Service Endpoints
//!
//! Where the read and write facades send their requests. Each facade has its own
//! endpoint; both default to `http://api.brightcove.com:80` and differ only in path.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::common::{TransportErrorKind, TransportFailure};

/// Default scheme for both facades.
pub const DEFAULT_SCHEME: &str = "http";

/// Default host for both facades.
pub const DEFAULT_HOST: &str = "api.brightcove.com";

/// Default port for both facades.
pub const DEFAULT_PORT: u16 = 80;

/// Default path of the read facade.
pub const DEFAULT_READ_PATH: &str = "/services/library";

/// Default path of the write facade.
pub const DEFAULT_WRITE_PATH: &str = "/services/post";

/// A resolved service location.
///
/// # Example
///
/// ```rust
/// use brightcove_mapi::config::Endpoint;
///
/// let endpoint = Endpoint::read_default();
/// assert_eq!(endpoint.url().unwrap().as_str(), "http://api.brightcove.com/services/library");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// URL scheme, `http` or `https`
    pub scheme: String,
    /// Host name
    pub host: String,
    /// TCP port
    pub port: u16,
    /// Path of the service, starting with `/`
    pub path: String,
}

impl Endpoint {
    /// Creates an endpoint from its parts.
    pub fn new(
        scheme: impl Into<String>,
        host: impl Into<String>,
        port: u16,
        path: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            port,
            path: path.into(),
        }
    }

    /// The public read service.
    pub fn read_default() -> Self {
        Self::new(DEFAULT_SCHEME, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_READ_PATH)
    }

    /// The public write service.
    pub fn write_default() -> Self {
        Self::new(DEFAULT_SCHEME, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_WRITE_PATH)
    }

    /// Builds the base URL, without a query.
    ///
    /// # Errors
    ///
    /// Fails with [`TransportErrorKind::InvalidUrlSyntax`] when the parts do not form
    /// a valid URL.
    pub fn url(&self) -> Result<Url, TransportFailure> {
        let raw = format!("{}://{}:{}{}", self.scheme, self.host, self.port, self.path);
        let url = Url::parse(&raw).map_err(|e| {
            TransportFailure::new(
                TransportErrorKind::InvalidUrlSyntax,
                format!("'{}': {}", raw, e),
            )
        })?;

        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(TransportFailure::new(
                TransportErrorKind::InvalidUrlSyntax,
                format!("'{}' has no host", raw),
            ));
        }
        Ok(url)
    }

    /// Applies the overrides that are set.
    pub fn merged(mut self, overrides: &EndpointConfig) -> Self {
        if let Some(scheme) = &overrides.scheme {
            self.scheme = scheme.clone();
        }
        if let Some(host) = &overrides.host {
            self.host = host.clone();
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(path) = &overrides.path {
            self.path = path.clone();
        }
        self
    }
}

/// Endpoint overrides as written in the configuration file.
///
/// ```toml
/// [read]
/// host = "api.example.com"
/// scheme = "https"
/// port = 443
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// URL scheme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,

    /// Host name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// TCP port
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Service path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(
            Endpoint::write_default().url().unwrap().as_str(),
            "http://api.brightcove.com/services/post"
        );
    }

    #[test]
    fn test_custom_port_kept() {
        let endpoint = Endpoint::new("http", "127.0.0.1", 8080, "/services/library");
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "http://127.0.0.1:8080/services/library"
        );
    }

    #[test]
    fn test_invalid_host_is_url_syntax_error() {
        let endpoint = Endpoint::new("http", "bad host", 80, "/services/library");
        let failure = endpoint.url().unwrap_err();
        assert_eq!(failure.kind, TransportErrorKind::InvalidUrlSyntax);
    }

    #[test]
    fn test_merged_overrides() {
        let overrides = EndpointConfig {
            scheme: Some("https".to_string()),
            port: Some(443),
            ..Default::default()
        };
        let endpoint = Endpoint::read_default().merged(&overrides);
        assert_eq!(endpoint.scheme, "https");
        assert_eq!(endpoint.host, DEFAULT_HOST);
        assert_eq!(endpoint.port, 443);
        assert_eq!(endpoint.path, DEFAULT_READ_PATH);
    }
}
