//
//  brightcove-mapi
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Read and Write facades
//!
//! This module provides the shared types used by every Media API operation: the
//! error taxonomy, the request parameter builders, upload file descriptors, and the
//! response classifier that turns raw HTTP outcomes into classified results.
//!
//! # Overview
//!
//! - [`MediaApiError`] - Unified error type for all operations
//! - [`TransportFailure`] / [`TransportErrorKind`] - Failures of the HTTP exchange itself
//! - [`UserErrorKind`] - Caller-supplied arguments that violate a precondition
//! - [`MappingErrorKind`] - Envelopes that could not become domain objects
//! - Parameter builders (re-exported from [`params`])
//! - Response classification (re-exported from [`envelope`])
//!
//! # Example
//!
//! ```rust
//! use brightcove_mapi::api::common::{MediaApiError, UserErrorKind};
//!
//! fn describe(error: &MediaApiError) -> String {
//!     match error {
//!         MediaApiError::User { kind: UserErrorKind::TooManyVideosPerPage, .. } => {
//!             "ask for fewer videos".to_string()
//!         }
//!         MediaApiError::Application { code, .. } => format!("service said {}", code),
//!         other => other.to_string(),
//!     }
//! }
//! ```

use std::fmt;

use thiserror::Error;

pub mod envelope;
pub mod params;
pub mod upload;

pub use envelope::*;
pub use params::*;
pub use upload::*;

/// Result alias used by every Media API operation.
pub type Result<T> = std::result::Result<T, MediaApiError>;

/// Error code reported when the service's error payload matches neither known shape.
pub const MEDIA_API_ERROR_UNPARSABLE: i64 = -1;

/// Unified error type for all Media API operations.
///
/// Each variant corresponds to one error family and carries only the fields relevant
/// to it. Every variant exposes a numeric [`code`](Self::code) and a human-readable
/// message through `Display`.
///
/// # Variants
///
/// | Variant | Raised by | Codes |
/// |---------|-----------|-------|
/// | `User` | Parameter building, before any network call | 500-530 |
/// | `Transport` | The HTTP exchange or top-level JSON parse | 100-300 |
/// | `Application` | The service itself (business failure) | service code, or -1 |
/// | `Mapping` | Envelope to domain object conversion | 301, 406, 499 |
/// | `RetryAbandoned` | A retry handler giving up | 600 |
#[derive(Error, Debug, Clone)]
pub enum MediaApiError {
    /// The caller supplied arguments that violate a documented precondition.
    #[error("User error ({kind}): {detail}")]
    User {
        /// Which precondition was violated
        kind: UserErrorKind,
        /// Human-readable explanation naming the offending value
        detail: String,
    },

    /// The HTTP exchange failed or the response body was not a JSON object.
    #[error("{0}")]
    Transport(#[from] TransportFailure),

    /// The service reported a business-level failure.
    ///
    /// `code` is [`MEDIA_API_ERROR_UNPARSABLE`] and `message` is `None` when the error
    /// payload could not be read.
    #[error("Media API error {code}: {}", message.as_deref().unwrap_or("unparsable error payload"))]
    Application {
        /// Numeric error code reported by the service
        code: i64,
        /// Description reported by the service
        message: Option<String>,
        /// The full envelope as returned by the service
        envelope: serde_json::Value,
    },

    /// A successfully classified envelope could not be converted into the expected object.
    #[error("Mapping error ({kind}) in {operation}: {detail}")]
    Mapping {
        /// What went wrong during conversion
        kind: MappingErrorKind,
        /// Name of the operation whose response was being mapped
        operation: String,
        /// Underlying cause
        detail: String,
    },

    /// A retry handler gave up on an operation after repeated failures.
    #[error("Gave up on {operation} after {retries} retries: {source}")]
    RetryAbandoned {
        /// Name of the operation that was abandoned
        operation: String,
        /// Number of retries the handler granted before giving up
        retries: u32,
        /// The last error observed
        source: Box<MediaApiError>,
    },
}

impl MediaApiError {
    /// Creates a user error.
    pub fn user(kind: UserErrorKind, detail: impl Into<String>) -> Self {
        Self::User {
            kind,
            detail: detail.into(),
        }
    }

    /// Creates a transport error.
    pub fn transport(kind: TransportErrorKind, detail: impl Into<String>) -> Self {
        Self::Transport(TransportFailure::new(kind, detail))
    }

    /// Creates a mapping error for the named operation.
    pub fn mapping(
        kind: MappingErrorKind,
        operation: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::Mapping {
            kind,
            operation: operation.into(),
            detail: detail.into(),
        }
    }

    /// Returns the numeric code for this error.
    ///
    /// Application errors report the service's own code; every other family reports
    /// the code of its kind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brightcove_mapi::api::common::{MediaApiError, UserErrorKind};
    ///
    /// let error = MediaApiError::user(UserErrorKind::ReferenceIdWithComma, "a,b");
    /// assert_eq!(error.code(), 501);
    /// ```
    pub fn code(&self) -> i64 {
        match self {
            Self::User { kind, .. } => kind.code(),
            Self::Transport(failure) => failure.kind.code(),
            Self::Application { code, .. } => *code,
            Self::Mapping { kind, .. } => kind.code(),
            Self::RetryAbandoned { .. } => 600,
        }
    }

    /// Returns `true` for failures that may succeed when the same call is repeated.
    ///
    /// Covers the service's call timeout (code 103), I/O failures, and 5xx statuses.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Application { code, .. } => *code == 103,
            Self::Transport(failure) => match failure.kind {
                TransportErrorKind::Io => true,
                TransportErrorKind::HttpErrorStatus { status } => status >= 500,
                _ => false,
            },
            _ => false,
        }
    }
}

/// Preconditions a caller can violate before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserErrorKind {
    /// A video query asked for more than the maximum page size.
    TooManyVideosPerPage,
    /// A reference id in a multi-value request contained a comma.
    ReferenceIdWithComma,
    /// A playlist query asked for more than the maximum page size.
    TooManyPlaylistsPerPage,
    /// The combination of arguments cannot be sent to the service.
    IncorrectParameters,
    /// An upload file does not exist or could not be read.
    InvalidFile,
}

impl UserErrorKind {
    /// Numeric code for this kind.
    pub fn code(self) -> i64 {
        match self {
            Self::TooManyVideosPerPage => 500,
            Self::ReferenceIdWithComma => 501,
            Self::TooManyPlaylistsPerPage => 510,
            Self::IncorrectParameters => 520,
            Self::InvalidFile => 530,
        }
    }
}

impl fmt::Display for UserErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::TooManyVideosPerPage => "too many videos per page",
            Self::ReferenceIdWithComma => "reference id contains a comma",
            Self::TooManyPlaylistsPerPage => "too many playlists per page",
            Self::IncorrectParameters => "incorrect parameters",
            Self::InvalidFile => "invalid file",
        };
        write!(f, "{} {}", self.code(), text)
    }
}

/// Causes of a failed HTTP exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// The request URI could not be built from the endpoint and parameters.
    InvalidUrlSyntax,
    /// The request could not be encoded in the configured character set.
    InvalidUrlEncoding,
    /// The server answered with a status other than 200.
    HttpErrorStatus {
        /// The observed HTTP status code
        status: u16,
    },
    /// The HTTP client was misused or the protocol exchange was invalid.
    ClientProtocol,
    /// Connecting, sending, reading, or waiting failed.
    Io,
    /// The response was read in a state where no body was available.
    IllegalState,
    /// The response body was not a JSON object.
    UnparsableResponse,
}

impl TransportErrorKind {
    /// Numeric code for this kind.
    pub fn code(self) -> i64 {
        match self {
            Self::InvalidUrlSyntax => 100,
            Self::InvalidUrlEncoding => 101,
            Self::HttpErrorStatus { .. } => 200,
            Self::ClientProtocol => 201,
            Self::Io => 202,
            Self::IllegalState => 203,
            Self::UnparsableResponse => 300,
        }
    }
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrlSyntax => write!(f, "invalid URL syntax"),
            Self::InvalidUrlEncoding => write!(f, "invalid URL encoding"),
            Self::HttpErrorStatus { status } => write!(f, "HTTP status {}", status),
            Self::ClientProtocol => write!(f, "client protocol error"),
            Self::Io => write!(f, "I/O error"),
            Self::IllegalState => write!(f, "illegal response state"),
            Self::UnparsableResponse => write!(f, "unparsable response"),
        }
    }
}

/// A failed HTTP exchange, attributed to exactly one [`TransportErrorKind`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Transport error ({kind}): {detail}")]
pub struct TransportFailure {
    /// The cause of the failure
    pub kind: TransportErrorKind,
    /// Details from the underlying error
    pub detail: String,
}

impl TransportFailure {
    /// Creates a new transport failure.
    pub fn new(kind: TransportErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

/// Ways a classified envelope can fail to become a domain object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingErrorKind {
    /// The service answered `null` where the operation needs a value.
    NullResult,
    /// The envelope did not have the expected structure.
    Unparsable,
    /// The service reported an upload status this client does not know.
    UnknownStatus,
}

impl MappingErrorKind {
    /// Numeric code for this kind.
    pub fn code(self) -> i64 {
        match self {
            Self::NullResult => 499,
            Self::Unparsable => 301,
            Self::UnknownStatus => 406,
        }
    }
}

impl fmt::Display for MappingErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullResult => write!(f, "null result"),
            Self::Unparsable => write!(f, "unparsable result"),
            Self::UnknownStatus => write!(f, "unknown status"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_kind() {
        assert_eq!(MediaApiError::user(UserErrorKind::InvalidFile, "x").code(), 530);
        assert_eq!(
            MediaApiError::transport(TransportErrorKind::HttpErrorStatus { status: 503 }, "x")
                .code(),
            200
        );
        assert_eq!(
            MediaApiError::mapping(MappingErrorKind::NullResult, "create_video", "null").code(),
            499
        );
    }

    #[test]
    fn test_transient_errors() {
        let timeout = MediaApiError::Application {
            code: 103,
            message: Some("CallTimeoutError".to_string()),
            envelope: serde_json::Value::Null,
        };
        assert!(timeout.is_transient());
        assert!(MediaApiError::transport(TransportErrorKind::Io, "reset").is_transient());
        assert!(
            MediaApiError::transport(TransportErrorKind::HttpErrorStatus { status: 502 }, "")
                .is_transient()
        );
        assert!(
            !MediaApiError::transport(TransportErrorKind::HttpErrorStatus { status: 404 }, "")
                .is_transient()
        );
        assert!(!MediaApiError::user(UserErrorKind::TooManyVideosPerPage, "").is_transient());
    }

    #[test]
    fn test_display_includes_detail() {
        let error = MediaApiError::Application {
            code: 210,
            message: Some("invalid token".to_string()),
            envelope: serde_json::Value::Null,
        };
        assert_eq!(error.to_string(), "Media API error 210: invalid token");

        let unparsable = MediaApiError::Application {
            code: MEDIA_API_ERROR_UNPARSABLE,
            message: None,
            envelope: serde_json::Value::Null,
        };
        assert!(unparsable.to_string().contains("unparsable"));
    }
}
