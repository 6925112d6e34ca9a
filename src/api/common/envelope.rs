//
//  brightcove-mapi
//  api/common/envelope.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Response classification for Media API envelopes
//!
//! Every response from the Media API goes through [`classify`] before any domain
//! object is built. The classifier decides whether the call succeeded, failed at the
//! transport layer, failed at the application layer, or returned the benign `null`
//! sentinel.
//!
//! # Error Shapes
//!
//! The service emits errors in one of two shapes depending on endpoint and error class.
//!
//! Flat:
//!
//! ```json
//! {"error": "invalid token", "code": 210}
//! ```
//!
//! Nested:
//!
//! ```json
//! {"result": null, "error": {"code": 103, "name": "CallTimeoutError", "message": "..."}}
//! ```
//!
//! Top-level fields are tried first, then the nested object. When neither yields a
//! code and a message, the error is reported with [`MEDIA_API_ERROR_UNPARSABLE`].

use serde_json::{Map, Value};

use super::{MediaApiError, Result, TransportErrorKind, TransportFailure, MEDIA_API_ERROR_UNPARSABLE};

/// Outcome of a single HTTP round trip, before the body is interpreted.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TransportOutcome {
    /// The exchange failed before a usable body was read
    Failure(TransportFailure),
    /// The server answered 200 with this body
    Success(String),
}

/// The normalized outcome of one attempt at an operation.
///
/// This is what retry handlers and operations see. `NullResult` is a success variant:
/// the service answered the literal `null`, which means "nothing found" rather than
/// an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedResult {
    /// The service answered with an envelope carrying no error
    Success(Value),
    /// The service answered the literal string `null`
    NullResult,
    /// The service reported a business-level failure
    ApplicationError {
        /// Numeric error code, or [`MEDIA_API_ERROR_UNPARSABLE`]
        code: i64,
        /// Description reported by the service
        message: Option<String>,
        /// The full envelope
        envelope: Value,
    },
    /// The HTTP exchange failed or the body was not a JSON object
    TransportError(TransportFailure),
}

impl ClassifiedResult {
    /// Returns `true` for the two non-error variants.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_) | Self::NullResult)
    }

    /// Converts into a `Result`, mapping `NullResult` to `Ok(None)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brightcove_mapi::api::common::classify_body;
    ///
    /// let found = classify_body(r#"{"id": 42}"#).into_result().unwrap();
    /// assert!(found.is_some());
    ///
    /// let missing = classify_body("null").into_result().unwrap();
    /// assert!(missing.is_none());
    /// ```
    pub fn into_result(self) -> Result<Option<Value>> {
        match self {
            Self::Success(envelope) => Ok(Some(envelope)),
            Self::NullResult => Ok(None),
            Self::ApplicationError {
                code,
                message,
                envelope,
            } => Err(MediaApiError::Application {
                code,
                message,
                envelope,
            }),
            Self::TransportError(failure) => Err(MediaApiError::Transport(failure)),
        }
    }
}

/// Classifies the outcome of one round trip.
pub(crate) fn classify(outcome: TransportOutcome) -> ClassifiedResult {
    match outcome {
        TransportOutcome::Failure(failure) => ClassifiedResult::TransportError(failure),
        TransportOutcome::Success(body) => classify_body(&body),
    }
}

/// Classifies a raw 200 response body.
///
/// # Example
///
/// ```rust
/// use brightcove_mapi::api::common::{classify_body, ClassifiedResult};
///
/// match classify_body(r#"{"error": "invalid token", "code": 210}"#) {
///     ClassifiedResult::ApplicationError { code, message, .. } => {
///         assert_eq!(code, 210);
///         assert_eq!(message.as_deref(), Some("invalid token"));
///     }
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
pub fn classify_body(body: &str) -> ClassifiedResult {
    if body.trim() == "null" {
        return ClassifiedResult::NullResult;
    }

    let envelope = match serde_json::from_str::<Value>(body) {
        Ok(value @ Value::Object(_)) => value,
        Ok(other) => {
            return ClassifiedResult::TransportError(TransportFailure::new(
                TransportErrorKind::UnparsableResponse,
                format!("Expected a JSON object, got '{}'", other),
            ))
        }
        Err(e) => {
            return ClassifiedResult::TransportError(TransportFailure::new(
                TransportErrorKind::UnparsableResponse,
                format!("JSON error: {}", e),
            ))
        }
    };

    classify_envelope(envelope)
}

fn classify_envelope(envelope: Value) -> ClassifiedResult {
    let Some(object) = envelope.as_object() else {
        return ClassifiedResult::Success(envelope);
    };

    let error = match object.get("error") {
        None | Some(Value::Null) => return ClassifiedResult::Success(envelope),
        Some(Value::String(s)) if s == "null" => return ClassifiedResult::Success(envelope),
        Some(error) => error,
    };

    let (code, message) = match flat_error(object).or_else(|| nested_error(error)) {
        Some((code, message)) => (code, Some(message)),
        None => (MEDIA_API_ERROR_UNPARSABLE, None),
    };

    ClassifiedResult::ApplicationError {
        code,
        message,
        envelope,
    }
}

/// `{"error": "<message>", "code": <int>}`
fn flat_error(object: &Map<String, Value>) -> Option<(i64, String)> {
    let code = object.get("code").and_then(as_code)?;
    let message = object.get("error")?.as_str()?;
    Some((code, message.to_string()))
}

/// `{"error": {"code": <int>, "message": "<message>"}}`, possibly JSON-encoded as a string
fn nested_error(error: &Value) -> Option<(i64, String)> {
    let parsed;
    let error = match error {
        Value::String(text) => {
            parsed = serde_json::from_str::<Value>(text).ok()?;
            &parsed
        }
        other => other,
    };

    let object = error.as_object()?;
    let code = object.get("code").and_then(as_code)?;
    let message = object.get("message")?.as_str()?;
    Some((code, message.to_string()))
}

fn as_code(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn application_error(result: ClassifiedResult) -> (i64, Option<String>) {
        match result {
            ClassifiedResult::ApplicationError { code, message, .. } => (code, message),
            other => panic!("expected application error, got {:?}", other),
        }
    }

    #[test]
    fn test_null_body_is_null_result() {
        assert_eq!(classify_body("null"), ClassifiedResult::NullResult);
        assert_eq!(classify_body("null\n"), ClassifiedResult::NullResult);
    }

    #[test]
    fn test_success_without_error_field() {
        let result = classify_body(r#"{"id": 1, "name": "clip"}"#);
        assert_eq!(result, ClassifiedResult::Success(json!({"id": 1, "name": "clip"})));
    }

    #[test]
    fn test_error_null_means_success() {
        assert!(matches!(
            classify_body(r#"{"result": 7, "error": null, "id": null}"#),
            ClassifiedResult::Success(_)
        ));
        assert!(matches!(
            classify_body(r#"{"result": 7, "error": "null"}"#),
            ClassifiedResult::Success(_)
        ));
    }

    #[test]
    fn test_flat_error_shape() {
        let (code, message) = application_error(classify_body(
            r#"{"error":"invalid token","code":210}"#,
        ));
        assert_eq!(code, 210);
        assert_eq!(message.as_deref(), Some("invalid token"));
    }

    #[test]
    fn test_flat_error_with_string_code() {
        let (code, _) = application_error(classify_body(r#"{"error":"bad","code":"211"}"#));
        assert_eq!(code, 211);
    }

    #[test]
    fn test_nested_error_shape() {
        let (code, message) = application_error(classify_body(
            r#"{"result":null,"error":{"code":103,"name":"CallTimeoutError","message":"The request you made is taking longer than expected to return."}}"#,
        ));
        assert_eq!(code, 103);
        assert_eq!(
            message.as_deref(),
            Some("The request you made is taking longer than expected to return.")
        );
    }

    #[test]
    fn test_nested_error_encoded_as_string() {
        let (code, message) = application_error(classify_body(
            r#"{"result":null,"error":"{\"code\":301,\"message\":\"no such video\"}"}"#,
        ));
        assert_eq!(code, 301);
        assert_eq!(message.as_deref(), Some("no such video"));
    }

    #[test]
    fn test_unparsable_error_payload() {
        let (code, message) = application_error(classify_body(r#"{"error":"something broke"}"#));
        assert_eq!(code, MEDIA_API_ERROR_UNPARSABLE);
        assert!(message.is_none());

        let (code, _) = application_error(classify_body(r#"{"error":{"name":"Oops"}}"#));
        assert_eq!(code, MEDIA_API_ERROR_UNPARSABLE);

        let (code, _) = application_error(classify_body(r#"{"error":[1,2,3]}"#));
        assert_eq!(code, MEDIA_API_ERROR_UNPARSABLE);
    }

    #[test]
    fn test_unparsable_bodies() {
        for body in ["<html>down</html>", "[1,2]", "42", ""] {
            match classify_body(body) {
                ClassifiedResult::TransportError(failure) => {
                    assert_eq!(failure.kind, TransportErrorKind::UnparsableResponse)
                }
                other => panic!("expected transport error for {:?}, got {:?}", body, other),
            }
        }
    }

    #[test]
    fn test_transport_failure_passes_through() {
        let failure = TransportFailure::new(TransportErrorKind::Io, "connection reset");
        assert_eq!(
            classify(TransportOutcome::Failure(failure.clone())),
            ClassifiedResult::TransportError(failure)
        );
    }

    #[test]
    fn test_into_result() {
        let error = classify_body(r#"{"error":"invalid token","code":210}"#)
            .into_result()
            .unwrap_err();
        assert_eq!(error.code(), 210);
        assert!(classify_body("null").is_success());
    }
}
