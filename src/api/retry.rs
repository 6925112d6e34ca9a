//
//  brightcove-mapi
//  api/retry.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Retry Coordination
//!
//! A [`RetryHandler`] is consulted every time an attempt at an operation fails,
//! including failures raised while building the request. It answers one of three
//! ways:
//!
//! - `Ok(true)`: rebuild the request and run the whole attempt again
//! - `Ok(false)`: give up and return the original error
//! - `Err(e)`: give up and return `e` instead
//!
//! The executor imposes no ceiling on the number of attempts; bounding retries is
//! the handler's job. [`RetryBudget`] is a ready-made bounded handler.
//!
//! Any `Fn(&MediaApiError, &str) -> Result<bool>` closure is also a handler:
//!
//! ```rust
//! use brightcove_mapi::api::common::{MediaApiError, Result};
//! use brightcove_mapi::api::retry::RetryHandler;
//! use std::sync::Arc;
//!
//! let only_timeouts = |error: &MediaApiError, _operation: &str| -> Result<bool> {
//!     Ok(error.code() == 103)
//! };
//! let handler: Arc<dyn RetryHandler> = Arc::new(only_timeouts);
//! ```

use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use super::common::{MediaApiError, Result};

/// Decides whether a failed attempt should be repeated.
#[async_trait]
pub trait RetryHandler: Send + Sync {
    /// Called with the error of a failed attempt, the operation name, and the number
    /// of retries already granted to this invocation of the operation.
    async fn should_retry(&self, error: &MediaApiError, operation: &str, retries: u32)
        -> Result<bool>;
}

#[async_trait]
impl<F> RetryHandler for F
where
    F: Fn(&MediaApiError, &str) -> Result<bool> + Send + Sync,
{
    async fn should_retry(
        &self,
        error: &MediaApiError,
        operation: &str,
        _retries: u32,
    ) -> Result<bool> {
        self(error, operation)
    }
}

/// Retries transient failures up to a fixed number of times per operation.
///
/// Transient failures are the service's call timeout (code 103), I/O failures, and
/// 5xx statuses (see [`MediaApiError::is_transient`]). Other failures are returned
/// unchanged. Once an operation has used its retries, its next transient failure is
/// wrapped in [`MediaApiError::RetryAbandoned`].
///
/// Every call starts with a full allowance, so one budget can serve any number of
/// operations and tasks.
///
/// # Example
///
/// ```rust
/// use brightcove_mapi::api::retry::RetryBudget;
/// use std::time::Duration;
///
/// let budget = RetryBudget::new(3).with_pause(Duration::from_millis(250));
/// assert_eq!(budget.max_retries(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct RetryBudget {
    max_retries: u32,
    pause: Option<Duration>,
}

impl RetryBudget {
    /// Creates a budget allowing `max_retries` retries per operation.
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            pause: None,
        }
    }

    /// Waits `pause` before each granted retry.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = Some(pause);
        self
    }

    /// Retries allowed for each operation.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }
}

#[async_trait]
impl RetryHandler for RetryBudget {
    async fn should_retry(
        &self,
        error: &MediaApiError,
        operation: &str,
        retries: u32,
    ) -> Result<bool> {
        if !error.is_transient() {
            return Ok(false);
        }

        if retries >= self.max_retries {
            warn!(
                operation,
                code = error.code(),
                retries = self.max_retries,
                "retry budget exhausted"
            );
            return Err(MediaApiError::RetryAbandoned {
                operation: operation.to_string(),
                retries: self.max_retries,
                source: Box::new(error.clone()),
            });
        }

        info!(
            operation,
            code = error.code(),
            remaining = self.max_retries - retries,
            "transient failure, retrying"
        );
        if let Some(pause) = self.pause {
            tokio::time::sleep(pause).await;
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::{TransportErrorKind, UserErrorKind};

    fn call_timeout() -> MediaApiError {
        MediaApiError::Application {
            code: 103,
            message: Some("CallTimeoutError".to_string()),
            envelope: serde_json::Value::Null,
        }
    }

    #[tokio::test]
    async fn test_budget_grants_then_abandons() {
        let budget = RetryBudget::new(2);

        assert!(budget.should_retry(&call_timeout(), "find_all_videos", 0).await.unwrap());
        assert!(budget.should_retry(&call_timeout(), "find_all_videos", 1).await.unwrap());

        let error = budget
            .should_retry(&call_timeout(), "find_all_videos", 2)
            .await
            .unwrap_err();
        match error {
            MediaApiError::RetryAbandoned {
                operation,
                retries,
                source,
            } => {
                assert_eq!(operation, "find_all_videos");
                assert_eq!(retries, 2);
                assert_eq!(source.code(), 103);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_budget_ignores_permanent_failures() {
        let budget = RetryBudget::new(5);
        let user = MediaApiError::user(UserErrorKind::TooManyVideosPerPage, "101");
        let not_found =
            MediaApiError::transport(TransportErrorKind::HttpErrorStatus { status: 404 }, "");

        assert!(!budget.should_retry(&user, "find_all_videos", 0).await.unwrap());
        assert!(!budget.should_retry(&not_found, "find_all_videos", 0).await.unwrap());
    }

    #[tokio::test]
    async fn test_budget_allowance_is_per_call() {
        let budget = RetryBudget::new(1);
        let io = MediaApiError::transport(TransportErrorKind::Io, "connection reset");

        assert!(budget.should_retry(&io, "find_video_by_id", 0).await.unwrap());
        assert!(budget.should_retry(&io, "find_all_videos", 0).await.unwrap());
        assert!(budget.should_retry(&io, "find_video_by_id", 1).await.is_err());
    }

    #[test]
    fn test_zero_budget_abandons_immediately() {
        let budget = RetryBudget::new(0);
        let io = MediaApiError::transport(TransportErrorKind::Io, "connection reset");
        let error = tokio_test::assert_err!(tokio_test::block_on(
            budget.should_retry(&io, "delete_video", 0)
        ));
        assert_eq!(error.code(), 600);
    }

    #[tokio::test]
    async fn test_closure_handler() {
        let handler = |error: &MediaApiError, operation: &str| -> Result<bool> {
            Ok(operation == "find_video_by_id" && error.code() == 103)
        };
        assert!(handler.should_retry(&call_timeout(), "find_video_by_id", 0).await.unwrap());
        assert!(!handler.should_retry(&call_timeout(), "create_video", 0).await.unwrap());
    }
}
