//
//  brightcove-mapi
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Executor
//!
//! [`MediaApiClient`] turns built requests into HTTP round trips and classifies what
//! comes back. Both facades own one and run every operation through
//! [`MediaApiClient::with_retry`].
//!
//! ## Features
//!
//! - URL-encoded GET requests for reads
//! - Multipart POST requests (`JSON-RPC` part plus optional file) for writes
//! - Exactly-once connection release on every exit path
//! - Optional per-call deadline
//! - Pluggable transport and retry handler

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};
use url::Url;

use super::common::{
    classify, ClassifiedResult, OperationRequest, Result, TransportErrorKind, TransportFailure,
    TransportOutcome, WriteRequest,
};
use super::retry::RetryHandler;
use super::transport::{HttpRequest, MultipartForm, ReqwestTransport, TransportFactory};
use crate::config::{Endpoint, DEFAULT_CHARSET};

/// Executes Media API requests against one endpoint.
///
/// Cloning is cheap; clones share the transport and the retry handler.
///
/// # Example
///
/// ```rust,no_run
/// use brightcove_mapi::api::client::MediaApiClient;
/// use brightcove_mapi::api::retry::RetryBudget;
/// use brightcove_mapi::config::Endpoint;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let client = MediaApiClient::new(Endpoint::read_default())?
///     .with_timeout(Duration::from_secs(30))
///     .with_retry_handler(Arc::new(RetryBudget::new(3)));
/// # Ok::<(), brightcove_mapi::api::common::MediaApiError>(())
/// ```
#[derive(Clone)]
pub struct MediaApiClient {
    transport: Arc<dyn TransportFactory>,
    endpoint: Endpoint,
    charset: String,
    timeout: Option<Duration>,
    retry: Option<Arc<dyn RetryHandler>>,
}

impl std::fmt::Debug for MediaApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaApiClient")
            .field("endpoint", &self.endpoint)
            .field("charset", &self.charset)
            .field("timeout", &self.timeout)
            .field("retry", &self.retry.is_some())
            .finish()
    }
}

impl MediaApiClient {
    /// Creates a client for `endpoint` using the default `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be initialized.
    pub fn new(endpoint: Endpoint) -> Result<Self> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(endpoint, Arc::new(transport)))
    }

    /// Creates a client for `endpoint` using a custom transport.
    pub fn with_transport(endpoint: Endpoint, transport: Arc<dyn TransportFactory>) -> Self {
        Self {
            transport,
            endpoint,
            charset: DEFAULT_CHARSET.to_string(),
            timeout: None,
            retry: None,
        }
    }

    /// Installs a retry handler consulted on every failed attempt.
    pub fn with_retry_handler(mut self, handler: Arc<dyn RetryHandler>) -> Self {
        self.retry = Some(handler);
        self
    }

    /// Sets a deadline for each round trip. Expiry surfaces as an I/O failure.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the character set used to encode requests.
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    /// Replaces the endpoint.
    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Builds the GET URL for a read request.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidUrlEncoding` for unsupported character sets and with
    /// `InvalidUrlSyntax` when the endpoint does not form a URL.
    pub fn read_url(&self, request: &OperationRequest) -> std::result::Result<Url, TransportFailure> {
        self.check_charset()?;
        let mut url = self.endpoint.url()?;
        url.query_pairs_mut().extend_pairs(request.query_pairs());
        Ok(url)
    }

    /// Builds the multipart POST for a write request.
    pub fn write_request(
        &self,
        request: &WriteRequest,
    ) -> std::result::Result<HttpRequest, TransportFailure> {
        self.check_charset()?;
        let url = self.endpoint.url()?;
        Ok(HttpRequest::Post {
            url,
            form: MultipartForm {
                json_rpc: request.to_json_rpc().to_string(),
                file: request.file().cloned(),
            },
        })
    }

    /// Runs one read attempt and classifies the outcome.
    pub async fn execute_read(&self, request: &OperationRequest) -> ClassifiedResult {
        let url = match self.read_url(request) {
            Ok(url) => url,
            Err(failure) => return ClassifiedResult::TransportError(failure),
        };
        debug!(command = request.command(), url = %url, "executing read command");
        self.execute(HttpRequest::Get { url }).await
    }

    /// Runs one write attempt and classifies the outcome.
    pub async fn execute_write(&self, request: &WriteRequest) -> ClassifiedResult {
        let http = match self.write_request(request) {
            Ok(http) => http,
            Err(failure) => return ClassifiedResult::TransportError(failure),
        };
        if let HttpRequest::Post { form, .. } = &http {
            debug!(method = request.method(), json = %form.json_rpc, "executing write command");
            if let Some(file) = &form.file {
                debug!(file = %file.path.display(), size = file.size, "attaching upload");
            }
        }
        self.execute(http).await
    }

    async fn execute(&self, request: HttpRequest) -> ClassifiedResult {
        let outcome = self.round_trip(request).await;
        if let TransportOutcome::Success(body) = &outcome {
            debug!(body = %body, "raw response");
        }
        classify(outcome)
    }

    /// Performs one HTTP exchange.
    ///
    /// The connection lives only inside the exchange future, so it is dropped on
    /// success, on a non-200 status, on a failed read, and when the deadline expires.
    async fn round_trip(&self, request: HttpRequest) -> TransportOutcome {
        let exchange = async {
            let mut connection = self.transport.connect()?;
            let status = connection.send(request).await?;
            if status != 200 {
                return Err(TransportFailure::new(
                    TransportErrorKind::HttpErrorStatus { status },
                    format!("response code from HTTP server: {}", status),
                ));
            }
            connection.read_body().await
        };

        let result = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, exchange).await {
                Ok(result) => result,
                Err(_) => Err(TransportFailure::new(
                    TransportErrorKind::Io,
                    format!("no response within {:?}", limit),
                )),
            },
            None => exchange.await,
        };

        match result {
            Ok(body) => TransportOutcome::Success(body),
            Err(failure) => TransportOutcome::Failure(failure),
        }
    }

    /// Runs `attempt` until it succeeds or the retry handler stops it.
    ///
    /// `attempt` must rebuild its request from scratch on every call. With no retry
    /// handler installed, the first error is returned.
    pub async fn with_retry<T, F, Fut>(&self, operation: &str, mut attempt: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut retries: u32 = 0;
        loop {
            let error = match attempt().await {
                Ok(value) => return Ok(value),
                Err(error) => error,
            };

            let Some(handler) = &self.retry else {
                return Err(error);
            };

            if handler.should_retry(&error, operation, retries).await? {
                retries += 1;
                info!(operation, retries, code = error.code(), "retrying operation");
                continue;
            }
            return Err(error);
        }
    }

    fn check_charset(&self) -> std::result::Result<(), TransportFailure> {
        if is_utf8(&self.charset) {
            Ok(())
        } else {
            Err(TransportFailure::new(
                TransportErrorKind::InvalidUrlEncoding,
                format!("unsupported character set '{}'", self.charset),
            ))
        }
    }
}

/// Accepts every common spelling of UTF-8.
fn is_utf8(charset: &str) -> bool {
    let normalized: String = charset
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect();
    normalized == "utf8"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::{MappingErrorKind, MediaApiError, ParamBuilder};
    use crate::api::transport::Connection;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// What a scripted connection does when used.
    #[derive(Clone, Copy)]
    enum Script {
        Respond(u16, &'static str),
        FailSend,
        FailRead,
        Hang,
    }

    #[derive(Default)]
    struct Counters {
        connects: AtomicUsize,
        releases: AtomicUsize,
    }

    struct ScriptedFactory {
        scripts: Mutex<VecDeque<Script>>,
        counters: Arc<Counters>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl ScriptedFactory {
        fn new(scripts: Vec<Script>) -> Arc<Self> {
            Arc::new(Self {
                scripts: Mutex::new(scripts.into()),
                counters: Arc::new(Counters::default()),
                requests: Mutex::new(Vec::new()),
            })
        }
    }

    struct ScriptedConnection {
        script: Script,
        counters: Arc<Counters>,
        sent: bool,
    }

    impl Drop for ScriptedConnection {
        fn drop(&mut self) {
            self.counters.releases.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl Connection for ScriptedConnection {
        async fn send(&mut self, _request: HttpRequest) -> std::result::Result<u16, TransportFailure> {
            self.sent = true;
            match self.script {
                Script::Respond(status, _) => Ok(status),
                Script::FailRead => Ok(200),
                Script::FailSend => Err(TransportFailure::new(TransportErrorKind::Io, "refused")),
                Script::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok(200)
                }
            }
        }

        async fn read_body(&mut self) -> std::result::Result<String, TransportFailure> {
            match self.script {
                Script::Respond(_, body) if self.sent => Ok(body.to_string()),
                Script::FailRead => Err(TransportFailure::new(TransportErrorKind::Io, "reset")),
                _ => Err(TransportFailure::new(TransportErrorKind::IllegalState, "not sent")),
            }
        }
    }

    impl TransportFactory for ScriptedFactory {
        fn connect(&self) -> std::result::Result<Box<dyn Connection>, TransportFailure> {
            self.counters.connects.fetch_add(1, Ordering::SeqCst);
            let script = self
                .scripts
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Script::Respond(200, "null"));
            Ok(Box::new(ScriptedConnection {
                script,
                counters: self.counters.clone(),
                sent: false,
            }))
        }
    }

    fn client(factory: &Arc<ScriptedFactory>) -> MediaApiClient {
        MediaApiClient::with_transport(Endpoint::read_default(), factory.clone())
    }

    fn request() -> OperationRequest {
        ParamBuilder::new("find_video_by_id")
            .param("token", "t")
            .param("video_id", 42)
            .build()
    }

    #[tokio::test]
    async fn test_release_once_on_success() {
        let factory = ScriptedFactory::new(vec![Script::Respond(200, r#"{"id":42}"#)]);
        let result = client(&factory).execute_read(&request()).await;

        assert!(matches!(result, ClassifiedResult::Success(_)));
        assert_eq!(factory.counters.connects.load(Ordering::SeqCst), 1);
        assert_eq!(factory.counters.releases.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_release_once_on_error_status() {
        let factory = ScriptedFactory::new(vec![Script::Respond(503, "unavailable")]);
        let result = client(&factory).execute_read(&request()).await;

        match result {
            ClassifiedResult::TransportError(failure) => {
                assert_eq!(failure.kind, TransportErrorKind::HttpErrorStatus { status: 503 })
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(factory.counters.releases.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_release_once_on_read_failure() {
        let factory = ScriptedFactory::new(vec![Script::FailRead]);
        let result = client(&factory).execute_read(&request()).await;

        match result {
            ClassifiedResult::TransportError(failure) => {
                assert_eq!(failure.kind, TransportErrorKind::Io)
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(factory.counters.releases.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_release_once_on_send_failure() {
        let factory = ScriptedFactory::new(vec![Script::FailSend]);
        let result = client(&factory).execute_read(&request()).await;

        assert!(matches!(result, ClassifiedResult::TransportError(_)));
        assert_eq!(factory.counters.releases.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_is_io_and_releases() {
        let factory = ScriptedFactory::new(vec![Script::Hang]);
        let result = client(&factory)
            .with_timeout(Duration::from_secs(5))
            .execute_read(&request())
            .await;

        match result {
            ClassifiedResult::TransportError(failure) => {
                assert_eq!(failure.kind, TransportErrorKind::Io)
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(factory.counters.releases.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unsupported_charset_sends_nothing() {
        let factory = ScriptedFactory::new(vec![]);
        let result = client(&factory)
            .with_charset("ISO-8859-1")
            .execute_read(&request())
            .await;

        match result {
            ClassifiedResult::TransportError(failure) => {
                assert_eq!(failure.kind, TransportErrorKind::InvalidUrlEncoding)
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(factory.counters.connects.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_utf8_spellings() {
        for charset in ["UTF-8", "utf-8", "utf8", "UTF8", "utf_8"] {
            assert!(is_utf8(charset), "{}", charset);
        }
        assert!(!is_utf8("latin1"));
        assert!(!is_utf8("UTF-16"));
    }

    #[test]
    fn test_read_url_encodes_parameters() {
        let factory = ScriptedFactory::new(vec![]);
        let request = ParamBuilder::new("find_videos_by_text")
            .param("token", "a b&c")
            .param("text", "café")
            .build();
        let url = client(&factory).read_url(&request).unwrap();

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("command".to_string(), "find_videos_by_text".to_string()));
        assert_eq!(pairs[1], ("token".to_string(), "a b&c".to_string()));
        assert_eq!(pairs[2], ("text".to_string(), "café".to_string()));
        assert_eq!(url.path(), "/services/library");
    }

    #[tokio::test]
    async fn test_with_retry_without_handler_propagates() {
        let factory = ScriptedFactory::new(vec![]);
        let client = client(&factory);
        let calls = AtomicUsize::new(0);
        let calls = &calls;

        let result: Result<()> = client
            .with_retry("find_video_by_id", move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(MediaApiError::transport(TransportErrorKind::Io, "down"))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_with_retry_handler_error_is_terminal() {
        let factory = ScriptedFactory::new(vec![]);
        let handler = |_: &MediaApiError, operation: &str| -> Result<bool> {
            Err(MediaApiError::mapping(
                MappingErrorKind::Unparsable,
                operation,
                "handler refused",
            ))
        };
        let client = client(&factory).with_retry_handler(Arc::new(handler));

        let error = client
            .with_retry("find_all_videos", || async move {
                Err::<(), _>(MediaApiError::transport(TransportErrorKind::Io, "down"))
            })
            .await
            .unwrap_err();
        assert_eq!(error.code(), 301);
    }
}
