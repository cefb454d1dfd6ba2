//! HTTP plumbing for the remote providers
//!
//! Every remote lookup goes through the [`Fetcher`] seam so the fallback
//! chains can run against a real client, an offline stub, or a test double.
//! Each call is bounded by [`get_with_timeout`].

mod endpoints;
mod http;

#[cfg(test)]
pub(crate) mod fake;

pub use endpoints::{
    DEFAULT_DICTIONARY_URL, DEFAULT_TIMEOUT, DEFAULT_WORD_LIST_URL, DEFAULT_WORD_URL,
    EngineConfig, Endpoints,
};
pub use http::{HttpFetcher, Offline};

use async_trait::async_trait;
use std::time::Duration;

/// Status and body of a completed GET
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// Reasons a remote lookup produced no response
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unreadable response body: {0}")]
    Body(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("network disabled (offline mode)")]
    Offline,
}

/// Minimal GET interface used by the word source and validator
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Issue a GET and return the status and body
    ///
    /// Non-success statuses are returned as `Ok`; only transport-level
    /// failures are errors.
    async fn get(&self, url: &str) -> Result<Response, FetchError>;
}

/// Run a GET bounded by `timeout`; expiry becomes [`FetchError::Timeout`]
///
/// # Errors
///
/// Propagates the fetcher's error, or `Timeout` if the deadline passes first.
pub async fn get_with_timeout<F: Fetcher + ?Sized>(
    fetcher: &F,
    url: &str,
    timeout: Duration,
) -> Result<Response, FetchError> {
    tokio::time::timeout(timeout, fetcher.get(url))
        .await
        .unwrap_or(Err(FetchError::Timeout(timeout)))
}

#[cfg(test)]
mod tests {
    use super::fake::{FakeFetcher, Reply};
    use super::*;

    #[test]
    fn response_classification() {
        assert!(Response::new(200, "").is_success());
        assert!(Response::new(204, "").is_success());
        assert!(!Response::new(404, "").is_success());
        assert!(Response::new(404, "").is_not_found());
        assert!(!Response::new(500, "").is_not_found());
    }

    #[tokio::test]
    async fn completed_request_passes_through() {
        let fetcher = FakeFetcher::new().route("https://a.test", Reply::ok("hello"));
        let response = get_with_timeout(&fetcher, "https://a.test/x", Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(response, Response::new(200, "hello"));
    }

    #[tokio::test]
    async fn body_failure_is_reported_separately() {
        let fetcher = FakeFetcher::new().route("https://a.test", Reply::BadBody);
        let err = get_with_timeout(&fetcher, "https://a.test", Duration::from_secs(1))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Body(_)));
        assert_eq!(
            err.to_string(),
            "unreadable response body: connection reset"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn hanging_request_times_out() {
        let fetcher = FakeFetcher::new().route("https://slow.test", Reply::Hang);
        let result = get_with_timeout(&fetcher, "https://slow.test", Duration::from_secs(3)).await;
        assert!(matches!(result, Err(FetchError::Timeout(d)) if d == Duration::from_secs(3)));
    }
}
