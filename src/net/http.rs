//! Fetcher implementations for real use

use super::{FetchError, Fetcher, Response};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// `reqwest`-backed fetcher
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a client whose requests are capped at `timeout`
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Network` if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("wordle_engine/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<Response, FetchError> {
        debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))?;

        Ok(Response { status, body })
    }
}

/// Fetcher that never touches the network
///
/// Every chain that uses it falls straight through to the local word list.
#[derive(Debug, Default, Clone, Copy)]
pub struct Offline;

#[async_trait]
impl Fetcher for Offline {
    async fn get(&self, _url: &str) -> Result<Response, FetchError> {
        Err(FetchError::Offline)
    }
}
