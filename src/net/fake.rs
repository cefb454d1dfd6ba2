//! Scripted fetcher for tests

use super::{FetchError, Fetcher, Response};
use async_trait::async_trait;
use std::sync::Mutex;

/// Canned behaviour for a route
#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Respond(u16, String),
    Fail,
    /// Status line arrived but the body could not be read
    BadBody,
    Hang,
}

impl Reply {
    pub(crate) fn ok(body: &str) -> Self {
        Self::Respond(200, body.to_string())
    }

    pub(crate) fn status(status: u16) -> Self {
        Self::Respond(status, String::new())
    }
}

/// Serves replies by URL prefix and records every requested URL
///
/// Unrouted URLs fail with a network error.
#[derive(Debug, Default)]
pub(crate) struct FakeFetcher {
    routes: Vec<(String, Reply)>,
    calls: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn route(mut self, prefix: &str, reply: Reply) -> Self {
        self.routes.push((prefix.to_string(), reply));
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Fetcher for FakeFetcher {
    async fn get(&self, url: &str) -> Result<Response, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());

        let reply = self
            .routes
            .iter()
            .find(|(prefix, _)| url.starts_with(prefix.as_str()))
            .map(|(_, reply)| reply.clone());

        match reply {
            Some(Reply::Respond(status, body)) => Ok(Response::new(status, body)),
            Some(Reply::Fail) => Err(FetchError::Network("connection refused".to_string())),
            Some(Reply::BadBody) => Err(FetchError::Body("connection reset".to_string())),
            Some(Reply::Hang) => std::future::pending().await,
            None => Err(FetchError::Network(format!("no route for {url}"))),
        }
    }
}
