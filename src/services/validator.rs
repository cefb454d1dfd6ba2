//! Guess validity check
//!
//! Curated words are accepted immediately; anything else is looked up in the
//! remote dictionary, with the local list as the fallback verdict.

use crate::game::WordCheck;
use crate::net::{EngineConfig, Endpoints, Fetcher, get_with_timeout};
use crate::wordlists::WordList;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Decides whether a submitted guess is an acceptable word
pub struct Validator<F: Fetcher + ?Sized> {
    fetcher: Arc<F>,
    words: Arc<WordList>,
    endpoints: Endpoints,
    timeout: Duration,
}

impl<F: Fetcher + ?Sized> Validator<F> {
    #[must_use]
    pub fn new(fetcher: Arc<F>, words: Arc<WordList>, config: &EngineConfig) -> Self {
        Self {
            fetcher,
            words,
            endpoints: config.endpoints.clone(),
            timeout: config.timeout,
        }
    }

    /// Check a guess; never fails
    ///
    /// - empty input is rejected
    /// - words in the local list are accepted without any network call
    /// - otherwise the dictionary decides: found accepts, 404 rejects
    /// - any other outcome (error status, transport failure, timeout) falls
    ///   back to local-list membership
    pub async fn is_valid(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let in_local_list = self.words.contains(word);
        if in_local_list {
            debug!(word, "accepted from local list");
            return true;
        }

        let url = match self.endpoints.dictionary_url(word) {
            Ok(url) => url,
            Err(e) => {
                warn!(error = %e, "dictionary provider misconfigured");
                return in_local_list;
            }
        };

        match get_with_timeout(&*self.fetcher, url.as_str(), self.timeout).await {
            Ok(response) if response.is_success() => true,
            Ok(response) if response.is_not_found() => false,
            Ok(response) => {
                warn!(status = response.status, "dictionary lookup failed, using local list");
                in_local_list
            }
            Err(e) => {
                warn!(error = %e, "dictionary lookup failed, using local list");
                in_local_list
            }
        }
    }
}

#[async_trait]
impl<F: Fetcher + ?Sized> WordCheck for Validator<F> {
    async fn is_valid(&self, word: &str) -> bool {
        Validator::is_valid(self, word).await
    }
}
