//! Puzzle word resolution
//!
//! Tries, in order: the single-word provider, the word-list provider, a random
//! pick from the local list filtered by length, and finally the first local
//! word regardless of length.

use crate::net::{EngineConfig, Endpoints, Fetcher, get_with_timeout};
use crate::wordlists::WordList;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Resolves the secret word for a new game
pub struct WordSource<F: Fetcher + ?Sized> {
    fetcher: Arc<F>,
    words: Arc<WordList>,
    endpoints: Endpoints,
    timeout: Duration,
}

impl<F: Fetcher + ?Sized> WordSource<F> {
    #[must_use]
    pub fn new(fetcher: Arc<F>, words: Arc<WordList>, config: &EngineConfig) -> Self {
        Self {
            fetcher,
            words,
            endpoints: config.endpoints.clone(),
            timeout: config.timeout,
        }
    }

    /// Resolve an uppercase word, ideally `length` letters long
    ///
    /// Never fails. Provider errors, timeouts and unusable answers are logged
    /// and the next step of the chain is tried. The result has the requested
    /// length unless the local list holds no word of that length, in which case
    /// its first entry is returned as a last resort.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use std::sync::Arc;
    /// use wordle_engine::net::{EngineConfig, Offline};
    /// use wordle_engine::services::WordSource;
    /// use wordle_engine::wordlists::WordList;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let words = Arc::new(WordList::builtin());
    /// let source = WordSource::new(Arc::new(Offline), words.clone(), &EngineConfig::default());
    ///
    /// let word = source.resolve_word(5, &mut StdRng::seed_from_u64(1)).await;
    /// assert_eq!(word.len(), 5);
    /// assert!(words.contains(&word));
    /// # }
    /// ```
    pub async fn resolve_word<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> String {
        if let Some(word) = self.from_word_provider(length).await {
            debug!(%word, "word resolved from single-word provider");
            return word;
        }

        if let Some(word) = self.from_word_list_provider(length).await {
            debug!(%word, "word resolved from word-list provider");
            return word;
        }

        self.from_local(length, rng)
    }

    async fn from_word_provider(&self, length: usize) -> Option<String> {
        let response = match get_with_timeout(&*self.fetcher, &self.endpoints.word, self.timeout)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "single-word provider failed");
                return None;
            }
        };

        if !response.is_success() {
            warn!(status = response.status, "single-word provider returned an error");
            return None;
        }

        let word = response.body.trim();
        if word.chars().count() == length {
            Some(word.to_uppercase())
        } else {
            debug!(word, length, "single-word provider answer has the wrong length");
            None
        }
    }

    async fn from_word_list_provider(&self, length: usize) -> Option<String> {
        let url = match self.endpoints.word_list_url(length) {
            Ok(url) => url,
            Err(e) => {
                warn!(error = %e, "word-list provider misconfigured");
                return None;
            }
        };

        let response = match get_with_timeout(&*self.fetcher, url.as_str(), self.timeout).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "word-list provider failed");
                return None;
            }
        };

        if !response.is_success() {
            warn!(status = response.status, "word-list provider returned an error");
            return None;
        }

        let words: Vec<String> = match serde_json::from_str(&response.body) {
            Ok(words) => words,
            Err(e) => {
                warn!(error = %e, "word-list provider sent an unexpected body");
                return None;
            }
        };

        let word = words.into_iter().next()?;
        let word = word.trim();
        if word.chars().count() == length {
            Some(word.to_uppercase())
        } else {
            debug!(word, length, "word-list provider answer has the wrong length");
            None
        }
    }

    fn from_local<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> String {
        let candidates = self.words.with_length(length);

        if let Some(word) = candidates.choose(rng) {
            debug!(%word, candidates = candidates.len(), "word picked from local list");
            (*word).to_string()
        } else {
            warn!(length, "no local word of the requested length, using first entry");
            self.words.first().to_string()
        }
    }
}
