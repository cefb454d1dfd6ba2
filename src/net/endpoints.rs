//! Provider endpoints and network settings

use super::FetchError;
use reqwest::Url;
use std::time::Duration;

/// Plain-text single-word provider
pub const DEFAULT_WORD_URL: &str = "https://it3049c-hangman.fly.dev";

/// Length-parameterized provider answering with a JSON array of strings
pub const DEFAULT_WORD_LIST_URL: &str = "https://random-word-api.herokuapp.com/word";

/// Dictionary lookup; the guess is appended as the last path segment
pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

/// Per-request deadline for every remote call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Base URLs of the three remote providers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub word: String,
    pub word_list: String,
    pub dictionary: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            word: DEFAULT_WORD_URL.to_string(),
            word_list: DEFAULT_WORD_LIST_URL.to_string(),
            dictionary: DEFAULT_DICTIONARY_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Word-list URL with the `length` query parameter set
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` if the base URL does not parse.
    pub fn word_list_url(&self, length: usize) -> Result<Url, FetchError> {
        Url::parse_with_params(&self.word_list, &[("length", length.to_string())])
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))
    }

    /// Dictionary URL for `word`, lowercased and escaped as a path segment
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` if the base URL does not parse or
    /// cannot take path segments.
    pub fn dictionary_url(&self, word: &str) -> Result<Url, FetchError> {
        let mut url =
            Url::parse(&self.dictionary).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidUrl(self.dictionary.clone()))?
            .pop_if_empty()
            .push(&word.to_lowercase());

        Ok(url)
    }
}

/// Network settings shared by the word source and the validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub endpoints: Endpoints,
    pub timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
