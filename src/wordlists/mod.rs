//! Local word lists
//!
//! The curated list doubles as the word-source fallback and the validator's
//! zero-latency fast path.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use rustc_hash::FxHashSet;
use std::io;

/// Error type for word list construction
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),

    #[error("word list contains no usable words")]
    Empty,
}

/// An ordered, non-empty list of uppercase words with fast membership checks
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl WordList {
    /// Build a list from arbitrary words
    ///
    /// Entries are trimmed and uppercased; blank entries are skipped. Order is
    /// preserved, so the first entry stays the last-resort fallback word.
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if no entries remain.
    pub fn new<I, S>(words: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        let index = words.iter().cloned().collect();
        Ok(Self { words, index })
    }

    /// The list embedded at build time
    #[must_use]
    pub fn builtin() -> Self {
        let words: Vec<String> = WORDS.iter().map(|w| (*w).to_string()).collect();
        let index = words.iter().cloned().collect();
        Self { words, index }
    }

    /// Case-insensitive membership check
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.to_uppercase())
    }

    /// First entry of the list
    #[must_use]
    pub fn first(&self) -> &str {
        &self.words[0]
    }

    /// All entries whose letter count equals `length`
    #[must_use]
    pub fn with_length(&self, length: usize) -> Vec<&str> {
        self.words
            .iter()
            .filter(|w| w.chars().count() == length)
            .map(String::as_str)
            .collect()
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction rejects empty lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn builtin_words_are_uppercase_five_letters() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn builtin_list_is_the_curated_ten() {
        let list = WordList::builtin();
        assert_eq!(list.len(), 10);
        assert_eq!(list.first(), "APPLE");
        assert!(list.contains("GHOST"));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let list = WordList::builtin();
        assert!(list.contains("crane"));
        assert!(list.contains("CrAnE"));
        assert!(!list.contains("zebra"));
    }

    #[test]
    fn new_normalizes_and_keeps_order() {
        let list = WordList::new([" tiger ", "", "ox", "LION"]).unwrap();
        assert_eq!(list.words(), &["TIGER", "OX", "LION"]);
        assert_eq!(list.first(), "TIGER");
    }

    #[test]
    fn new_rejects_empty() {
        assert!(matches!(
            WordList::new(Vec::<String>::new()),
            Err(WordListError::Empty)
        ));
        assert!(matches!(WordList::new(["  ", ""]), Err(WordListError::Empty)));
    }

    #[test]
    fn with_length_filters() {
        let list = WordList::new(["OX", "CAT", "DOG", "HORSE"]).unwrap();
        assert_eq!(list.with_length(3), vec!["CAT", "DOG"]);
        assert!(list.with_length(4).is_empty());
    }
}
