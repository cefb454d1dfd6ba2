//! Word validity command

use crate::net::Fetcher;
use crate::services::Validator;
use crate::wordlists::WordList;

/// Result of checking a word
pub struct CheckResult {
    pub word: String,
    pub valid: bool,
    /// Accepted from the local list without a dictionary lookup
    pub local: bool,
}

/// Check whether `word` would be accepted as a guess
pub async fn check_word<F: Fetcher + ?Sized>(
    validator: &Validator<F>,
    words: &WordList,
    word: &str,
) -> CheckResult {
    let word = word.trim().to_uppercase();
    let local = words.contains(&word);
    let valid = validator.is_valid(&word).await;

    CheckResult { word, valid, local }
}
