//! Word list loading utilities
//!
//! Loads a custom list from a file as an alternative to the embedded words.

use super::{WordList, WordListError};
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Blank lines, `#` comments and entries containing
/// anything other than ASCII letters are skipped.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, or
/// `WordListError::Empty` if it holds no usable words.
///
/// # Examples
/// ```no_run
/// use wordle_engine::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let content = fs::read_to_string(path)?;
    words_from_lines(&content)
}

/// Parse newline-separated words
///
/// # Errors
///
/// Returns `WordListError::Empty` if no line holds a usable word.
pub fn words_from_lines(content: &str) -> Result<WordList, WordListError> {
    WordList::new(content.lines().map(str::trim).filter(|line| {
        !line.is_empty() && !line.starts_with('#') && line.chars().all(|c| c.is_ascii_alphabetic())
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_lines_skips_invalid() {
        let list = words_from_lines("crane\n\n# comment\nsl4te\n  ghost  \nnot a word\n").unwrap();
        assert_eq!(list.words(), &["CRANE", "GHOST"]);
    }

    #[test]
    fn words_from_lines_empty() {
        assert!(matches!(
            words_from_lines("# nothing here\n\n"),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            load_from_file("/definitely/not/here.txt"),
            Err(WordListError::Io(_))
        ));
    }
}
