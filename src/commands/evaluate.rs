//! Guess evaluation command
//!
//! Scores a guess against a chosen target without starting a game.

use crate::core::{CellStatus, evaluate};

/// Result of evaluating a guess
pub struct EvaluateResult {
    pub guess: String,
    pub target: String,
    pub statuses: Vec<CellStatus>,
}

impl EvaluateResult {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.statuses.iter().all(|s| s.is_correct())
    }
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if:
/// - Either word is empty or contains anything but ASCII letters
/// - The words differ in length
pub fn evaluate_guess(guess: &str, target: &str) -> Result<EvaluateResult, String> {
    let guess = normalize(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let target = normalize(target).map_err(|e| format!("Invalid target: {e}"))?;

    if guess.len() != target.len() {
        return Err(format!(
            "Guess has {} letters but target has {}",
            guess.len(),
            target.len()
        ));
    }

    let statuses = evaluate(&guess, &target);

    Ok(EvaluateResult {
        guess,
        target,
        statuses,
    })
}

fn normalize(word: &str) -> Result<String, String> {
    let word = word.trim();

    if word.is_empty() {
        return Err("word is empty".to_string());
    }

    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!("'{word}' must contain only ASCII letters"));
    }

    Ok(word.to_ascii_uppercase())
}
