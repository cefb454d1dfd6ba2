//! Guess evaluation against a target word
//!
//! Implements standard word-guessing feedback, including proper handling of
//! duplicate letters.

use super::CellStatus;

/// Classify every letter of `guess` against `target`
///
/// Both words are uppercased before comparison. The result has one status per
/// letter of `guess`. Callers are expected to pass equal-length words; target
/// positions that do not exist never match.
///
/// # Algorithm
/// 1. First pass: mark exact position matches `Correct` and consume that target position
/// 2. Second pass: for every remaining guess letter, in left-to-right order, consume the
///    first unconsumed target position holding the same letter and mark it `Misplaced`
/// 3. Anything left over is `Incorrect`
///
/// A target letter is credited at most once, so a letter repeated in the guess
/// never earns more `Correct`/`Misplaced` marks than the target contains.
///
/// # Examples
/// ```
/// use wordle_engine::core::{CellStatus, evaluate};
///
/// let statuses = evaluate("paper", "APPLE");
/// assert_eq!(
///     statuses,
///     vec![
///         CellStatus::Misplaced,
///         CellStatus::Misplaced,
///         CellStatus::Correct,
///         CellStatus::Misplaced,
///         CellStatus::Incorrect,
///     ]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &str, target: &str) -> Vec<CellStatus> {
    let guess: Vec<char> = guess.chars().map(|c| c.to_ascii_uppercase()).collect();
    let target: Vec<char> = target.chars().map(|c| c.to_ascii_uppercase()).collect();

    let mut result = vec![CellStatus::Incorrect; guess.len()];
    let mut consumed = vec![false; target.len()];

    // First pass: exact positions
    for (i, (g, t)) in guess.iter().zip(&target).enumerate() {
        if g == t {
            result[i] = CellStatus::Correct;
            consumed[i] = true;
        }
    }

    // Second pass: displaced letters, scanning the target left to right
    for (i, &letter) in guess.iter().enumerate() {
        if result[i].is_correct() {
            continue;
        }
        if let Some(j) = (0..target.len()).find(|&j| !consumed[j] && target[j] == letter) {
            consumed[j] = true;
            result[i] = CellStatus::Misplaced;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_feedback;
    use rustc_hash::FxHashMap;

    fn expect(guess: &str, target: &str, feedback: &str) {
        assert_eq!(
            evaluate(guess, target),
            parse_feedback(feedback).unwrap(),
            "{guess} vs {target}"
        );
    }

    #[test]
    fn duplicate_letter_in_guess_single_in_target() {
        // P appears twice in both, but the exact P must be consumed first
        expect("PAPER", "APPLE", "YYGY-");
    }

    #[test]
    fn exact_match_all_correct() {
        let statuses = evaluate("BANJO", "BANJO");
        assert_eq!(statuses.len(), 5);
        assert!(statuses.iter().all(|s| s.is_correct()));
    }

    #[test]
    fn no_shared_letters() {
        expect("BRICK", "GHOST", "-----");
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(evaluate("crane", "CRANE"), evaluate("CRANE", "crane"));
        expect("crane", "CRANE", "GGGGG");
    }

    #[test]
    fn exact_match_wins_over_earlier_displaced_copy() {
        // The second O is exact; the first O may only use what is left
        expect("ROBOT", "FLOOR", "YY-G-");
        // LLAMA vs HELLO: only two Ls in the target
        expect("LLAMA", "HELLO", "YY---");
    }

    #[test]
    fn repeated_guess_letter_credited_once() {
        // Fewer Es in the target than in the guess
        expect("EERIE", "CRANE", "--Y-G");
        expect("GEESE", "STONE", "---YG");
        expect("SPEED", "ERASE", "Y-YY-");
    }

    #[test]
    fn displaced_credit_goes_left_to_right() {
        // Only one A available after nothing is exact; the first A gets it
        expect("AABBB", "XXXXA", "Y----");
    }

    #[test]
    fn deterministic() {
        for _ in 0..3 {
            assert_eq!(evaluate("PAPER", "APPLE"), evaluate("PAPER", "APPLE"));
        }
    }

    #[test]
    fn unequal_lengths_do_not_panic() {
        assert_eq!(evaluate("AB", "ABC"), parse_feedback("GG").unwrap());
        assert_eq!(evaluate("ABCD", "BA"), parse_feedback("YY--").unwrap());
        assert!(evaluate("", "ABC").is_empty());
    }

    #[test]
    fn never_over_credits_a_letter() {
        let words = [
            "APPLE", "BANJO", "CRANE", "TRACK", "GHOST", "PLANT", "BRICK", "LIGHT", "STONE",
            "HOUSE", "PAPER", "EERIE", "LLAMA", "SPEED", "ERASE", "ROBOT", "FLOOR", "AAAAA",
        ];

        for guess in words {
            for target in words {
                let statuses = evaluate(guess, target);

                let mut target_counts: FxHashMap<char, usize> = FxHashMap::default();
                for ch in target.chars() {
                    *target_counts.entry(ch).or_insert(0) += 1;
                }

                let mut credited: FxHashMap<char, usize> = FxHashMap::default();
                for (ch, status) in guess.chars().zip(&statuses) {
                    if !matches!(status, CellStatus::Incorrect) {
                        *credited.entry(ch).or_insert(0) += 1;
                    }
                }

                for (ch, count) in credited {
                    assert!(
                        count <= target_counts.get(&ch).copied().unwrap_or(0),
                        "{guess} vs {target}: '{ch}' credited {count} times"
                    );
                }
            }
        }
    }
}
