//! Per-cell feedback classification
//!
//! Each submitted letter is classified as:
//! - `Correct` (right letter, right place)
//! - `Misplaced` (right letter, wrong place)
//! - `Incorrect` (letter not available in the target)
//!
//! Cells of rows that have not been submitted stay `Empty`.

use std::fmt;

/// Classification of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellStatus {
    /// Not yet submitted
    #[default]
    Empty,
    /// Green
    Correct,
    /// Yellow
    Misplaced,
    /// Gray
    Incorrect,
}

impl CellStatus {
    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Emoji square used when sharing a result
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Incorrect => '⬛',
            Self::Empty => '⬜',
        }
    }

    /// Single-letter code: `G`, `Y`, `-`, or `.` for empty
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Misplaced => 'Y',
            Self::Incorrect => '-',
            Self::Empty => '.',
        }
    }

    /// Parse a single code or emoji back into a status
    ///
    /// Accepts `G`/`g`/🟩, `Y`/`y`/🟨, `-`/`_`/⬛ and `.`/⬜.
    #[must_use]
    pub const fn from_code(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Misplaced),
            '-' | '_' | '⬛' => Some(Self::Incorrect),
            '.' | '⬜' => Some(Self::Empty),
            _ => None,
        }
    }

    /// CSS-style class name used by render layers
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Misplaced => "misplaced",
            Self::Incorrect => "incorrect",
            Self::Empty => "",
        }
    }
}

impl fmt::Display for CellStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "empty",
            other => other.class_name(),
        })
    }
}

/// Parse a feedback row like `"YYGY-"` or `"🟨🟨🟩🟨⬛"`
///
/// Returns `None` if any character is not a recognised code.
///
/// # Examples
/// ```
/// use wordle_engine::core::{CellStatus, parse_feedback};
///
/// let row = parse_feedback("G-Y").unwrap();
/// assert_eq!(
///     row,
///     vec![CellStatus::Correct, CellStatus::Incorrect, CellStatus::Misplaced]
/// );
/// ```
#[must_use]
pub fn parse_feedback(s: &str) -> Option<Vec<CellStatus>> {
    s.chars().map(CellStatus::from_code).collect()
}

/// Render a feedback row as emoji squares
#[must_use]
pub fn feedback_to_emoji(statuses: &[CellStatus]) -> String {
    statuses.iter().map(|s| s.emoji()).collect()
}
