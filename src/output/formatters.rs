//! Formatting utilities for terminal output

use crate::core::{CellStatus, feedback_to_emoji};
use crate::game::PuzzleState;
use colored::{ColoredString, Colorize};

/// Render a single cell as a padded, colored tile
#[must_use]
pub fn colored_tile(letter: Option<char>, status: CellStatus) -> ColoredString {
    let tile = format!(" {} ", letter.unwrap_or('_'));

    match status {
        CellStatus::Correct => tile.black().on_green().bold(),
        CellStatus::Misplaced => tile.black().on_yellow().bold(),
        CellStatus::Incorrect => tile.white().on_bright_black(),
        CellStatus::Empty => tile.normal(),
    }
}

/// Render a full grid row as colored tiles
#[must_use]
pub fn colored_row(letters: &[Option<char>], statuses: &[CellStatus]) -> String {
    letters
        .iter()
        .zip(statuses)
        .map(|(&letter, &status)| colored_tile(letter, status).to_string())
        .collect()
}

/// Shareable summary: a score line followed by one emoji row per submitted attempt
///
/// The score is `X` when the game was lost or is still running.
#[must_use]
pub fn share_grid(state: &PuzzleState) -> String {
    let config = state.config();
    let submitted = state.submitted_rows();

    let score = if state.phase() == crate::game::Phase::Won {
        submitted.to_string()
    } else {
        "X".to_string()
    };

    let mut lines = vec![format!("Wordle {score}/{}", config.rows())];
    lines.extend((0..submitted).map(|row| feedback_to_emoji(state.statuses(row))));
    lines.join("\n")
}
