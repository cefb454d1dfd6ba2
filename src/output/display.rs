//! Display functions for command results

use super::formatters::{colored_row, share_grid};
use crate::commands::{CheckResult, EvaluateResult};
use crate::core::feedback_to_emoji;
use crate::game::{PuzzleState, SubmitOutcome};
use colored::Colorize;

/// Print the whole grid, one row per line
pub fn print_board(state: &PuzzleState) {
    let config = state.config();
    for row in 0..config.rows() {
        println!(
            "  {}",
            colored_row(state.row_letters(row), state.statuses(row))
        );
    }
    println!();
}

/// Print the user-facing message for a submission
pub fn print_outcome(outcome: &SubmitOutcome, state: &PuzzleState) {
    match outcome {
        SubmitOutcome::Rejected(reason) => {
            println!("{}", format!("❌ {reason}").red().bold());
        }
        SubmitOutcome::Advanced { statuses } => {
            let remaining = state.config().rows() - state.current_attempt();
            println!(
                "{}  {} {}",
                feedback_to_emoji(statuses),
                remaining.to_string().bright_cyan(),
                if remaining == 1 { "attempt left" } else { "attempts left" }
            );
        }
        SubmitOutcome::Won { .. } => {
            println!("{}", "═".repeat(60).bright_cyan());
            println!(
                "{}",
                "          🎉 🎊 ✨  Y O U   W I N !  ✨ 🎊 🎉          "
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(60).bright_cyan());
            println!("\n{}\n", share_grid(state));
        }
        SubmitOutcome::Lost { word, .. } => {
            println!(
                "{} {}",
                "Game Over! The word was:".red().bold(),
                word.bright_yellow().bold()
            );
            println!("\n{}\n", share_grid(state));
        }
    }
}

/// Print the result of evaluating a guess
pub fn print_evaluation(result: &EvaluateResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Guess {} against {}",
        result.guess.bright_white().bold(),
        result.target.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let letters: Vec<Option<char>> = result.guess.chars().map(Some).collect();
    println!("\n  {}", colored_row(&letters, &result.statuses));
    println!("  {}\n", feedback_to_emoji(&result.statuses));

    for (letter, status) in result.guess.chars().zip(&result.statuses) {
        println!("  {letter}: {status}");
    }

    if result.is_solved() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

/// Print the result of a validity check
pub fn print_check_result(result: &CheckResult) {
    let source = if result.local {
        "local word list"
    } else {
        "dictionary lookup"
    };

    if result.valid {
        println!(
            "{} {} ({source})",
            "✅".green(),
            result.word.bright_white().bold()
        );
    } else {
        println!(
            "{} {} is not a valid word",
            "❌".red(),
            result.word.bright_white().bold()
        );
    }
}
