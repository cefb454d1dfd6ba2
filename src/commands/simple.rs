//! Simple interactive CLI mode
//!
//! Line-based game without TUI: each line is typed into the current row and
//! submitted.

use crate::game::{Game, Key, KeyOutcome};
use crate::net::Fetcher;
use crate::output::display::{print_board, print_outcome};
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub async fn run_simple<F: Fetcher + ?Sized, R: Rng>(game: &mut Game<F, R>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let config = game.state().config();
    println!(
        "Guess the {}-letter word in {} attempts.",
        config.cols(), config.rows()
    );
    println!("  - 🟩 right letter, right place");
    println!("  - 🟨 right letter, wrong place");
    println!("  - ⬛ letter not in the word\n");
    println!("Commands: 'quit' to exit, 'new' for a new word\n");

    loop {
        if game.state().is_finished() {
            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    game.new_game().await;
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let attempt = game.state().current_attempt() + 1;
        let input = get_user_input(&format!("Attempt {attempt}/{}", config.rows()))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game.new_game().await;
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        let outcome = enter_guess(game, &input).await;
        if let KeyOutcome::Submitted(outcome) = outcome {
            println!();
            print_board(game.state());
            print_outcome(&outcome, game.state());
        }
    }
}

/// Type `guess` into the current row and press Enter
///
/// Whatever is already in the row is cleared first; characters that are not
/// letters are skipped.
pub async fn enter_guess<F: Fetcher + ?Sized, R: Rng>(
    game: &mut Game<F, R>,
    guess: &str,
) -> KeyOutcome {
    while game.state().current_position() > 0 {
        if game.handle_key(Key::Backspace).await == KeyOutcome::Ignored {
            break;
        }
    }

    for key in guess.chars().filter_map(Key::letter) {
        game.handle_key(key).await;
    }

    game.handle_key(Key::Enter).await
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
