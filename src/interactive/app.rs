//! TUI application state and logic

use crate::game::{Game, Key, KeyOutcome, SubmitOutcome};
use crate::net::Fetcher;
use crate::output::formatters::share_grid;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tokio::runtime::Runtime;

/// Application state
pub struct App<F: Fetcher + ?Sized, R: Rng> {
    pub game: Game<F, R>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results across the games of one session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts wins in `n + 1` attempts
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record_win(&mut self, attempts: usize) {
        self.total_games += 1;
        self.games_won += 1;

        if self.guess_distribution.len() < attempts {
            self.guess_distribution.resize(attempts, 0);
        }
        self.guess_distribution[attempts - 1] += 1;
    }

    fn record_loss(&mut self) {
        self.total_games += 1;
    }

    /// Wins per attempt count, e.g. `1:0 2:3 3:1`
    #[must_use]
    pub fn distribution_summary(&self) -> String {
        self.guess_distribution
            .iter()
            .enumerate()
            .map(|(i, count)| format!("{}:{count}", i + 1))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<F: Fetcher + ?Sized, R: Rng> App<F, R> {
    #[must_use]
    pub fn new(game: Game<F, R>) -> Self {
        let config = game.state().config();

        Self {
            game,
            messages: vec![
                Message {
                    text: format!(
                        "Guess the {}-letter word in {} attempts.",
                        config.cols(), config.rows()
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, Backspace to erase, Enter to submit, Esc to quit."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Forward a key press to the game and report the result
    pub async fn handle_key(&mut self, key: Key) {
        if let KeyOutcome::Submitted(outcome) = self.game.handle_key(key).await {
            self.record_outcome(&outcome);
        }
    }

    fn record_outcome(&mut self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Rejected(reason) => {
                self.add_message(&reason.to_string(), MessageStyle::Error);
            }
            SubmitOutcome::Advanced { .. } => {}
            SubmitOutcome::Won { .. } => {
                let attempts = self.game.state().submitted_rows();
                self.stats.record_win(attempts);

                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            SubmitOutcome::Lost { word, .. } => {
                self.stats.record_loss();
                self.add_message(
                    &format!("Game Over! The word was: {word}"),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    pub async fn new_game(&mut self) {
        self.game.new_game().await;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Emoji summary of the finished game
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        self.game
            .state()
            .is_finished()
            .then(|| share_grid(self.game.state()))
    }
}

/// Run the TUI application
///
/// Engine calls that suspend (word resolution, validity lookups) are driven to
/// completion on `runtime` before the next key is read.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<F: Fetcher + ?Sized, R: Rng>(app: App<F, R>, runtime: &Runtime) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, runtime);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(Some(share)) => println!("{share}"),
        Ok(None) => {}
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, F: Fetcher + ?Sized, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<F, R>,
    runtime: &Runtime,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                _ if app.game.state().is_finished() => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') | KeyCode::Enter => runtime.block_on(app.new_game()),
                    // Finished puzzle ignores other keys
                    _ => {}
                },
                KeyCode::Char(c) => {
                    if let Some(letter) = Key::letter(c) {
                        runtime.block_on(app.handle_key(letter));
                    }
                }
                KeyCode::Backspace => runtime.block_on(app.handle_key(Key::Backspace)),
                KeyCode::Enter => runtime.block_on(app.handle_key(Key::Enter)),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.share_text())
}
