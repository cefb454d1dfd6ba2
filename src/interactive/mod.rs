//! Interactive TUI for playing the puzzle in the terminal

pub mod app;
mod rendering;

pub use app::{App, run_tui};
