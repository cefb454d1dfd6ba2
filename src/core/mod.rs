//! Core domain types for the puzzle engine
//!
//! This module contains the fundamental domain types with zero I/O.
//! Everything here is pure and deterministic.

mod config;
mod evaluate;
mod status;

pub use config::GameConfig;
pub use evaluate::evaluate;
pub use status::{CellStatus, feedback_to_emoji, parse_feedback};
