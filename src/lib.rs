//! Wordle Engine
//!
//! A presentation-agnostic Wordle puzzle engine: word-source resolution with
//! remote providers and a local fallback, guess validation, two-pass letter
//! evaluation, and the attempt/position state machine that governs input.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::{CellStatus, evaluate};
//!
//! let statuses = evaluate("CRANE", "CRANE");
//! assert!(statuses.iter().all(|s| *s == CellStatus::Correct));
//! ```

// Core domain types
pub mod core;

// Local word lists
pub mod wordlists;

// HTTP plumbing for remote providers
pub mod net;

// Word source and validator fallback chains
pub mod services;

// Puzzle state machine and session
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
