//! Puzzle state machine and game session
//!
//! [`PuzzleState`] owns the grid and the legal transitions; [`Game`] wires it
//! to a word source, a validator and a random source for render layers.

mod input;
mod session;
mod state;

pub use input::Key;
pub use session::{Game, KeyOutcome};
pub use state::{Cell, Phase, PuzzleState, Rejection, SubmitOutcome, WordCheck};
