//! Command implementations

pub mod check;
pub mod evaluate;
pub mod simple;

pub use check::{CheckResult, check_word};
pub use evaluate::{EvaluateResult, evaluate_guess};
pub use simple::{enter_guess, run_simple};
