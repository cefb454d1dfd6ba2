//! Attempt/position state machine
//!
//! A [`PuzzleState`] is created per game and mutated only through
//! [`PuzzleState::add_letter`], [`PuzzleState::remove_letter`] and
//! [`PuzzleState::submit`]. Once the game is won or lost every transition is a
//! no-op; a new game means a new `PuzzleState`.
//!
//! # Examples
//! ```
//! use wordle_engine::core::GameConfig;
//! use wordle_engine::game::{Phase, PuzzleState, SubmitOutcome, WordCheck};
//!
//! struct AnyWord;
//!
//! #[async_trait::async_trait]
//! impl WordCheck for AnyWord {
//!     async fn is_valid(&self, _word: &str) -> bool {
//!         true
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut state = PuzzleState::new(GameConfig::default(), "crane");
//! for ch in "crane".chars() {
//!     state.add_letter(ch);
//! }
//!
//! let outcome = state.submit(&AnyWord).await;
//! assert!(matches!(outcome, SubmitOutcome::Won { .. }));
//! assert_eq!(state.phase(), Phase::Won);
//! # }
//! ```

use crate::core::{CellStatus, GameConfig, evaluate};
use async_trait::async_trait;
use std::fmt;
use tracing::{debug, warn};

/// Async validity check consulted by [`PuzzleState::submit`]
#[async_trait]
pub trait WordCheck: Send + Sync {
    /// Whether `word` (the uppercase joined row) is an acceptable guess
    async fn is_valid(&self, word: &str) -> bool;
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting letters for the current attempt
    Input,
    Won,
    Lost,
}

impl Phase {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Why a submission was turned down; the state is left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The current row is not full
    Incomplete,
    /// The validator did not accept the row
    InvalidWord,
    /// The game is already over
    Finished,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Incomplete => "Word not complete",
            Self::InvalidWord => "Word is not valid",
            Self::Finished => "Game is over",
        })
    }
}

/// Result of [`PuzzleState::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(Rejection),
    /// Row scored; play moves to the next attempt
    Advanced { statuses: Vec<CellStatus> },
    Won { statuses: Vec<CellStatus> },
    /// Last attempt used up; `word` is the revealed target
    Lost {
        statuses: Vec<CellStatus>,
        word: String,
    },
}

impl SubmitOutcome {
    /// Statuses of the scored row, if the submission was accepted
    #[must_use]
    pub fn statuses(&self) -> Option<&[CellStatus]> {
        match self {
            Self::Rejected(_) => None,
            Self::Advanced { statuses } | Self::Won { statuses } | Self::Lost { statuses, .. } => {
                Some(statuses)
            }
        }
    }

    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Render-facing view of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub status: CellStatus,
}

/// Complete state of one puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    config: GameConfig,
    word: String,
    attempt: usize,
    position: usize,
    grid: Vec<Vec<Option<char>>>,
    statuses: Vec<Vec<CellStatus>>,
    phase: Phase,
}

impl PuzzleState {
    /// Start a fresh puzzle for `word` (stored uppercase) with an empty grid
    #[must_use]
    pub fn new(config: GameConfig, word: impl Into<String>) -> Self {
        let word = word.into().trim().to_uppercase();

        if word.chars().count() != config.cols() {
            warn!(%word, cols = config.cols(), "target length differs from row width; game cannot be won");
        }

        Self {
            config,
            word,
            attempt: 0,
            position: 0,
            grid: vec![vec![None; config.cols()]; config.rows()],
            statuses: vec![vec![CellStatus::Empty; config.cols()]; config.rows()],
            phase: Phase::Input,
        }
    }

    /// Write a letter into the next cell of the current attempt
    ///
    /// Ignored (returns `false`) after the game ends, when the row is full, or
    /// when `ch` is not an ASCII letter.
    pub fn add_letter(&mut self, ch: char) -> bool {
        if self.phase.is_terminal() || self.position >= self.config.cols() || !ch.is_ascii_alphabetic()
        {
            return false;
        }

        self.grid[self.attempt][self.position] = Some(ch.to_ascii_uppercase());
        self.position += 1;
        true
    }

    /// Clear the last filled cell of the current attempt
    ///
    /// Ignored (returns `false`) after the game ends or at the start of a row.
    pub fn remove_letter(&mut self) -> bool {
        if self.phase.is_terminal() || self.position == 0 {
            return false;
        }

        self.position -= 1;
        self.grid[self.attempt][self.position] = None;
        true
    }

    /// Submit the current attempt
    ///
    /// Guards run in order: the row must be complete, then `checker` must
    /// accept it. Nothing is mutated unless both pass. The state stays
    /// mutably borrowed until the check resolves, so the attempt that was
    /// checked is the attempt that gets scored; a second submission cannot
    /// be started meanwhile:
    ///
    /// ```compile_fail
    /// # use wordle_engine::core::GameConfig;
    /// # use wordle_engine::game::{PuzzleState, WordCheck};
    /// # async fn demo(checker: &dyn WordCheck) {
    /// let mut state = PuzzleState::new(GameConfig::default(), "CRANE");
    /// let first = state.submit(checker);
    /// let second = state.submit(checker);
    /// let _ = (first.await, second.await);
    /// # }
    /// ```
    pub async fn submit<C: WordCheck + ?Sized>(&mut self, checker: &C) -> SubmitOutcome {
        if self.phase.is_terminal() {
            return SubmitOutcome::Rejected(Rejection::Finished);
        }

        if self.position < self.config.cols() {
            debug!(attempt = self.attempt, position = self.position, "row incomplete");
            return SubmitOutcome::Rejected(Rejection::Incomplete);
        }

        let guess = self.row_word(self.attempt);
        if !checker.is_valid(&guess).await {
            debug!(%guess, "guess rejected");
            return SubmitOutcome::Rejected(Rejection::InvalidWord);
        }

        let statuses = evaluate(&guess, &self.word);
        self.statuses[self.attempt].clone_from(&statuses);

        let solved = statuses.len() == self.word.chars().count()
            && statuses.iter().all(|s| s.is_correct());

        if solved {
            debug!(attempts = self.attempt + 1, "puzzle solved");
            self.phase = Phase::Won;
            SubmitOutcome::Won { statuses }
        } else if self.attempt + 1 >= self.config.rows() {
            debug!(word = %self.word, "out of attempts");
            self.phase = Phase::Lost;
            SubmitOutcome::Lost {
                statuses,
                word: self.word.clone(),
            }
        } else {
            self.attempt += 1;
            self.position = 0;
            SubmitOutcome::Advanced { statuses }
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// The target word
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The target word, only once the game is lost
    #[must_use]
    pub fn revealed_word(&self) -> Option<&str> {
        (self.phase == Phase::Lost).then_some(self.word.as_str())
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.phase.is_terminal()
    }

    #[inline]
    #[must_use]
    pub const fn current_attempt(&self) -> usize {
        self.attempt
    }

    #[inline]
    #[must_use]
    pub const fn current_position(&self) -> usize {
        self.position
    }

    /// Number of rows that have been scored
    #[must_use]
    pub const fn submitted_rows(&self) -> usize {
        if self.phase.is_terminal() {
            self.attempt + 1
        } else {
            self.attempt
        }
    }

    /// Letter and status at `(row, col)`, or `None` outside the grid
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        let letter = *self.grid.get(row)?.get(col)?;
        Some(Cell {
            letter,
            status: self.statuses[row][col],
        })
    }

    /// Letters of a row; empty cells are `None`
    ///
    /// # Panics
    /// Panics if `row >= rows`
    #[must_use]
    pub fn row_letters(&self, row: usize) -> &[Option<char>] {
        &self.grid[row]
    }

    /// Statuses of a row; all `Empty` until it is submitted
    ///
    /// # Panics
    /// Panics if `row >= rows`
    #[must_use]
    pub fn statuses(&self, row: usize) -> &[CellStatus] {
        &self.statuses[row]
    }

    /// Filled letters of a row joined into a string
    ///
    /// # Panics
    /// Panics if `row >= rows`
    #[must_use]
    pub fn row_word(&self, row: usize) -> String {
        self.grid[row].iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Accepts or rejects everything, recording what it was asked
    struct Checker {
        verdict: bool,
        seen: Mutex<Vec<String>>,
    }

    impl Checker {
        fn accepting() -> Self {
            Self {
                verdict: true,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn rejecting() -> Self {
            Self {
                verdict: false,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WordCheck for Checker {
        async fn is_valid(&self, word: &str) -> bool {
            self.seen.lock().unwrap().push(word.to_string());
            self.verdict
        }
    }

    fn standard(word: &str) -> PuzzleState {
        PuzzleState::new(GameConfig::default(), word)
    }

    fn type_word(state: &mut PuzzleState, word: &str) {
        for ch in word.chars() {
            state.add_letter(ch);
        }
    }

    async fn guess(state: &mut PuzzleState, word: &str, checker: &Checker) -> SubmitOutcome {
        type_word(state, word);
        state.submit(checker).await
    }

    #[test]
    fn fresh_state_is_empty() {
        let state = standard("crane");

        assert_eq!(state.word(), "CRANE");
        assert_eq!(state.phase(), Phase::Input);
        assert_eq!(state.current_attempt(), 0);
        assert_eq!(state.current_position(), 0);
        assert_eq!(state.submitted_rows(), 0);
        for row in 0..6 {
            assert!(state.row_letters(row).iter().all(Option::is_none));
            assert!(state.statuses(row).iter().all(|s| s.is_empty()));
        }
        assert!(state.cell(6, 0).is_none());
        assert!(state.cell(0, 5).is_none());
    }

    #[test]
    fn add_letter_fills_row_and_stops_at_width() {
        let mut state = standard("CRANE");

        for ch in "stone".chars() {
            assert!(state.add_letter(ch));
        }
        assert!(!state.add_letter('x'));

        assert_eq!(state.current_position(), 5);
        assert_eq!(state.row_word(0), "STONE");
        assert_eq!(
            state.cell(0, 0),
            Some(Cell {
                letter: Some('S'),
                status: CellStatus::Empty
            })
        );
    }

    #[test]
    fn add_letter_ignores_non_letters() {
        let mut state = standard("CRANE");

        assert!(!state.add_letter('1'));
        assert!(!state.add_letter(' '));
        assert!(!state.add_letter('é'));
        assert_eq!(state.current_position(), 0);
    }

    #[test]
    fn remove_letter_clears_preceding_cell() {
        let mut state = standard("CRANE");

        assert!(!state.remove_letter());

        type_word(&mut state, "AB");
        assert!(state.remove_letter());
        assert_eq!(state.current_position(), 1);
        assert_eq!(state.row_letters(0)[1], None);
        assert_eq!(state.row_word(0), "A");

        assert!(state.remove_letter());
        assert!(!state.remove_letter());
        assert_eq!(state.current_position(), 0);
    }

    #[tokio::test]
    async fn incomplete_submit_changes_nothing() {
        let mut state = standard("CRANE");
        let checker = Checker::accepting();
        type_word(&mut state, "CRA");
        let before = state.clone();

        let outcome = state.submit(&checker).await;

        assert_eq!(outcome, SubmitOutcome::Rejected(Rejection::Incomplete));
        assert_eq!(state, before);
        assert!(checker.seen().is_empty(), "validator must not be consulted");
    }

    #[tokio::test]
    async fn invalid_word_leaves_grid_untouched() {
        let mut state = standard("CRANE");
        let checker = Checker::rejecting();
        type_word(&mut state, "xqzvb");
        let before = state.clone();

        let outcome = state.submit(&checker).await;

        assert_eq!(outcome.rejection(), Some(Rejection::InvalidWord));
        assert_eq!(state, before);
        assert_eq!(checker.seen(), vec!["XQZVB"]);
    }

    #[tokio::test]
    async fn accepted_guess_advances_attempt() {
        let mut state = standard("APPLE");
        let checker = Checker::accepting();

        let outcome = guess(&mut state, "paper", &checker).await;

        let expected = crate::core::parse_feedback("YYGY-").unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Advanced {
                statuses: expected.clone()
            }
        );
        assert_eq!(state.statuses(0), expected.as_slice());
        assert_eq!(state.current_attempt(), 1);
        assert_eq!(state.current_position(), 0);
        assert_eq!(state.row_word(0), "PAPER");
        assert!(state.statuses(1).iter().all(|s| s.is_empty()));
        assert_eq!(state.submitted_rows(), 1);
    }

    #[tokio::test]
    async fn win_on_first_attempt() {
        let mut state = standard("CRANE");
        let checker = Checker::accepting();

        let outcome = guess(&mut state, "CRANE", &checker).await;

        assert!(matches!(outcome, SubmitOutcome::Won { .. }));
        assert_eq!(state.phase(), Phase::Won);
        assert!(state.is_finished());
        assert!(state.statuses(0).iter().all(|s| s.is_correct()));
        assert_eq!(state.revealed_word(), None);
        assert_eq!(state.submitted_rows(), 1);
    }

    #[tokio::test]
    async fn loss_after_last_attempt_reveals_word() {
        let mut state = standard("GHOST");
        let checker = Checker::accepting();
        let misses = ["APPLE", "BANJO", "CRANE", "TRACK", "PLANT"];

        for word in misses {
            let outcome = guess(&mut state, word, &checker).await;
            assert!(matches!(outcome, SubmitOutcome::Advanced { .. }), "{word}");
            assert_eq!(state.revealed_word(), None);
        }

        let outcome = guess(&mut state, "BRICK", &checker).await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Lost { ref word, .. } if word == "GHOST"
        ));
        assert_eq!(state.phase(), Phase::Lost);
        assert_eq!(state.revealed_word(), Some("GHOST"));
        assert_eq!(state.current_attempt(), 5);
        assert_eq!(state.submitted_rows(), 6);
        assert_eq!(checker.seen().len(), 6);
    }

    #[tokio::test]
    async fn terminal_state_is_locked() {
        let mut state = standard("CRANE");
        let checker = Checker::accepting();
        guess(&mut state, "CRANE", &checker).await;
        let finished = state.clone();

        assert!(!state.add_letter('A'));
        assert!(!state.remove_letter());
        assert_eq!(
            state.submit(&checker).await,
            SubmitOutcome::Rejected(Rejection::Finished)
        );

        assert_eq!(state, finished);
        assert_eq!(checker.seen().len(), 1);
    }

    #[tokio::test]
    async fn lost_state_is_locked() {
        let config = GameConfig::new(1, 5);
        let mut state = PuzzleState::new(config, "GHOST");
        let checker = Checker::accepting();

        let outcome = guess(&mut state, "LIGHT", &checker).await;
        assert!(matches!(outcome, SubmitOutcome::Lost { .. }));

        let finished = state.clone();
        assert!(!state.add_letter('A'));
        assert!(!state.remove_letter());
        assert_eq!(
            state.submit(&checker).await.rejection(),
            Some(Rejection::Finished)
        );
        assert_eq!(state, finished);
    }

    #[tokio::test]
    async fn rejected_row_can_be_edited_and_resubmitted() {
        let mut state = standard("CRANE");

        guess(&mut state, "XQZVB", &Checker::rejecting()).await;
        for _ in 0..5 {
            state.remove_letter();
        }
        let outcome = guess(&mut state, "CRANE", &Checker::accepting()).await;

        assert!(matches!(outcome, SubmitOutcome::Won { .. }));
        assert_eq!(state.current_attempt(), 0);
    }

    #[tokio::test]
    async fn zero_rows_still_gives_one_attempt() {
        let mut state = PuzzleState::new(GameConfig::new(0, 5), "CRANE");
        let checker = Checker::accepting();

        assert!(state.add_letter('A'));
        assert!(state.remove_letter());

        let outcome = guess(&mut state, "STONE", &checker).await;
        assert!(matches!(outcome, SubmitOutcome::Lost { .. }));
        assert_eq!(state.submitted_rows(), 1);
    }

    #[test]
    fn zero_cols_still_holds_one_letter() {
        let mut state = PuzzleState::new(GameConfig::new(6, 0), "A");

        assert!(state.add_letter('a'));
        assert!(!state.add_letter('b'));
        assert_eq!(state.row_word(0), "A");
    }

    #[tokio::test]
    async fn target_longer_than_row_never_wins() {
        let mut state = PuzzleState::new(GameConfig::default(), "APPLES");
        let checker = Checker::accepting();

        let outcome = guess(&mut state, "APPLE", &checker).await;

        assert!(matches!(outcome, SubmitOutcome::Advanced { .. }));
        assert_eq!(state.phase(), Phase::Input);
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(Rejection::Incomplete.to_string(), "Word not complete");
        assert_eq!(Rejection::InvalidWord.to_string(), "Word is not valid");
    }
}
