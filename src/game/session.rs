//! Game session for render layers
//!
//! Bundles the word source, validator and random source with the current
//! puzzle so a front end only has to forward key presses and draw the state.

use super::input::Key;
use super::state::{PuzzleState, SubmitOutcome};
use crate::core::GameConfig;
use crate::net::{EngineConfig, Fetcher};
use crate::services::{Validator, WordSource};
use crate::wordlists::WordList;
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

/// What a key press did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Nothing changed
    Ignored,
    /// A letter was added or removed
    Edited,
    /// Enter was pressed; carries the submission result
    Submitted(SubmitOutcome),
}

/// One player's game session
pub struct Game<F: Fetcher + ?Sized, R: Rng> {
    source: WordSource<F>,
    validator: Validator<F>,
    rng: R,
    state: PuzzleState,
}

impl<F: Fetcher + ?Sized, R: Rng> Game<F, R> {
    /// Build the services and start the first puzzle
    pub async fn start(
        fetcher: Arc<F>,
        words: Arc<WordList>,
        engine: &EngineConfig,
        config: GameConfig,
        mut rng: R,
    ) -> Self {
        let source = WordSource::new(Arc::clone(&fetcher), Arc::clone(&words), engine);
        let validator = Validator::new(fetcher, words, engine);

        let word = source.resolve_word(config.cols(), &mut rng).await;
        debug!(%word, "puzzle word");

        Self {
            source,
            validator,
            rng,
            state: PuzzleState::new(config, word),
        }
    }

    /// Discard the current puzzle and start a new one with a fresh word
    pub async fn new_game(&mut self) {
        let config = self.state.config();
        let word = self.source.resolve_word(config.cols(), &mut self.rng).await;
        debug!(%word, "puzzle word");

        self.state = PuzzleState::new(config, word);
    }

    /// Apply one key press to the current puzzle
    ///
    /// Every key is ignored once the puzzle is finished.
    pub async fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if self.state.is_finished() {
            return KeyOutcome::Ignored;
        }

        match key {
            Key::Letter(ch) => edited(self.state.add_letter(ch)),
            Key::Backspace => edited(self.state.remove_letter()),
            Key::Enter => KeyOutcome::Submitted(self.state.submit(&self.validator).await),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &PuzzleState {
        &self.state
    }
}

const fn edited(changed: bool) -> KeyOutcome {
    if changed {
        KeyOutcome::Edited
    } else {
        KeyOutcome::Ignored
    }
}
