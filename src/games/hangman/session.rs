use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use super::error::ConfigError;
use super::game::{GameState, Snapshot, Status};
use super::words::WordBank;

/// Player actions the session understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Command {
    Guess(char),
    /// Play again with a new word from the same category
    ResetRound,
    /// Start over with a new category
    NewGame,
}

/// One player's game: the live state, the shared word bank and the random source
/// every pick is drawn from.
pub struct Session<R> {
    bank: Arc<WordBank>,
    rng: R,
    state: GameState,
}

impl<R: Rng> Session<R> {
    pub fn new(bank: Arc<WordBank>, mut rng: R) -> Self {
        let state = GameState::initialize(&bank, &mut rng);
        info!(category = state.category(), "new game");
        Self { bank, rng, state }
    }

    /// Resume from an existing state, e.g. one built with [`GameState::with_entry`].
    pub fn with_state(bank: Arc<WordBank>, rng: R, state: GameState) -> Self {
        Self { bank, rng, state }
    }

    /// Handle one player action to completion and return what to draw next.
    pub fn apply(&mut self, command: Command) -> Result<Snapshot, ConfigError> {
        debug!(?command, "applying");

        match command {
            Command::Guess(c) => {
                if self.state.guess_char(c) {
                    let status = self.state.evaluate_outcome();
                    debug!(
                        letter = %c.to_ascii_lowercase(),
                        wrong = self.state.wrong_guesses(),
                        "guess accepted"
                    );
                    if status != Status::InProgress {
                        info!(?status, word = self.state.word(), "round over");
                    }
                } else {
                    debug!(letter = %c, "guess ignored");
                }
            }
            Command::ResetRound => {
                self.state.reset_round(&self.bank, &mut self.rng)?;
                info!(category = self.state.category(), "new round");
            }
            Command::NewGame => {
                self.state = GameState::new_game(&self.bank, &mut self.rng);
                info!(category = self.state.category(), "new game");
            }
        }

        Ok(self.state.snapshot())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn bank(&self) -> &WordBank {
        &self.bank
    }
}

impl Session<StdRng> {
    /// Reproducible session: the same seed and bank give the same words.
    pub fn seeded(bank: Arc<WordBank>, seed: u64) -> Self {
        Self::new(bank, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(bank: Arc<WordBank>) -> Self {
        Self::new(bank, StdRng::from_os_rng())
    }
}
