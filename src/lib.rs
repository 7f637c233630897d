pub mod core {
	pub mod engine;
	pub mod game;
}

pub mod games;

// Re-export for convenience
pub use crate::core::game::{Flow, Game, Renderer};
pub use crate::games::hangman::{
	Command, ConfigError, GameState, HangmanApp, Session, Snapshot, Status, WordBank, WordEntry,
};
