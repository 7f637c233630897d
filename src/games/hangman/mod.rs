/// Hangman game module - rules, word bank, session and terminal front end
pub mod app;
pub mod error;
pub mod game;
pub mod keymap;
pub mod renderer;
pub mod session;
pub mod words;

pub use app::HangmanApp;
pub use error::ConfigError;
pub use game::{render_mask, GameState, MaskedLetter, Snapshot, Status, MAX_ATTEMPTS};
pub use renderer::HangmanRenderer;
pub use session::{Command, Session};
pub use words::{Category, WordBank, WordEntry};
