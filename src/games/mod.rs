//! Games playable through the terminal engine.
pub mod hangman;
