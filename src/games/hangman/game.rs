use std::collections::BTreeSet;

use rand::Rng;
use serde::Serialize;

use super::error::ConfigError;
use super::words::{is_valid_word, WordBank, WordEntry};

/// Wrong guesses that lose a round: one per gallows stage after the empty one.
pub const MAX_ATTEMPTS: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    pub fn is_over(self) -> bool {
        self != Status::InProgress
    }
}

/// One letter of the secret word as the player sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaskedLetter {
    pub letter: char,
    pub revealed: bool,
}

/// Everything a front end needs to draw the game, and nothing it could mutate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub category: String,
    pub hint: String,
    pub mask: Vec<MaskedLetter>,
    /// All guessed letters, sorted
    pub guessed: Vec<char>,
    /// Guessed letters missing from the word, sorted
    pub misses: Vec<char>,
    pub remaining_attempts: u8,
    pub max_attempts: u8,
    /// Gallows picture index, `0..=max_attempts`
    pub stage: u8,
    pub status: Status,
    pub message: String,
}

/// State of one game: the category for the whole session and the current round.
/// Only built through [`GameState::initialize`] or [`GameState::with_entry`], which
/// check the word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    category: String,
    word: String,
    hint: String,
    guessed: BTreeSet<char>,
    wrong_guesses: u8,
    max_attempts: u8,
    status: Status,
    message: String,
}

impl GameState {
    /// Start a game on a random category and a random word from it.
    pub fn initialize<R: Rng>(bank: &WordBank, rng: &mut R) -> Self {
        let (category, entry) = bank.pick(rng);
        Self::fresh(category.name().to_string(), entry)
    }

    /// Throw the whole game away and start over, category included.
    pub fn new_game<R: Rng>(bank: &WordBank, rng: &mut R) -> Self {
        Self::initialize(bank, rng)
    }

    /// Start a game on a known word. The word must pass the word bank's rules.
    pub fn with_entry(category: impl Into<String>, entry: &WordEntry) -> Result<Self, ConfigError> {
        let category = category.into();
        if !is_valid_word(&entry.word) {
            return Err(ConfigError::InvalidWord {
                category,
                word: entry.word.clone(),
            });
        }
        Ok(Self::fresh(category, entry))
    }

    fn fresh(category: String, entry: &WordEntry) -> Self {
        Self {
            category,
            word: entry.word.clone(),
            hint: entry.hint.clone(),
            guessed: BTreeSet::new(),
            wrong_guesses: 0,
            max_attempts: MAX_ATTEMPTS,
            status: Status::InProgress,
            message: String::new(),
        }
    }

    /// Guess from raw text input. Anything but exactly one letter is ignored.
    /// Returns whether the state changed.
    pub fn guess_letter(&mut self, input: &str) -> bool {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.guess_char(c),
            _ => false,
        }
    }

    /// Record a guess. Non-letters, repeats and guesses after the round is over are
    /// ignored. Returns whether the state changed.
    pub fn guess_char(&mut self, c: char) -> bool {
        if self.status.is_over() || !c.is_ascii_alphabetic() {
            return false;
        }

        let letter = c.to_ascii_lowercase();
        if !self.guessed.insert(letter) {
            return false;
        }
        if !self.word.contains(letter) {
            self.wrong_guesses = self.wrong_guesses.saturating_add(1);
        }
        true
    }

    /// Settle the round if it is decided. Must follow every accepted guess;
    /// calling it again is harmless.
    pub fn evaluate_outcome(&mut self) -> Status {
        if self.status.is_over() {
            return self.status;
        }

        if self.is_word_complete() {
            self.status = Status::Won;
            self.message = format!("🎉 You won! The word was: {}", self.word.to_uppercase());
        } else if self.wrong_guesses >= self.max_attempts {
            self.status = Status::Lost;
            self.message = format!("💀 Game Over! The word was: {}", self.word.to_uppercase());
        }

        self.status
    }

    /// Play again: new word from the same category, guesses cleared.
    pub fn reset_round<R: Rng>(&mut self, bank: &WordBank, rng: &mut R) -> Result<(), ConfigError> {
        let entry = bank.pick_from(&self.category, rng)?;
        self.word = entry.word.clone();
        self.hint = entry.hint.clone();
        self.guessed.clear();
        self.wrong_guesses = 0;
        self.status = Status::InProgress;
        self.message.clear();
        Ok(())
    }

    fn is_word_complete(&self) -> bool {
        self.word.chars().all(|c| self.guessed.contains(&c))
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn wrong_guesses(&self) -> u8 {
        self.wrong_guesses
    }

    pub fn max_attempts(&self) -> u8 {
        self.max_attempts
    }

    pub fn remaining_attempts(&self) -> u8 {
        self.max_attempts.saturating_sub(self.wrong_guesses)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn mask(&self) -> Vec<MaskedLetter> {
        render_mask(&self.word, &self.guessed)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            category: self.category.clone(),
            hint: self.hint.clone(),
            mask: self.mask(),
            guessed: self.guessed.iter().copied().collect(),
            misses: self
                .guessed
                .iter()
                .copied()
                .filter(|c| !self.word.contains(*c))
                .collect(),
            remaining_attempts: self.remaining_attempts(),
            max_attempts: self.max_attempts,
            stage: self.wrong_guesses.min(self.max_attempts),
            status: self.status,
            message: self.message.clone(),
        }
    }
}

/// Pair every letter of `word`, in order, with whether it has been guessed.
pub fn render_mask(word: &str, guessed: &BTreeSet<char>) -> Vec<MaskedLetter> {
    word.chars()
        .map(|letter| MaskedLetter {
            letter,
            revealed: guessed.contains(&letter),
        })
        .collect()
}
