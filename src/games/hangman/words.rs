//! The word bank: categories of secret words with their hints.
//!
//! A [`WordBank`] can only exist in a valid shape: at least one category, every
//! category non-empty, every word made of lowercase ASCII letters. Once built it is
//! read-only and can be shared between sessions behind an `Arc`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Built-in categories, used when no word file is given
const BUILTIN: &[(&str, &[(&str, &str)])] = &[
    (
        "Animals",
        &[
            ("elephant", "A large mammal with a trunk."),
            ("giraffe", "The tallest land animal."),
            ("kangaroo", "A jumping marsupial from Australia."),
            ("dolphin", "A smart aquatic mammal known for leaping."),
            ("tiger", "A big striped cat."),
            ("penguin", "A flightless bird that swims."),
        ],
    ),
    (
        "Programming",
        &[
            ("python", "A popular programming language named after a comedy group."),
            ("javascript", "A language mainly used for web development."),
            ("hangman", "The game you are playing now."),
            ("developer", "Someone who writes code."),
            ("function", "Reusable block of code."),
            ("variable", "Stores data values."),
        ],
    ),
    (
        "Fruits",
        &[
            ("banana", "A long yellow fruit."),
            ("strawberry", "A small red fruit with seeds on the outside."),
            ("mango", "A tropical fruit often called the king of fruits."),
            ("apple", "Keeps the doctor away."),
            ("pineapple", "A tropical fruit with spiky skin."),
            ("grapes", "Small round fruits used to make wine."),
        ],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub hint: String,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            hint: hint.into(),
        }
    }
}

/// A named, non-empty group of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    entries: Vec<WordEntry>,
}

impl Category {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    fn pick<R: Rng>(&self, rng: &mut R) -> &WordEntry {
        &self.entries[rng.random_range(0..self.entries.len())]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    // Sorted by name so seeded picks are reproducible.
    categories: Vec<Category>,
}

impl WordBank {
    /// Validate a category table and build a bank from it.
    pub fn new(table: BTreeMap<String, Vec<WordEntry>>) -> Result<Self, ConfigError> {
        if table.is_empty() {
            return Err(ConfigError::NoCategories);
        }

        let mut categories = Vec::with_capacity(table.len());
        for (name, entries) in table {
            if entries.is_empty() {
                return Err(ConfigError::EmptyCategory(name));
            }
            if let Some(bad) = entries.iter().find(|e| !is_valid_word(&e.word)) {
                return Err(ConfigError::InvalidWord {
                    word: bad.word.clone(),
                    category: name,
                });
            }
            categories.push(Category { name, entries });
        }

        Ok(Self { categories })
    }

    /// The built-in Animals / Programming / Fruits bank.
    pub fn builtin() -> Self {
        let mut categories: Vec<Category> = BUILTIN
            .iter()
            .map(|(name, entries)| Category {
                name: name.to_string(),
                entries: entries
                    .iter()
                    .map(|(word, hint)| WordEntry::new(*word, *hint))
                    .collect(),
            })
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Self { categories }
    }

    /// Parse a JSON object mapping category names to `[{"word", "hint"}]` lists.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let table: BTreeMap<String, Vec<WordEntry>> = serde_json::from_str(json)?;
        Self::new(table)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn word_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    /// Uniform category, then a uniform entry inside it.
    pub(crate) fn pick<R: Rng>(&self, rng: &mut R) -> (&Category, &WordEntry) {
        let category = &self.categories[rng.random_range(0..self.categories.len())];
        (category, category.pick(rng))
    }

    /// Uniform entry from a named category. Repeats of the previous word are allowed.
    pub(crate) fn pick_from<R: Rng>(
        &self,
        name: &str,
        rng: &mut R,
    ) -> Result<&WordEntry, ConfigError> {
        self.category(name)
            .map(|c| c.pick(rng))
            .ok_or_else(|| ConfigError::UnknownCategory(name.to_string()))
    }
}

/// Non-empty and lowercase a-z only
pub(crate) fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}
