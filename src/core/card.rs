//! # Cards and Decks
//!
//! A `Flashcard` is one vocabulary entry. A `Deck` is the ordered list of
//! cards loaded once at startup.
//!
//! ```text
//! Deck
//! └── cards: Arc<[Flashcard]>
//!     ├── word: String          // headword, shown on the card face
//!     ├── definition: String
//!     ├── examples: Vec<String> // display order matters
//!     └── notes: String         // may be empty
//! ```
//!
//! Decks are write-once. Cloning a `Deck` shares the same card slice, so the
//! core and the views can hold it without copying or mutating anything.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One vocabulary entry as published in the remote JSON document.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Flashcard {
    pub word: String,
    pub definition: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

impl Flashcard {
    /// The text searched by the filter: word, definition, notes, then the
    /// examples, each separated by a single space.
    pub fn haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.word,
            self.definition,
            self.notes,
            self.examples.join(" ")
        )
    }
}

/// Ordered, immutable collection of flashcards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Arc<[Flashcard]>,
}

impl Deck {
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Parse a deck from the JSON array published by the data source.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let cards: Vec<Flashcard> = serde_json::from_str(text)?;
        Ok(Self::new(cards))
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Flashcard> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
