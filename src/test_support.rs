//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use crate::core::action::{Action, update};
use crate::core::card::{Deck, Flashcard};
use crate::core::state::App;
use crate::speech::SpeechEngine;

fn card(word: &str, definition: &str, examples: &[&str], notes: &str) -> Flashcard {
    Flashcard {
        word: word.to_string(),
        definition: definition.to_string(),
        examples: examples.iter().map(|s| s.to_string()).collect(),
        notes: notes.to_string(),
    }
}

/// Three small cards: cat, dog, hello.
pub fn sample_cards() -> Vec<Flashcard> {
    vec![
        card("cat", "a small animal", &["the cat sat on the mat"], "feline"),
        card("dog", "a loyal pet", &["the dog can fetch"], ""),
        card("hello", "a greeting", &["hello there"], "informal"),
    ]
}

pub fn sample_deck() -> Deck {
    Deck::new(sample_cards())
}

/// Creates a test App that is still waiting for its deck.
pub fn test_app() -> App {
    App::new("test-source".to_string())
}

/// Creates a test App with the sample deck loaded.
pub fn loaded_app() -> App {
    let mut app = test_app();
    update(&mut app, Action::DeckLoaded(sample_deck()));
    app
}

/// Speech engine that remembers what it was asked to say.
#[derive(Default)]
pub struct RecordingSpeech {
    pub spoken: Mutex<Vec<String>>,
}

impl RecordingSpeech {
    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl SpeechEngine for RecordingSpeech {
    fn name(&self) -> &str {
        "recording"
    }

    fn speak(&self, text: &str) {
        if let Ok(mut spoken) = self.spoken.lock() {
            spoken.push(text.to_string());
        }
    }
}
