//! # Application State
//!
//! Core business state for Flashdeck. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── deck: Deck                    // write-once, empty until loaded
//! ├── deck_loaded: bool             // set by the first load, even an empty one
//! ├── navigation: Navigation        // browser position (index/details/finished)
//! ├── view: View                    // Browser ("/") or Search ("/search")
//! ├── source_label: String          // where the deck comes from
//! └── status_message: String        // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::card::{Deck, Flashcard};
use crate::core::navigation::{Navigation, Phase};

/// The two routes of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// One card at a time (`/`).
    #[default]
    Browser,
    /// Filtered list of cards (`/search`).
    Search,
}

impl View {
    pub fn route(&self) -> &'static str {
        match self {
            View::Browser => "/",
            View::Search => "/search",
        }
    }
}

pub struct App {
    pub deck: Deck,
    pub deck_loaded: bool,
    pub navigation: Navigation,
    pub view: View,
    pub source_label: String,
    pub status_message: String,
}

impl App {
    pub fn new(source_label: String) -> Self {
        Self {
            deck: Deck::default(),
            deck_loaded: false,
            navigation: Navigation::new(),
            view: View::Browser,
            source_label,
            status_message: String::from("Loading..."),
        }
    }

    pub fn phase(&self) -> Phase {
        self.navigation.phase(self.deck.len())
    }

    /// The card the browser is showing, if any.
    ///
    /// Once finished the last card stays on screen with its details hidden.
    pub fn current_card(&self) -> Option<&Flashcard> {
        self.deck.get(self.navigation.index())
    }

    /// Progress text for the title bar, e.g. `card 3/20`.
    pub fn progress_label(&self) -> Option<String> {
        match self.phase() {
            Phase::Empty => None,
            Phase::Browsing { index, .. } => Some(format!("card {}/{}", index + 1, self.deck.len())),
            Phase::Finished => Some(format!("finished {}/{}", self.deck.len(), self.deck.len())),
        }
    }
}
