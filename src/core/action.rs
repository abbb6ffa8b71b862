//! # Actions
//!
//! Everything that can happen in Flashdeck becomes an `Action`.
//! User presses the right arrow? That's `Action::NextCard`.
//! The deck arrives? That's `Action::DeckLoaded(deck)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing any I/O the caller must perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::card::Deck;
use crate::core::navigation::{Navigation, Phase};
use crate::core::state::{App, View};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The one-time load succeeded.
    DeckLoaded(Deck),
    /// The one-time load failed. Logged and otherwise ignored.
    LoadFailed(String),
    ToggleDetails,
    NextCard,
    PrevCard,
    /// Speak the headword of the card on screen.
    SpeakCurrent,
    /// Speak an arbitrary word (search results).
    SpeakWord(String),
    OpenSearch,
    OpenBrowser,
    Quit,
}

/// I/O requested by `update()`, carried out by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    Speak(String),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    let len = app.deck.len();
    match action {
        Action::DeckLoaded(deck) => {
            if app.deck_loaded {
                warn!("Ignoring second deck load ({} cards)", deck.len());
                return Effect::None;
            }
            info!("Deck loaded: {} cards", deck.len());
            app.deck_loaded = true;
            app.deck = deck;
            app.navigation = Navigation::new();
            // An empty deck leaves the browser on its placeholder, so the
            // title bar keeps saying "Loading..." too
            if !app.deck.is_empty() {
                app.status_message.clear();
            }
            Effect::None
        }
        Action::LoadFailed(reason) => {
            // The browser keeps showing "Loading..."; there is no retry.
            warn!("Deck load failed: {}", reason);
            Effect::None
        }
        Action::ToggleDetails => {
            app.navigation.toggle_details(len);
            Effect::None
        }
        Action::NextCard => {
            app.navigation.next(len);
            if app.navigation.is_finished() {
                debug!("Reached end of deck");
            }
            Effect::None
        }
        Action::PrevCard => {
            app.navigation.prev(len);
            Effect::None
        }
        Action::SpeakCurrent => match app.current_card() {
            Some(card) => speak(&card.word),
            None => Effect::None,
        },
        Action::SpeakWord(word) => speak(&word),
        Action::OpenSearch => {
            if app.view != View::Search {
                debug!("Route {} -> {}", app.view.route(), View::Search.route());
                app.view = View::Search;
            }
            Effect::None
        }
        Action::OpenBrowser => {
            if app.view != View::Browser {
                debug!("Route {} -> {}", app.view.route(), View::Browser.route());
                app.view = View::Browser;
                // Mounting the browser starts over at the first card
                app.navigation = Navigation::new();
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn speak(word: &str) -> Effect {
    if word.trim().is_empty() {
        Effect::None
    } else {
        Effect::Speak(word.to_string())
    }
}

/// Whether the browser should show the loading placeholder.
pub fn is_loading(app: &App) -> bool {
    app.phase() == Phase::Empty
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{loaded_app, sample_deck, test_app};

    #[test]
    fn test_deck_loaded_populates_and_starts_browsing() {
        let mut app = test_app();
        assert!(is_loading(&app));

        let effect = update(&mut app, Action::DeckLoaded(sample_deck()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.deck.len(), 3);
        assert!(!is_loading(&app));
        assert_eq!(
            app.phase(),
            Phase::Browsing {
                index: 0,
                show_details: false
            }
        );
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_deck_is_write_once() {
        let mut app = loaded_app();
        update(&mut app, Action::NextCard);

        let other = Deck::new(vec![]);
        update(&mut app, Action::DeckLoaded(other));

        assert_eq!(app.deck, sample_deck());
        assert_eq!(app.navigation.index(), 1);
    }

    #[test]
    fn test_load_failure_keeps_loading_state() {
        let mut app = test_app();
        let effect = update(&mut app, Action::LoadFailed("connection refused".to_string()));
        assert_eq!(effect, Effect::None);
        assert!(app.deck.is_empty());
        assert!(is_loading(&app));
        assert_eq!(app.status_message, "Loading...");
    }

    #[test]
    fn test_empty_deck_load_keeps_loading() {
        let mut app = test_app();
        update(&mut app, Action::DeckLoaded(Deck::default()));
        assert!(is_loading(&app));
        assert_eq!(app.status_message, "Loading...");
    }

    #[test]
    fn test_empty_deck_load_is_still_the_only_load() {
        let mut app = test_app();
        update(&mut app, Action::DeckLoaded(Deck::default()));
        update(&mut app, Action::DeckLoaded(sample_deck()));
        assert!(app.deck.is_empty());
        assert!(is_loading(&app));
    }

    #[test]
    fn test_navigation_actions() {
        let mut app = loaded_app();
        update(&mut app, Action::ToggleDetails);
        assert!(app.navigation.show_details());

        update(&mut app, Action::NextCard);
        assert_eq!(
            app.phase(),
            Phase::Browsing {
                index: 1,
                show_details: false
            }
        );

        update(&mut app, Action::NextCard);
        update(&mut app, Action::NextCard);
        assert_eq!(app.phase(), Phase::Finished);

        update(&mut app, Action::PrevCard);
        assert_eq!(
            app.phase(),
            Phase::Browsing {
                index: 2,
                show_details: false
            }
        );
    }

    #[test]
    fn test_navigation_actions_ignored_while_loading() {
        let mut app = test_app();
        update(&mut app, Action::NextCard);
        update(&mut app, Action::PrevCard);
        update(&mut app, Action::ToggleDetails);
        assert_eq!(app.navigation, Navigation::new());
    }

    #[test]
    fn test_speak_current_card() {
        let mut app = loaded_app();
        assert_eq!(
            update(&mut app, Action::SpeakCurrent),
            Effect::Speak("cat".to_string())
        );
    }

    #[test]
    fn test_speak_nothing_while_loading() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::SpeakCurrent), Effect::None);
    }

    #[test]
    fn test_speak_last_card_when_finished() {
        let mut app = loaded_app();
        for _ in 0..3 {
            update(&mut app, Action::NextCard);
        }
        assert_eq!(
            update(&mut app, Action::SpeakCurrent),
            Effect::Speak("hello".to_string())
        );
    }

    #[test]
    fn test_speak_word_skips_blank() {
        let mut app = loaded_app();
        assert_eq!(update(&mut app, Action::SpeakWord("  ".to_string())), Effect::None);
        assert_eq!(
            update(&mut app, Action::SpeakWord("dog".to_string())),
            Effect::Speak("dog".to_string())
        );
    }

    #[test]
    fn test_returning_to_browser_remounts_navigation() {
        let mut app = loaded_app();
        update(&mut app, Action::NextCard);
        update(&mut app, Action::ToggleDetails);

        update(&mut app, Action::OpenSearch);
        assert_eq!(app.view, View::Search);

        update(&mut app, Action::OpenBrowser);
        assert_eq!(app.view, View::Browser);
        assert_eq!(
            app.phase(),
            Phase::Browsing {
                index: 0,
                show_details: false
            }
        );
    }

    #[test]
    fn test_open_browser_when_already_browsing_keeps_position() {
        let mut app = loaded_app();
        update(&mut app, Action::NextCard);
        update(&mut app, Action::OpenBrowser);
        assert_eq!(app.navigation.index(), 1);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
