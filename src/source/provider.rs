use std::fmt;

use async_trait::async_trait;

use crate::core::card::Deck;

/// Errors that can occur while loading a deck.
///
/// Every variant ends the same way (the deck stays empty); they differ only
/// in what gets logged.
#[derive(Debug)]
pub enum SourceError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The server answered with a non-success status.
    Api { status: u16, message: String },
    /// The document is not a JSON array of cards.
    Parse(String),
    /// Local file could not be read.
    Io(std::io::Error),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Network(msg) => write!(f, "network error: {msg}"),
            SourceError::Api { status, message } => {
                write!(f, "HTTP {status}: {message}")
            }
            SourceError::Parse(msg) => write!(f, "parse error: {msg}"),
            SourceError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        SourceError::Parse(e.to_string())
    }
}

/// Somewhere a deck can be loaded from. Called once per session.
#[async_trait]
pub trait DeckSource: Send + Sync {
    /// Short human-readable description (shown in the title bar).
    fn name(&self) -> &str;

    /// Fetch and parse the whole deck.
    async fn load(&self) -> Result<Deck, SourceError>;
}
