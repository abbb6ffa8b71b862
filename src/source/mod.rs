pub mod provider;
pub mod sources;

pub use provider::{DeckSource, SourceError};
pub use sources::{FileDeckSource, HttpDeckSource};
