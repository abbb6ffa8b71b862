//! Deck source reading a local JSON file. Same format as the HTTP document.

use std::path::PathBuf;

use async_trait::async_trait;
use log::info;

use crate::core::card::Deck;
use crate::source::{DeckSource, SourceError};

pub struct FileDeckSource {
    path: PathBuf,
    label: String,
}

impl FileDeckSource {
    pub fn new(path: PathBuf) -> Self {
        let label = path.display().to_string();
        Self { path, label }
    }
}

#[async_trait]
impl DeckSource for FileDeckSource {
    fn name(&self) -> &str {
        &self.label
    }

    async fn load(&self) -> Result<Deck, SourceError> {
        info!("Reading deck from {}", self.path.display());
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(SourceError::Io)?;
        let deck = Deck::from_json(&contents)?;
        info!("Parsed {} cards from {}", deck.len(), self.label);
        Ok(deck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("flashdeck-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_loads_cards_from_file() {
        let path = temp_path("unit-ok");
        fs::write(
            &path,
            r#"[{"word": "cat", "definition": "a small animal", "examples": [], "notes": "feline"}]"#,
        )
        .unwrap();

        let source = FileDeckSource::new(path.clone());
        let result = tokio_test::block_on(source.load());
        let _ = fs::remove_file(&path);

        let deck = result.unwrap();
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.cards()[0].notes, "feline");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = FileDeckSource::new(temp_path("unit-missing"));
        let result = tokio_test::block_on(source.load());
        assert!(matches!(result, Err(SourceError::Io(_))));
    }

    #[test]
    fn test_name_is_path() {
        let source = FileDeckSource::new(PathBuf::from("cards.json"));
        assert_eq!(source.name(), "cards.json");
    }
}
