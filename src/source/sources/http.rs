//! Deck source backed by a single HTTP `GET` of a JSON document.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::core::card::Deck;
use crate::source::{DeckSource, SourceError};

pub struct HttpDeckSource {
    url: String,
    client: reqwest::Client,
}

impl HttpDeckSource {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DeckSource for HttpDeckSource {
    fn name(&self) -> &str {
        &self.url
    }

    async fn load(&self) -> Result<Deck, SourceError> {
        info!("Fetching deck from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        debug!("Deck response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Deck fetch failed: {} - {}", status, err_body);
            return Err(SourceError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;
        debug!("Deck body received: {} bytes", body.len());

        let deck = Deck::from_json(&body)?;
        info!("Parsed {} cards from {}", deck.len(), self.url);
        Ok(deck)
    }
}
