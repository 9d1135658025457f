use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::core::{
    Book,
    VocabCard,
    YomitomoError,
};

/// Read-only client for the hosted shelf backend (PostgREST conventions).
///
/// The session context (endpoint and API key) is passed in explicitly so
/// nothing here depends on ambient process state.
#[derive(Clone)]
pub struct ShelfClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ShelfClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { client: Client::new(), base_url: base_url.into(), api_key: api_key.into() }
    }

    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }

    async fn get_rows<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, YomitomoError> {
        if !self.is_configured() {
            return Err(YomitomoError::BackendNotConfigured);
        }

        let url = format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), path_and_query);
        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", &self.api_key))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(YomitomoError::BackendStatus(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }

    /// Cheap reachability probe for the status indicator.
    pub async fn check_connection(&self) -> bool {
        if !self.is_configured() {
            return false;
        }
        self.get_rows::<Vec<serde_json::Value>>("books?select=id&limit=1").await.is_ok()
    }

    /// The user's shelf, newest first.
    pub async fn load_books(&self) -> Result<Vec<Book>, YomitomoError> {
        self.get_rows("books?select=*&order=created_at.desc").await
    }

    /// One-shot snapshot of a book's vocab, in the order it was recorded.
    /// Readings are normalized to hiragana before they reach the navigator.
    pub async fn load_cards(&self, book_id: &str) -> Result<Vec<VocabCard>, YomitomoError> {
        let query = format!("vocab?select=*&book_id=eq.{}&order=created_at.asc", book_id);
        let mut cards: Vec<VocabCard> = self.get_rows(&query).await?;
        for c in &mut cards {
            c.normalize_reading();
        }
        Ok(cards)
    }
}
