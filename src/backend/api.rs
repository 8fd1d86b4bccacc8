//! HTTP client for the listings search API

use reqwest::Client;
use thiserror::Error;

use super::types::ListingResponse;

/// Anything that stops a search from producing a payload
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the listings API
#[derive(Debug, Clone, Default)]
pub struct ListingsClient {
    client: Client,
}

impl ListingsClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch and decode a prepared query URL.
    ///
    /// The HTTP status is not inspected; only the body decides the outcome.
    pub async fn fetch(&self, url: &str) -> Result<ListingResponse, FetchError> {
        let body = self.client.get(url).send().await?.bytes().await?;
        let response: ListingResponse = serde_json::from_slice(&body)?;

        tracing::debug!(
            code = %response.response.application_response_code,
            listings = response.response.listings.len(),
            "listings response decoded"
        );
        Ok(response)
    }
}
