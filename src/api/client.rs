//! Catalog Client
//!
//! Typed client for the adventure collection endpoint. The base URL is
//! injected at construction so tests can point it at a mock server.

use super::http::HttpClient;
use super::model::{Adventure, NewAdventure};
use anyhow::{Context, Result};

/// Client for one catalog collection endpoint.
#[derive(Clone)]
pub struct CatalogClient {
    http: HttpClient,
    base_url: String,
}

impl CatalogClient {
    /// Create a new client for the given collection URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Fetch the entire collection.
    ///
    /// A non-success status is an error: the caller decides whether the
    /// failure is surfaced or only logged.
    pub async fn fetch_all(&self) -> Result<Vec<Adventure>> {
        let response = self.http.get(&self.base_url).await?;

        if !response.is_success() {
            return Err(anyhow::anyhow!(
                "API request failed: {}",
                response.status
            ));
        }

        serde_json::from_str(&response.body).context("Failed to parse collection JSON")
    }

    /// Fetch a single record by identifier.
    ///
    /// Returns `Ok(None)` on a non-success status so a missing record is
    /// distinguishable from a transport failure.
    pub async fn fetch_one(&self, id: &str) -> Result<Option<Adventure>> {
        let response = self.http.get(&self.item_url(id)).await?;

        if !response.is_success() {
            tracing::warn!("Record {} not available: {}", id, response.status);
            return Ok(None);
        }

        let record = serde_json::from_str(&response.body).context("Failed to parse record JSON")?;
        Ok(Some(record))
    }

    /// Create a new record. The server assigns the identifier; the
    /// response body is not consumed.
    pub async fn create(&self, record: &NewAdventure) -> Result<()> {
        let body = serde_json::to_value(record).context("Failed to serialize record")?;
        let response = self.http.post_json(&self.base_url, &body).await?;

        if !response.is_success() {
            return Err(anyhow::anyhow!(
                "API request failed: {}",
                response.status
            ));
        }

        Ok(())
    }

    /// Delete the identified record.
    pub async fn remove(&self, id: &str) -> Result<()> {
        let response = self.http.delete(&self.item_url(id)).await?;

        if !response.is_success() {
            return Err(anyhow::anyhow!(
                "API request failed: {}",
                response.status
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = CatalogClient::new("http://localhost:3000/aventuras/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/aventuras");
        assert_eq!(client.item_url("3"), "http://localhost:3000/aventuras/3");
    }
}
