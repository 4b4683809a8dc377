use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::models::Listing;

/// Errors that can occur when talking to the marketplace store API
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid access token")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Client for the marketplace's serverless listing API.
///
/// The store exposes listing records over JSON routes with bearer-token
/// authorization. Handles:
/// - Health probing
/// - Fetching the listing set for a search pass
/// - Fetching a single listing by id
pub struct StoreClient {
    base_url: String,
    anon_key: String,
    client: Client,
}

impl StoreClient {
    /// Create a new store client
    pub fn new(base_url: String, anon_key: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            anon_key,
            client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    /// Probe the store's health route
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        let response = self.client.get(self.url("health")).send().await?;
        Ok(response.status().is_success())
    }

    /// Fetch the full listing set for a search pass.
    ///
    /// Malformed records are skipped with a warning rather than failing the
    /// whole batch; the store is a shared document bucket and individual
    /// writes can lag schema changes.
    pub async fn fetch_listings(&self) -> Result<Vec<Listing>, StoreError> {
        let response = self
            .client
            .get(self.url("listings"))
            .bearer_auth(&self.anon_key)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(StoreError::Unauthorized);
        }
        if !status.is_success() {
            return Err(StoreError::ApiError(format!(
                "Failed to fetch listings: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        let records = json
            .get("listings")
            .and_then(|l| l.as_array())
            .ok_or_else(|| StoreError::InvalidResponse("Missing listings array".into()))?;

        let listings: Vec<Listing> = records
            .iter()
            .filter_map(|record| match serde_json::from_value(record.clone()) {
                Ok(listing) => Some(listing),
                Err(e) => {
                    tracing::warn!("Skipping malformed listing record: {}", e);
                    None
                }
            })
            .collect();

        tracing::debug!("Fetched {} listings ({} records)", listings.len(), records.len());

        Ok(listings)
    }

    /// Fetch a single listing by id
    pub async fn get_listing(&self, id: &str) -> Result<Listing, StoreError> {
        let path = format!("listings/{}", urlencoding::encode(id));
        let response = self
            .client
            .get(self.url(&path))
            .bearer_auth(&self.anon_key)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(format!("Listing {} not found", id)));
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(StoreError::Unauthorized);
        }
        if !status.is_success() {
            return Err(StoreError::ApiError(format!(
                "Failed to fetch listing {}: {}",
                id, status
            )));
        }

        let json: Value = response.json().await?;

        // Single-listing responses come wrapped as { "listing": {...} }
        let record = json.get("listing").unwrap_or(&json);

        serde_json::from_value(record.clone())
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse listing: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing_json(id: &str) -> String {
        format!(
            r#"{{
                "id": "{}",
                "title": "Reclaimed oak flooring",
                "category": "Lumber",
                "condition": "Good",
                "price": 450.0,
                "location": "Grand Rapids, MI",
                "postedDate": "2026-07-01T12:00:00Z"
            }}"#,
            id
        )
    }

    #[tokio::test]
    async fn test_fetch_listings_parses_batch() {
        let mut server = mockito::Server::new_async().await;
        let body = format!(r#"{{"listings": [{}, {}]}}"#, listing_json("a"), listing_json("b"));

        let mock = server
            .mock("GET", "/listings")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let client = StoreClient::new(server.url(), "anon".to_string(), 5);
        let listings = client.fetch_listings().await.unwrap();

        mock.assert_async().await;
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].id, "a");
    }

    #[tokio::test]
    async fn test_fetch_listings_skips_malformed_records() {
        let mut server = mockito::Server::new_async().await;
        let body = format!(
            r#"{{"listings": [{}, {{"id": "broken"}}]}}"#,
            listing_json("good")
        );

        let _mock = server
            .mock("GET", "/listings")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let client = StoreClient::new(server.url(), "anon".to_string(), 5);
        let listings = client.fetch_listings().await.unwrap();

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].id, "good");
    }

    #[tokio::test]
    async fn test_fetch_listings_unauthorized() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/listings")
            .with_status(401)
            .create_async()
            .await;

        let client = StoreClient::new(server.url(), "bad-key".to_string(), 5);
        let err = client.fetch_listings().await.unwrap_err();

        assert!(matches!(err, StoreError::Unauthorized));
    }

    #[tokio::test]
    async fn test_get_listing_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/listings/missing")
            .with_status(404)
            .create_async()
            .await;

        let client = StoreClient::new(server.url(), "anon".to_string(), 5);
        let err = client.get_listing("missing").await.unwrap_err();

        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
