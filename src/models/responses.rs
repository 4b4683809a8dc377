use serde::{Deserialize, Serialize};

use crate::models::domain::{Coordinates, RankedListing};

/// Response for the listings search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchListingsResponse {
    pub listings: Vec<RankedListing>,
    /// Listings that survived filtering, before the limit was applied
    #[serde(rename = "totalMatched")]
    pub total_matched: usize,
    /// Listings fetched from the store for this search
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for coordinate resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveLocationResponse {
    pub resolved: bool,
    /// None is the expected outcome for unknown prefixes, not an error
    pub coordinates: Option<Coordinates>,
}

/// Response for saved-search matching
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSearchMatchResponse {
    #[serde(rename = "matchEventId")]
    pub match_event_id: String,
    #[serde(rename = "listingIds")]
    pub listing_ids: Vec<String>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
