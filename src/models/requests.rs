use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::SortKey;

/// Request to search listings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchListingsRequest {
    #[serde(alias = "search_text", rename = "searchText", default)]
    pub search_text: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    /// Inclusive [min, max] on effective price
    #[serde(alias = "price_range", rename = "priceRange", default)]
    pub price_range: Option<[f64; 2]>,
    #[serde(alias = "trade_only", rename = "tradeOnly", default)]
    pub trade_only: bool,
    #[serde(alias = "verified_only", rename = "verifiedOnly", default)]
    pub verified_only: bool,
    /// Requester's zip code, resolved server-side when no explicit
    /// coordinates are given
    #[serde(alias = "zip_code", rename = "zipCode", default)]
    pub zip_code: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(default)]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(default)]
    pub longitude: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(alias = "max_distance_miles", rename = "maxDistanceMiles", default)]
    pub max_distance_miles: Option<f64>,
    #[serde(alias = "sort_by", rename = "sortBy", default)]
    pub sort_by: Option<SortKey>,
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    50
}

/// Request to evaluate a saved search against current listings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchSavedSearchRequest {
    #[validate(nested)]
    #[serde(flatten)]
    pub criteria: SearchListingsRequest,
    /// Only listings posted strictly after this instant count as new matches
    #[serde(default)]
    pub since: Option<DateTime<Utc>>,
}

/// Query parameters for coordinate resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveLocationQuery {
    #[serde(alias = "zip_code", rename = "zipCode", default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}
