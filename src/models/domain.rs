use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel values the browsing UI sends to disable a filter
pub const ALL_CATEGORIES: &str = "All Categories";
pub const ALL_CONDITIONS: &str = "All Conditions";
pub const ALL_STATES: &str = "All States";

/// Radius the UI labels "Nationwide". Numerically it is an ordinary upper
/// bound; no special-casing anywhere in the pipeline.
pub const NATIONWIDE_RADIUS_MILES: f64 = 1000.0;

/// A marketplace listing as stored by the platform backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub condition: String,
    #[serde(default)]
    pub price: f64,
    #[serde(rename = "bulkPricing", default)]
    pub bulk_pricing: Vec<BulkTier>,
    #[serde(rename = "tradeAvailable", default)]
    pub trade_available: bool,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "locationData", default)]
    pub location_data: Option<LocationData>,
    #[serde(rename = "postedDate")]
    pub posted_date: DateTime<Utc>,
    #[serde(rename = "sellerId", default)]
    pub seller_id: Option<String>,
    #[serde(rename = "imageUrls", default)]
    pub image_urls: Vec<String>,
}

impl Listing {
    /// The single price used for range filtering and price sorting.
    ///
    /// Bulk-priced listings use the first tier's per-unit price, not the
    /// cheapest tier. Non-finite or negative values collapse to 0.0.
    pub fn effective_price(&self) -> f64 {
        let raw = match self.bulk_pricing.first() {
            Some(tier) => tier.price,
            None => self.price,
        };
        if raw.is_finite() && raw >= 0.0 {
            raw
        } else {
            0.0
        }
    }

    /// Structured zip code, when the seller provided one
    pub fn zip_code(&self) -> Option<&str> {
        self.location_data.as_ref().and_then(|d| d.zip_code.as_deref())
    }
}

/// One tier of a bulk-pricing schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkTier {
    #[serde(rename = "minQuantity", default)]
    pub min_quantity: u32,
    pub price: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Structured location a seller may attach alongside the free-text field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationData {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(rename = "zipCode", default)]
    pub zip_code: Option<String>,
}

/// WGS-84 coordinate pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Sort orders offered by the listings browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Newest,
    PriceLow,
    PriceHigh,
    Location,
    Distance,
}

/// Filter criteria for one search, built from UI state per interaction.
///
/// Every field is optional; absence means "no constraint". The distance
/// filter needs both `user_coordinates` and `max_distance_miles` to be
/// active.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub search_text: Option<String>,
    pub category: Option<String>,
    pub condition: Option<String>,
    pub state: Option<String>,
    pub price_range: Option<(f64, f64)>,
    pub trade_only: bool,
    pub verified_only: bool,
    pub user_coordinates: Option<Coordinates>,
    pub max_distance_miles: Option<f64>,
    /// None preserves input order; the browser UI sends "newest" by default
    pub sort_by: Option<SortKey>,
}

impl FilterCriteria {
    /// The distance filter only applies when the user has a resolved
    /// location and picked a radius.
    pub fn distance_filter_active(&self) -> bool {
        self.user_coordinates.is_some() && self.max_distance_miles.is_some()
    }
}

/// A listing annotated with search-time data.
///
/// Annotation happens once, before filtering, so the distance is never
/// recomputed per comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedListing {
    #[serde(flatten)]
    pub listing: Listing,
    #[serde(rename = "distanceMiles", skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
    #[serde(rename = "effectivePrice")]
    pub effective_price: f64,
}
