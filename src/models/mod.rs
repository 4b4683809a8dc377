// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BulkTier, Coordinates, FilterCriteria, Listing, LocationData, RankedListing, SortKey,
    ALL_CATEGORIES, ALL_CONDITIONS, ALL_STATES, NATIONWIDE_RADIUS_MILES,
};
pub use requests::{MatchSavedSearchRequest, ResolveLocationQuery, SearchListingsRequest};
pub use responses::{
    ErrorResponse, HealthResponse, ResolveLocationResponse, SavedSearchMatchResponse,
    SearchListingsResponse,
};
