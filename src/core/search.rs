use std::cmp::Ordering;

use crate::core::{distance::distance_miles, filters::matches_criteria, geo};
use crate::models::{Coordinates, FilterCriteria, Listing, RankedListing, SortKey};

/// Result of one search pass
#[derive(Debug)]
pub struct SearchResult {
    pub listings: Vec<RankedListing>,
    pub total_matched: usize,
    pub total_candidates: usize,
}

/// Result limits applied by the service layer
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            default_limit: 50,
            max_limit: 200,
        }
    }
}

/// Annotate a listing with its search-time data.
///
/// Distance resolution goes through the zip/state tables, so a listing with
/// no resolvable location yields None and is excluded whenever the distance
/// filter is active.
fn annotate(listing: Listing, user: Option<&Coordinates>) -> RankedListing {
    let distance = user.and_then(|u| {
        geo::listing_coordinates(&listing)
            .map(|c| distance_miles(u.lat, u.lng, c.lat, c.lng))
    });
    let effective_price = listing.effective_price();

    RankedListing {
        listing,
        distance_miles: distance,
        effective_price,
    }
}

fn sort_listings(listings: &mut [RankedListing], criteria: &FilterCriteria) {
    // No sort key leaves the input order untouched
    let Some(sort_by) = criteria.sort_by else {
        return;
    };

    match sort_by {
        SortKey::Newest => {
            listings.sort_by(|a, b| b.listing.posted_date.cmp(&a.listing.posted_date));
        }
        SortKey::PriceLow => {
            listings.sort_by(|a, b| {
                a.effective_price
                    .partial_cmp(&b.effective_price)
                    .unwrap_or(Ordering::Equal)
            });
        }
        SortKey::PriceHigh => {
            listings.sort_by(|a, b| {
                b.effective_price
                    .partial_cmp(&a.effective_price)
                    .unwrap_or(Ordering::Equal)
            });
        }
        SortKey::Location => {
            listings.sort_by(|a, b| a.listing.location.cmp(&b.listing.location));
        }
        SortKey::Distance => {
            // Without a user location this sort is unavailable; input order
            // is preserved. Unresolved distances go last.
            if criteria.user_coordinates.is_some() {
                listings.sort_by(|a, b| match (a.distance_miles, b.distance_miles) {
                    (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                });
            }
        }
    }
}

/// Filter and sort listings for display.
///
/// One annotation pass computes each listing's distance and effective price
/// up front, one conjunctive pass applies every active filter, and one
/// stable sort orders the survivors by the selected key. Empty input or
/// criteria that match nothing return an empty vector.
pub fn filter_and_sort(listings: Vec<Listing>, criteria: &FilterCriteria) -> Vec<RankedListing> {
    let user = criteria.user_coordinates.as_ref();

    let mut survivors: Vec<RankedListing> = listings
        .into_iter()
        .map(|listing| annotate(listing, user))
        .filter(|ranked| matches_criteria(ranked, criteria))
        .collect();

    sort_listings(&mut survivors, criteria);
    survivors
}

/// Search orchestrator for the HTTP layer.
///
/// Wraps the pure pipeline with configured result limits and candidate
/// accounting.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    limits: SearchLimits,
}

impl SearchEngine {
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }

    pub fn with_default_limits() -> Self {
        Self {
            limits: SearchLimits::default(),
        }
    }

    /// Clamp a requested limit into the configured bounds
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.limits.default_limit)
            .min(self.limits.max_limit)
    }

    /// Run the full pipeline and truncate to the capped limit
    pub fn search(
        &self,
        listings: Vec<Listing>,
        criteria: &FilterCriteria,
        limit: Option<usize>,
    ) -> SearchResult {
        let total_candidates = listings.len();
        let mut matched = filter_and_sort(listings, criteria);
        let total_matched = matched.len();

        matched.truncate(self.effective_limit(limit));

        SearchResult {
            listings: matched,
            total_matched,
            total_candidates,
        }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::with_default_limits()
    }
}
