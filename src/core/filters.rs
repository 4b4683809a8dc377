use crate::core::geo;
use crate::models::{FilterCriteria, Listing, RankedListing, ALL_CATEGORIES, ALL_CONDITIONS, ALL_STATES};

/// Case-insensitive substring match against title or description
#[inline]
pub fn matches_text(listing: &Listing, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    listing.title.to_lowercase().contains(&needle)
        || listing.description.to_lowercase().contains(&needle)
}

/// Exact category match; the "All Categories" sentinel disables the filter
#[inline]
pub fn matches_category(listing: &Listing, category: &str) -> bool {
    category == ALL_CATEGORIES || listing.category == category
}

/// Exact condition match; the "All Conditions" sentinel disables the filter
#[inline]
pub fn matches_condition(listing: &Listing, condition: &str) -> bool {
    condition == ALL_CONDITIONS || listing.condition == condition
}

/// State match against structured data or the parsed location string
#[inline]
pub fn matches_state(listing: &Listing, state: &str) -> bool {
    if state == ALL_STATES {
        return true;
    }

    geo::listing_state(listing).as_deref() == Some(state)
}

/// Inclusive price range check on the effective price
#[inline]
pub fn within_price_range(effective_price: f64, range: (f64, f64)) -> bool {
    let (min, max) = range;
    effective_price >= min && effective_price <= max
}

/// Distance check; an unresolved distance never matches
#[inline]
pub fn within_distance(distance_miles: Option<f64>, max_miles: f64) -> bool {
    matches!(distance_miles, Some(d) if d <= max_miles)
}

/// Conjunctive pass over every active filter.
///
/// A listing must satisfy all of them; a criteria field left unset (or set
/// to its sentinel) constrains nothing. The distance predicate only applies
/// when both a user location and a radius are present.
pub fn matches_criteria(ranked: &RankedListing, criteria: &FilterCriteria) -> bool {
    let listing = &ranked.listing;

    if let Some(query) = criteria.search_text.as_deref() {
        if !matches_text(listing, query) {
            return false;
        }
    }

    if let Some(category) = criteria.category.as_deref() {
        if !matches_category(listing, category) {
            return false;
        }
    }

    if let Some(condition) = criteria.condition.as_deref() {
        if !matches_condition(listing, condition) {
            return false;
        }
    }

    if let Some(state) = criteria.state.as_deref() {
        if !matches_state(listing, state) {
            return false;
        }
    }

    if let Some(range) = criteria.price_range {
        if !within_price_range(ranked.effective_price, range) {
            return false;
        }
    }

    if criteria.trade_only && !listing.trade_available {
        return false;
    }

    if criteria.verified_only && !listing.verified {
        return false;
    }

    if criteria.distance_filter_active() {
        let max_miles = criteria.max_distance_miles.unwrap_or(f64::INFINITY);
        if !within_distance(ranked.distance_miles, max_miles) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn listing(title: &str, category: &str, condition: &str) -> Listing {
        Listing {
            id: "test".to_string(),
            title: title.to_string(),
            description: "Salvaged from a 1920s warehouse".to_string(),
            category: category.to_string(),
            condition: condition.to_string(),
            price: 100.0,
            bulk_pricing: vec![],
            trade_available: false,
            verified: false,
            location: "Grand Rapids, MI".to_string(),
            location_data: None,
            posted_date: Utc::now(),
            seller_id: None,
            image_urls: vec![],
        }
    }

    #[test]
    fn test_text_match_title_and_description() {
        let l = listing("Reclaimed Oak Beams", "Lumber", "Good");

        assert!(matches_text(&l, "oak"));
        assert!(matches_text(&l, "WAREHOUSE"));
        assert!(matches_text(&l, ""));
        assert!(matches_text(&l, "   "));
        assert!(!matches_text(&l, "granite"));
    }

    #[test]
    fn test_category_sentinel_disables_filter() {
        let l = listing("Beams", "Lumber", "Good");

        assert!(matches_category(&l, "Lumber"));
        assert!(matches_category(&l, ALL_CATEGORIES));
        assert!(!matches_category(&l, "Masonry"));
    }

    #[test]
    fn test_condition_sentinel_disables_filter() {
        let l = listing("Beams", "Lumber", "Good");

        assert!(matches_condition(&l, "Good"));
        assert!(matches_condition(&l, ALL_CONDITIONS));
        assert!(!matches_condition(&l, "Salvage"));
    }

    #[test]
    fn test_state_match_from_location_string() {
        let l = listing("Beams", "Lumber", "Good");

        assert!(matches_state(&l, "MI"));
        assert!(matches_state(&l, ALL_STATES));
        assert!(!matches_state(&l, "OH"));
    }

    #[test]
    fn test_price_range_inclusive() {
        assert!(within_price_range(200.0, (200.0, 1000.0)));
        assert!(within_price_range(1000.0, (200.0, 1000.0)));
        assert!(!within_price_range(199.99, (200.0, 1000.0)));
        assert!(!within_price_range(1000.01, (200.0, 1000.0)));
    }

    #[test]
    fn test_unresolved_distance_never_matches() {
        assert!(!within_distance(None, 10_000.0));
        assert!(within_distance(Some(50.0), 50.0));
        assert!(!within_distance(Some(51.0), 50.0));
    }
}
