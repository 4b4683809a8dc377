use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{geo, SearchEngine};
use crate::models::{
    Coordinates, ErrorResponse, FilterCriteria, HealthResponse, MatchSavedSearchRequest,
    ResolveLocationQuery, ResolveLocationResponse, SavedSearchMatchResponse,
    SearchListingsRequest, SearchListingsResponse,
};
use crate::services::StoreClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<StoreClient>,
    pub engine: SearchEngine,
    pub debug_echo: bool,
}

/// Configure all listing-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/listings/search", web::post().to(search_listings))
        .route("/geo/resolve", web::get().to(resolve_location))
        .route("/searches/match", web::post().to(match_saved_search))
        .route("/debug/echo", web::post().to(debug_echo));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Echo endpoint for client debugging, enabled only by configuration
async fn debug_echo(
    state: web::Data<AppState>,
    body: web::Bytes,
    req: actix_web::HttpRequest,
) -> impl Responder {
    if !state.debug_echo {
        return HttpResponse::NotFound().finish();
    }

    let body_str = String::from_utf8_lossy(&body);
    tracing::info!("DEBUG echo - path: {}, method: {}, body: {}", req.path(), req.method(), body_str);
    HttpResponse::Ok().json(serde_json::json!({
        "path": req.path(),
        "method": req.method().to_string(),
        "body": body_str,
    }))
}

/// The requester's location, in preference order: explicit coordinates,
/// then a server-resolved zip code, then none (distance features off)
fn requester_coordinates(req: &SearchListingsRequest) -> Option<Coordinates> {
    match (req.latitude, req.longitude) {
        (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
        _ => req.zip_code.as_deref().and_then(geo::resolve_zip),
    }
}

fn build_criteria(req: &SearchListingsRequest) -> FilterCriteria {
    FilterCriteria {
        search_text: req.search_text.clone(),
        category: req.category.clone(),
        condition: req.condition.clone(),
        state: req.state.clone(),
        price_range: req.price_range.map(|[min, max]| (min, max)),
        trade_only: req.trade_only,
        verified_only: req.verified_only,
        user_coordinates: requester_coordinates(req),
        max_distance_miles: req.max_distance_miles,
        sort_by: req.sort_by,
    }
}

/// Search listings endpoint
///
/// POST /api/v1/listings/search
///
/// Request body:
/// ```json
/// {
///   "searchText": "oak",
///   "category": "Lumber",
///   "priceRange": [0, 500],
///   "zipCode": "49503",
///   "maxDistanceMiles": 50,
///   "sortBy": "distance",
///   "limit": 50
/// }
/// ```
async fn search_listings(
    state: web::Data<AppState>,
    req: web::Json<SearchListingsRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let criteria = build_criteria(&req);

    if req.zip_code.is_some() && criteria.user_coordinates.is_none() {
        // An unresolvable zip is an expected outcome; the search proceeds
        // with distance features disabled
        tracing::debug!("Could not resolve requester zip, distance filter off");
    }

    // Fetch the candidate set from the store
    let candidates = match state.store.fetch_listings().await {
        Ok(listings) => listings,
        Err(e) => {
            tracing::error!("Failed to fetch listings from store: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch listings".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    tracing::debug!("Fetched {} candidate listings", candidates.len());

    // Run the filter/sort pipeline
    let result = state
        .engine
        .search(candidates, &criteria, Some(req.limit as usize));

    tracing::info!(
        "Returning {} listings ({} matched of {} candidates)",
        result.listings.len(),
        result.total_matched,
        result.total_candidates
    );

    HttpResponse::Ok().json(SearchListingsResponse {
        listings: result.listings,
        total_matched: result.total_matched,
        total_candidates: result.total_candidates,
    })
}

/// Coordinate resolution endpoint
///
/// GET /api/v1/geo/resolve?zipCode=49503
/// GET /api/v1/geo/resolve?location=Grand%20Rapids%2C%20MI
///
/// Resolution failures are a first-class outcome: the response carries
/// `resolved: false` with a 200 status, never an error.
async fn resolve_location(query: web::Query<ResolveLocationQuery>) -> impl Responder {
    let coordinates = match (query.zip_code.as_deref(), query.location.as_deref()) {
        (Some(zip), location) => geo::resolve_location(location.unwrap_or(""), Some(zip)),
        (None, Some(location)) => geo::resolve_location(location, None),
        (None, None) => None,
    };

    HttpResponse::Ok().json(ResolveLocationResponse {
        resolved: coordinates.is_some(),
        coordinates,
    })
}

/// Saved-search matching endpoint
///
/// POST /api/v1/searches/match
///
/// Runs the saved criteria over the current listing set and returns the ids
/// of listings posted after `since` that match, for alert delivery.
async fn match_saved_search(
    state: web::Data<AppState>,
    req: web::Json<MatchSavedSearchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let criteria = build_criteria(&req.criteria);

    let candidates = match state.store.fetch_listings().await {
        Ok(listings) => listings,
        Err(e) => {
            tracing::error!("Failed to fetch listings for saved search: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch listings".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let matched = crate::core::filter_and_sort(candidates, &criteria);

    let listing_ids: Vec<String> = matched
        .into_iter()
        .filter(|ranked| match req.since {
            Some(since) => ranked.listing.posted_date > since,
            None => true,
        })
        .map(|ranked| ranked.listing.id)
        .collect();

    let count = listing_ids.len();

    tracing::debug!("Saved search matched {} new listings", count);

    HttpResponse::Ok().json(SavedSearchMatchResponse {
        match_event_id: uuid::Uuid::new_v4().to_string(),
        listing_ids,
        count,
    })
}
