use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{Coordinates, Listing};

/// Approximate city-center coordinates keyed by 3-digit zip prefix.
///
/// This is prefix-level geocoding: every zip sharing a prefix resolves to
/// the identical point. Coverage is the metro areas where Materia operates;
/// an unknown prefix is an expected miss, not an error.
static ZIP_PREFIX_COORDS: LazyLock<HashMap<&'static str, Coordinates>> = LazyLock::new(|| {
    let entries: &[(&str, f64, f64)] = &[
        // Northeast
        ("100", 40.7128, -74.0060),  // New York, NY
        ("112", 40.6782, -73.9442),  // Brooklyn, NY
        ("021", 42.3601, -71.0589),  // Boston, MA
        ("191", 39.9526, -75.1652),  // Philadelphia, PA
        ("152", 40.4406, -79.9959),  // Pittsburgh, PA
        ("200", 38.9072, -77.0369),  // Washington, DC
        ("212", 39.2904, -76.6122),  // Baltimore, MD
        // Midwest
        ("606", 41.8781, -87.6298),  // Chicago, IL
        ("482", 42.3314, -83.0458),  // Detroit, MI
        ("495", 42.9634, -85.6681),  // Grand Rapids, MI
        ("432", 39.9612, -82.9988),  // Columbus, OH
        ("441", 41.4993, -81.6944),  // Cleveland, OH
        ("462", 39.7684, -86.1581),  // Indianapolis, IN
        ("532", 43.0389, -87.9065),  // Milwaukee, WI
        ("554", 44.9778, -93.2650),  // Minneapolis, MN
        ("631", 38.6270, -90.1994),  // St. Louis, MO
        ("641", 39.0997, -94.5786),  // Kansas City, MO
        // South
        ("303", 33.7490, -84.3880),  // Atlanta, GA
        ("282", 35.2271, -80.8431),  // Charlotte, NC
        ("372", 36.1627, -86.7816),  // Nashville, TN
        ("331", 25.7617, -80.1918),  // Miami, FL
        ("336", 27.9506, -82.4572),  // Tampa, FL
        ("328", 28.5383, -81.3792),  // Orlando, FL
        ("701", 29.9511, -90.0715),  // New Orleans, LA
        ("770", 29.7604, -95.3698),  // Houston, TX
        ("752", 32.7767, -96.7970),  // Dallas, TX
        ("782", 29.4241, -98.4936),  // San Antonio, TX
        ("787", 30.2672, -97.7431),  // Austin, TX
        // West
        ("802", 39.7392, -104.9903), // Denver, CO
        ("841", 40.7608, -111.8910), // Salt Lake City, UT
        ("850", 33.4484, -112.0740), // Phoenix, AZ
        ("891", 36.1699, -115.1398), // Las Vegas, NV
        ("900", 34.0522, -118.2437), // Los Angeles, CA
        ("921", 32.7157, -117.1611), // San Diego, CA
        ("941", 37.7749, -122.4194), // San Francisco, CA
        ("958", 38.5816, -121.4944), // Sacramento, CA
        ("972", 45.5152, -122.6784), // Portland, OR
        ("981", 47.6062, -122.3321), // Seattle, WA
    ];

    entries
        .iter()
        .map(|&(prefix, lat, lng)| (prefix, Coordinates { lat, lng }))
        .collect()
});

/// Geographic centers per state, the fallback when no zip is available
static STATE_COORDS: LazyLock<HashMap<&'static str, Coordinates>> = LazyLock::new(|| {
    let entries: &[(&str, f64, f64)] = &[
        ("AL", 32.8067, -86.7911),
        ("AK", 61.3707, -152.4044),
        ("AZ", 33.7298, -111.4312),
        ("AR", 34.9697, -92.3731),
        ("CA", 36.1162, -119.6816),
        ("CO", 39.0598, -105.3111),
        ("CT", 41.5978, -72.7554),
        ("DE", 39.3185, -75.5071),
        ("DC", 38.8974, -77.0268),
        ("FL", 27.7663, -81.6868),
        ("GA", 33.0406, -83.6431),
        ("HI", 21.0943, -157.4983),
        ("ID", 44.2405, -114.4788),
        ("IL", 40.3495, -88.9861),
        ("IN", 39.8494, -86.2583),
        ("IA", 42.0115, -93.2105),
        ("KS", 38.5266, -96.7265),
        ("KY", 37.6681, -84.6701),
        ("LA", 31.1695, -91.8678),
        ("ME", 44.6939, -69.3819),
        ("MD", 39.0639, -76.8021),
        ("MA", 42.2302, -71.5301),
        ("MI", 43.3266, -84.5361),
        ("MN", 45.6945, -93.9002),
        ("MS", 32.7416, -89.6787),
        ("MO", 38.4561, -92.2884),
        ("MT", 46.9219, -110.4544),
        ("NE", 41.1254, -98.2681),
        ("NV", 38.3135, -117.0554),
        ("NH", 43.4525, -71.5639),
        ("NJ", 40.2989, -74.5210),
        ("NM", 34.8405, -106.2485),
        ("NY", 42.1657, -74.9481),
        ("NC", 35.6301, -79.8064),
        ("ND", 47.5289, -99.7840),
        ("OH", 40.3888, -82.7649),
        ("OK", 35.5653, -96.9289),
        ("OR", 44.5720, -122.0709),
        ("PA", 40.5908, -77.2098),
        ("RI", 41.6809, -71.5118),
        ("SC", 33.8569, -80.9450),
        ("SD", 44.2998, -99.4388),
        ("TN", 35.7478, -86.6923),
        ("TX", 31.0545, -97.5635),
        ("UT", 40.1500, -111.8624),
        ("VT", 44.0459, -72.7107),
        ("VA", 37.7693, -78.1700),
        ("WA", 47.4009, -121.4905),
        ("WV", 38.4912, -80.9545),
        ("WI", 44.2685, -89.6165),
        ("WY", 42.7560, -107.3025),
    ];

    entries
        .iter()
        .map(|&(state, lat, lng)| (state, Coordinates { lat, lng }))
        .collect()
});

/// Resolve a zip code to approximate coordinates by its 3-digit prefix.
///
/// Returns None for unknown prefixes or inputs shorter than 3 characters.
pub fn resolve_zip(zip: &str) -> Option<Coordinates> {
    let trimmed = zip.trim();
    let prefix = trimmed.get(..3)?;
    ZIP_PREFIX_COORDS.get(prefix).copied()
}

/// Parse the two-letter state code out of a "City, State" string
pub fn parse_state(location: &str) -> Option<String> {
    let (_, after) = location.split_once(',')?;
    let state = after.trim().to_uppercase();
    if state.is_empty() {
        None
    } else {
        Some(state)
    }
}

/// Resolve a listing location to approximate coordinates.
///
/// Prefers the zip code when one is supplied, then falls back to the state
/// parsed from the free-text location. None when neither resolves.
pub fn resolve_location(location: &str, zip: Option<&str>) -> Option<Coordinates> {
    if let Some(coords) = zip.and_then(resolve_zip) {
        return Some(coords);
    }

    let state = parse_state(location)?;
    STATE_COORDS.get(state.as_str()).copied()
}

/// Coordinates for a listing, preferring structured location data
pub fn listing_coordinates(listing: &Listing) -> Option<Coordinates> {
    resolve_location(&listing.location, listing.zip_code())
}

/// State code for a listing, preferring structured location data
pub fn listing_state(listing: &Listing) -> Option<String> {
    listing
        .location_data
        .as_ref()
        .and_then(|d| d.state.clone())
        .or_else(|| parse_state(&listing.location))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_zip_known_prefix() {
        let coords = resolve_zip("49503").expect("Grand Rapids prefix should resolve");
        assert!((coords.lat - 42.9634).abs() < 0.001);
        assert!((coords.lng - (-85.6681)).abs() < 0.001);
    }

    #[test]
    fn test_resolve_zip_prefix_granularity() {
        // Distinct zips sharing a prefix resolve to the identical point
        let a = resolve_zip("49503").unwrap();
        let b = resolve_zip("49599").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_resolve_zip_too_short() {
        assert!(resolve_zip("1").is_none());
        assert!(resolve_zip("49").is_none());
        assert!(resolve_zip("").is_none());
    }

    #[test]
    fn test_resolve_zip_unknown_prefix() {
        assert!(resolve_zip("00000").is_none());
    }

    #[test]
    fn test_resolve_zip_trims_whitespace() {
        assert!(resolve_zip("  49503  ").is_some());
    }

    #[test]
    fn test_parse_state() {
        assert_eq!(parse_state("Grand Rapids, MI").as_deref(), Some("MI"));
        assert_eq!(parse_state("Austin,tx").as_deref(), Some("TX"));
        assert!(parse_state("no comma here").is_none());
    }

    #[test]
    fn test_resolve_location_prefers_zip() {
        // Zip says Seattle even though the text says Michigan
        let coords = resolve_location("Grand Rapids, MI", Some("98101")).unwrap();
        assert!((coords.lat - 47.6062).abs() < 0.001);
    }

    #[test]
    fn test_resolve_location_state_fallback() {
        let coords = resolve_location("Somewhere, MI", None).unwrap();
        assert!((coords.lat - 43.3266).abs() < 0.001);

        // Unknown zip still falls through to the state table
        let coords = resolve_location("Somewhere, MI", Some("00000")).unwrap();
        assert!((coords.lat - 43.3266).abs() < 0.001);
    }

    #[test]
    fn test_resolve_location_unresolvable() {
        assert!(resolve_location("nowhere", None).is_none());
        assert!(resolve_location("Paris, France", None).is_none());
    }
}
