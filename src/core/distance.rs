/// Earth's radius in statute miles
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Great-circle distance between two points, in whole miles.
///
/// Haversine formula over WGS-84 degrees. The result is rounded to the
/// nearest mile; the prefix-level coordinates feeding it carry no more
/// precision than that. NaN inputs propagate through the arithmetic —
/// callers validate coordinates, this function never does.
#[inline]
pub fn distance_miles(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    (EARTH_RADIUS_MILES * c).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance_to_self() {
        let distance = distance_miles(42.9634, -85.6681, 42.9634, -85.6681);
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_symmetric() {
        let ab = distance_miles(40.7128, -74.0060, 34.0522, -118.2437);
        let ba = distance_miles(34.0522, -118.2437, 40.7128, -74.0060);
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_nyc_to_la() {
        // New York to Los Angeles is approximately 2445 miles
        let distance = distance_miles(40.7128, -74.0060, 34.0522, -118.2437);
        assert!((distance - 2445.0).abs() < 30.0, "expected ~2445mi, got {}", distance);
    }

    #[test]
    fn test_detroit_to_grand_rapids() {
        // Roughly 140 miles across Michigan
        let distance = distance_miles(42.3314, -83.0458, 42.9634, -85.6681);
        assert!(distance > 120.0 && distance < 160.0, "got {}", distance);
    }

    #[test]
    fn test_rounds_to_whole_miles() {
        let distance = distance_miles(40.7128, -74.0060, 40.7580, -73.9855);
        assert_eq!(distance, distance.round());
    }

    #[test]
    fn test_nan_propagates() {
        // Documented limitation: invalid input flows through, never panics
        assert!(distance_miles(f64::NAN, -74.0, 40.7, -74.0).is_nan());
    }
}
