// src/models/geo.rs
//
// Geographic coordinate type shared by the route model and the map math

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to another point in meters (haversine).
    pub fn distance_m(&self, other: &GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = GeoPoint::new(22.1696, 91.4996);
        assert_eq!(p.distance_m(&p), 0.0);
    }

    #[test]
    fn test_distance_one_degree_at_equator() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        let d = a.distance_m(&b);
        // One degree of longitude on the equator is about 111.2 km.
        assert!(d > 111_000.0 && d < 111_400.0, "got {}", d);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = GeoPoint::new(22.1696, 91.4996);
        let b = GeoPoint::new(22.2637, 91.7159);
        assert!((a.distance_m(&b) - b.distance_m(&a)).abs() < 1e-9);
    }

    #[test]
    fn test_deserializes_from_json_object() {
        let p: GeoPoint = serde_json::from_str(r#"{ "lat": 22.1696, "lon": 91.4996 }"#).unwrap();
        assert_eq!(p, GeoPoint::new(22.1696, 91.4996));
    }

    #[test]
    fn test_display_rounds_to_four_digits() {
        let p = GeoPoint::new(22.16961234, 91.5);
        assert_eq!(format!("{}", p), "(22.1696, 91.5000)");
    }
}
