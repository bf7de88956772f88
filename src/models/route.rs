// src/models/route.rs
// the JSON-based route description

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::models::GeoPoint;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub name: String,
    pub start: GeoPoint,
    pub end: GeoPoint,
    #[serde(rename = "speedKmph")]
    pub speed_kmph: f32,
}

impl Route {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(&path)?;
        let route: Route = serde_json::from_str(&content)?;
        println!(
            "Loaded route \"{}\": {} -> {} ({:.1} km)",
            route.name,
            route.start,
            route.end,
            route.length_m() / 1000.0
        );
        Ok(route)
    }

    /// Straight-line length of the route in meters.
    pub fn length_m(&self) -> f64 {
        self.start.distance_m(&self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUTE_JSON: &str = r#"{
        "name": "Chattogram outer anchorage",
        "start": { "lat": 22.1696, "lon": 91.4996 },
        "end": { "lat": 22.2637, "lon": 91.7159 },
        "speedKmph": 20.0
    }"#;

    #[test]
    fn test_parses_route_json() {
        let route: Route = serde_json::from_str(ROUTE_JSON).unwrap();
        assert_eq!(route.name, "Chattogram outer anchorage");
        assert_eq!(route.start, GeoPoint::new(22.1696, 91.4996));
        assert_eq!(route.end, GeoPoint::new(22.2637, 91.7159));
        assert_eq!(route.speed_kmph, 20.0);
    }

    #[test]
    fn test_length_is_plausible() {
        let route: Route = serde_json::from_str(ROUTE_JSON).unwrap();
        let km = route.length_m() / 1000.0;
        assert!(km > 20.0 && km < 30.0, "got {} km", km);
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let result: Result<Route, _> =
            serde_json::from_str(r#"{ "name": "x", "start": { "lat": 0.0, "lon": 0.0 } }"#);
        assert!(result.is_err());
    }
}
