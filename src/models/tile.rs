// src/models/tile.rs
//
// Slippy-map tile addressing and the Web Mercator tile math behind it.

use std::f64::consts::PI;

use crate::models::GeoPoint;

/// Square tile edge in pixels, the web-map convention.
pub const TILE_SIZE: u32 = 256;

/// Latitude bound of the Web Mercator projection.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId {
    pub z: u32,
    pub x: u32,
    pub y: u32,
}

impl TileId {
    pub fn new(z: u32, x: u32, y: u32) -> Self {
        Self { z, x, y }
    }

    /// Tile containing the given coordinate at the given zoom.
    /// Columns wrap around the antimeridian, rows clamp at the poles.
    pub fn at(point: GeoPoint, zoom: u32) -> Self {
        let (tx, ty) = fractional_tile(point, zoom);
        let n = tiles_across(zoom) as i64;
        let x = (tx.floor() as i64).rem_euclid(n) as u32;
        let y = (ty.floor() as i64).clamp(0, n - 1) as u32;
        Self { z: zoom, x, y }
    }

    /// North-west corner of this tile.
    pub fn nw_corner(&self) -> GeoPoint {
        let n = tiles_across(self.z) as f64;
        let lon = self.x as f64 / n * 360.0 - 180.0;
        let lat = (PI * (1.0 - 2.0 * self.y as f64 / n)).sinh().atan().to_degrees();
        GeoPoint::new(lat, lon)
    }
}

/// Number of tiles along one axis at the given zoom.
pub fn tiles_across(zoom: u32) -> u32 {
    1 << zoom
}

/// Continuous (column, row) tile coordinates of a point at a zoom level.
/// The row axis grows southward.
pub fn fractional_tile(point: GeoPoint, zoom: u32) -> (f64, f64) {
    let n = tiles_across(zoom) as f64;
    let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (point.lon + 180.0) / 360.0 * n;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * n;
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_zero_is_a_single_tile() {
        assert_eq!(tiles_across(0), 1);
        let anywhere = GeoPoint::new(51.5074, -0.1278);
        assert_eq!(TileId::at(anywhere, 0), TileId::new(0, 0, 0));
    }

    #[test]
    fn test_tiles_across_doubles_per_zoom() {
        assert_eq!(tiles_across(1), 2);
        assert_eq!(tiles_across(12), 4096);
    }

    #[test]
    fn test_london_lands_on_known_tile() {
        let london = GeoPoint::new(51.5074, -0.1278);
        assert_eq!(TileId::at(london, 10), TileId::new(10, 511, 340));
    }

    #[test]
    fn test_column_wraps_across_antimeridian() {
        let east = GeoPoint::new(0.0, 181.0);
        let west = GeoPoint::new(0.0, -179.0);
        assert_eq!(TileId::at(east, 2), TileId::at(west, 2));
    }

    #[test]
    fn test_row_clamps_near_poles() {
        let n = tiles_across(4);
        assert_eq!(TileId::at(GeoPoint::new(89.9, 0.0), 4).y, 0);
        assert_eq!(TileId::at(GeoPoint::new(-89.9, 0.0), 4).y, n - 1);
    }

    #[test]
    fn test_nw_corner_inverts_fractional_tile() {
        let tile = TileId::new(10, 511, 340);
        let (fx, fy) = fractional_tile(tile.nw_corner(), 10);
        assert!((fx - 511.0).abs() < 1e-9, "fx {}", fx);
        assert!((fy - 340.0).abs() < 1e-9, "fy {}", fy);
    }

    #[test]
    fn test_nw_corner_is_north_west_of_interior_point() {
        let point = GeoPoint::new(22.1696, 91.4996);
        let corner = TileId::at(point, 12).nw_corner();
        assert!(corner.lat > point.lat);
        assert!(corner.lon < point.lon);
    }
}
