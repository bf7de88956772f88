use nannou::prelude::*;

use crate::models::{fractional_tile, tiles_across, GeoPoint, TileId, TILE_SIZE};

#[derive(Debug, Clone)]
pub struct Viewport {
    center: GeoPoint,
    zoom: u32,
    width: f32,
    height: f32,
    center_world: (f64, f64),
}

impl Viewport {
    pub fn new(center: GeoPoint, zoom: u32, width: f32, height: f32) -> Self {
        let center_world = world_px(center, zoom);
        Self {
            center,
            zoom,
            width,
            height,
            center_world,
        }
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    /// Screen position of a coordinate: y up, origin at the texture center.
    pub fn project(&self, point: GeoPoint) -> Point2 {
        let (wx, wy) = world_px(point, self.zoom);
        pt2(
            (wx - self.center_world.0) as f32,
            (self.center_world.1 - wy) as f32,
        )
    }

    /// Screen position of the center of a tile.
    pub fn tile_center(&self, tile: TileId) -> Point2 {
        let half = TILE_SIZE as f64 / 2.0;
        let wx = tile.x as f64 * TILE_SIZE as f64 + half;
        let wy = tile.y as f64 * TILE_SIZE as f64 + half;
        pt2(
            (wx - self.center_world.0) as f32,
            (self.center_world.1 - wy) as f32,
        )
    }

    /// Every tile overlapping the texture area. Columns wrap around the
    /// antimeridian; rows outside the Mercator square are dropped.
    pub fn visible_tiles(&self) -> Vec<TileId> {
        let n = tiles_across(self.zoom) as i64;
        let tile_size = TILE_SIZE as f64;
        let (cx, cy) = self.center_world;
        let half_w = self.width as f64 / 2.0;
        let half_h = self.height as f64 / 2.0;

        let x_min = ((cx - half_w) / tile_size).floor() as i64;
        let x_max = ((cx + half_w) / tile_size).floor() as i64;
        let y_min = ((cy - half_h) / tile_size).floor() as i64;
        let y_max = ((cy + half_h) / tile_size).floor() as i64;

        // At low zooms the world can be narrower than the texture; walk
        // each column once instead of repeating wrapped copies.
        let columns: Vec<u32> = if x_max - x_min + 1 >= n {
            (0..n as u32).collect()
        } else {
            (x_min..=x_max).map(|x| x.rem_euclid(n) as u32).collect()
        };

        let mut tiles = Vec::new();
        for y in y_min..=y_max {
            if y < 0 || y >= n {
                continue;
            }
            for &x in &columns {
                tiles.push(TileId::new(self.zoom, x, y as u32));
            }
        }
        tiles
    }
}

/// World pixel coordinates (y grows south) of a point at a zoom level.
pub fn world_px(point: GeoPoint, zoom: u32) -> (f64, f64) {
    let (tx, ty) = fractional_tile(point, zoom);
    (tx * TILE_SIZE as f64, ty * TILE_SIZE as f64)
}
