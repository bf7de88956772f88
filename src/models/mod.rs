pub mod geo;
pub mod route;
pub mod tile;

pub use geo::GeoPoint;
pub use route::Route;
pub use tile::{fractional_tile, tiles_across, TileId, MAX_LATITUDE, TILE_SIZE};
