pub mod tile_fetcher;
pub mod tile_source;

pub use tile_fetcher::{FetchedTile, TileFetcher};
pub use tile_source::TileSource;
