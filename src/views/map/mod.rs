// src/views/map/mod.rs

pub mod marker;
pub mod tile_layer;
pub mod viewport;

pub use marker::MarkerIcons;
pub use tile_layer::TileLayer;
pub use viewport::Viewport;
