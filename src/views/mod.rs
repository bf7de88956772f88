// src/views/mod.rs

pub mod info_panel;
pub mod map;

pub use info_panel::InfoPanel;
pub use map::{MarkerIcons, TileLayer, Viewport};
