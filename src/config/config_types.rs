// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub route_file: String,
    pub assets_directory: String,
    pub tile_cache_directory: String,
}

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    pub texture_width: u32,
    pub texture_height: u32,
    pub texture_samples: u32,
}

#[derive(Debug, Deserialize)]
pub struct MapConfig {
    pub zoom: u32,                 // fixed slippy-map zoom level
    pub tile_url_template: String, // {s} subdomain, {z}/{x}/{y} tile coords
    pub tile_subdomains: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnimationConfig {
    pub steps: usize,            // interpolated points per journey
    pub frame_duration: f32,     // seconds between steps; 0 = every frame
    pub heading_offset_deg: f64, // icon artwork offset added to the bearing
}

#[derive(Debug, Deserialize)]
pub struct IconConfig {
    pub start: String,
    pub end: String,
    pub vehicle: String,
}

#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    pub map_background: [f32; 3],
    pub panel_background: [f32; 3],
    pub panel_text: [f32; 3],
    pub speed_text: [f32; 3],
}
