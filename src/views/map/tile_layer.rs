// src/views/map/tile_layer.rs
//
// The base map: keeps a GPU texture for every tile that has arrived and
// draws the ones the viewport can see. Tiles are never evicted; a fixed
// viewport only ever touches one screenful of them.

use nannou::prelude::*;
use std::collections::{HashMap, HashSet};

use crate::models::{TileId, TILE_SIZE};
use crate::services::{FetchedTile, TileFetcher};
use crate::views::map::Viewport;

#[derive(Default)]
pub struct TileLayer {
    textures: HashMap<TileId, wgpu::Texture>,
    requested: HashSet<TileId>,
}

impl TileLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the fetcher for whatever the viewport is missing and turn
    /// finished fetches into textures.
    pub fn update(&mut self, app: &App, fetcher: &mut TileFetcher, viewport: &Viewport) {
        for tile in viewport.visible_tiles() {
            if !self.textures.contains_key(&tile) && !self.requested.contains(&tile) {
                fetcher.request(tile);
                self.requested.insert(tile);
            }
        }

        for FetchedTile { id, image } in fetcher.poll_ready() {
            let texture = wgpu::Texture::from_image(app, &image);
            self.textures.insert(id, texture);
        }
    }

    pub fn draw(&self, draw: &Draw, viewport: &Viewport) {
        for tile in viewport.visible_tiles() {
            if let Some(texture) = self.textures.get(&tile) {
                let center = viewport.tile_center(tile);
                draw.texture(texture)
                    .x_y(center.x, center.y)
                    .w_h(TILE_SIZE as f32, TILE_SIZE as f32);
            }
        }
    }

    pub fn loaded_count(&self) -> usize {
        self.textures.len()
    }

    pub fn requested_count(&self) -> usize {
        self.requested.len()
    }
}
