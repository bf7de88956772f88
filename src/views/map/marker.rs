// src/views/map/marker.rs
//
// The three route markers: fixed start and end pins plus the rotating
// vehicle icon that rides the journey.

use nannou::prelude::*;
use std::error::Error;
use std::path::Path;

use crate::config::IconConfig;

/// Pin icons draw at this square size, anchored at their bottom tip.
const PIN_SIZE: f32 = 32.0;

pub struct MarkerIcons {
    start: wgpu::Texture,
    end: wgpu::Texture,
    vehicle: wgpu::Texture,
    vehicle_size: Vec2,
}

impl MarkerIcons {
    pub fn load(app: &App, assets_dir: &Path, icons: &IconConfig) -> Result<Self, Box<dyn Error>> {
        let start = wgpu::Texture::from_path(app, assets_dir.join(&icons.start))?;
        let end = wgpu::Texture::from_path(app, assets_dir.join(&icons.end))?;
        let vehicle = wgpu::Texture::from_path(app, assets_dir.join(&icons.vehicle))?;
        let [w, h] = vehicle.size();
        Ok(Self {
            start,
            end,
            vehicle,
            vehicle_size: vec2(w as f32, h as f32),
        })
    }

    pub fn draw_start(&self, draw: &Draw, position: Point2) {
        draw_pin(draw, &self.start, position);
    }

    pub fn draw_end(&self, draw: &Draw, position: Point2) {
        draw_pin(draw, &self.end, position);
    }

    /// Vehicle centered on the position and rotated to the heading.
    /// `heading_deg` is the screen-style clockwise angle published by the
    /// journey; nannou rotates counter-clockwise, hence the negation.
    pub fn draw_vehicle(&self, draw: &Draw, position: Point2, heading_deg: f32) {
        draw.texture(&self.vehicle)
            .x_y(position.x, position.y)
            .w_h(self.vehicle_size.x, self.vehicle_size.y)
            .rotate(-heading_deg.to_radians());
    }
}

/// Pins sit with their tip on the position, so the artwork is raised by
/// half its height.
fn draw_pin(draw: &Draw, texture: &wgpu::Texture, position: Point2) {
    draw.texture(texture)
        .x_y(position.x, position.y + PIN_SIZE / 2.0)
        .w_h(PIN_SIZE, PIN_SIZE);
}
