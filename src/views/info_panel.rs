// src/views/info_panel.rs
//
// The coordinate and speed strip across the top of the frame.

use nannou::prelude::*;

use crate::config::StyleConfig;
use crate::models::Route;

/**** Panel geometry in texture pixels ****/
const PANEL_MARGIN_TOP: f32 = 30.0;
const PANEL_HEIGHT: f32 = 110.0;
const PANEL_WIDTH_FRACTION: f32 = 0.8;
const COLUMN_PADDING: f32 = 20.0;

pub struct InfoPanel {
    background: Rgb,
    text_color: Rgb,
    speed_color: Rgb,
}

impl InfoPanel {
    pub fn new(style: &StyleConfig) -> Self {
        Self {
            background: color_from(style.panel_background),
            text_color: color_from(style.panel_text),
            speed_color: color_from(style.speed_text),
        }
    }

    /// Draws the panel across the top of a `width` x `height` frame:
    /// starting coordinates on the left, speed in the middle, ending
    /// coordinates on the right.
    pub fn draw(&self, draw: &Draw, route: &Route, width: f32, height: f32) {
        let panel_w = width * PANEL_WIDTH_FRACTION;
        let panel_y = height / 2.0 - PANEL_MARGIN_TOP - PANEL_HEIGHT / 2.0;

        draw.rect()
            .x_y(0.0, panel_y)
            .w_h(panel_w, PANEL_HEIGHT)
            .color(self.background);

        let column_w = panel_w / 3.0 - 2.0 * COLUMN_PADDING;
        let left_x = -panel_w / 2.0 + column_w / 2.0 + COLUMN_PADDING;
        let right_x = panel_w / 2.0 - column_w / 2.0 - COLUMN_PADDING;

        draw.text(&endpoint_label("Starting", route.start.lat, route.start.lon))
            .x_y(left_x, panel_y)
            .w_h(column_w, PANEL_HEIGHT)
            .left_justify()
            .font_size(18)
            .color(self.text_color);

        draw.text(&speed_label(route.speed_kmph))
            .x_y(0.0, panel_y)
            .w_h(column_w, PANEL_HEIGHT)
            .font_size(20)
            .color(self.speed_color);

        draw.text(&endpoint_label("Ending", route.end.lat, route.end.lon))
            .x_y(right_x, panel_y)
            .w_h(column_w, PANEL_HEIGHT)
            .left_justify()
            .font_size(18)
            .color(self.text_color);
    }
}

fn endpoint_label(title: &str, lat: f64, lon: f64) -> String {
    format!("{}\nLat: {}\nLong: {}", title, lat, lon)
}

fn speed_label(kmph: f32) -> String {
    format!("Speed: {} kmph", kmph)
}

fn color_from(c: [f32; 3]) -> Rgb {
    rgb(c[0], c[1], c[2])
}
