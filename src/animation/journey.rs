// src/animation/journey.rs
//
// The vehicle journey manager: a precomputed straight-line path between
// the route endpoints, advanced at most one step per display frame.

use crate::config::AnimationConfig;
use crate::models::{GeoPoint, Route};

/// Marker pose published by one animation step.
#[derive(Debug, Clone, Copy)]
pub struct JourneyUpdate {
    pub position: GeoPoint,
    pub heading: f64,
}

/// Builds journeys from a route using the configured step count,
/// step pacing and icon heading offset.
pub struct JourneyEngine {
    pub config: AnimationConfig,
}

impl JourneyEngine {
    pub fn new(config: AnimationConfig) -> Self {
        Self { config }
    }

    /// The interpolated path: `steps` equally spaced points on the line
    /// from start to end. The start itself is not a step; the first point
    /// sits one interval past it and the last point is the end.
    pub fn generate_path(&self, start: GeoPoint, end: GeoPoint) -> Vec<GeoPoint> {
        let steps = self.config.steps;
        let mut points = Vec::with_capacity(steps);
        for i in 1..=steps {
            let t = i as f64 / steps as f64;
            points.push(GeoPoint::new(
                start.lat + (end.lat - start.lat) * t,
                start.lon + (end.lon - start.lon) * t,
            ));
        }
        points
    }

    pub fn build_journey(&self, route: &Route) -> Journey {
        Journey::new(
            route.start,
            self.generate_path(route.start, route.end),
            self.config.heading_offset_deg,
            self.config.frame_duration,
        )
    }
}

#[derive(Debug, Clone)]
pub struct Journey {
    points: Vec<GeoPoint>,
    heading_offset: f64,
    position: GeoPoint,
    heading: f64,
    current_step: usize,
    frame_timer: f32,
    frame_duration: f32,
}

impl Journey {
    pub fn new(
        start: GeoPoint,
        points: Vec<GeoPoint>,
        heading_offset: f64,
        frame_duration: f32,
    ) -> Self {
        Self {
            points,
            heading_offset,
            position: start,
            heading: 0.0,
            current_step: 0,
            frame_timer: 0.0,
            frame_duration,
        }
    }

    /// Frame gate: true when enough time has accumulated for the next step.
    /// A duration of zero passes every frame.
    pub fn update(&mut self, dt: f32) -> bool {
        self.frame_timer += dt;
        if self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            true
        } else {
            false
        }
    }

    /// Take one step: adopt the pose at the current index and move the
    /// index forward. Returns None once the path is exhausted, leaving the
    /// marker parked on the final point.
    pub fn advance(&mut self) -> Option<JourneyUpdate> {
        if self.current_step >= self.points.len() {
            return None;
        }
        let position = self.points[self.current_step];
        let next = (self.current_step + 1).min(self.points.len() - 1);
        let heading = heading_degrees(position, self.points[next]) + self.heading_offset;

        self.position = position;
        self.heading = heading;
        self.current_step += 1;
        Some(JourneyUpdate { position, heading })
    }

    pub fn is_complete(&self) -> bool {
        self.current_step >= self.points.len()
    }

    pub fn get_current_step(&self) -> usize {
        self.current_step
    }

    pub fn step_count(&self) -> usize {
        self.points.len()
    }

    pub fn position(&self) -> GeoPoint {
        self.position
    }

    /// Screen-style heading in degrees, clockwise from east, offset already
    /// applied. Zero until the first step is taken.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }
}

/// Planar bearing from one coordinate to another in degrees: the atan2 of
/// the latitude and longitude deltas. Not normalized; identical points
/// yield zero.
pub fn heading_degrees(from: GeoPoint, to: GeoPoint) -> f64 {
    (to.lat - from.lat).atan2(to.lon - from.lon).to_degrees()
}
