//! Read-only projections of the simulation state
//!
//! What a renderer needs (`positions`, `Viewport`) and what the stats log
//! needs (`metrics`). None of these mutate the state.

use super::states::{Body, BodyKind, SimulationState};

/// Everything a renderer needs to draw one body
#[derive(Debug, Clone, PartialEq)]
pub struct BodyView<'a> {
    pub kind: BodyKind,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: &'a str,
}

/// One row of the time series log
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub time: f64,
    pub distance: f64,
    pub speed: f64,
}

pub fn positions(state: &SimulationState) -> Vec<BodyView<'_>> {
    state
        .bodies
        .iter()
        .map(|b| BodyView {
            kind: b.kind(),
            x: b.x.x,
            y: b.x.y,
            radius: b.radius(),
            color: b.color(),
        })
        .collect()
}

/// Distance between `star` and `planet`, and the speed of `planet`
pub fn distance_and_speed(star: &Body, planet: &Body) -> (f64, f64) {
    ((planet.x - star.x).norm(), planet.speed())
}

/// The star and planet of a one-star-one-planet system, in that order
pub fn star_planet_pair(bodies: &[Body]) -> Option<(&Body, &Body)> {
    match bodies {
        [a, b] => match (a.kind(), b.kind()) {
            (BodyKind::Star, BodyKind::Planet) => Some((a, b)),
            (BodyKind::Planet, BodyKind::Star) => Some((b, a)),
            _ => None,
        },
        _ => None,
    }
}

/// Time, distance and speed; only defined for exactly one star and one planet
pub fn metrics(state: &SimulationState) -> Option<Metrics> {
    let (star, planet) = star_planet_pair(&state.bodies)?;
    let (distance, speed) = distance_and_speed(star, planet);
    Some(Metrics {
        time: state.t,
        distance,
        speed,
    })
}

/// Largest absolute coordinate over all bodies, `None` for an empty set
pub fn max_coordinate(bodies: &[Body]) -> Option<f64> {
    bodies
        .iter()
        .map(|b| b.x.x.abs().max(b.x.y.abs()))
        .reduce(f64::max)
}

/// Pixels per world unit so the farthest body lands halfway to the
/// nearer window edge
pub fn scale_factor(max_coordinate: f64, width: u32, height: u32) -> Option<f64> {
    if !(max_coordinate.is_finite() && max_coordinate > 0.0) {
        return None;
    }
    Some(0.5 * f64::from(width.min(height)) / max_coordinate)
}

/// World to screen mapping with the origin at the window center and y up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub scale: f64,
}

impl Viewport {
    /// Fit the viewport to the bodies. Falls back to a scale of 1 when every
    /// body sits at the origin.
    pub fn fit(bodies: &[Body], width: u32, height: u32) -> Self {
        let scale = max_coordinate(bodies)
            .and_then(|m| scale_factor(m, width, height))
            .unwrap_or(1.0);
        Self { width, height, scale }
    }

    pub fn to_screen(&self, x: f64, y: f64) -> (i64, i64) {
        let sx = (x * self.scale).round() as i64 + i64::from(self.width / 2);
        let sy = i64::from(self.height / 2) - (y * self.scale).round() as i64;
        (sx, sy)
    }
}
