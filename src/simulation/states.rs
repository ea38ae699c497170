//! Core state types for the n-body simulation.
//!
//! - `Body` holds one star or planet (mass, position, velocity, accumulated force)
//! - `SimulationState` holds the ordered body set and the model time `t`
//!
//! Mass, radius, color and kind are fixed once a body is built; only the
//! kinematic fields change from tick to tick.

use std::fmt;

use nalgebra::Vector2;

use crate::error::{SimResult, SimulationError};

pub type NVec2 = Vector2<f64>;

/// Star or planet. Only matters for file round-tripping and the
/// star/planet distance-speed report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Star,
    Planet,
}

impl BodyKind {
    /// Match a record keyword, ignoring case
    pub fn from_keyword(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("star") {
            Some(BodyKind::Star)
        } else if word.eq_ignore_ascii_case("planet") {
            Some(BodyKind::Planet)
        } else {
            None
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            BodyKind::Star => "Star",
            BodyKind::Planet => "Planet",
        }
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    kind: BodyKind,
    radius: f64,   // display radius, not used by the physics
    color: String, // display color
    m: f64,        // mass
    pub x: NVec2,  // position
    pub v: NVec2,  // velocity
    pub f: NVec2,  // force from the last tick
}

impl Body {
    /// Build a fully valid body.
    ///
    /// Mass must be finite and strictly positive, every other number finite.
    /// The force starts at zero.
    pub fn new(
        kind: BodyKind,
        radius: f64,
        color: impl Into<String>,
        mass: f64,
        position: NVec2,
        velocity: NVec2,
    ) -> SimResult<Self> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimulationError::InvalidMass { mass });
        }
        if !radius.is_finite() {
            return Err(SimulationError::NonFiniteInput { field: "radius" });
        }
        if !position.iter().all(|c| c.is_finite()) {
            return Err(SimulationError::NonFiniteInput { field: "position" });
        }
        if !velocity.iter().all(|c| c.is_finite()) {
            return Err(SimulationError::NonFiniteInput { field: "velocity" });
        }

        Ok(Self {
            kind,
            radius,
            color: color.into(),
            m: mass,
            x: position,
            v: velocity,
            f: NVec2::zeros(),
        })
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn speed(&self) -> f64 {
        self.v.norm()
    }

    /// Linear momentum m * v
    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }
}

#[derive(Debug, Clone, Default)]
pub struct SimulationState {
    pub bodies: Vec<Body>, // ordered body set, order is stable across ticks
    pub t: f64,            // model time
}

impl SimulationState {
    /// Fresh state for a newly loaded scenario, model time reset to zero
    pub fn load(bodies: Vec<Body>) -> Self {
        tracing::info!("loaded scenario with {} bodies", bodies.len());
        Self { bodies, t: 0.0 }
    }

    pub fn model_time(&self) -> f64 {
        self.t
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }
}
