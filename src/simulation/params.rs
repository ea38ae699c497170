//! Physical parameters for the force law
//!
//! `Parameters` holds the gravitational constant and the policy used to
//! compute the bearing between two bodies.

use serde::Deserialize;

use super::states::NVec2;

/// Newton's gravitational constant in SI units
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67408e-11;

/// Substituted for `|dx|` by the legacy bearing when `dx == 0`
pub const LEGACY_BEARING_EPSILON: f64 = 1e-10;

/// How the angle from one body to another is computed
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BearingMode {
    /// Direction taken straight from the displacement, the same as
    /// `atan2(dy, dx)` and exact for every direction including `dx == 0`
    #[default]
    #[serde(rename = "exact")]
    Exact,

    /// `atan(dy / |dx|)` mirrored for `dx < 0`, with an epsilon in place of
    /// `|dx|` when it is exactly zero. Kept for parity with older runs.
    #[serde(rename = "legacy")]
    Legacy,
}

impl BearingMode {
    /// Unit vector (cos φ, sin φ) pointing along the displacement `(dx, dy)`.
    ///
    /// `Exact` divides by the distance directly, so axis-aligned pairs get an
    /// exactly zero cross component. A zero displacement gives NaN.
    pub fn direction(self, dx: f64, dy: f64) -> NVec2 {
        match self {
            BearingMode::Exact => {
                let r = dx.hypot(dy);
                NVec2::new(dx / r, dy / r)
            }
            BearingMode::Legacy => {
                let phi = legacy_angle(dx, dy);
                NVec2::new(phi.cos(), phi.sin())
            }
        }
    }
}

/// `atan(dy / |dx|)`, mirrored to `π - φ` when `dx < 0`
pub fn legacy_angle(dx: f64, dy: f64) -> f64 {
    let run = if dx == 0.0 { dx.abs() + LEGACY_BEARING_EPSILON } else { dx.abs() };
    let phi = (dy / run).atan();
    if dx < 0.0 {
        std::f64::consts::PI - phi
    } else {
        phi
    }
}

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64,               // gravitational constant
    pub bearing: BearingMode, // angle policy for the force direction
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: GRAVITATIONAL_CONSTANT,
            bearing: BearingMode::Exact,
        }
    }
}
