//! Force contributors for the n-body engine
//!
//! Forces are always evaluated against a read-only view of the bodies taken
//! at the start of a tick. Nothing in here moves a body.

use crate::simulation::params::BearingMode;
use crate::simulation::states::{Body, NVec2};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The force laws active in a scenario. Every registered [`ForceTerm`]
/// reads the same snapshot and adds into the same per-body buffer.
pub struct ForceSet {
    terms: Vec<Box<dyn ForceTerm + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: ForceTerm + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Clear `out`, then let every term add its share, so `out[i]` ends up as
    /// the net force on `snapshot[i]`
    pub fn accumulate_forces(&self, snapshot: &[Body], out: &mut [NVec2]) {
        debug_assert_eq!(snapshot.len(), out.len());
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        for term in &self.terms {
            term.force(snapshot, out);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// A force law evaluated against a frozen set of bodies.
/// `out` is parallel to `snapshot` and already holds other terms' forces,
/// so implementations add to it rather than overwrite.
pub trait ForceTerm {
    fn force(&self, snapshot: &[Body], out: &mut [NVec2]);
}

/// Plain pairwise Newtonian gravity, no softening.
///
/// Coincident bodies produce an infinite or NaN force; the step detects
/// that and refuses to commit.
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64,
    pub bearing: BearingMode,
}

impl NewtonianGravity {
    /// Net force on body `i` from every other body in `snapshot`
    pub fn force_on(&self, i: usize, snapshot: &[Body]) -> NVec2 {
        let bi = &snapshot[i];
        let mut total = NVec2::zeros();

        for (j, bj) in snapshot.iter().enumerate() {
            if j == i {
                continue;
            }
            // displacement from i towards j
            let d = bj.x - bi.x;
            let r = (d.x * d.x + d.y * d.y).sqrt();

            let magnitude = self.G * bi.mass() * bj.mass() / (r * r);
            total += magnitude * self.bearing.direction(d.x, d.y);
        }

        total
    }
}

impl ForceTerm for NewtonianGravity {
    #[cfg(not(feature = "parallel"))]
    fn force(&self, snapshot: &[Body], out: &mut [NVec2]) {
        for (i, f) in out.iter_mut().enumerate() {
            *f += self.force_on(i, snapshot);
        }
    }

    // Rows are independent and only read the shared snapshot
    #[cfg(feature = "parallel")]
    fn force(&self, snapshot: &[Body], out: &mut [NVec2]) {
        out.par_iter_mut()
            .enumerate()
            .for_each(|(i, f)| *f += self.force_on(i, snapshot));
    }
}
