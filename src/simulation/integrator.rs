//! Fixed-step time integration for the n-body system
//!
//! One tick is two phases: every force is computed from the positions at the
//! start of the tick, then every body is moved with its own force. The
//! advanced bodies are built in a scratch copy and only replace the live
//! state (together with the time increment) once all of them are finite.

use super::forces::ForceSet;
use super::states::{Body, NVec2, SimulationState};
use crate::error::{SimResult, SimulationError};

/// Advance one body by `dt` using its accumulated force.
///
/// Velocity gets the full `a * dt` kick, position uses the velocity from
/// before the kick plus the constant-acceleration term:
/// - v' = v + a dt
/// - x' = x + v dt + a dt^2 / 2
pub fn integrate(body: &mut Body, dt: f64) {
    let a = body.f / body.mass();
    let v_old = body.v;

    body.v = v_old + a * dt;
    // a dt first, so a zero acceleration never meets an overflowed dt^2
    body.x += v_old * dt + (a * dt) * (dt / 2.0);
}

/// Advance the whole system by one tick of length `dt`.
///
/// On error `state` is left exactly as it was.
pub fn step(state: &mut SimulationState, forces: &ForceSet, dt: f64) -> SimResult<()> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(SimulationError::InvalidTimeStep { dt });
    }

    let n = state.bodies.len();

    // Phase 1: forces from the start-of-tick snapshot
    let mut f = vec![NVec2::zeros(); n];
    forces.accumulate_forces(&state.bodies, &mut f);

    if let Some(i) = f.iter().position(|fi| !is_finite(fi)) {
        return Err(SimulationError::NonFiniteState { body: i, quantity: "force" });
    }

    // Phase 2: integrate into a scratch copy
    let mut next = state.bodies.clone();
    for (i, (b, fi)) in next.iter_mut().zip(f.iter()).enumerate() {
        b.f = *fi;
        integrate(b, dt);

        if !is_finite(&b.v) {
            return Err(SimulationError::NonFiniteState { body: i, quantity: "velocity" });
        }
        if !is_finite(&b.x) {
            return Err(SimulationError::NonFiniteState { body: i, quantity: "position" });
        }
    }

    state.bodies = next;
    state.t += dt;

    tracing::debug!("step: t = {:.6e}, dt = {:.6e}", state.t, dt);
    Ok(())
}

fn is_finite(v: &NVec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}
