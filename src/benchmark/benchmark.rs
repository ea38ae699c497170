use std::time::Instant;

use crate::simulation::forces::{ForceSet, ForceTerm, NewtonianGravity};
use crate::simulation::integrator::step;
use crate::simulation::params::{BearingMode, GRAVITATIONAL_CONSTANT};
use crate::simulation::states::{Body, BodyKind, NVec2, SimulationState};

/// Helper to build a deterministic system of size `n`
fn make_state(n: usize) -> SimulationState {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new((i_f * 0.37).sin() * 5.0e9, (i_f * 0.13).cos() * 5.0e9);
        let kind = if i == 0 { BodyKind::Star } else { BodyKind::Planet };

        // masses are positive and positions finite, construction cannot fail
        if let Ok(b) = Body::new(kind, 1.0, "white", 1.0e24, x, NVec2::zeros()) {
            bodies.push(b);
        }
    }

    SimulationState::load(bodies)
}

pub fn bench_gravity() {
    let ns = [100, 200, 400, 800, 1600, 3200];

    for n in ns {
        let sys = make_state(n);
        let mut out = vec![NVec2::zeros(); n];

        let exact = NewtonianGravity { G: GRAVITATIONAL_CONSTANT, bearing: BearingMode::Exact };
        let legacy = NewtonianGravity { G: GRAVITATIONAL_CONSTANT, bearing: BearingMode::Legacy };

        // Warm up
        exact.force(&sys.bodies, &mut out);

        let t0 = Instant::now();
        exact.force(&sys.bodies, &mut out);
        let dt_exact = t0.elapsed().as_secs_f64();

        let t1 = Instant::now();
        legacy.force(&sys.bodies, &mut out);
        let dt_legacy = t1.elapsed().as_secs_f64();

        println!("N = {n:5}, exact = {:8.6} s, legacy = {:8.6} s", dt_exact, dt_legacy);
    }
}

/// Time full steps (force + integrate + commit)
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("N,step_ms");

    for n in (100..=2000).step_by(100) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 500 { 5 } else { 1 };

        let mut sys = make_state(n);
        let forces = ForceSet::new().with(NewtonianGravity {
            G: GRAVITATIONAL_CONSTANT,
            bearing: BearingMode::Exact,
        });

        let t0 = Instant::now();
        for _ in 0..steps {
            if let Err(e) = step(&mut sys, &forces, 1.0) {
                println!("# N = {n}: {e}");
                break;
            }
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
