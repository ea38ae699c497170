//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `RunConfig` plus the bodies read from a scenario file and
//! produces the runtime bundle:
//! - numerical parameters (`Parameters`)
//! - system state (`SimulationState` with bodies at t = 0)
//! - active force set (`ForceSet`)
//!
//! Loading a new scenario replaces the whole bundle.

use std::path::Path;

use crate::configuration::config::RunConfig;
use crate::configuration::scenario_file::read_scenario_file;
use crate::error::SimResult;
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::integrator::step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, SimulationState};

pub struct Scenario {
    pub parameters: Parameters,
    pub state: SimulationState,
    pub forces: ForceSet,
}

impl Scenario {
    /// Bodies plus parameters; registers Newtonian gravity as the only force
    pub fn new(bodies: Vec<Body>, parameters: Parameters) -> Self {
        let forces = ForceSet::new().with(NewtonianGravity {
            G: parameters.G,
            bearing: parameters.bearing,
        });

        Self {
            parameters,
            state: SimulationState::load(bodies),
            forces,
        }
    }

    pub fn build_scenario(bodies: Vec<Body>, cfg: &RunConfig) -> Self {
        let parameters = Parameters {
            G: cfg.parameters.G,
            bearing: cfg.engine.bearing,
        };
        Self::new(bodies, parameters)
    }

    pub fn from_file(path: impl AsRef<Path>, cfg: &RunConfig) -> SimResult<Self> {
        let bodies = read_scenario_file(path)?;
        Ok(Self::build_scenario(bodies, cfg))
    }

    /// Advance one tick; see [`step`]
    pub fn step(&mut self, dt: f64) -> SimResult<()> {
        step(&mut self.state, &self.forces, dt)
    }
}
