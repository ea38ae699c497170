pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::{SimResult, SimulationError};

pub use simulation::states::{Body, BodyKind, SimulationState, NVec2};
pub use simulation::params::{Parameters, BearingMode, GRAVITATIONAL_CONSTANT};
pub use simulation::forces::{ForceSet, ForceTerm, NewtonianGravity};
pub use simulation::integrator::{integrate, step};
pub use simulation::metrics::{positions, metrics, distance_and_speed, max_coordinate, scale_factor, BodyView, Metrics, Viewport};
pub use simulation::time_scale::TimeScale;
pub use simulation::scenario::Scenario;
pub use simulation::session::Session;

pub use configuration::config::{RunConfig, EngineConfig, ParametersConfig, ViewportConfig, OutputConfig};
pub use configuration::scenario_file::{read_scenario, read_scenario_str, read_scenario_file, write_scenario, write_scenario_file, format_record};
pub use configuration::stats::{StatsLog, read_stats, read_stats_file};

pub use benchmark::benchmark::{bench_gravity, bench_step_curve};
