pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod metrics;
pub mod time_scale;
pub mod scenario;
pub mod session;
