//! Error types for the simulation core

use thiserror::Error;

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimulationError>;

/// Errors raised while loading scenarios or advancing the simulation
#[derive(Error, Debug)]
pub enum SimulationError {
    /// A scenario record had the wrong number of fields or a bad number
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("mass must be positive, got {mass}")]
    InvalidMass { mass: f64 },

    #[error("{field} must be finite")]
    NonFiniteInput { field: &'static str },

    /// A force, velocity or position became NaN or infinite during a step
    #[error("body {body}: {quantity} is not finite")]
    NonFiniteState { body: usize, quantity: &'static str },

    #[error("time step must be finite and non-negative, got {dt}")]
    InvalidTimeStep { dt: f64 },

    #[error("time scale must be finite and non-negative, got {rate}")]
    InvalidTimeScale { rate: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),
}
