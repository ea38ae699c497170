pub mod config;
pub mod scenario_file;
pub mod stats;
