//! Configuration types for a headless simulation run, loaded from YAML.
//!
//! A run configuration consists of:
//!
//! - [`EngineConfig`]     – force law options (bearing policy)
//! - [`ParametersConfig`] – physical constant and time stepping
//! - [`ViewportConfig`]   – window size used for the display scale
//! - [`OutputConfig`]     – where the stats log and final dump go
//! - [`RunConfig`]        – top-level wrapper
//!
//! Every field has a default, so an empty file (or no file) is a valid config.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   bearing: "exact"        # or "legacy"
//!
//! parameters:
//!   G: 6.67408e-11          # gravitational constant
//!   time_scale: 1.0e6       # model seconds per wall-clock second
//!   frame_interval: 0.0166667   # wall-clock seconds per tick
//!   ticks: 600              # number of ticks to run
//!
//! viewport:
//!   width: 1000
//!   height: 800
//!
//! output:
//!   stats: "stats.txt"      # time series log, null to disable
//!   dump: "final.txt"       # full state after the last tick, null to skip
//! ```
//!
//! The scenario builder maps this onto the runtime `Parameters` and `TimeScale`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SimResult;
use crate::simulation::params::{BearingMode, GRAVITATIONAL_CONSTANT};
use crate::simulation::time_scale::DEFAULT_RATE;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub bearing: BearingMode, // `exact` uses atan2, `legacy` reproduces the epsilon bearing
}

#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64,              // gravitational constant
    pub time_scale: f64,     // model seconds per wall-clock second
    pub frame_interval: f64, // wall-clock seconds between ticks
    pub ticks: u64,          // ticks to run
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: GRAVITATIONAL_CONSTANT,
            time_scale: DEFAULT_RATE,
            frame_interval: 1.0 / 60.0,
            ticks: 600,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { width: 1000, height: 800 }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct OutputConfig {
    pub stats: Option<PathBuf>, // time series log
    pub dump: Option<PathBuf>,  // full-state dump after the run
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            stats: Some(PathBuf::from("stats.txt")),
            dump: None,
        }
    }
}

/// Top-level run configuration
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct RunConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub viewport: ViewportConfig,
    pub output: OutputConfig,
}

impl RunConfig {
    pub fn from_yaml_str(text: &str) -> SimResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> SimResult<Self> {
        let mut text = String::new();
        BufReader::new(File::open(path)?).read_to_string(&mut text)?;
        Self::from_yaml_str(&text)
    }
}
