//! Wall-clock to model-time conversion
//!
//! The driver measures real elapsed seconds between ticks and multiplies
//! them by a rate to get the model `dt`.

use crate::error::{SimResult, SimulationError};

/// Default rate: model seconds per wall-clock second
pub const DEFAULT_RATE: f64 = 1.0e6;

/// Slider range used by the interactive front end
pub const SLIDER_MIN: f64 = -10.0;
pub const SLIDER_MAX: f64 = 10.0;

#[derive(Debug, Clone)]
pub struct TimeScale {
    /// Model seconds per wall-clock second
    rate: f64,
    paused: bool,
}

impl TimeScale {
    pub fn new(rate: f64) -> SimResult<Self> {
        let mut ts = Self::default();
        ts.set_rate(rate)?;
        Ok(ts)
    }

    /// Exponential slider mapping: 500000 * 1.35^value, value clamped to the slider range
    pub fn from_slider(value: f64) -> Self {
        Self { rate: Self::slider_to_rate(value), paused: false }
    }

    pub fn slider_to_rate(value: f64) -> f64 {
        500_000.0 * 1.35_f64.powf(value.clamp(SLIDER_MIN, SLIDER_MAX))
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Non-finite or negative rates are rejected and the old rate kept
    pub fn set_rate(&mut self, rate: f64) -> SimResult<()> {
        if !(rate.is_finite() && rate >= 0.0) {
            return Err(SimulationError::InvalidTimeScale { rate });
        }
        self.rate = rate;
        Ok(())
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Model `dt` for `real_dt` wall-clock seconds; zero while paused
    pub fn model_dt(&self, real_dt: f64) -> f64 {
        if self.paused {
            0.0
        } else {
            real_dt * self.rate
        }
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        Self { rate: DEFAULT_RATE, paused: false }
    }
}
