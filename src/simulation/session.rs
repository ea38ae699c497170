//! Headless driver for a scenario.
//!
//! Each tick converts the wall-clock frame interval to a model `dt`, steps
//! the scenario and appends the observables to the stats log, in that order.

use std::io::Write;

use crate::configuration::stats::StatsLog;
use crate::error::SimResult;
use crate::simulation::metrics::{metrics, Metrics};
use crate::simulation::scenario::Scenario;
use crate::simulation::time_scale::TimeScale;

pub struct Session<W: Write> {
    pub scenario: Scenario,
    pub time_scale: TimeScale,
    stats: Option<StatsLog<W>>,
}

impl<W: Write> Session<W> {
    pub fn new(scenario: Scenario, time_scale: TimeScale, stats: Option<StatsLog<W>>) -> Self {
        Self { scenario, time_scale, stats }
    }

    /// Run one tick for `real_dt` elapsed wall-clock seconds.
    ///
    /// A failed step leaves the scenario at its last valid state, logs
    /// nothing and returns the error; the caller decides whether to stop.
    pub fn tick(&mut self, real_dt: f64) -> SimResult<Option<Metrics>> {
        let dt = self.time_scale.model_dt(real_dt);

        if let Err(e) = self.scenario.step(dt) {
            tracing::warn!("step failed at t = {}: {}", self.scenario.state.t, e);
            return Err(e);
        }

        if let Some(log) = self.stats.as_mut() {
            log.record(&self.scenario.state)?;
        }
        Ok(metrics(&self.scenario.state))
    }

    /// Run `ticks` ticks of `frame_interval` wall-clock seconds each,
    /// stopping at the first failed step
    pub fn run(&mut self, ticks: u64, frame_interval: f64) -> SimResult<u64> {
        for n in 0..ticks {
            self.tick(frame_interval)?;
            if (n + 1) % 100 == 0 {
                tracing::info!("tick {}: t = {:.3e}", n + 1, self.scenario.state.t);
            }
        }
        if let Some(log) = self.stats.as_mut() {
            log.flush()?;
        }
        Ok(ticks)
    }

    pub fn into_stats(self) -> SimResult<Option<W>> {
        self.stats.map(StatsLog::into_inner).transpose()
    }
}
