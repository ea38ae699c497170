//! Time series log of the star/planet observables.
//!
//! Tab separated, one header line and then one row per tick:
//!
//! ```text
//! time	distance	speed
//! 16666.6	100.0	0.0001
//! ```
//!
//! Rows are only written for one-star-one-planet systems; for anything else
//! recording is a silent no-op.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{SimResult, SimulationError};
use crate::simulation::metrics::{metrics, Metrics};
use crate::simulation::states::SimulationState;

pub const HEADER: &str = "time\tdistance\tspeed";

pub struct StatsLog<W: Write> {
    out: W,
    rows: usize,
}

impl StatsLog<BufWriter<File>> {
    /// Create (truncate) `path` and write the header
    pub fn create(path: impl AsRef<Path>) -> SimResult<Self> {
        Self::new(BufWriter::new(File::create(path)?))
    }
}

impl<W: Write> StatsLog<W> {
    pub fn new(mut out: W) -> SimResult<Self> {
        writeln!(out, "{}", HEADER)?;
        Ok(Self { out, rows: 0 })
    }

    /// Append the current observables. Returns whether a row was written.
    pub fn record(&mut self, state: &SimulationState) -> SimResult<bool> {
        match metrics(state) {
            Some(m) => {
                writeln!(self.out, "{}\t{}\t{}", m.time, m.distance, m.speed)?;
                self.rows += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn flush(&mut self) -> SimResult<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(mut self) -> SimResult<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Read a stats log back into rows, skipping the header and blank lines
pub fn read_stats<R: BufRead>(reader: R) -> SimResult<Vec<Metrics>> {
    let mut rows = Vec::new();

    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let values = line
            .split_whitespace()
            .map(str::parse::<f64>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| SimulationError::Parse { line: idx + 1, reason: e.to_string() })?;

        let &[time, distance, speed] = values.as_slice() else {
            return Err(SimulationError::Parse {
                line: idx + 1,
                reason: format!("expected 3 columns, found {}", values.len()),
            });
        };
        rows.push(Metrics { time, distance, speed });
    }

    Ok(rows)
}

pub fn read_stats_file(path: impl AsRef<Path>) -> SimResult<Vec<Metrics>> {
    read_stats(BufReader::new(File::open(path)?))
}
