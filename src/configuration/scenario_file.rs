//! Text scenario files.
//!
//! One body per line:
//!
//! ```text
//! # kind   radius color mass  x   y  vx vy
//! Star     10     red   1000  0   0  0  0
//! Planet   2      blue  1     100 0  0  0
//! ```
//!
//! The keyword is case-insensitive. Blank lines and lines starting with `#`
//! are skipped, lines with any other keyword are skipped with a warning.
//! A malformed record aborts the whole load.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{SimResult, SimulationError};
use crate::simulation::states::{Body, BodyKind, NVec2};

const FIELDS: usize = 8;

/// Parse a whole scenario from any buffered reader
pub fn read_scenario<R: BufRead>(reader: R) -> SimResult<Vec<Body>> {
    let mut bodies = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(body) = parse_record(&line, line_no)? {
            bodies.push(body);
        }
    }

    Ok(bodies)
}

pub fn read_scenario_str(text: &str) -> SimResult<Vec<Body>> {
    read_scenario(text.as_bytes())
}

pub fn read_scenario_file(path: impl AsRef<Path>) -> SimResult<Vec<Body>> {
    let path = path.as_ref();
    let bodies = read_scenario(BufReader::new(File::open(path)?))?;
    tracing::info!("read {} bodies from {}", bodies.len(), path.display());
    Ok(bodies)
}

/// Parse one non-blank, non-comment record.
///
/// `Ok(None)` means the keyword was not recognised and the line is skipped.
fn parse_record(line: &str, line_no: usize) -> SimResult<Option<Body>> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    let Some(kind) = BodyKind::from_keyword(fields[0]) else {
        tracing::warn!("line {}: unknown space object `{}`, skipped", line_no, fields[0]);
        return Ok(None);
    };

    if fields.len() != FIELDS {
        return Err(SimulationError::Parse {
            line: line_no,
            reason: format!("expected {} fields, found {}", FIELDS, fields.len()),
        });
    }

    let num = |i: usize, name: &str| -> SimResult<f64> {
        match fields[i].parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(SimulationError::Parse {
                line: line_no,
                reason: format!("{} `{}` is not a finite number", name, fields[i]),
            }),
        }
    };

    let radius = num(1, "radius")?;
    let color = fields[2];
    let mass = num(3, "mass")?;
    let x = NVec2::new(num(4, "x")?, num(5, "y")?);
    let v = NVec2::new(num(6, "vx")?, num(7, "vy")?);

    let body = Body::new(kind, radius, color, mass, x, v)
        .map_err(|e| SimulationError::Parse { line: line_no, reason: e.to_string() })?;
    Ok(Some(body))
}

/// Format one body as a scenario record, without a line terminator.
/// Numbers are shortest round-trip, large and tiny ones in exponent form.
pub fn format_record(body: &Body) -> String {
    format!(
        "{} {:?} {} {:?} {:?} {:?} {:?} {:?}",
        body.kind(),
        body.radius(),
        body.color(),
        body.mass(),
        body.x.x,
        body.x.y,
        body.v.x,
        body.v.y,
    )
}

/// Write every body as a record; every record ends with a newline
pub fn write_scenario<W: Write>(mut writer: W, bodies: &[Body]) -> SimResult<()> {
    for body in bodies {
        writeln!(writer, "{}", format_record(body))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_scenario_file(path: impl AsRef<Path>, bodies: &[Body]) -> SimResult<()> {
    let path = path.as_ref();
    write_scenario(BufWriter::new(File::create(path)?), bodies)?;
    tracing::info!("wrote {} bodies to {}", bodies.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_with_extra_field_is_rejected() {
        let err = parse_record("Star 10 red 1000 0 0 0 0 7", 3).unwrap_err();
        match err {
            SimulationError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn unknown_keyword_is_not_an_error() {
        assert!(parse_record("Comet 1 white 1 0 0 0 0", 1).unwrap().is_none());
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        assert!(parse_record("Planet 1 white 1 inf 0 0 0", 1).is_err());
        assert!(parse_record("Planet 1 white 1 0 NaN 0 0", 1).is_err());
    }

    #[test]
    fn invalid_mass_reports_its_line() {
        match parse_record("Planet 2 blue -5 100 0 0 0", 7).unwrap_err() {
            SimulationError::Parse { line, reason } => {
                assert_eq!(line, 7);
                assert!(reason.contains("mass"), "{reason}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn keyword_is_case_insensitive() {
        let body = parse_record("pLaNeT 2 blue 1 100 0 0 0", 1).unwrap().unwrap();
        assert_eq!(body.kind(), BodyKind::Planet);
    }
}
