use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

use super::error::Error;
use common::types::WeightedCycle;

/// One output row per basis cycle.
#[derive(Debug, Serialize)]
pub struct CycleRecord {
    pub cycle: usize,
    pub weight: f64,
    pub length: usize,
    /// Vertex sequence, space separated.
    pub vertices: String,
}

impl CycleRecord {
    fn new(index: usize, cycle: &WeightedCycle) -> Self {
        let vertices = cycle
            .vertices
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        CycleRecord {
            cycle: index,
            weight: cycle.weight,
            length: cycle.len(),
            vertices,
        }
    }
}

/// Writes a computed basis as CSV, to a file or to stdout.
pub struct BasisWriter {
    path: Option<PathBuf>,
}

impl BasisWriter {
    pub fn new(path: Option<String>) -> Self {
        Self {
            path: path.map(PathBuf::from),
        }
    }

    /// Returns the number of rows written.
    pub fn write(&self, cycles: &[WeightedCycle]) -> Result<usize, Error> {
        let written = match &self.path {
            Some(path) => {
                let written = write_records(csv::Writer::from_path(path)?, cycles)?;
                info!(path = %path.display(), cycles = written, "Writer: basis saved");
                written
            }
            None => write_records(csv::Writer::from_writer(io::stdout().lock()), cycles)?,
        };
        Ok(written)
    }
}

fn write_records<W: Write>(mut wtr: csv::Writer<W>, cycles: &[WeightedCycle]) -> Result<usize, Error> {
    for (index, cycle) in cycles.iter().enumerate() {
        wtr.serialize(CycleRecord::new(index, cycle))?;
    }
    wtr.flush()?;
    Ok(cycles.len())
}
