//! Hand-off of finished trajectories to whatever draws them
//!
//! Rendering lives outside this crate. `CsvExport` writes one
//! `body,step,x,y,z` row per recorded position so any plotting tool can
//! pick the run up.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{SimError, SimResult};
use crate::simulation::trajectory::Trajectory;

/// Consumer of a completed run
pub trait Visualizer {
    /// `names[i]` labels body i of `trajectory`
    fn visualize(&mut self, names: &[String], trajectory: &Trajectory) -> SimResult<()>;
}

pub struct CsvExport<W: Write> {
    out: W,
}

impl<W: Write> CsvExport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl CsvExport<BufWriter<File>> {
    pub fn create(path: impl AsRef<Path>) -> SimResult<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> Visualizer for CsvExport<W> {
    fn visualize(&mut self, names: &[String], trajectory: &Trajectory) -> SimResult<()> {
        if names.len() != trajectory.body_count() {
            return Err(SimError::DimensionMismatch {
                table: "body names",
                expected: trajectory.body_count(),
                found: names.len(),
            });
        }

        writeln!(self.out, "body,step,x,y,z")?;
        for (i, name) in names.iter().enumerate() {
            for (step, x) in trajectory.recorded(i)?.iter().enumerate() {
                writeln!(self.out, "{},{},{:e},{:e},{:e}", name, step, x.x, x.y, x.z)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
