//! Fixed-capacity recorder of per-body positions
//!
//! Buffers are allocated once (`bodies x rows`) and filled monotonically,
//! one row per `record` call. Writing past the last row is an error.

use crate::error::{SimError, SimResult};
use crate::simulation::states::NVec3;

#[derive(Debug, Clone)]
pub struct Trajectory {
    rows: usize,              // preallocated rows per body
    row_counter: usize,       // rows written so far
    buffers: Vec<Vec<NVec3>>, // one rows x 3 buffer per body
}

impl Trajectory {
    pub fn new(bodies: usize, rows: usize) -> Self {
        Self {
            rows,
            row_counter: 0,
            buffers: vec![vec![NVec3::zeros(); rows]; bodies],
        }
    }

    pub fn body_count(&self) -> usize {
        self.buffers.len()
    }

    pub fn capacity(&self) -> usize {
        self.rows
    }

    pub fn row_counter(&self) -> usize {
        self.row_counter
    }

    pub fn is_full(&self) -> bool {
        self.row_counter == self.rows
    }

    /// Append one row: `positions[i]` goes to body i
    pub fn record(&mut self, positions: &[NVec3]) -> SimResult<()> {
        if self.row_counter == self.rows {
            return Err(SimError::CapacityExceeded { capacity: self.rows });
        }
        if positions.len() != self.buffers.len() {
            return Err(SimError::DimensionMismatch {
                table: "trajectory row",
                expected: self.buffers.len(),
                found: positions.len(),
            });
        }

        for (buf, x) in self.buffers.iter_mut().zip(positions) {
            buf[self.row_counter] = *x;
        }
        self.row_counter += 1;
        Ok(())
    }

    /// The full preallocated buffer of one body in step order. Rows past
    /// `row_counter` are still zero.
    pub fn get(&self, body: usize) -> SimResult<&[NVec3]> {
        self.buffers
            .get(body)
            .map(Vec::as_slice)
            .ok_or(SimError::BodyIndexOutOfRange {
                index: body,
                len: self.buffers.len(),
            })
    }

    /// Only the rows written so far for one body
    pub fn recorded(&self, body: usize) -> SimResult<&[NVec3]> {
        Ok(&self.get(body)?[..self.row_counter])
    }

    /// Last recorded position of every body
    pub fn last(&self) -> Option<Vec<NVec3>> {
        let row = self.row_counter.checked_sub(1)?;
        Some(self.buffers.iter().map(|buf| buf[row]).collect())
    }
}
