//! Numerical and physical parameters for a run
//!
//! `Parameters` holds:
//! - fixed step size `dt` (s) and the number of recorded steps,
//! - the gravitational constant `G`

use crate::error::{SimError, SimResult};
use crate::simulation::forces::G_SI;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64,      // step size (s)
    pub steps: usize, // trajectory rows, including the initial position
    pub G: f64,       // gravitational constant
}

impl Parameters {
    pub fn new(dt: f64, steps: usize) -> Self {
        Self { dt, steps, G: G_SI }
    }

    pub fn validate(&self) -> SimResult<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimError::config(format!("dt must be finite and > 0, got {}", self.dt)));
        }
        if !(self.G.is_finite() && self.G > 0.0) {
            return Err(SimError::config(format!("G must be finite and > 0, got {}", self.G)));
        }
        Ok(())
    }
}
