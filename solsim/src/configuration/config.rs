//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, step count, gravitational constant, body subset
//! - parallel tables `names`, `masses`, `gms`, `radii`, all indexed the same way
//! - `ephemeris` – initial state `[x, y, z, vx, vy, vz]` per body name, in SI units
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   dt: 86400.0             # fixed step size (s)
//!   steps: 700              # recorded rows, initial position included
//!   G: 6.67259e-11          # optional
//!   bodies: 4               # optional, keep only the first 4 bodies
//!
//! names:  [ Sun, Earth ]
//! masses: [ 1.9891e30, 5.97219e24 ]
//! gms:    [ 1.32712440018e20, 3.986004418e14 ]
//! radii:  [ 695700.0e3, 6371.0e3 ]
//!
//! ephemeris:
//!   Sun:   [ 0.0, 0.0, 0.0, 0.0, 0.0, 0.0 ]
//!   Earth: [ 1.496e11, 0.0, 0.0, 0.0, 29780.0, 0.0 ]
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::{SimError, SimResult};
use crate::simulation::forces::G_SI;

fn default_g() -> f64 {
    G_SI
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,      // time step size (s)
    pub steps: usize, // number of trajectory rows
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
    #[serde(default)]
    pub bodies: Option<usize>, // keep only the first n bodies of every table
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub names: Vec<String>,
    pub masses: Vec<f64>, // kg
    pub gms: Vec<f64>,    // m^3/s^2
    pub radii: Vec<f64>,  // m
    #[serde(default)]
    pub ephemeris: BTreeMap<String, [f64; 6]>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> SimResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> SimResult<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Every per-body table must match `names` in length
    pub fn check_tables(&self) -> SimResult<()> {
        let n = self.names.len();
        for (table, found) in [
            ("masses", self.masses.len()),
            ("gravitational parameters", self.gms.len()),
            ("radii", self.radii.len()),
        ] {
            if found != n {
                return Err(SimError::DimensionMismatch { table, expected: n, found });
            }
        }
        Ok(())
    }

    /// Number of bodies selected by `parameters.bodies`
    pub fn selected_count(&self) -> SimResult<usize> {
        let n = self.names.len();
        match self.parameters.bodies {
            None => Ok(n),
            Some(k) if k == 0 || k > n => Err(SimError::config(format!(
                "body subset of {k} is outside 1..={n}"
            ))),
            Some(k) => Ok(k),
        }
    }
}
