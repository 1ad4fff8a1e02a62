//! Source of initial state vectors at the reference epoch
//!
//! Fetching real ephemerides (network, files) is left to other
//! implementations of [`EphemerisProvider`]; this crate ships an in-memory table.

use std::collections::BTreeMap;

use crate::error::{SimError, SimResult};
use crate::simulation::states::NVec6;

pub trait EphemerisProvider {
    /// `[x, y, z, vx, vy, vz]` in m and m/s for the named body
    fn initial_state(&self, name: &str) -> SimResult<NVec6>;
}

/// Fixed table of epoch states keyed by body name
#[derive(Debug, Clone, Default)]
pub struct StaticEphemeris {
    states: BTreeMap<String, NVec6>,
}

impl StaticEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, state: [f64; 6]) -> Self {
        self.states.insert(name.into(), NVec6::from(state));
        self
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl From<&BTreeMap<String, [f64; 6]>> for StaticEphemeris {
    fn from(table: &BTreeMap<String, [f64; 6]>) -> Self {
        table
            .iter()
            .fold(Self::new(), |eph, (name, state)| eph.with(name.clone(), *state))
    }
}

impl EphemerisProvider for StaticEphemeris {
    fn initial_state(&self, name: &str) -> SimResult<NVec6> {
        self.states
            .get(name)
            .copied()
            .ok_or_else(|| SimError::MissingEphemerisData(name.to_string()))
    }
}
