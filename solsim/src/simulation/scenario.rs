//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) plus an ephemeris source and
//! produces a runtime bundle containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at the epoch)
//! - the force law (`NewtonianGravity`)
//!
//! Every input check happens here, before any step runs.

use log::debug;

use crate::configuration::config::ScenarioConfig;
use crate::error::SimResult;
use crate::simulation::ephemeris::EphemerisProvider;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec6, System};
use crate::simulation::trajectory::Trajectory;

#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub gravity: NewtonianGravity,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig, ephemeris: &dyn EphemerisProvider) -> SimResult<Self> {
        cfg.check_tables()?;
        let n = cfg.selected_count()?;

        let parameters = Parameters {
            dt: cfg.parameters.dt,
            steps: cfg.parameters.steps,
            G: cfg.parameters.G,
        };
        parameters.validate()?;

        // Resolve every name before any body exists
        let names = &cfg.names[..n];
        let states = names
            .iter()
            .map(|name| ephemeris.initial_state(name))
            .collect::<SimResult<Vec<NVec6>>>()?;

        let system = System::new(names, &states, &cfg.masses[..n], &cfg.gms[..n], &cfg.radii[..n])?;
        debug!("scenario built with {} of {} bodies", n, cfg.names.len());

        let gravity = NewtonianGravity { G: parameters.G };

        Ok(Self {
            parameters,
            system,
            gravity,
        })
    }

    /// Run the scenario to completion. `system` is left at the final positions.
    pub fn run(&mut self) -> SimResult<Trajectory> {
        integrator::run(&mut self.system, &self.gravity, &self.parameters)
    }

    pub fn names(&self) -> Vec<String> {
        self.system.names()
    }
}
