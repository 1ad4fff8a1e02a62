pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{SimError, SimResult};

pub use simulation::states::{Body, HistorySlot, System, NVec3, NVec6, HISTORY_SLOTS};
pub use simulation::forces::{ForceMatrix, NewtonianGravity, PairForce, G_SI};
pub use simulation::integrator::{run, StormerIntegrator};
pub use simulation::trajectory::Trajectory;
pub use simulation::params::Parameters;
pub use simulation::ephemeris::{EphemerisProvider, StaticEphemeris};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, ScenarioConfig};

pub use visualization::export::{CsvExport, Visualizer};

pub use benchmark::benchmark::{bench_force_matrix, bench_run};
