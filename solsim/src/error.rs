//! Error types for the simulation core
//!
//! Every fallible operation returns [`SimResult`]. Any error aborts the
//! whole run; there is no partial recovery or resume

use thiserror::Error;

/// Result alias used across the crate
pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    /// Mass must be finite and strictly positive
    #[error("body '{name}' has invalid mass {mass:e} kg (must be > 0)")]
    InvalidMass { name: String, mass: f64 },

    /// Radius must be finite and non-negative
    #[error("body '{name}' has invalid radius {radius:e} m (must be >= 0)")]
    InvalidRadius { name: String, radius: f64 },

    /// NaN or infinity in a position/velocity
    #[error("non-finite value detected at {location}")]
    NonFiniteValue { location: String },

    /// Parallel input tables (or a position batch) disagree in length
    #[error("dimension mismatch in {table}: expected {expected}, found {found}")]
    DimensionMismatch {
        table: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("duplicate body name '{0}'")]
    DuplicateBody(String),

    /// Trajectory already holds its preallocated number of rows
    #[error("trajectory capacity of {capacity} rows exceeded")]
    CapacityExceeded { capacity: usize },

    #[error("body index {index} out of range for {len} bodies")]
    BodyIndexOutOfRange { index: usize, len: usize },

    /// The ephemeris provider has no initial state for this body
    #[error("no ephemeris data for body '{0}'")]
    MissingEphemerisData(String),

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        SimError::Config {
            message: message.into(),
        }
    }
}
