// src/error.rs
//
// Error taxonomy shared by the acoustic models and the fleet analysis.

use thiserror::Error;

/// Convenient result alias for the sonar library.
pub type Result<T> = std::result::Result<T, SonarError>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum SonarError {
    /// A numeric input violated a model precondition.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A profile was built with an empty name.
    #[error("vessel name must not be empty")]
    EmptyVesselName,

    /// Lookup by name found no catalog entry.
    #[error("unknown vessel '{name}' (available: {})", .available.join(", "))]
    UnknownVessel {
        name: String,
        available: Vec<String>,
    },

    /// Two catalog entries share a name (compared case-insensitively).
    #[error("duplicate vessel name in catalog: {name}")]
    DuplicateVessel { name: String },

    /// Extremum search over a catalog with no entries.
    #[error("vessel catalog is empty")]
    EmptyCatalog,

    /// A catalog file could not be parsed.
    #[error("invalid catalog file: {0}")]
    CatalogFormat(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SonarError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        SonarError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// Reject NaN and infinities before any formula sees them.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SonarError::invalid(name, value, "must be a finite number"))
    }
}
