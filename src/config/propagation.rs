// src/config/propagation.rs
//
// Propagation regime: geometric spreading law and absorption

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, Result, SonarError};

/// Seawater absorption in dB per unit distance (0.04 dB/km in metres)
pub const DEFAULT_ABSORPTION_DB_PER_UNIT: f64 = 0.00004;

/// Geometric spreading law
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpreadingModel {
    /// Open water, 20 log10(r)
    #[default]
    Spherical,
    /// Shallow water ducting, 10 log10(r)
    Cylindrical,
}

impl SpreadingModel {
    pub fn coefficient(&self) -> f64 {
        match self {
            Self::Spherical => 20.0,
            Self::Cylindrical => 10.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Spherical => "spherical",
            Self::Cylindrical => "cylindrical",
        }
    }
}

/// Parameters of the transmission loss formula.
///
/// Absorption is always finite and non-negative, so transmission loss
/// grows strictly with distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PropagationFields")]
pub struct PropagationConfig {
    spreading: SpreadingModel,
    absorption_db_per_unit: f64,
}

#[derive(Deserialize)]
struct PropagationFields {
    #[serde(default)]
    spreading: SpreadingModel,
    #[serde(default = "default_absorption")]
    absorption_db_per_unit: f64,
}

fn default_absorption() -> f64 {
    DEFAULT_ABSORPTION_DB_PER_UNIT
}

impl TryFrom<PropagationFields> for PropagationConfig {
    type Error = SonarError;

    fn try_from(fields: PropagationFields) -> Result<Self> {
        Self::new(fields.spreading, fields.absorption_db_per_unit)
    }
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            spreading: SpreadingModel::Spherical,
            absorption_db_per_unit: DEFAULT_ABSORPTION_DB_PER_UNIT,
        }
    }
}

impl PropagationConfig {
    pub fn new(spreading: SpreadingModel, absorption_db_per_unit: f64) -> Result<Self> {
        let alpha = ensure_finite("absorption_db_per_unit", absorption_db_per_unit)?;
        if alpha < 0.0 {
            return Err(SonarError::invalid(
                "absorption_db_per_unit",
                alpha,
                "must not be negative",
            ));
        }
        Ok(Self {
            spreading,
            absorption_db_per_unit: alpha,
        })
    }

    pub fn spreading(&self) -> SpreadingModel {
        self.spreading
    }

    pub fn absorption_db_per_unit(&self) -> f64 {
        self.absorption_db_per_unit
    }

    pub fn shallow_water() -> Self {
        Self {
            spreading: SpreadingModel::Cylindrical,
            ..Default::default()
        }
    }
}
