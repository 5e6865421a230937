// src/config/profiles.rs
//
// Acoustic profiles for submerged vessel classes

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, Result, SonarError};

/// Post-threshold growth exponent used by every reference class
pub const DEFAULT_CAVITATION_GROWTH_RATE: f64 = 2.5;

/// Range of `n` the model was tuned for; values outside it are accepted
pub const NOISE_EXPONENT_MODEL_RANGE: (f64, f64) = (1.5, 3.0);

/// Reference vessel classes shipped with the tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VesselClass {
    /// Ballistic missile boat, the baseline the model was fitted on
    Ohio,
    /// Very quiet fast attack boat
    Seawolf,
    /// Modern fast attack boat with an early cavitation threshold
    Virginia,
    /// Older, louder fast attack boat
    LosAngeles,
    /// Soviet-era attack boat
    Akula,
    /// Diesel-electric patrol boat, quiet but slow
    Kilo,
}

impl VesselClass {
    /// Catalog order of the reference classes
    pub fn all() -> Vec<Self> {
        vec![
            Self::Ohio,
            Self::Seawolf,
            Self::Virginia,
            Self::LosAngeles,
            Self::Akula,
            Self::Kilo,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ohio => "Ohio",
            Self::Seawolf => "Seawolf",
            Self::Virginia => "Virginia",
            Self::LosAngeles => "Los Angeles",
            Self::Akula => "Akula",
            Self::Kilo => "Kilo",
        }
    }

    /// Build the immutable profile for this class
    pub fn profile(&self) -> VesselProfile {
        let data = match self {
            // A = 10 / (25 - 21)^2.5: +10 dB of cavitation at max speed
            Self::Ohio => VesselProfileData::new(self.name(), 100.0, 21.0, 2.5, 0.3125, Some(25.0)),
            Self::Seawolf => VesselProfileData::new(self.name(), 94.0, 20.0, 2.3, 0.1, Some(35.0)),
            Self::Virginia => VesselProfileData::new(self.name(), 92.0, 22.0, 2.2, 0.2, Some(25.0)),
            Self::LosAngeles => {
                VesselProfileData::new(self.name(), 102.0, 18.0, 2.6, 0.05, Some(33.0))
            }
            Self::Akula => VesselProfileData::new(self.name(), 98.0, 20.0, 2.4, 0.08, Some(35.0)),
            Self::Kilo => VesselProfileData::new(self.name(), 96.0, 12.0, 2.0, 0.055, Some(20.0)),
        };

        // Reference values are statically valid
        VesselProfile { data }
    }
}

/// Plain field record used for (de)serialization and by the builder.
///
/// Carries no invariants; convert into [`VesselProfile`] to validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselProfileData {
    pub name: String,
    /// L0, dB
    pub resting_level: f64,
    /// v0, knots
    pub cavitation_threshold_speed: f64,
    /// n
    pub noise_scaling_exponent: f64,
    /// p
    #[serde(default = "default_growth_rate")]
    pub cavitation_growth_rate: f64,
    /// A
    pub cavitation_scale: f64,
    /// Descriptive maximum submerged speed, knots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_speed: Option<f64>,
}

fn default_growth_rate() -> f64 {
    DEFAULT_CAVITATION_GROWTH_RATE
}

impl VesselProfileData {
    fn new(
        name: &str,
        resting_level: f64,
        cavitation_threshold_speed: f64,
        noise_scaling_exponent: f64,
        cavitation_scale: f64,
        max_speed: Option<f64>,
    ) -> Self {
        Self {
            name: name.to_string(),
            resting_level,
            cavitation_threshold_speed,
            noise_scaling_exponent,
            cavitation_growth_rate: DEFAULT_CAVITATION_GROWTH_RATE,
            cavitation_scale,
            max_speed,
        }
    }
}

/// Validated, immutable acoustic parameters for one vessel class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VesselProfileData", into = "VesselProfileData")]
pub struct VesselProfile {
    data: VesselProfileData,
}

impl TryFrom<VesselProfileData> for VesselProfile {
    type Error = SonarError;

    fn try_from(mut data: VesselProfileData) -> Result<Self> {
        data.name = data.name.trim().to_string();
        if data.name.is_empty() {
            return Err(SonarError::EmptyVesselName);
        }

        ensure_finite("resting_level", data.resting_level)?;

        let v0 = ensure_finite("cavitation_threshold_speed", data.cavitation_threshold_speed)?;
        if v0 <= 0.0 {
            return Err(SonarError::invalid(
                "cavitation_threshold_speed",
                v0,
                "must be greater than zero",
            ));
        }

        let n = ensure_finite("noise_scaling_exponent", data.noise_scaling_exponent)?;
        if n <= 0.0 {
            return Err(SonarError::invalid(
                "noise_scaling_exponent",
                n,
                "must be greater than zero",
            ));
        }

        // p = 0 would make the cavitation term jump to A right above v0
        let p = ensure_finite("cavitation_growth_rate", data.cavitation_growth_rate)?;
        if p <= 0.0 {
            return Err(SonarError::invalid(
                "cavitation_growth_rate",
                p,
                "must be greater than zero",
            ));
        }

        let a = ensure_finite("cavitation_scale", data.cavitation_scale)?;
        if a < 0.0 {
            return Err(SonarError::invalid(
                "cavitation_scale",
                a,
                "must not be negative",
            ));
        }

        if let Some(max_speed) = data.max_speed {
            ensure_finite("max_speed", max_speed)?;
            if max_speed <= 0.0 {
                return Err(SonarError::invalid(
                    "max_speed",
                    max_speed,
                    "must be greater than zero",
                ));
            }
        }

        let (lo, hi) = NOISE_EXPONENT_MODEL_RANGE;
        if !(lo..=hi).contains(&n) {
            warn!(
                "{}: noise scaling exponent {} is outside the modeled range {}-{}",
                data.name, n, lo, hi
            );
        }

        Ok(Self { data })
    }
}

impl From<VesselProfile> for VesselProfileData {
    fn from(profile: VesselProfile) -> Self {
        profile.data
    }
}

impl VesselProfile {
    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn resting_level(&self) -> f64 {
        self.data.resting_level
    }

    pub fn cavitation_threshold_speed(&self) -> f64 {
        self.data.cavitation_threshold_speed
    }

    pub fn noise_scaling_exponent(&self) -> f64 {
        self.data.noise_scaling_exponent
    }

    pub fn cavitation_growth_rate(&self) -> f64 {
        self.data.cavitation_growth_rate
    }

    pub fn cavitation_scale(&self) -> f64 {
        self.data.cavitation_scale
    }

    pub fn max_speed(&self) -> Option<f64> {
        self.data.max_speed
    }

    /// Case-insensitive (Unicode) name comparison used for catalog identity
    pub fn matches_name(&self, name: &str) -> bool {
        self.data.name.to_lowercase() == name.trim().to_lowercase()
    }

    /// Field view of this profile
    pub fn data(&self) -> &VesselProfileData {
        &self.data
    }
}

/// Builder for custom profiles
pub struct VesselProfileBuilder {
    data: VesselProfileData,
}

impl VesselProfileBuilder {
    /// Start from zeroed parameters; threshold and exponent must be set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            data: VesselProfileData {
                name: name.into(),
                resting_level: 0.0,
                cavitation_threshold_speed: 0.0,
                noise_scaling_exponent: 0.0,
                cavitation_growth_rate: DEFAULT_CAVITATION_GROWTH_RATE,
                cavitation_scale: 0.0,
                max_speed: None,
            },
        }
    }

    /// Start from a reference class, keeping its parameters
    pub fn from_class(class: VesselClass) -> Self {
        Self {
            data: class.profile().data,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.data.name = name.into();
        self
    }

    pub fn resting_level(mut self, db: f64) -> Self {
        self.data.resting_level = db;
        self
    }

    pub fn cavitation_threshold_speed(mut self, knots: f64) -> Self {
        self.data.cavitation_threshold_speed = knots;
        self
    }

    pub fn noise_scaling_exponent(mut self, n: f64) -> Self {
        self.data.noise_scaling_exponent = n;
        self
    }

    pub fn cavitation_growth_rate(mut self, p: f64) -> Self {
        self.data.cavitation_growth_rate = p;
        self
    }

    pub fn cavitation_scale(mut self, a: f64) -> Self {
        self.data.cavitation_scale = a;
        self
    }

    pub fn max_speed(mut self, knots: f64) -> Self {
        self.data.max_speed = Some(knots);
        self
    }

    pub fn build(self) -> Result<VesselProfile> {
        VesselProfile::try_from(self.data)
    }
}
