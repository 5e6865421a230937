//! Configuration module for SonarCheck

mod catalog;
mod profiles;
mod propagation;

pub use catalog::VesselCatalog;
pub use profiles::{
    VesselClass, VesselProfile, VesselProfileBuilder, VesselProfileData,
    DEFAULT_CAVITATION_GROWTH_RATE, NOISE_EXPONENT_MODEL_RANGE,
};
pub use propagation::{PropagationConfig, SpreadingModel, DEFAULT_ABSORPTION_DB_PER_UNIT};
