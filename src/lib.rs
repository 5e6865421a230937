//! SonarCheck - Passive sonar detectability of submerged vessels
//!
//! A parametric acoustic estimator: source noise as a function of speed,
//! transmission loss as a function of distance, and the resulting
//! signal-to-noise ratio against ambient noise.
//!
//! ## Module Structure
//!
//! - `config` - Vessel profiles, the vessel catalog and propagation settings
//! - `core` - Source level, cavitation, transmission loss and SNR formulas
//! - `analysis` - Fleet scans: loudest, quietest, comparison, SNR series
//! - `cli` - Command-line interface
//! - `error` - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use sonarcheck::{loudest, signal_to_noise_ratio, VesselCatalog};
//!
//! let catalog = VesselCatalog::standard();
//! let seawolf = catalog.get("seawolf")?;
//!
//! let snr = signal_to_noise_ratio(15.0, 1000.0, 50.0, seawolf)?;
//! println!("Seawolf SNR: {:.1} dB", snr);
//!
//! let contact = loudest(15.0, 1000.0, 50.0, &catalog)?;
//! println!("Loudest: {} ({:.1} dB)", contact.name, contact.snr_db);
//! # Ok::<(), sonarcheck::SonarError>(())
//! ```
//!
//! ## Propagation Regimes
//!
//! | Regime     | Spreading   | Transmission loss     |
//! |------------|-------------|-----------------------|
//! | Open water | Spherical   | 20 log10(r) + alpha r |
//! | Shallow    | Cylindrical | 10 log10(r) + alpha r |

// Profiles, catalog and propagation configuration
pub mod config;

// Acoustic formulas
pub mod core;

// Fleet-level scans
pub mod analysis;

// Command-line interface
pub mod cli;

pub mod error;

pub use analysis::{
    compare_all, loudest, quietest, snr_series, Detectability, FleetAnalysis, SnrSample,
    VesselSnr,
};
pub use config::{
    PropagationConfig, SpreadingModel, VesselCatalog, VesselClass, VesselProfile,
    VesselProfileBuilder,
};
pub use crate::core::{
    cavitation_contribution, signal_to_noise_ratio, source_level, transmission_loss,
    transmission_loss_with, DetectionModel,
};
pub use error::{Result, SonarError};
