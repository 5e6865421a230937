//! CLI argument definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::analysis::DEFAULT_DETECTION_THRESHOLD_DB;
use crate::config::{PropagationConfig, SpreadingModel, DEFAULT_ABSORPTION_DB_PER_UNIT};
use crate::error::Result;

/// Default number of distance samples for `snr-vs-distance`
pub const DEFAULT_SERIES_SAMPLES: usize = 1000;

/// Default search limit for `detection-range`
pub const DEFAULT_RANGE_LIMIT: f64 = 1.0e6;

#[derive(Parser, Debug)]
#[command(name = "sonarcheck", version)]
#[command(about = "Estimate passive sonar detectability of submerged vessels")]
pub struct Cli {
    /// JSON file with vessel profiles replacing the built-in catalog
    #[arg(long, global = true, env = "SONARCHECK_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Use cylindrical (shallow water) spreading instead of spherical
    #[arg(long, global = true)]
    pub shallow_water: bool,

    /// Absorption coefficient in dB per unit distance
    #[arg(long, global = true, default_value_t = DEFAULT_ABSORPTION_DB_PER_UNIT)]
    pub absorption: f64,

    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn propagation(&self) -> Result<PropagationConfig> {
        let spreading = if self.shallow_water {
            SpreadingModel::Cylindrical
        } else {
            SpreadingModel::Spherical
        };
        PropagationConfig::new(spreading, self.absorption)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List catalog vessels with max speed and cavitation threshold
    ListVessels,
    /// SNR of every vessel under the same conditions
    CompareSnr(Engagement),
    /// Vessel with the highest SNR
    LoudestVessel(Engagement),
    /// Vessel with the lowest SNR
    QuietestVessel(Engagement),
    /// SNR of one vessel sampled from distance 1 to a maximum distance
    SnrVsDistance(SeriesArgs),
    /// Source level and cavitation contribution of one vessel
    SourceLevel(SourceLevelArgs),
    /// Furthest distance at which one vessel stays above a detection threshold
    DetectionRange(RangeArgs),
}

/// Speed, distance and ambient noise shared by the fleet commands
#[derive(Args, Debug, Clone, Copy)]
pub struct Engagement {
    /// Vessel speed in knots
    #[arg(long, allow_negative_numbers = true)]
    pub speed: f64,

    /// Distance to the listening array
    #[arg(long)]
    pub distance: f64,

    /// Ambient noise level in dB
    #[arg(long, allow_negative_numbers = true)]
    pub ambient_noise: f64,
}

#[derive(Args, Debug, Clone)]
pub struct SeriesArgs {
    /// Vessel speed in knots
    #[arg(long, allow_negative_numbers = true)]
    pub speed: f64,

    /// Largest sampled distance
    #[arg(long)]
    pub max_distance: f64,

    /// Ambient noise level in dB
    #[arg(long, allow_negative_numbers = true)]
    pub ambient_noise: f64,

    /// Vessel name (case-insensitive)
    #[arg(long)]
    pub vessel: String,

    /// Number of distance samples
    #[arg(long, default_value_t = DEFAULT_SERIES_SAMPLES)]
    pub samples: usize,

    /// Render the series to a PNG chart instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct SourceLevelArgs {
    /// Vessel name (case-insensitive)
    #[arg(long)]
    pub vessel: String,

    /// Vessel speed in knots
    #[arg(long, allow_negative_numbers = true)]
    pub speed: f64,
}

#[derive(Args, Debug, Clone)]
pub struct RangeArgs {
    /// Vessel name (case-insensitive)
    #[arg(long)]
    pub vessel: String,

    /// Vessel speed in knots
    #[arg(long, allow_negative_numbers = true)]
    pub speed: f64,

    /// Ambient noise level in dB
    #[arg(long, allow_negative_numbers = true)]
    pub ambient_noise: f64,

    /// Minimum SNR for a detection in dB
    #[arg(long, allow_negative_numbers = true, default_value_t = DEFAULT_DETECTION_THRESHOLD_DB)]
    pub threshold: f64,

    /// Search limit
    #[arg(long, default_value_t = DEFAULT_RANGE_LIMIT)]
    pub max_distance: f64,
}
