// src/cli/mod.rs
//
// Command-line interface module

mod args;
mod chart;
mod output;

pub use args::{
    Cli, Command, Engagement, RangeArgs, SeriesArgs, SourceLevelArgs, DEFAULT_RANGE_LIMIT,
    DEFAULT_SERIES_SAMPLES,
};
pub use chart::{render_snr_chart, write_snr_chart, ChartConfig};
pub use output::{format_json, RangeReport, SourceLevelReport};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::analysis::FleetAnalysis;
use crate::config::{VesselCatalog, VesselProfile};
use crate::core::{cavitation_contribution, source_level, DetectionModel};

/// Run one parsed command and return the text to print
pub fn execute(cli: &Cli) -> Result<String> {
    let catalog = load_catalog(cli)?;
    let model = DetectionModel::new(cli.propagation()?);
    let fleet = FleetAnalysis::new(model);
    info!(
        "Using {} spreading, absorption {} dB/unit, {} vessel(s)",
        model.propagation.spreading().name(),
        model.propagation.absorption_db_per_unit(),
        catalog.len()
    );

    let text = match &cli.command {
        Command::ListVessels => {
            if cli.json {
                output::format_vessel_list_json(&catalog)
            } else {
                output::format_vessel_list(&catalog)
            }
        }
        Command::CompareSnr(e) => {
            warn_over_speed(&catalog, e.speed);
            let results = fleet.compare_all(e.speed, e.distance, e.ambient_noise, &catalog)?;
            if cli.json {
                format_json(&results)
            } else {
                output::format_comparison(&results)
            }
        }
        Command::LoudestVessel(e) => {
            warn_over_speed(&catalog, e.speed);
            let entry = fleet.loudest(e.speed, e.distance, e.ambient_noise, &catalog)?;
            if cli.json {
                format_json(&entry)
            } else {
                output::format_extremum("Loudest", &entry)
            }
        }
        Command::QuietestVessel(e) => {
            warn_over_speed(&catalog, e.speed);
            let entry = fleet.quietest(e.speed, e.distance, e.ambient_noise, &catalog)?;
            if cli.json {
                format_json(&entry)
            } else {
                output::format_extremum("Quietest", &entry)
            }
        }
        Command::SnrVsDistance(s) => {
            let profile = catalog.get(&s.vessel)?;
            warn_profile_speed(profile, s.speed);
            let samples =
                fleet.snr_series(s.speed, s.max_distance, s.ambient_noise, profile, s.samples)?;
            match &s.output {
                Some(path) => {
                    write_snr_chart(&samples, &ChartConfig::default(), path)?;
                    format!("Chart saved to {}\n", path.display())
                }
                None if cli.json => output::format_series_json(profile, &samples),
                None => output::format_series(profile, &samples),
            }
        }
        Command::SourceLevel(s) => {
            let profile = catalog.get(&s.vessel)?;
            warn_profile_speed(profile, s.speed);
            let report = SourceLevelReport {
                name: profile.name().to_string(),
                speed: s.speed,
                source_level_db: source_level(s.speed, profile)?,
                cavitation_db: cavitation_contribution(s.speed, profile)?,
            };
            if cli.json {
                format_json(&report)
            } else {
                output::format_source_level(&report)
            }
        }
        Command::DetectionRange(r) => {
            let profile = catalog.get(&r.vessel)?;
            warn_profile_speed(profile, r.speed);
            let range = model.detection_range(
                r.speed,
                r.ambient_noise,
                profile,
                r.threshold,
                r.max_distance,
            )?;
            let report = RangeReport {
                name: profile.name().to_string(),
                speed: r.speed,
                threshold_db: r.threshold,
                range,
                limited: range == Some(r.max_distance),
            };
            if cli.json {
                format_json(&report)
            } else {
                output::format_range(&report)
            }
        }
    };

    Ok(text)
}

fn load_catalog(cli: &Cli) -> Result<VesselCatalog> {
    match &cli.catalog {
        Some(path) => VesselCatalog::from_path(path)
            .with_context(|| format!("Failed to load vessel catalog from {}", path.display())),
        None => Ok(VesselCatalog::standard()),
    }
}

fn warn_over_speed(catalog: &VesselCatalog, speed: f64) {
    for profile in catalog {
        warn_profile_speed(profile, speed);
    }
}

fn warn_profile_speed(profile: &VesselProfile, speed: f64) {
    if let Some(max_speed) = profile.max_speed() {
        if speed > max_speed {
            warn!(
                "{}: {} kn exceeds the class maximum of {} kn",
                profile.name(),
                speed,
                max_speed
            );
        }
    }
}
