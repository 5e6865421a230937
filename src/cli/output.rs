//! Output formatting for CLI results

use colorful::Colorful;
use serde::Serialize;

use crate::analysis::{Detectability, SnrSample, VesselSnr};
use crate::config::{VesselCatalog, VesselProfile};

/// Source level breakdown for one vessel at one speed
#[derive(Debug, Clone, Serialize)]
pub struct SourceLevelReport {
    pub name: String,
    pub speed: f64,
    pub source_level_db: f64,
    pub cavitation_db: f64,
}

/// Detection range answer for one vessel
#[derive(Debug, Clone, Serialize)]
pub struct RangeReport {
    pub name: String,
    pub speed: f64,
    pub threshold_db: f64,
    /// None when the vessel is below threshold even at distance 1
    pub range: Option<f64>,
    /// True when the search limit was reached without losing contact
    pub limited: bool,
}

#[derive(Serialize)]
struct VesselListing<'a> {
    name: &'a str,
    max_speed: Option<f64>,
    cavitation_threshold_speed: f64,
}

#[derive(Serialize)]
struct Series<'a> {
    vessel: &'a str,
    samples: &'a [SnrSample],
}

/// Serialize any report as pretty JSON
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    // Reports hold only strings, numbers and options
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

pub fn format_vessel_list(catalog: &VesselCatalog) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", "Available vessels:".bold()));

    for profile in catalog {
        let max_speed = profile
            .max_speed()
            .map(|v| format!("{:.0} kn", v))
            .unwrap_or_else(|| "unknown".to_string());
        output.push_str(&format!(
            "  {:<14} max speed {:>8}  cavitation above {:.0} kn\n",
            profile.name(),
            max_speed,
            profile.cavitation_threshold_speed()
        ));
    }

    output
}

pub fn format_vessel_list_json(catalog: &VesselCatalog) -> String {
    let listing: Vec<_> = catalog
        .iter()
        .map(|p| VesselListing {
            name: p.name(),
            max_speed: p.max_speed(),
            cavitation_threshold_speed: p.cavitation_threshold_speed(),
        })
        .collect();
    format_json(&listing)
}

/// One line per vessel with its detectability marker
pub fn format_comparison(results: &[VesselSnr]) -> String {
    let mut output = String::new();
    for entry in results {
        output.push_str(&format!("  {}\n", format_entry(entry)));
    }
    output
}

/// Headline plus entry for a loudest/quietest answer
pub fn format_extremum(label: &str, entry: &VesselSnr) -> String {
    format!("{}: {}\n", label.bold(), format_entry(entry))
}

fn format_entry(entry: &VesselSnr) -> String {
    let detectability = entry.detectability();
    let marker = format!("{} {}", detectability.symbol(), detectability.description());
    let marker = match detectability {
        Detectability::Detectable => marker.red().to_string(),
        Detectability::Marginal => marker.yellow().to_string(),
        Detectability::Undetectable => marker.green().to_string(),
    };
    format!("{:<14} SNR {:>8.2} dB  {}", entry.name, entry.snr_db, marker)
}

pub fn format_series(profile: &VesselProfile, samples: &[SnrSample]) -> String {
    let mut output = format!("SNR vs distance for {}:\n", profile.name().bold());
    for sample in samples {
        output.push_str(&format!(
            "  {:>12.1}  {:>8.2} dB\n",
            sample.distance, sample.snr_db
        ));
    }
    output
}

pub fn format_series_json(profile: &VesselProfile, samples: &[SnrSample]) -> String {
    format_json(&Series {
        vessel: profile.name(),
        samples,
    })
}

pub fn format_source_level(report: &SourceLevelReport) -> String {
    format!(
        "{} at {} kn: source level {:.2} dB (cavitation {:.2} dB)\n",
        report.name.as_str().bold(),
        report.speed,
        report.source_level_db,
        report.cavitation_db
    )
}

pub fn format_range(report: &RangeReport) -> String {
    match report.range {
        None => format!(
            "{} at {} kn stays below {} dB SNR at every distance\n",
            report.name, report.speed, report.threshold_db
        ),
        Some(range) if report.limited => format!(
            "{} at {} kn is still above {} dB SNR at the search limit {:.1}\n",
            report.name, report.speed, report.threshold_db, range
        ),
        Some(range) => format!(
            "{} at {} kn is detectable out to {:.1} ({} dB threshold)\n",
            report.name, report.speed, range, report.threshold_db
        ),
    }
}
