//! Scans over a vessel catalog: extrema, per-vessel comparison, SNR series

use log::debug;

use super::result::{SnrSample, VesselSnr};
use crate::config::{VesselCatalog, VesselProfile};
use crate::core::DetectionModel;
use crate::error::{ensure_finite, Result, SonarError};

/// Evaluates the detection model across a catalog.
///
/// Catalog order is the only iteration order; ties always go to the
/// earlier entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct FleetAnalysis {
    model: DetectionModel,
}

impl FleetAnalysis {
    pub fn new(model: DetectionModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &DetectionModel {
        &self.model
    }

    /// SNR for every catalog member, in catalog order
    pub fn compare_all(
        &self,
        speed: f64,
        distance: f64,
        ambient_noise: f64,
        catalog: &VesselCatalog,
    ) -> Result<Vec<VesselSnr>> {
        catalog
            .iter()
            .map(|profile| self.evaluate(speed, distance, ambient_noise, profile))
            .collect()
    }

    /// Highest SNR; the first vessel wins exact ties
    pub fn loudest(
        &self,
        speed: f64,
        distance: f64,
        ambient_noise: f64,
        catalog: &VesselCatalog,
    ) -> Result<VesselSnr> {
        self.extremum(speed, distance, ambient_noise, catalog, |candidate, best| {
            candidate > best
        })
    }

    /// Lowest SNR; the first vessel wins exact ties
    pub fn quietest(
        &self,
        speed: f64,
        distance: f64,
        ambient_noise: f64,
        catalog: &VesselCatalog,
    ) -> Result<VesselSnr> {
        self.extremum(speed, distance, ambient_noise, catalog, |candidate, best| {
            candidate < best
        })
    }

    /// `sample_count` evenly spaced samples over `[1, max_distance]`.
    ///
    /// The first sample is exactly 1 and the last exactly `max_distance`.
    pub fn snr_series(
        &self,
        speed: f64,
        max_distance: f64,
        ambient_noise: f64,
        profile: &VesselProfile,
        sample_count: usize,
    ) -> Result<Vec<SnrSample>> {
        if sample_count < 2 {
            return Err(SonarError::invalid(
                "sample_count",
                sample_count as f64,
                "must be at least 2",
            ));
        }
        let max_distance = ensure_finite("max_distance", max_distance)?;
        if max_distance < 1.0 {
            return Err(SonarError::invalid(
                "max_distance",
                max_distance,
                "must be at least 1",
            ));
        }

        let step = (max_distance - 1.0) / (sample_count - 1) as f64;
        (0..sample_count)
            .map(|i| {
                let distance = if i == sample_count - 1 {
                    max_distance
                } else {
                    1.0 + step * i as f64
                };
                let snr_db = self
                    .model
                    .signal_to_noise_ratio(speed, distance, ambient_noise, profile)?;
                Ok(SnrSample { distance, snr_db })
            })
            .collect()
    }

    fn evaluate(
        &self,
        speed: f64,
        distance: f64,
        ambient_noise: f64,
        profile: &VesselProfile,
    ) -> Result<VesselSnr> {
        let snr = self
            .model
            .signal_to_noise_ratio(speed, distance, ambient_noise, profile)?;
        debug!("{}: SNR {:.2} dB", profile.name(), snr);
        Ok(VesselSnr::new(profile.name(), snr))
    }

    fn extremum<F>(
        &self,
        speed: f64,
        distance: f64,
        ambient_noise: f64,
        catalog: &VesselCatalog,
        replaces: F,
    ) -> Result<VesselSnr>
    where
        F: Fn(f64, f64) -> bool,
    {
        let mut best: Option<VesselSnr> = None;

        for profile in catalog {
            let candidate = self.evaluate(speed, distance, ambient_noise, profile)?;
            best = match best {
                Some(current) if !replaces(candidate.snr_db, current.snr_db) => Some(current),
                _ => Some(candidate),
            };
        }

        best.ok_or(SonarError::EmptyCatalog)
    }
}

/// Open-water [`FleetAnalysis::compare_all`]
pub fn compare_all(
    speed: f64,
    distance: f64,
    ambient_noise: f64,
    catalog: &VesselCatalog,
) -> Result<Vec<VesselSnr>> {
    FleetAnalysis::default().compare_all(speed, distance, ambient_noise, catalog)
}

/// Open-water [`FleetAnalysis::loudest`]
pub fn loudest(
    speed: f64,
    distance: f64,
    ambient_noise: f64,
    catalog: &VesselCatalog,
) -> Result<VesselSnr> {
    FleetAnalysis::default().loudest(speed, distance, ambient_noise, catalog)
}

/// Open-water [`FleetAnalysis::quietest`]
pub fn quietest(
    speed: f64,
    distance: f64,
    ambient_noise: f64,
    catalog: &VesselCatalog,
) -> Result<VesselSnr> {
    FleetAnalysis::default().quietest(speed, distance, ambient_noise, catalog)
}

/// Open-water [`FleetAnalysis::snr_series`]
pub fn snr_series(
    speed: f64,
    max_distance: f64,
    ambient_noise: f64,
    profile: &VesselProfile,
    sample_count: usize,
) -> Result<Vec<SnrSample>> {
    FleetAnalysis::default().snr_series(speed, max_distance, ambient_noise, profile, sample_count)
}
