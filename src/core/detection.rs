// src/core/detection.rs
//
// Passive sonar equation: SNR = SL - TL - NL.

use log::debug;

use super::noise::source_level;
use super::propagation::transmission_loss_with;
use crate::config::{PropagationConfig, VesselProfile};
use crate::error::{ensure_finite, Result, SonarError};

/// Bisection steps for detection range; 2^-60 of the search span
const RANGE_BISECTION_STEPS: usize = 60;

/// Combines source noise and propagation against an ambient noise level.
///
/// Holds only copyable configuration, so one model can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DetectionModel {
    pub propagation: PropagationConfig,
}

impl DetectionModel {
    pub fn new(propagation: PropagationConfig) -> Self {
        Self { propagation }
    }

    /// SNR in dB; negative means the vessel is below the ambient noise.
    pub fn signal_to_noise_ratio(
        &self,
        speed: f64,
        distance: f64,
        ambient_noise: f64,
        profile: &VesselProfile,
    ) -> Result<f64> {
        let ambient_noise = ensure_finite("ambient_noise", ambient_noise)?;
        let level = source_level(speed, profile)?;
        let loss = transmission_loss_with(distance, &self.propagation)?;
        Ok(level - loss - ambient_noise)
    }

    /// Largest distance in `[1, max_distance]` where SNR stays at or above
    /// `threshold`.
    ///
    /// `None` when the vessel is already below threshold at distance 1.
    /// Relies on SNR strictly decreasing with distance.
    pub fn detection_range(
        &self,
        speed: f64,
        ambient_noise: f64,
        profile: &VesselProfile,
        threshold: f64,
        max_distance: f64,
    ) -> Result<Option<f64>> {
        let threshold = ensure_finite("threshold", threshold)?;
        let max_distance = ensure_finite("max_distance", max_distance)?;
        if max_distance < 1.0 {
            return Err(SonarError::invalid(
                "max_distance",
                max_distance,
                "must be at least 1",
            ));
        }

        let margin = |distance: f64| -> Result<f64> {
            Ok(self.signal_to_noise_ratio(speed, distance, ambient_noise, profile)? - threshold)
        };

        if margin(1.0)? < 0.0 {
            return Ok(None);
        }
        if margin(max_distance)? >= 0.0 {
            return Ok(Some(max_distance));
        }

        let (mut lo, mut hi) = (1.0, max_distance);
        for _ in 0..RANGE_BISECTION_STEPS {
            let mid = 0.5 * (lo + hi);
            if margin(mid)? >= 0.0 {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        debug!(
            "{}: detection range {:.1} at {} kn (threshold {} dB)",
            profile.name(),
            lo,
            speed,
            threshold
        );
        Ok(Some(lo))
    }
}

/// Open-water SNR for a single vessel, dB.
pub fn signal_to_noise_ratio(
    speed: f64,
    distance: f64,
    ambient_noise: f64,
    profile: &VesselProfile,
) -> Result<f64> {
    DetectionModel::default().signal_to_noise_ratio(speed, distance, ambient_noise, profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SpreadingModel, VesselClass};
    use crate::core::propagation::transmission_loss;

    #[test]
    fn test_ohio_reference_point() {
        // 22 kn at 1 km against 50 dB ambient
        let snr = signal_to_noise_ratio(22.0, 1000.0, 50.0, &VesselClass::Ohio.profile()).unwrap();
        assert!((snr - (-6.4573)).abs() < 0.001, "got {}", snr);
    }

    #[test]
    fn test_snr_is_source_minus_loss_minus_ambient() {
        let profile = VesselClass::Akula.profile();
        let snr = signal_to_noise_ratio(15.0, 2500.0, 40.0, &profile).unwrap();
        let expected =
            source_level(15.0, &profile).unwrap() - transmission_loss(2500.0).unwrap() - 40.0;
        assert!((snr - expected).abs() < 1e-12);
    }

    #[test]
    fn test_ambient_shift_is_linear() {
        let profile = VesselClass::Virginia.profile();
        let base = signal_to_noise_ratio(12.0, 800.0, 45.0, &profile).unwrap();
        for delta in [0.5, 3.0, 17.25] {
            let shifted = signal_to_noise_ratio(12.0, 800.0, 45.0 + delta, &profile).unwrap();
            assert!((base - shifted - delta).abs() < 1e-9);
        }
    }

    #[test]
    fn test_shallow_water_carries_further() {
        let profile = VesselClass::Kilo.profile();
        let open = DetectionModel::default();
        let shallow = DetectionModel::new(PropagationConfig::shallow_water());
        let a = open.signal_to_noise_ratio(8.0, 5000.0, 60.0, &profile).unwrap();
        let b = shallow.signal_to_noise_ratio(8.0, 5000.0, 60.0, &profile).unwrap();
        assert!(b > a);
        assert_eq!(shallow.propagation.spreading(), SpreadingModel::Cylindrical);
    }

    #[test]
    fn test_invalid_inputs_propagate() {
        let profile = VesselClass::Ohio.profile();
        assert!(signal_to_noise_ratio(10.0, 0.0, 50.0, &profile).is_err());
        assert!(signal_to_noise_ratio(-1.0, 10.0, 50.0, &profile).is_err());
        assert!(signal_to_noise_ratio(10.0, 10.0, f64::NAN, &profile).is_err());
    }

    #[test]
    fn test_detection_range_hits_threshold() {
        let model = DetectionModel::default();
        let profile = VesselClass::Seawolf.profile();
        let range = model
            .detection_range(10.0, 50.0, &profile, 0.0, 1.0e6)
            .unwrap()
            .unwrap();
        assert!(range > 1.0 && range < 1.0e6);
        let snr = model.signal_to_noise_ratio(10.0, range, 50.0, &profile).unwrap();
        assert!(snr.abs() < 1e-6, "snr at range was {}", snr);
    }

    #[test]
    fn test_detection_range_edges() {
        let model = DetectionModel::default();
        let profile = VesselClass::Ohio.profile();

        // Ambient far above the source level: never detectable
        assert_eq!(
            model.detection_range(5.0, 200.0, &profile, 0.0, 1000.0).unwrap(),
            None
        );

        // Very quiet ocean: detectable across the whole search span
        assert_eq!(
            model.detection_range(5.0, 0.0, &profile, 0.0, 100.0).unwrap(),
            Some(100.0)
        );

        assert!(model.detection_range(5.0, 50.0, &profile, 0.0, 0.5).is_err());
    }
}
