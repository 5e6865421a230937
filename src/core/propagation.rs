// src/core/propagation.rs
//
// Transmission loss over distance.

use crate::config::PropagationConfig;
use crate::error::{ensure_finite, Result, SonarError};

/// Open-water transmission loss, dB.
pub fn transmission_loss(distance: f64) -> Result<f64> {
    transmission_loss_with(distance, &PropagationConfig::default())
}

/// Transmission loss under an explicit propagation regime, dB.
///
/// `k log10(r) + alpha r` where `k` is the spreading coefficient. The
/// logarithm is undefined at `r <= 0`, so such distances are rejected.
pub fn transmission_loss_with(distance: f64, config: &PropagationConfig) -> Result<f64> {
    let distance = ensure_finite("distance", distance)?;
    if distance <= 0.0 {
        return Err(SonarError::invalid(
            "distance",
            distance,
            "must be greater than zero",
        ));
    }

    Ok(config.spreading().coefficient() * distance.log10()
        + config.absorption_db_per_unit() * distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_kilometre() {
        let loss = transmission_loss(1000.0).unwrap();
        assert!((loss - 60.04).abs() < 1e-9, "got {}", loss);
    }

    #[test]
    fn test_unit_distance_is_absorption_only() {
        let loss = transmission_loss(1.0).unwrap();
        assert!((loss - 0.00004).abs() < 1e-12);
    }

    #[test]
    fn test_cylindrical_spreading() {
        let config = PropagationConfig::shallow_water();
        let loss = transmission_loss_with(1000.0, &config).unwrap();
        assert!((loss - 30.04).abs() < 1e-9);
    }

    #[test]
    fn test_monotonic_in_distance() {
        let mut previous = transmission_loss(0.01).unwrap();
        let mut distance = 0.01;
        while distance < 1.0e6 {
            distance *= 1.5;
            let loss = transmission_loss(distance).unwrap();
            assert!(loss > previous);
            previous = loss;
        }
    }

    #[test]
    fn test_non_positive_distance_rejected() {
        assert!(matches!(
            transmission_loss(0.0),
            Err(SonarError::InvalidParameter { name: "distance", .. })
        ));
        assert!(transmission_loss(-10.0).is_err());
        assert!(transmission_loss(f64::INFINITY).is_err());
    }
}
