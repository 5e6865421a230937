// src/core/noise.rs
//
// Radiated source noise as a function of speed.

use crate::config::VesselProfile;
use crate::error::{ensure_finite, Result, SonarError};

/// Extra noise from propeller cavitation, dB.
///
/// Zero at and below the threshold speed, `A * (v - v0)^p` above it. The
/// curve is continuous at `v0` but has a kink there.
pub fn cavitation_contribution(speed: f64, profile: &VesselProfile) -> Result<f64> {
    let speed = checked_speed(speed)?;
    let v0 = profile.cavitation_threshold_speed();

    if speed <= v0 {
        return Ok(0.0);
    }

    Ok(profile.cavitation_scale() * (speed - v0).powf(profile.cavitation_growth_rate()))
}

/// Source level at the given speed, dB.
///
/// `L0 + 10 log10(1 + (v / v0)^n) + cavitation`. At rest this is exactly
/// the resting level.
pub fn source_level(speed: f64, profile: &VesselProfile) -> Result<f64> {
    let speed = checked_speed(speed)?;
    let ratio = speed / profile.cavitation_threshold_speed();
    let growth = 10.0 * (1.0 + ratio.powf(profile.noise_scaling_exponent())).log10();

    Ok(profile.resting_level() + growth + cavitation_contribution(speed, profile)?)
}

fn checked_speed(speed: f64) -> Result<f64> {
    let speed = ensure_finite("speed", speed)?;
    if speed < 0.0 {
        return Err(SonarError::invalid("speed", speed, "must not be negative"));
    }
    Ok(speed)
}
