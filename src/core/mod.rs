//! Closed-form acoustic models

pub mod detection;
pub mod noise;
pub mod propagation;

pub use detection::{signal_to_noise_ratio, DetectionModel};
pub use noise::{cavitation_contribution, source_level};
pub use propagation::{transmission_loss, transmission_loss_with};
