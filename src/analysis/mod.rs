//! Fleet-level analysis over a vessel catalog

mod fleet;
mod result;

pub use fleet::{compare_all, loudest, quietest, snr_series, FleetAnalysis};
pub use result::{
    Detectability, SnrSample, VesselSnr, DEFAULT_DETECTION_THRESHOLD_DB, MARGINAL_BAND_DB,
};
