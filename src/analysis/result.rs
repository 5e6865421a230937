//! Fleet analysis result types with detectability classification

use serde::{Deserialize, Serialize};

/// SNR band below the detection threshold still reported as marginal, dB
pub const MARGINAL_BAND_DB: f64 = 3.0;

/// Default detection threshold, dB
pub const DEFAULT_DETECTION_THRESHOLD_DB: f64 = 0.0;

/// How readily a passive array would pick up a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Detectability {
    /// More than the marginal band below threshold
    Undetectable,
    /// Just under the threshold
    Marginal,
    /// At or above the threshold
    Detectable,
}

impl Detectability {
    pub fn classify(snr_db: f64, threshold_db: f64) -> Self {
        match snr_db - threshold_db {
            m if m >= 0.0 => Detectability::Detectable,
            m if m >= -MARGINAL_BAND_DB => Detectability::Marginal,
            _ => Detectability::Undetectable,
        }
    }

    pub fn from_snr(snr_db: f64) -> Self {
        Self::classify(snr_db, DEFAULT_DETECTION_THRESHOLD_DB)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Detectability::Detectable => "✗",
            Detectability::Marginal => "?",
            Detectability::Undetectable => "✓",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Detectability::Detectable => "detectable",
            Detectability::Marginal => "marginal",
            Detectability::Undetectable => "undetectable",
        }
    }
}

/// SNR of one catalog member under fixed engagement conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselSnr {
    pub name: String,
    pub snr_db: f64,
}

impl VesselSnr {
    pub fn new(name: impl Into<String>, snr_db: f64) -> Self {
        Self {
            name: name.into(),
            snr_db,
        }
    }

    pub fn detectability(&self) -> Detectability {
        Detectability::from_snr(self.snr_db)
    }
}

/// One point of an SNR-versus-distance series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnrSample {
    pub distance: f64,
    pub snr_db: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detectability_bands() {
        assert_eq!(Detectability::from_snr(4.0), Detectability::Detectable);
        assert_eq!(Detectability::from_snr(0.0), Detectability::Detectable);
        assert_eq!(Detectability::from_snr(-1.5), Detectability::Marginal);
        assert_eq!(Detectability::from_snr(-3.0), Detectability::Marginal);
        assert_eq!(Detectability::from_snr(-3.1), Detectability::Undetectable);
    }

    #[test]
    fn test_classify_with_threshold() {
        assert_eq!(Detectability::classify(8.0, 10.0), Detectability::Marginal);
        assert_eq!(Detectability::classify(12.0, 10.0), Detectability::Detectable);
        assert!(Detectability::Detectable > Detectability::Undetectable);
    }

    #[test]
    fn test_descriptions_follow_bands() {
        // Marginal vessels also sit below ambient, so the label names the band
        assert_eq!(Detectability::from_snr(-1.0).description(), "marginal");
        assert_eq!(Detectability::from_snr(-20.0).description(), "undetectable");
    }

    #[test]
    fn test_vessel_snr_serializes_flat() {
        let entry = VesselSnr::new("Kilo", -2.5);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["name"], "Kilo");
        assert_eq!(json["snr_db"], -2.5);
        assert_eq!(entry.detectability(), Detectability::Marginal);
    }
}
