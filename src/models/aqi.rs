use std::fmt;

use serde::{Deserialize, Serialize};

/// Which fallback tier produced a composite AQI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AqiSource {
    /// The provider supplied an overall index directly.
    ProviderOverall,
    /// Maximum of the per-pollutant indexes the provider supplied.
    MaxPollutantAqi,
    /// Estimated locally from the PM2.5 concentration.
    EstimatedFromPm25,
}

impl fmt::Display for AqiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AqiSource::ProviderOverall => write!(f, "provider overall index"),
            AqiSource::MaxPollutantAqi => write!(f, "max per-pollutant index"),
            AqiSource::EstimatedFromPm25 => write!(f, "estimated from PM2.5"),
        }
    }
}

/// A resolved composite AQI value and its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AqiResult {
    pub value: u32,
    pub source: AqiSource,
}

impl AqiResult {
    pub fn new(value: u32, source: AqiSource) -> Self {
        Self { value, source }
    }
}
