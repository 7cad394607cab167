use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::constants::POLLUTANT_PM25;

/// A single pollutant measurement from one provider snapshot.
///
/// `name` is the canonical pollutant identifier (e.g. "PM2.5"), and
/// `concentration` is in µg/m³. `provided_aqi` carries the per-pollutant
/// index when the provider computed one itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PollutantReading {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(range(min = 0.0))]
    pub concentration: f64,

    pub provided_aqi: Option<u32>,
}

impl PollutantReading {
    pub fn new(name: String, concentration: f64, provided_aqi: Option<u32>) -> Self {
        Self {
            name,
            concentration,
            provided_aqi,
        }
    }
}

/// All readings from one provider snapshot, in payload order.
///
/// Behaves as an insertion-ordered map keyed on pollutant name: inserting
/// a name that is already present replaces the reading in place. One
/// instance exists per fetch and is discarded on the next.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingSet {
    readings: Vec<PollutantReading>,
    pub overall_aqi: Option<u32>,
}

impl ReadingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a reading, replacing any existing reading with the same name
    /// without disturbing its position.
    pub fn insert(&mut self, reading: PollutantReading) {
        match self.readings.iter_mut().find(|r| r.name == reading.name) {
            Some(existing) => *existing = reading,
            None => self.readings.push(reading),
        }
    }

    pub fn get(&self, name: &str) -> Option<&PollutantReading> {
        self.readings.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PollutantReading> {
        self.readings.iter()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Concentration of the PM2.5 reading, or 0.0 when absent.
    pub fn pm25_concentration(&self) -> f64 {
        self.get(POLLUTANT_PM25)
            .map(|r| r.concentration)
            .unwrap_or(0.0)
    }

    /// Whether this snapshot carries anything at all. An empty set still
    /// resolves to AQI 0 / Good, so callers must use this to tell "no
    /// data" apart from a verified clean-air reading.
    pub fn has_data(&self) -> bool {
        !self.readings.is_empty() || self.overall_aqi.is_some()
    }
}
