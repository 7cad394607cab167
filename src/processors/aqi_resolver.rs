use crate::models::{AqiResult, AqiSource, ReadingSet};
use crate::processors::breakpoints::{estimate_aqi, PM25_BREAKPOINTS};

/// Resolves one composite AQI value from a reading snapshot.
///
/// Resolution order, first match wins:
/// 1. the provider's overall index, verbatim;
/// 2. the maximum per-pollutant index the provider supplied, if > 0;
/// 3. a local estimate interpolated from the PM2.5 concentration
///    (0 if absent).
///
/// A provider-computed index is authoritative when available; the
/// estimate keeps a number renderable when it is not.
pub struct AqiResolver;

impl AqiResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, readings: &ReadingSet) -> AqiResult {
        if let Some(overall) = readings.overall_aqi {
            return AqiResult::new(overall, AqiSource::ProviderOverall);
        }

        let max_provided = readings.iter().filter_map(|r| r.provided_aqi).max();
        if let Some(max) = max_provided {
            if max > 0 {
                return AqiResult::new(max, AqiSource::MaxPollutantAqi);
            }
        }

        let value = estimate_aqi(readings.pm25_concentration(), &PM25_BREAKPOINTS);
        AqiResult::new(value, AqiSource::EstimatedFromPm25)
    }
}

impl Default for AqiResolver {
    fn default() -> Self {
        Self::new()
    }
}
