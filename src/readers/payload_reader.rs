use serde_json::Value;
use tracing::debug;
use validator::Validate;

use crate::models::{PollutantReading, ReadingSet};
use crate::utils::constants::{
    FIELD_AQI, FIELD_CONCENTRATION, FIELD_OVERALL_AQI, POLLUTANT_CO, POLLUTANT_NO2, POLLUTANT_O3,
    POLLUTANT_PM10, POLLUTANT_PM25, POLLUTANT_SO2,
};

/// Extracts a uniform `ReadingSet` from an arbitrarily-shaped provider
/// payload.
///
/// Only top-level keys whose value is an object with a numeric, finite,
/// non-negative `concentration` become readings; everything else
/// (metadata strings, nulls, arrays, malformed objects) is skipped
/// without error. A top-level numeric `overall_aqi` is captured on the
/// set. A payload that is not a JSON object yields an empty set.
pub struct PayloadReader {
    canonicalize_names: bool,
}

impl PayloadReader {
    pub fn new() -> Self {
        Self {
            canonicalize_names: true,
        }
    }

    /// Disable folding of provider key variants (`PM2`, `pm25`, ...)
    /// onto the canonical identifiers.
    pub fn with_canonical_names(canonicalize_names: bool) -> Self {
        Self { canonicalize_names }
    }

    pub fn read_payload(&self, payload: &Value) -> ReadingSet {
        let mut set = ReadingSet::new();

        let map = match payload.as_object() {
            Some(map) => map,
            None => {
                debug!("payload is not a JSON object; no readings extracted");
                return set;
            }
        };

        for (key, value) in map {
            if key == FIELD_OVERALL_AQI {
                if let Some(overall) = parse_index_value(value) {
                    set.overall_aqi = Some(overall);
                } else {
                    debug!(field = %key, "skipping non-numeric overall index");
                }
                continue;
            }

            match self.parse_reading(key, value) {
                Some(reading) => set.insert(reading),
                None => debug!(field = %key, "skipping non-reading payload field"),
            }
        }

        set
    }

    /// Parse one top-level entry into a reading, or `None` when it does
    /// not carry a usable concentration.
    fn parse_reading(&self, key: &str, value: &Value) -> Option<PollutantReading> {
        let obj = value.as_object()?;

        let concentration = obj.get(FIELD_CONCENTRATION)?.as_f64()?;
        if !concentration.is_finite() || concentration < 0.0 {
            return None;
        }

        // A malformed per-pollutant index is absence, not failure
        let provided_aqi = obj.get(FIELD_AQI).and_then(parse_index_value);

        let name = if self.canonicalize_names {
            canonical_pollutant_name(key)
        } else {
            key.trim().to_string()
        };

        let reading = PollutantReading::new(name, concentration, provided_aqi);
        if reading.validate().is_err() {
            return None;
        }

        Some(reading)
    }
}

impl Default for PayloadReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a JSON value as a non-negative integer index. Fractional values
/// are truncated, negatives clamped to 0.
fn parse_index_value(value: &Value) -> Option<u32> {
    let number = value.as_f64()?;
    if !number.is_finite() {
        return None;
    }
    Some(number.trunc().max(0.0) as u32)
}

/// Fold provider key variants onto the canonical pollutant identifiers.
///
/// Matching ignores case and the separators `.`, `_`, `-`, so `PM2`,
/// `pm25` and `PM2_5` all map to `PM2.5`. Unknown keys pass through
/// trimmed but otherwise untouched.
pub fn canonical_pollutant_name(raw: &str) -> String {
    let folded: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '.' | '_' | '-'))
        .collect::<String>()
        .to_ascii_uppercase();

    match folded.as_str() {
        "PM2" | "PM25" => POLLUTANT_PM25.to_string(),
        "PM10" => POLLUTANT_PM10.to_string(),
        "O3" => POLLUTANT_O3.to_string(),
        "NO2" => POLLUTANT_NO2.to_string(),
        "SO2" => POLLUTANT_SO2.to_string(),
        "CO" => POLLUTANT_CO.to_string(),
        _ => raw.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_skips_non_reading_fields() {
        let payload = json!({
            "PM2.5": { "concentration": 10.0 },
            "status": "ok",
            "meta": null
        });

        let set = PayloadReader::new().read_payload(&payload);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("PM2.5").unwrap().concentration, 10.0);
    }

    #[test]
    fn test_full_provider_payload() {
        let payload = json!({
            "CO": { "concentration": 456.0, "aqi": 5 },
            "NO2": { "concentration": 28.7, "aqi": 36 },
            "O3": { "concentration": 34.2, "aqi": 29 },
            "SO2": { "concentration": 12.4, "aqi": 17 },
            "PM2.5": { "concentration": 42.3, "aqi": 117 },
            "PM10": { "concentration": 78.5, "aqi": 62 },
            "overall_aqi": 117
        });

        let set = PayloadReader::new().read_payload(&payload);
        assert_eq!(set.len(), 6);
        assert_eq!(set.overall_aqi, Some(117));
        assert_eq!(set.get("PM2.5").unwrap().provided_aqi, Some(117));

        // Payload order is preserved
        let names: Vec<&str> = set.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["CO", "NO2", "O3", "SO2", "PM2.5", "PM10"]);
    }

    #[test]
    fn test_missing_aqi_is_absence_not_failure() {
        let payload = json!({
            "PM2.5": { "concentration": 40.0 },
            "PM10": { "concentration": 80.0, "aqi": "n/a" }
        });

        let set = PayloadReader::new().read_payload(&payload);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("PM2.5").unwrap().provided_aqi, None);
        assert_eq!(set.get("PM10").unwrap().provided_aqi, None);
    }

    #[test]
    fn test_malformed_concentrations_are_skipped() {
        let payload = json!({
            "PM2.5": { "concentration": "high" },
            "PM10": { "concentration": -3.0 },
            "O3": { "aqi": 29 },
            "NO2": { "concentration": 28.7 }
        });

        let set = PayloadReader::new().read_payload(&payload);
        assert_eq!(set.len(), 1);
        assert!(set.get("NO2").is_some());
    }

    #[test]
    fn test_non_object_payload_yields_empty_set() {
        for payload in [json!([1, 2, 3]), json!("error"), json!(null), json!(42)] {
            let set = PayloadReader::new().read_payload(&payload);
            assert!(set.is_empty());
            assert!(!set.has_data());
        }
    }

    #[test]
    fn test_overall_aqi_truncation_and_clamping() {
        let set = PayloadReader::new().read_payload(&json!({ "overall_aqi": 87.6 }));
        assert_eq!(set.overall_aqi, Some(87));

        let set = PayloadReader::new().read_payload(&json!({ "overall_aqi": -4 }));
        assert_eq!(set.overall_aqi, Some(0));

        let set = PayloadReader::new().read_payload(&json!({ "overall_aqi": "bad" }));
        assert_eq!(set.overall_aqi, None);
    }

    #[test]
    fn test_key_canonicalization() {
        assert_eq!(canonical_pollutant_name("PM2"), "PM2.5");
        assert_eq!(canonical_pollutant_name("pm25"), "PM2.5");
        assert_eq!(canonical_pollutant_name("PM2_5"), "PM2.5");
        assert_eq!(canonical_pollutant_name("pm10"), "PM10");
        assert_eq!(canonical_pollutant_name("no2"), "NO2");
        assert_eq!(canonical_pollutant_name(" benzene "), "benzene");

        let payload = json!({ "PM2": { "concentration": 12.0 } });
        let set = PayloadReader::new().read_payload(&payload);
        assert!(set.get("PM2.5").is_some());

        let set = PayloadReader::with_canonical_names(false).read_payload(&payload);
        assert!(set.get("PM2").is_some());
        assert!(set.get("PM2.5").is_none());
    }
}
