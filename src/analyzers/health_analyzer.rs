use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{AqiCategory, AqiResult, ReadingSet};
use crate::processors::breakpoints::{breakpoints_for, estimate_aqi};
use crate::processors::AqiResolver;

/// Map an AQI value to its severity category.
///
/// Scans the category bounds in ascending order; membership is inclusive
/// at the upper edge, so 50 is Good and 51 is Moderate. Values above 300
/// are Hazardous.
pub fn categorize(aqi: u32) -> AqiCategory {
    for category in AqiCategory::ALL {
        match category.upper_bound() {
            Some(bound) if aqi <= bound => return category,
            Some(_) => continue,
            None => return category,
        }
    }
    AqiCategory::Hazardous
}

/// Severity label for a single pollutant concentration.
///
/// Pollutants with a breakpoint table (PM2.5, PM10) are categorized from
/// their interpolated index. The rest deliberately default to Moderate as
/// a conservative neutral label rather than failing.
pub fn categorize_pollutant(concentration: f64, pollutant: &str) -> AqiCategory {
    match breakpoints_for(pollutant) {
        Some(table) => categorize(estimate_aqi(concentration, table)),
        None => AqiCategory::Moderate,
    }
}

/// Canned health recommendation for a severity category. Total over all
/// six categories.
pub fn health_advisory(category: AqiCategory) -> &'static str {
    match category {
        AqiCategory::Good => {
            "Air quality is satisfactory and poses little or no risk."
        }
        AqiCategory::Moderate => {
            "Air quality is acceptable. Sensitive individuals should consider \
             reducing prolonged outdoor activities."
        }
        AqiCategory::UnhealthyForSensitiveGroups => {
            "Members of sensitive groups may experience health effects. The \
             general public is less likely to be affected."
        }
        AqiCategory::Unhealthy => {
            "Some members of the general public may experience health effects; \
             members of sensitive groups may experience more serious effects."
        }
        AqiCategory::VeryUnhealthy => {
            "Health alert: the risk of health effects is increased for everyone. \
             Avoid prolonged outdoor exertion."
        }
        AqiCategory::Hazardous => {
            "Health warning of emergency conditions: everyone is more likely to \
             be affected. Remain indoors and keep activity levels low."
        }
    }
}

/// Severity assessment for one pollutant reading.
#[derive(Debug, Clone, Serialize)]
pub struct PollutantAssessment {
    pub name: String,
    pub concentration: f64,
    pub provided_aqi: Option<u32>,
    pub category: AqiCategory,
}

/// The assembled air-quality report for one snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct AirQualityReport {
    pub city: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub aqi: AqiResult,
    pub category: AqiCategory,
    pub advisory: &'static str,
    pub pollutants: Vec<PollutantAssessment>,
    pub has_data: bool,
}

impl AirQualityReport {
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn detailed_summary(&self) -> String {
        let mut summary = format!(
            "Location: {}\n\
            AQI: {} ({})\n\
            Category: {}\n\
            Advisory: {}",
            self.city.as_deref().unwrap_or("unknown"),
            self.aqi.value,
            self.aqi.source,
            self.category,
            self.advisory,
        );

        if !self.pollutants.is_empty() {
            summary.push_str("\n\nPollutants:");
            for assessment in &self.pollutants {
                summary.push_str(&format!(
                    "\n  {:<6} {:>8.1} µg/m³  {}",
                    assessment.name,
                    assessment.concentration,
                    assessment.category,
                ));
            }
        }

        if !self.has_data {
            summary.push_str(
                "\n\nNo pollutant data was reported; treat this result as missing data, \
                 not verified clean air.",
            );
        }

        summary
    }
}

/// Runs the resolver and classifier over one snapshot and assembles the
/// report consumed by the rendering layer.
pub struct HealthAnalyzer {
    resolver: AqiResolver,
}

impl HealthAnalyzer {
    pub fn new() -> Self {
        Self {
            resolver: AqiResolver::new(),
        }
    }

    pub fn analyze(&self, readings: &ReadingSet) -> AirQualityReport {
        let aqi = self.resolver.resolve(readings);
        let category = categorize(aqi.value);

        let pollutants = readings
            .iter()
            .map(|reading| PollutantAssessment {
                name: reading.name.clone(),
                concentration: reading.concentration,
                provided_aqi: reading.provided_aqi,
                category: categorize_pollutant(reading.concentration, &reading.name),
            })
            .collect();

        AirQualityReport {
            city: None,
            generated_at: Utc::now(),
            aqi,
            category,
            advisory: health_advisory(category),
            pollutants,
            has_data: readings.has_data(),
        }
    }
}

impl Default for HealthAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
