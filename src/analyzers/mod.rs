pub mod health_analyzer;

pub use health_analyzer::{
    categorize, categorize_pollutant, health_advisory, AirQualityReport, HealthAnalyzer,
    PollutantAssessment,
};
