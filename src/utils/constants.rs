/// Canonical pollutant identifiers
pub const POLLUTANT_PM25: &str = "PM2.5";
pub const POLLUTANT_PM10: &str = "PM10";
pub const POLLUTANT_O3: &str = "O3";
pub const POLLUTANT_NO2: &str = "NO2";
pub const POLLUTANT_SO2: &str = "SO2";
pub const POLLUTANT_CO: &str = "CO";

/// Provider payload field names
pub const FIELD_CONCENTRATION: &str = "concentration";
pub const FIELD_AQI: &str = "aqi";
pub const FIELD_OVERALL_AQI: &str = "overall_aqi";

/// Inclusive upper AQI bounds for the five bounded categories,
/// ascending; anything above the last bound is Hazardous
pub const BOUND_GOOD: u32 = 50;
pub const BOUND_MODERATE: u32 = 100;
pub const BOUND_UNHEALTHY_SENSITIVE: u32 = 150;
pub const BOUND_UNHEALTHY: u32 = 200;
pub const BOUND_VERY_UNHEALTHY: u32 = 300;

/// Top of the standard AQI scale; estimates may exceed it
pub const AQI_SCALE_MAX: u32 = 500;

/// Provider defaults
pub const DEFAULT_API_BASE_URL: &str = "https://api.api-ninjas.com/v1/airquality";
pub const API_KEY_HEADER: &str = "X-Api-Key";
pub const API_KEY_ENV_VAR: &str = "API_NINJAS_KEY";

/// HTTP client defaults
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;
