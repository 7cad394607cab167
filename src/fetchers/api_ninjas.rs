use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::error::{AqiError, Result};
use crate::utils::constants::{
    API_KEY_ENV_VAR, API_KEY_HEADER, DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
};

/// HTTP client for the API-Ninjas air-quality endpoint.
///
/// Returns the raw payload as `serde_json::Value`; shape interpretation
/// is the reader's job. A non-2xx status or an undecodable body is a
/// hard fetch failure and never reaches the reader.
pub struct AirQualityClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AirQualityClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: api_key.into(),
        })
    }

    /// Override the endpoint URL (for tests and mock servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch one snapshot of readings for a city.
    pub async fn fetch_city(&self, city: &str) -> Result<Value> {
        debug!(city, url = %self.base_url, "requesting air quality snapshot");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("city", city)])
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AqiError::Provider {
                status: status.as_u16(),
                city: city.to_string(),
            });
        }

        let payload = response.json::<Value>().await?;
        debug!(city, "received provider payload");
        Ok(payload)
    }
}

/// Resolve the provider API key: an explicit flag value wins, otherwise
/// the environment (a `.env` file is honored).
pub fn resolve_api_key(explicit: Option<String>) -> Result<String> {
    if let Some(key) = explicit {
        return Ok(key);
    }

    dotenv::dotenv().ok();
    std::env::var(API_KEY_ENV_VAR).map_err(|_| AqiError::MissingApiKey)
}
