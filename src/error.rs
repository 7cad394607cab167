use thiserror::Error;

pub type Result<T> = std::result::Result<T, AqiError>;

#[derive(Error, Debug)]
pub enum AqiError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned status {status} for city '{city}'")]
    Provider { status: u16, city: String },

    #[error("Response parsing error: {0}")]
    ParseResponse(#[from] serde_json::Error),

    #[error("Missing API key: pass --api-key or set the API_NINJAS_KEY environment variable")]
    MissingApiKey,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}
