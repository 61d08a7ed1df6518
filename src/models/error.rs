use thiserror::Error;

#[derive(Error, Debug)]
pub enum RallyScoreError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API returned status {status} for {endpoint}")]
    ApiStatus { endpoint: String, status: u16 },

    #[error("Invalid payload from {endpoint}: {message}")]
    InvalidPayload { endpoint: String, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid tier table: {0}")]
    InvalidTierTable(String),

    #[error("Primary and fallback sources both failed (primary: {primary}; fallback: {fallback})")]
    AllSourcesFailed {
        primary: Box<RallyScoreError>,
        fallback: Box<RallyScoreError>,
    },
}

pub type Result<T> = std::result::Result<T, RallyScoreError>;
