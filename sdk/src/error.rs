use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
