use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Failed to load env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("Invalid timezone \"{input}\"")]
    InvalidTimezone { input: String },

    #[error("Failed to read {field}: {source}")]
    Input {
        field: &'static str,
        source: io::Error,
    },

    #[error("Input closed before {field} was read")]
    InputClosed { field: &'static str },

    #[error("Invalid time-entry endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("Failed to encode request preview: {0}")]
    Preview(#[from] serde_json::Error),

    #[error("Failed to send request: {0}")]
    Transport(ureq::Error),

    #[error("Failed to read response body: {0}")]
    ResponseBody(ureq::Error),
}
