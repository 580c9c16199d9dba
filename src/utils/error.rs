use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClimateError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("No measurements recorded, cannot determine the most recent date")]
    NoMeasurements,

    #[error("Stored date '{value}' is not in YYYY-MM-DD form: {source}")]
    InvalidStoredDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

impl IntoResponse for ClimateError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        tracing::error!("❌ Request failed ({}): {}", status, self);
        (status, self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ClimateError>;
