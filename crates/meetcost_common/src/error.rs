// --- File: crates/meetcost_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for the meeting cost calculator.
///
/// The statistics engine itself never produces one of these. They describe
/// failures around it: loading configuration, reading events from a source,
/// or rejecting a malformed request.
#[derive(Error, Debug)]
pub enum MeetcostError {
    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// No event source is configured for the request
    #[error("Service unavailable: {0}")]
    UnavailableError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for MeetcostError {
    fn status_code(&self) -> u16 {
        match self {
            MeetcostError::ParseError(_) => 400,
            MeetcostError::ConfigError(_) => 500,
            MeetcostError::ValidationError(_) => 400,
            MeetcostError::ExternalServiceError { .. } => 502,
            MeetcostError::UnavailableError(_) => 503,
            MeetcostError::NotFoundError(_) => 404,
            MeetcostError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, MeetcostError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, MeetcostError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, MeetcostError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| internal_error(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, MeetcostError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| internal_error(format!("{}: {}", f(), error)))
    }
}

impl From<serde_json::Error> for MeetcostError {
    fn from(err: serde_json::Error) -> Self {
        MeetcostError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for MeetcostError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => MeetcostError::NotFoundError(err.to_string()),
            _ => MeetcostError::InternalError(err.to_string()),
        }
    }
}

pub fn config_error<T: fmt::Display>(message: T) -> MeetcostError {
    MeetcostError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> MeetcostError {
    MeetcostError::ValidationError(message.to_string())
}

pub fn unavailable<T: fmt::Display>(message: T) -> MeetcostError {
    MeetcostError::UnavailableError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> MeetcostError {
    MeetcostError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> MeetcostError {
    MeetcostError::InternalError(message.to_string())
}
