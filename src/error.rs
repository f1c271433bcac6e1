//! Error types for the Libretto client

use indexmap::IndexMap;
use thiserror::Error;

/// Field-keyed validation messages, as carried by HTTP 400 responses
/// and by local form validation.
pub type FieldErrors = IndexMap<String, String>;

/// Main application error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Request failed: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("Something went wrong.")]
    Decode(String),
}

impl AppError {
    /// Field-keyed messages when this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::Validation(fields) => Some(fields),
            _ => None,
        }
    }

    /// HTTP status of the response that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Validation(_) => Some(400),
            _ => None,
        }
    }

    /// Message suitable for a user-facing notification.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Http(message) => message.clone(),
            AppError::Api { message, .. } => message.clone(),
            AppError::Validation(_) => "Validation failed".to_string(),
            AppError::Decode(_) => "Something went wrong.".to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Http(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

/// Result type alias for client operations
pub type AppResult<T> = Result<T, AppError>;
