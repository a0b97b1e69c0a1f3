use core::fmt;

use crate::domain::validation::ValidationError;

#[derive(Debug)]
pub enum AppError {
    Config(String),
    Io(std::io::Error),
    Json(serde_json::Error),
    NotFound(String),
    ParseCommand(String),
    ParseId(String),
    Storage(String),
    Validation(ValidationError),
}

impl AppError {
    /// Errors the interactive view reports and then keeps running.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::NotFound(_)
                | AppError::ParseCommand(_)
                | AppError::ParseId(_)
                | AppError::Storage(_)
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::ParseId(err.to_string())
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => {
                write!(f, "Invalid configuration: {}", msg)
            }
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "Malformed contact data: {}", e)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized command: '{}'", cmd)
            }
            AppError::ParseId(msg) => {
                write!(f, "Invalid contact id: {}", msg)
            }
            AppError::Storage(msg) => {
                write!(f, "Storage failure: {}", msg)
            }
            AppError::Validation(err) => {
                write!(f, "Validation failed: {}", err)
            }
        }
    }
}

impl std::error::Error for AppError {}
