//! Error types for calprint.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while building, collecting or writing events.
#[derive(Error, Debug)]
pub enum CalPrintError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Calendar event already added: {0}")]
    Duplicate(Uuid),

    #[error("No calendar events have been added")]
    NoEvents,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event file error: {0}")]
    EventFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calprint operations.
pub type CalPrintResult<T> = Result<T, CalPrintError>;
