use thiserror::Error;

/// Error for EventId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for event field validation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventValidationError {
    #[error("Event title is required")]
    MissingTitle,

    #[error("Event description is required")]
    MissingDescription,
}

/// Top-level error for all event operations
#[derive(Debug, Clone, Error)]
pub enum EventError {
    #[error("Invalid event ID: {0}")]
    InvalidEventId(#[from] EventIdError),

    #[error("Invalid event: {0}")]
    Validation(#[from] EventValidationError),

    #[error("Event not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for EventError {
    fn from(err: anyhow::Error) -> Self {
        EventError::Unknown(err.to_string())
    }
}
