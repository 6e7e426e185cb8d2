use thiserror::Error;

use crate::domain::access::AccessDenied;

/// Error for CommentId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for comment field validation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentValidationError {
    #[error("Comment content is required")]
    MissingContent,
}

/// Top-level error for all comment operations
#[derive(Debug, Clone, Error)]
pub enum CommentError {
    #[error("Invalid comment ID: {0}")]
    InvalidCommentId(#[from] CommentIdError),

    #[error("Invalid comment: {0}")]
    Validation(#[from] CommentValidationError),

    #[error("Comment not found: {0}")]
    NotFound(String),

    #[error("You are not authorized to delete this comment")]
    Forbidden(#[from] AccessDenied),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for CommentError {
    fn from(err: anyhow::Error) -> Self {
        CommentError::Unknown(err.to_string())
    }
}
