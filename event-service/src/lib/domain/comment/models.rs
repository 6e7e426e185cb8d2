use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::account::models::AccountId;
use crate::domain::comment::errors::CommentIdError;
use crate::domain::comment::errors::CommentValidationError;
use crate::domain::event::models::EventId;

/// Comment aggregate entity.
///
/// `author` is the ownership relation: set once at creation, compared by
/// the owner-or-admin policy on deletion, never traversed for cascading
/// effects.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub event: EventId,
    pub author: AccountId,
    pub created_at: DateTime<Utc>,
}

/// Comment unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a comment ID from its canonical string form.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, CommentIdError> {
        Uuid::parse_str(s)
            .map(CommentId)
            .map_err(|e| CommentIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new comment.
#[derive(Debug)]
pub struct CreateCommentCommand {
    pub content: String,
    pub event: EventId,
    pub author: AccountId,
}

impl CreateCommentCommand {
    /// Construct a create command, validating content presence.
    ///
    /// # Errors
    /// * `MissingContent` - Blank comment body
    pub fn new(
        content: String,
        event: EventId,
        author: AccountId,
    ) -> Result<Self, CommentValidationError> {
        if content.trim().is_empty() {
            return Err(CommentValidationError::MissingContent);
        }
        Ok(Self {
            content,
            event,
            author,
        })
    }
}
