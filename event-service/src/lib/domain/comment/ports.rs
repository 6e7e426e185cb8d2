use async_trait::async_trait;

use crate::domain::access::CallerIdentity;
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::CreateCommentCommand;
use crate::domain::event::models::EventId;

/// Port for comment domain service operations.
#[async_trait]
pub trait CommentServicePort: Send + Sync + 'static {
    /// Create a new comment stamped with its author.
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn create_comment(&self, command: CreateCommentCommand)
        -> Result<Comment, CommentError>;

    /// List comments for an event.
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn list_for_event(&self, event_id: &EventId) -> Result<Vec<Comment>, CommentError>;

    /// Delete a comment on behalf of a caller.
    ///
    /// Absence is checked before ownership, so a missing comment reads as
    /// `NotFound` regardless of who asks.
    ///
    /// # Errors
    /// * `NotFound` - Comment does not exist
    /// * `Forbidden` - Caller is neither the author nor an admin
    /// * `Database` - Store operation failed
    async fn delete_comment(
        &self,
        caller: &CallerIdentity,
        id: &CommentId,
    ) -> Result<(), CommentError>;
}

/// Persistence operations for the comment aggregate.
#[async_trait]
pub trait CommentRepository: Send + Sync + 'static {
    /// Persist a new comment.
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn create(&self, comment: Comment) -> Result<Comment, CommentError>;

    /// Retrieve a comment by identifier.
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError>;

    /// Retrieve all comments for an event, oldest first.
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn list_for_event(&self, event_id: &EventId) -> Result<Vec<Comment>, CommentError>;

    /// Remove a comment.
    ///
    /// # Errors
    /// * `NotFound` - Comment does not exist
    /// * `Database` - Store operation failed
    async fn delete(&self, id: &CommentId) -> Result<(), CommentError>;
}
