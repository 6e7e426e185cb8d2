use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::access;
use crate::domain::access::CallerIdentity;
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::CreateCommentCommand;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::event::models::EventId;

/// Domain service implementation for comment operations.
pub struct CommentService<CR>
where
    CR: CommentRepository,
{
    repository: Arc<CR>,
}

impl<CR> CommentService<CR>
where
    CR: CommentRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CommentServicePort for CommentService<CR>
where
    CR: CommentRepository,
{
    async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> Result<Comment, CommentError> {
        let comment = Comment {
            id: CommentId::new(),
            content: command.content,
            event: command.event,
            author: command.author,
            created_at: Utc::now(),
        };

        self.repository.create(comment).await
    }

    async fn list_for_event(&self, event_id: &EventId) -> Result<Vec<Comment>, CommentError> {
        self.repository.list_for_event(event_id).await
    }

    async fn delete_comment(
        &self,
        caller: &CallerIdentity,
        id: &CommentId,
    ) -> Result<(), CommentError> {
        // Absence first, ownership second
        let comment = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CommentError::NotFound(id.to_string()))?;

        access::ensure_owner_or_admin(caller, &comment.author)?;

        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use auth::Role;
    use mockall::mock;

    use super::*;
    use crate::domain::account::models::AccountId;

    mock! {
        pub TestCommentRepository {}

        #[async_trait]
        impl CommentRepository for TestCommentRepository {
            async fn create(&self, comment: Comment) -> Result<Comment, CommentError>;
            async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError>;
            async fn list_for_event(&self, event_id: &EventId) -> Result<Vec<Comment>, CommentError>;
            async fn delete(&self, id: &CommentId) -> Result<(), CommentError>;
        }
    }

    fn comment_by(author: AccountId) -> Comment {
        Comment {
            id: CommentId::new(),
            content: "nice event".to_string(),
            event: EventId::new(),
            author,
            created_at: Utc::now(),
        }
    }

    fn caller(account_id: AccountId, role: Role) -> CallerIdentity {
        CallerIdentity { account_id, role }
    }

    #[tokio::test]
    async fn test_author_may_delete_own_comment() {
        let mut repository = MockTestCommentRepository::new();
        let author = AccountId::new();
        let comment = comment_by(author);

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(comment.clone())));
        repository.expect_delete().times(1).returning(|_| Ok(()));

        let service = CommentService::new(Arc::new(repository));

        let result = service
            .delete_comment(&caller(author, Role::User), &CommentId::new())
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_admin_may_delete_any_comment() {
        let mut repository = MockTestCommentRepository::new();
        let comment = comment_by(AccountId::new());

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(comment.clone())));
        repository.expect_delete().times(1).returning(|_| Ok(()));

        let service = CommentService::new(Arc::new(repository));

        let result = service
            .delete_comment(&caller(AccountId::new(), Role::Admin), &CommentId::new())
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_other_user_may_not_delete_comment() {
        let mut repository = MockTestCommentRepository::new();
        let comment = comment_by(AccountId::new());

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(comment.clone())));
        // The comment must survive the denied attempt
        repository.expect_delete().times(0);

        let service = CommentService::new(Arc::new(repository));

        let result = service
            .delete_comment(&caller(AccountId::new(), Role::User), &CommentId::new())
            .await;
        assert!(matches!(result, Err(CommentError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_missing_comment_is_not_found_before_ownership() {
        let mut repository = MockTestCommentRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_delete().times(0);

        let service = CommentService::new(Arc::new(repository));

        // Even an admin sees NotFound for a missing comment
        let result = service
            .delete_comment(&caller(AccountId::new(), Role::Admin), &CommentId::new())
            .await;
        assert!(matches!(result, Err(CommentError::NotFound(_))));
    }
}
