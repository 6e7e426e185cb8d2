use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::account::models::AccountId;
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::event::models::EventId;

pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn comment_from_row(row: &PgRow) -> Result<Comment, CommentError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| CommentError::Database(e.to_string()))?;
    let content: String = row
        .try_get("content")
        .map_err(|e| CommentError::Database(e.to_string()))?;
    let event: uuid::Uuid = row
        .try_get("event")
        .map_err(|e| CommentError::Database(e.to_string()))?;
    let author: uuid::Uuid = row
        .try_get("author")
        .map_err(|e| CommentError::Database(e.to_string()))?;
    let created_at = row
        .try_get("created_at")
        .map_err(|e| CommentError::Database(e.to_string()))?;

    Ok(Comment {
        id: CommentId(id),
        content,
        event: EventId(event),
        author: AccountId(author),
        created_at,
    })
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn create(&self, comment: Comment) -> Result<Comment, CommentError> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, content, event, author, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.id.0)
        .bind(&comment.content)
        .bind(comment.event.0)
        .bind(comment.author.0)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| CommentError::Database(e.to_string()))?;

        Ok(comment)
    }

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError> {
        let row = sqlx::query(
            r#"
            SELECT id, content, event, author, created_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CommentError::Database(e.to_string()))?;

        row.as_ref().map(comment_from_row).transpose()
    }

    async fn list_for_event(&self, event_id: &EventId) -> Result<Vec<Comment>, CommentError> {
        let rows = sqlx::query(
            r#"
            SELECT id, content, event, author, created_at
            FROM comments
            WHERE event = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(event_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CommentError::Database(e.to_string()))?;

        rows.iter().map(comment_from_row).collect()
    }

    async fn delete(&self, id: &CommentId) -> Result<(), CommentError> {
        let result = sqlx::query(
            r#"
            DELETE FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| CommentError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CommentError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
