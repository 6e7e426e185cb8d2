use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::CommentData;
use crate::domain::access::CallerIdentity;
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::CreateCommentCommand;
use crate::domain::event::errors::EventError;
use crate::domain::event::models::EventId;
use crate::inbound::http::router::AppState;

pub async fn create_comment(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
    Json(body): Json<CreateCommentRequestBody>,
) -> Result<ApiSuccess<CommentData>, ApiError> {
    let event = EventId::from_string(&body.event).map_err(EventError::from)?;

    let command = CreateCommentCommand::new(body.content, event, caller.account_id)
        .map_err(CommentError::from)?;

    state
        .comment_service
        .create_comment(command)
        .await
        .map_err(ApiError::from)
        .map(|ref comment| ApiSuccess::new(StatusCode::CREATED, comment.into()))
}

/// HTTP request body for creating a comment (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCommentRequestBody {
    content: String,
    event: String,
}
