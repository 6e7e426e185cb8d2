use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::access::CallerIdentity;
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::CommentId;
use crate::inbound::http::router::AppState;

pub async fn delete_comment(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let comment_id = CommentId::from_string(&id).map_err(CommentError::from)?;

    state
        .comment_service
        .delete_comment(&caller, &comment_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
