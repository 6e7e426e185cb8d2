use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::CommentData;
use crate::domain::event::errors::EventError;
use crate::domain::event::models::EventId;
use crate::inbound::http::router::AppState;

pub async fn list_event_comments(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<ApiSuccess<Vec<CommentData>>, ApiError> {
    let event_id = EventId::from_string(&event_id).map_err(EventError::from)?;

    state
        .comment_service
        .list_for_event(&event_id)
        .await
        .map_err(ApiError::from)
        .map(|comments| {
            let data: Vec<CommentData> = comments.iter().map(CommentData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}
