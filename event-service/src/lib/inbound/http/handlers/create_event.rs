use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::EventData;
use crate::domain::access::CallerIdentity;
use crate::domain::event::errors::EventError;
use crate::domain::event::models::CreateEventCommand;
use crate::inbound::http::router::AppState;

pub async fn create_event(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
    Json(body): Json<CreateEventRequestBody>,
) -> Result<ApiSuccess<EventData>, ApiError> {
    let command =
        CreateEventCommand::new(body.title, body.description, body.date, caller.account_id)
            .map_err(EventError::from)?;

    state
        .event_service
        .create_event(command)
        .await
        .map_err(ApiError::from)
        .map(|ref event| ApiSuccess::new(StatusCode::CREATED, event.into()))
}

/// HTTP request body for creating an event (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateEventRequestBody {
    title: String,
    description: String,
    date: DateTime<Utc>,
}
