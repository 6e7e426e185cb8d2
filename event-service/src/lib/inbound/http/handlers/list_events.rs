use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::EventData;
use crate::domain::account::errors::AccountError;
use crate::domain::account::models::AccountId;
use crate::domain::event::models::EventListQuery;
use crate::domain::event::models::EventSortKey;
use crate::inbound::http::router::AppState;

pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<ListEventsParams>,
) -> Result<ApiSuccess<Vec<EventData>>, ApiError> {
    let creator = params
        .creator
        .as_deref()
        .map(AccountId::from_string)
        .transpose()
        .map_err(AccountError::from)?;

    let query = EventListQuery {
        page: params.page.unwrap_or(1),
        limit: params.limit.unwrap_or(10),
        sort_by: params.sort_by.unwrap_or_default(),
        creator,
    };

    state
        .event_service
        .list_events(query)
        .await
        .map_err(ApiError::from)
        .map(|events| {
            let data: Vec<EventData> = events.iter().map(EventData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}

/// Listing query string: `?page=2&limit=5&sort_by=title&creator=<id>`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListEventsParams {
    page: Option<u32>,
    limit: Option<u32>,
    sort_by: Option<EventSortKey>,
    creator: Option<String>,
}
