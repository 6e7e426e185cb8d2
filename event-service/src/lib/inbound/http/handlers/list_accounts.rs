use axum::extract::State;
use axum::http::StatusCode;

use super::AccountData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<AccountData>>, ApiError> {
    state
        .account_service
        .list_accounts()
        .await
        .map_err(ApiError::from)
        .map(|accounts| {
            let data: Vec<AccountData> = accounts.iter().map(AccountData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}
