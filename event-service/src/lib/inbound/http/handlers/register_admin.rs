use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::register::RegisterRequestBody;
use super::ApiError;
use super::ApiSuccess;
use super::SessionData;
use crate::domain::access::CallerIdentity;
use crate::inbound::http::router::AppState;

/// Admin registration. The route is behind the admin role gate, and the
/// service checks the caller's role again before touching anything else.
pub async fn register_admin(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<ApiSuccess<SessionData>, ApiError> {
    state
        .account_service
        .register_admin(caller.role, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref session| ApiSuccess::new(StatusCode::CREATED, session.into()))
}
