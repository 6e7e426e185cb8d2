use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use super::session_cookie;
use super::ApiError;
use super::ApiSuccess;
use super::SessionData;
use crate::domain::account::models::Username;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequestBody>,
) -> Result<(CookieJar, ApiSuccess<SessionData>), ApiError> {
    // An unusable handle is just bad credentials, not a validation hint
    let username = Username::new(body.username)
        .map_err(|_| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    let session = state
        .account_service
        .login(&username, &body.password)
        .await
        .map_err(ApiError::from)?;

    let jar = jar.add(session_cookie(session.token.clone()));

    Ok((
        jar,
        ApiSuccess::new(StatusCode::OK, SessionData::from(&session)),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}
