use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use super::session_cookie;
use super::ApiError;
use super::ApiSuccess;
use super::SessionData;
use crate::inbound::http::router::AppState;

/// Federated login: the opaque provider assertion is verified by the
/// identity verifier; an account is created on first sight.
pub async fn google_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<GoogleLoginRequestBody>,
) -> Result<(CookieJar, ApiSuccess<SessionData>), ApiError> {
    let session = state
        .account_service
        .login_federated(&body.id_token)
        .await
        .map_err(ApiError::from)?;

    let jar = jar.add(session_cookie(session.token.clone()));

    Ok((
        jar,
        ApiSuccess::new(StatusCode::OK, SessionData::from(&session)),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GoogleLoginRequestBody {
    id_token: String,
}
