use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::SessionData;
use crate::domain::account::errors::PasswordRuleError;
use crate::domain::account::errors::UsernameError;
use crate::domain::account::models::Password;
use crate::domain::account::models::RegisterAccountCommand;
use crate::domain::account::models::Username;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<ApiSuccess<SessionData>, ApiError> {
    state
        .account_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref session| ApiSuccess::new(StatusCode::CREATED, session.into()))
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
pub(crate) enum ParseRegisterRequestError {
    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordRuleError),
}

impl RegisterRequestBody {
    pub(crate) fn try_into_command(
        self,
    ) -> Result<RegisterAccountCommand, ParseRegisterRequestError> {
        let username = Username::new(self.username)?;
        let password = Password::new(self.password)?;
        Ok(RegisterAccountCommand::new(username, password))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
