use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::SameSite;
use serde::Serialize;

use crate::domain::account::errors::AccountError;
use crate::domain::comment::errors::CommentError;
use crate::domain::event::errors::EventError;
use crate::inbound::http::middleware::TOKEN_COOKIE;

pub mod create_comment;
pub mod create_event;
pub mod delete_account;
pub mod delete_comment;
pub mod delete_event;
pub mod google_login;
pub mod list_accounts;
pub mod list_event_comments;
pub mod list_events;
pub mod login;
pub mod register;
pub mod register_admin;

/// The cookie carrier for an issued token: http-only, same-site, one day.
pub(crate) fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::days(1))
        .path("/")
        .build()
}

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// The single place where the error taxonomy becomes transport statuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::NotFound(_) => ApiError::NotFound(err.to_string()),
            AccountError::UsernameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            // One external message for every failed credential or assertion
            AccountError::InvalidCredentials | AccountError::IdentityRejected => {
                ApiError::Unauthorized(err.to_string())
            }
            AccountError::AdminRequired => ApiError::Forbidden(err.to_string()),
            AccountError::InvalidAccountId(_)
            | AccountError::InvalidUsername(_)
            | AccountError::InvalidPassword(_) => ApiError::UnprocessableEntity(err.to_string()),
            AccountError::Database(_)
            | AccountError::IdentityProviderUnavailable(_)
            | AccountError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<EventError> for ApiError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::NotFound(_) => ApiError::NotFound(err.to_string()),
            EventError::InvalidEventId(_) | EventError::Validation(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            EventError::Database(_) | EventError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<CommentError> for ApiError {
    fn from(err: CommentError) -> Self {
        match err {
            CommentError::NotFound(_) => ApiError::NotFound(err.to_string()),
            CommentError::Forbidden(_) => ApiError::Forbidden(err.to_string()),
            CommentError::InvalidCommentId(_) | CommentError::Validation(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            CommentError::Database(_) | CommentError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Public account view shared by the auth and account handlers.
///
/// Identifier, handle, and role only; the stored hash never crosses this
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountData {
    pub id: String,
    pub username: String,
    pub role: String,
}

impl From<&crate::domain::account::models::Account> for AccountData {
    fn from(account: &crate::domain::account::models::Account) -> Self {
        Self {
            id: account.id.to_string(),
            username: account.username.as_str().to_string(),
            role: account.role.to_string(),
        }
    }
}

/// Event view returned by the event handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: chrono::DateTime<chrono::Utc>,
    pub creator: String,
}

impl From<&crate::domain::event::models::Event> for EventData {
    fn from(event: &crate::domain::event::models::Event) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date,
            creator: event.creator.to_string(),
        }
    }
}

/// Comment view returned by the comment handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentData {
    pub id: String,
    pub content: String,
    pub event: String,
    pub author: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&crate::domain::comment::models::Comment> for CommentData {
    fn from(comment: &crate::domain::comment::models::Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            content: comment.content.clone(),
            event: comment.event.to_string(),
            author: comment.author.to_string(),
            created_at: comment.created_at,
        }
    }
}

/// Login/registration response body: the account view plus the issued
/// token for non-browser clients (browsers get the cookie as well).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionData {
    pub account: AccountData,
    pub token: String,
}

impl From<&crate::domain::account::models::AuthenticatedAccount> for SessionData {
    fn from(session: &crate::domain::account::models::AuthenticatedAccount) -> Self {
        Self {
            account: (&session.account).into(),
            token: session.token.clone(),
        }
    }
}
