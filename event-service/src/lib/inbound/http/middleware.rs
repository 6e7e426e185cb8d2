use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;
use auth::Role;

use crate::domain::access;
use crate::domain::access::CallerIdentity;
use crate::domain::account::models::AccountId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Name of the cookie carrying an issued token.
pub const TOKEN_COOKIE: &str = "token";

/// Per-route access guard configuration.
///
/// An empty `allowed_roles` slice means any authenticated identity may
/// pass; a non-empty one additionally requires role membership.
#[derive(Clone)]
pub struct AccessGuard {
    state: AppState,
    allowed_roles: &'static [Role],
}

impl AccessGuard {
    pub fn any_authenticated(state: AppState) -> Self {
        Self {
            state,
            allowed_roles: &[],
        }
    }

    pub fn restricted_to(state: AppState, allowed_roles: &'static [Role]) -> Self {
        Self {
            state,
            allowed_roles,
        }
    }
}

/// Middleware enforcing authentication (and optionally a role set) on a
/// route.
///
/// Token extraction is an ordered list of carriers: the `token` cookie is
/// consulted first, then the `Authorization: Bearer` header. Every
/// verification failure collapses to one external message; the reason is
/// only logged.
pub async fn guard_access(
    State(guard): State<AccessGuard>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token(&req).ok_or_else(|| {
        ApiError::Unauthorized("No token provided".to_string()).into_response()
    })?;

    let claims = guard
        .state
        .authenticator
        .validate_token(&token)
        .map_err(|e| {
            tracing::warn!(reason = %e, "Token validation failed");
            ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
        })?;

    let account_id = AccountId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(reason = %e, "Token subject is not a valid account id");
        ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
    })?;

    if !access::role_allowed(claims.role, guard.allowed_roles) {
        return Err(
            ApiError::Forbidden("Insufficient role".to_string()).into_response()
        );
    }

    req.extensions_mut().insert(CallerIdentity {
        account_id,
        role: claims.role,
    });

    Ok(next.run(req).await)
}

/// Ordered token extraction: cookie carrier first, then bearer header.
fn extract_token(req: &Request) -> Option<String> {
    let jar = CookieJar::from_headers(req.headers());
    if let Some(cookie) = jar.get(TOKEN_COOKIE) {
        return Some(cookie.value().to_string());
    }

    req.headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|value| value.to_string())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;

    use super::*;

    fn request(headers: &[(&str, &str)]) -> Request {
        let mut builder = http::Request::builder().uri("/api/events");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_extract_prefers_cookie_over_header() {
        let req = request(&[
            ("cookie", "token=from-cookie"),
            ("authorization", "Bearer from-header"),
        ]);
        assert_eq!(extract_token(&req), Some("from-cookie".to_string()));
    }

    #[test]
    fn test_extract_falls_back_to_bearer_header() {
        let req = request(&[("authorization", "Bearer from-header")]);
        assert_eq!(extract_token(&req), Some("from-header".to_string()));
    }

    #[test]
    fn test_extract_ignores_non_bearer_authorization() {
        let req = request(&[("authorization", "Basic dXNlcjpwYXNz")]);
        assert_eq!(extract_token(&req), None);
    }

    #[test]
    fn test_extract_ignores_other_cookies() {
        let req = request(&[("cookie", "session=abc; theme=dark")]);
        assert_eq!(extract_token(&req), None);
    }

    #[test]
    fn test_extract_with_no_carriers() {
        let req = request(&[]);
        assert_eq!(extract_token(&req), None);
    }
}
