use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use auth::Role;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_comment::create_comment;
use super::handlers::create_event::create_event;
use super::handlers::delete_account::delete_account;
use super::handlers::delete_comment::delete_comment;
use super::handlers::delete_event::delete_event;
use super::handlers::google_login::google_login;
use super::handlers::list_accounts::list_accounts;
use super::handlers::list_event_comments::list_event_comments;
use super::handlers::list_events::list_events;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::register_admin::register_admin;
use super::middleware::guard_access;
use super::middleware::AccessGuard;
use crate::domain::account::ports::AccountServicePort;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::event::ports::EventServicePort;

/// Shared application state.
///
/// Services are held as port trait objects so tests can substitute
/// in-memory adapters behind the same router.
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountServicePort>,
    pub event_service: Arc<dyn EventServicePort>,
    pub comment_service: Arc<dyn CommentServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/google", post(google_login))
        .route("/api/accounts", post(register))
        .route("/api/events", get(list_events))
        .route("/api/comments/event/:event_id", get(list_event_comments));

    let authenticated_routes = Router::new()
        .route("/api/events", post(create_event))
        .route("/api/events/:event_id", delete(delete_event))
        .route("/api/comments", post(create_comment))
        .route("/api/comments/:comment_id", delete(delete_comment))
        .route_layer(middleware::from_fn_with_state(
            AccessGuard::any_authenticated(state.clone()),
            guard_access,
        ));

    let admin_routes = Router::new()
        .route("/api/accounts", get(list_accounts))
        .route("/api/accounts/admin", post(register_admin))
        .route("/api/accounts/:account_id", delete(delete_account))
        .route_layer(middleware::from_fn_with_state(
            AccessGuard::restricted_to(state.clone(), &[Role::Admin]),
            guard_access,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(authenticated_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
