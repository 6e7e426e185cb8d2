use std::sync::Arc;

use auth::Authenticator;
use event_service::config::Config;
use event_service::domain::account::service::AccountService;
use event_service::domain::comment::service::CommentService;
use event_service::domain::event::service::EventService;
use event_service::inbound::http::router::create_router;
use event_service::inbound::http::router::AppState;
use event_service::outbound::identity::GoogleIdentityVerifier;
use event_service::outbound::repositories::PostgresAccountRepository;
use event_service::outbound::repositories::PostgresCommentRepository;
use event_service::outbound::repositories::PostgresEventRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "event_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "event-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));
    let account_repository = Arc::new(PostgresAccountRepository::new(pg_pool.clone()));
    let event_repository = Arc::new(PostgresEventRepository::new(pg_pool.clone()));
    let comment_repository = Arc::new(PostgresCommentRepository::new(pg_pool));
    let identity_verifier = Arc::new(GoogleIdentityVerifier::new(config.google.client_id)?);

    let state = AppState {
        account_service: Arc::new(AccountService::new(
            account_repository,
            identity_verifier,
            Arc::clone(&authenticator),
            config.jwt.expiration_hours,
        )),
        event_service: Arc::new(EventService::new(event_repository)),
        comment_service: Arc::new(CommentService::new(comment_repository)),
        authenticator,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    Ok(())
}
