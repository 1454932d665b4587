use crate::{
    config::{Config, ConfigError},
    doc::ApiDoc,
    error::ErrorResponse,
    routes::{course, health},
    state::AppState,
    utils::shutdown::shutdown_signal,
};
use axum::{
    Json, Router,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use database::{db::create_connection, seed::seed_courses};
use log::{error, info};
use migration::{Migrator, MigratorTrait};
use sea_orm::DbErr;
use std::{any::Any, io, net::SocketAddr};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer, compression::CompressionLayer,
    set_header::SetResponseHeaderLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// 30 days
const HSTS_VALUE: &str = "max-age=2592000";

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to connect to the database: {0}")]
    Connection(#[source] DbErr),

    #[error("Failed to apply migrations: {0}")]
    Migration(#[source] DbErr),

    #[error("Failed to seed the database: {0}")]
    Seed(#[source] DbErr),

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] io::Error),
}

/// Opens the connection pool, applies pending migrations and seeds the database
///
/// Must run once, before the server starts accepting requests.
pub async fn initialize(config: &Config) -> Result<AppState, StartupError> {
    let db = create_connection(&config.database_url, config.max_connections)
        .await
        .map_err(StartupError::Connection)?;
    info!("Database connection pool created");

    Migrator::up(&db, None)
        .await
        .map_err(StartupError::Migration)?;
    info!("Database migrations applied");

    seed_courses(&db).await.map_err(StartupError::Seed)?;

    Ok(AppState { db })
}

/// Builds the router with every route and middleware
pub fn app(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .merge(course::router())
        .route("/health", get(health::health))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .layer(CatchPanicLayer::custom(handle_panic));

    if config.environment.is_development() {
        router
    } else {
        router.layer(SetResponseHeaderLayer::if_not_present(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static(HSTS_VALUE),
        ))
    }
}

/// Loads the configuration, initializes the application and serves it until shutdown
pub async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;
    let state = initialize(&config).await?;
    let app = app(state, &config);

    let listener = TcpListener::bind(config.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.bind_address,
            source,
        })?;
    info!(
        "Running axum on http://{} ({:?})",
        config.bind_address, config.environment
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    Ok(())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    error!("Request handler panicked: {detail}");

    let status = StatusCode::INTERNAL_SERVER_ERROR;
    let body = Json(ErrorResponse {
        error: status.to_string(),
        message: "An error occurred while processing your request".to_string(),
    });

    (status, body).into_response()
}
