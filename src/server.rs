//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration with all endpoints and file services
//! - Middleware stack (logging, compression, CORS, timeouts)
//! - Graceful shutdown handling

use crate::config::{CorsOrigins, ServerConfig};
use crate::middleware::{log_requests, request_id};
use crate::routes::{health, not_found, validate};
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method, StatusCode};
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware
///
/// Routes are divided into:
/// - API routes: `POST /api/validate-coordinates` (body-size limited)
/// - Probe routes: `GET /health`, `GET /ready`
/// - Frontend routes: `GET /` and `GET /static/*` serving the static bundle
///
/// Middleware stack (outermost first):
/// 1. Request ID tracking
/// 2. Request logging
/// 3. CORS
/// 4. Compression
/// 5. Timeout handling
///
/// Request ID tracking wraps the logging layer so both per-request log lines
/// carry the id.
pub fn build_router(state: Arc<AppState>) -> Router {
    // CORS layer
    let cors = cors_layer(&state.config);

    // API routes (upload size limited)
    let api_routes = Router::new()
        .route(
            "/api/validate-coordinates",
            post(validate::validate_coordinates),
        )
        .layer(DefaultBodyLimit::max(state.config.max_body_size()));

    // Probe routes
    let probe_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check));

    // Frontend file services
    let frontend_routes = Router::new()
        .route_service("/", ServeFile::new(state.index_file.clone()))
        .nest_service("/static", ServeDir::new(state.static_root.clone()));

    // Combine routes
    Router::new()
        .merge(api_routes)
        .merge(probe_routes)
        .merge(frontend_routes)
        .fallback(not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.timeout(),
        ))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(from_fn(log_requests))
        .layer(from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS layer for the configured origin posture
///
/// Browsers reject credentials combined with wildcard origins, so
/// credentials are only enabled together with an explicit origin list.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    match config.cors_origins() {
        CorsOrigins::Any => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsOrigins::List(origins) => CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true),
        CorsOrigins::Disabled => CorsLayer::new(),
    }
}

/// Start the polymark HTTP server
///
/// Initializes the server with the provided configuration and starts listening
/// for incoming HTTP requests. This function will block until the server is
/// shut down via SIGTERM or Ctrl+C.
///
/// # Arguments
///
/// * `config` - Server configuration including bind address, port, timeouts, etc.
///
/// # Returns
///
/// Returns `Ok(())` on successful shutdown, or an error if the server fails
/// to start.
///
/// # Example
///
/// ```rust,no_run
/// use polymark::ServerConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = ServerConfig::load()?;
///     polymark::start_server(config).await?;
///     Ok(())
/// }
/// ```
///
/// # Initialization
///
/// This function performs the following initialization steps:
/// 1. Sets up structured JSON logging with the configured log level
/// 2. Creates shared server state (config, frontend paths)
/// 3. Builds the Axum router with all routes and middleware
/// 4. Binds to the configured TCP address
/// 5. Starts the HTTP server with graceful shutdown support
///
/// # Shutdown
///
/// The server handles graceful shutdown on:
/// - SIGTERM (Unix/Linux)
/// - Ctrl+C (all platforms)
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .json()
        .init();

    // Create server state
    let state = Arc::new(AppState::new(config.clone()));

    // Build router
    let app = build_router(state);

    // Parse bind address
    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!("Starting polymark server on {}", addr);
    tracing::info!(
        "Timeout: {}s, Max upload: {}MB",
        config.timeout_secs,
        config.max_body_size_mb
    );
    tracing::info!(
        "CORS origins: '{}', Static dir: {}",
        config.allowed_origins,
        config.static_dir
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
