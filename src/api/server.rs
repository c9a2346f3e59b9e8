//! Remap API server implementation
//!
//! HTTP API server using Axum. Exposes the remap endpoint plus health and
//! version info.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers;
use crate::mapping::{AzureConnector, ModelConnector};

/// Default request body limit (base64 workbooks are a third larger than the file)
pub const DEFAULT_MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

/// API Server configuration
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
    /// Upper bound for each model call; `None` waits indefinitely
    pub model_timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            model_timeout: None,
        }
    }
}

/// Shared application state. Holds no model credentials: every request
/// brings its own.
#[derive(Clone)]
pub struct AppState {
    pub version: String,
    pub connector: Arc<dyn ModelConnector>,
}

impl AppState {
    pub fn new(connector: Arc<dyn ModelConnector>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            connector,
        }
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/version", get(handlers::version))
        .route("/api/remap_excel", post(handlers::remap_excel))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Run the API server
pub async fn run_api_server(config: ApiConfig) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "remap_server=info,excel_remap=info,tower_http=info".into()
            }),
        )
        .init();

    let connector = AzureConnector::new(config.model_timeout)?;
    let state = Arc::new(AppState::new(Arc::new(connector)));
    let app = router(state, config.max_body_bytes);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Excel Remap API Server starting on http://{}", addr);
    info!("   Endpoint: POST /api/remap_excel");
    info!("   Health: /health, Version: /version");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Excel Remap API Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, stopping server...");
}
