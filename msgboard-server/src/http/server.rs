//! Axum server setup
//!
//! Server skeleton with:
//! - Binds all interfaces on port 5000 by default
//! - Tracing middleware
//! - Debug error pages when `debug` is set
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::{middleware, routes, templates::Templates};
use crate::db::MessageStore;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:5000)
    pub bind_addr: SocketAddr,

    /// Show error chains on 500 pages (default: false)
    ///
    /// WARNING: leaks database errors to clients. Development only.
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            debug: false,
        }
    }
}

/// Shared application state
pub struct AppState {
    pub store: Arc<dyn MessageStore>,
    pub templates: Templates,
}

impl AppState {
    pub fn new(store: Arc<dyn MessageStore>) -> Result<Self, ServerError> {
        Ok(Self {
            store,
            templates: Templates::new()?,
        })
    }
}

/// Build the application router
pub fn build_router(state: Arc<AppState>, debug: bool) -> Router {
    let mut app = Router::new()
        .merge(routes::health::router())
        .merge(routes::messages::router());

    if debug {
        tracing::warn!("Debug error pages enabled - do not expose this server publicly");
        app = app.layer(from_fn_with_state(state.clone(), middleware::debug_errors));
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(MySqlStore::new(&DbConfig::from_env()));
/// run_server(store, ServerConfig::default()).await?;
/// ```
pub async fn run_server(
    store: Arc<dyn MessageStore>,
    config: ServerConfig,
) -> Result<(), ServerError> {
    let state = Arc::new(AppState::new(store)?);
    let app = build_router(state, config.debug);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::db::testing::{FailingStore, MemoryStore};

    fn app(store: Arc<dyn MessageStore>, debug: bool) -> Router {
        let state = Arc::new(AppState::new(store).unwrap());
        build_router(state, debug)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 5000);
        assert!(config.bind_addr.ip().is_unspecified());
        assert!(!config.debug);
    }

    #[tokio::test]
    async fn health_endpoint() {
        let (status, body) = get(app(Arc::new(FailingStore), false), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn index_renders_empty_store() {
        let (status, body) = get(app(Arc::new(MemoryStore::default()), false), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Messages</h1>"));
    }

    #[tokio::test]
    async fn errors_are_generic_without_debug() {
        let (status, body) = get(app(Arc::new(FailingStore), false), "/").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("database error"));
    }

    #[tokio::test]
    async fn errors_show_detail_in_debug() {
        let (status, body) = get(app(Arc::new(FailingStore), true), "/").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("database error"));
        assert!(body.contains("<pre>"));
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let (status, _) = get(app(Arc::new(MemoryStore::default()), true), "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
