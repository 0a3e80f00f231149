//! HTTP server layer
//!
//! Axum server with:
//! - HTML list view and form submit
//! - Request tracing
//! - Graceful shutdown
//! - Optional debug error pages

pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod templates;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use templates::Templates;
