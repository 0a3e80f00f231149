//! Debug error pages
//!
//! Only mounted when the server runs in debug mode. Error responses that
//! carry an [`ErrorDetail`] get their body replaced with the diagnostic page.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{Html, IntoResponse, Response};

use super::error::ErrorDetail;
use super::server::AppState;

pub async fn debug_errors(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let mut response = next.run(req).await;

    let Some(ErrorDetail(detail)) = response.extensions_mut().remove::<ErrorDetail>() else {
        return response;
    };

    let status = response.status();
    match state.templates.render_error(&status.to_string(), &detail) {
        Ok(page) => (status, Html(page)).into_response(),
        Err(e) => {
            tracing::warn!("failed to render debug page: {}", e);
            (status, detail).into_response()
        }
    }
}
