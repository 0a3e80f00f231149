//! Message pages: list view and form submit

use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, DefaultBodyLimit, State},
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};

use crate::http::error::ApiError;
use crate::http::server::AppState;

const FIELD: &str = "new_message";

/// Body of `POST /submit`, as raw pairs in submission order
pub type SubmitForm = Vec<(String, String)>;

/// First `new_message` value, if any. Repeated keys keep the first.
pub fn first_message(form: SubmitForm) -> Option<String> {
    form.into_iter()
        .find(|(key, _)| key == FIELD)
        .map(|(_, value)| value)
}

/// GET / - render every stored message
async fn list_view(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let messages = state.store.list_messages().await?;
    let page = state.templates.render_index(&messages)?;
    Ok(Html(page))
}

/// POST /submit - store `new_message` and go back to the list
///
/// A missing field, or a request without a form content type, stores NULL.
/// Any other unreadable body is answered with the rejection's own status.
async fn submit(
    State(state): State<Arc<AppState>>,
    form: Result<Form<SubmitForm>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let content = match form {
        Ok(Form(pairs)) => first_message(pairs),
        Err(FormRejection::InvalidFormContentType(rejection)) => {
            tracing::debug!("submit without form body, storing NULL: {}", rejection);
            None
        }
        Err(rejection) => return Err(ApiError::Rejected(rejection)),
    };

    state.store.insert_message(content.as_deref()).await?;

    Ok(Redirect::to("/"))
}

/// Message routes
///
/// `/submit` has no body limit: content is stored whatever its size.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_view))
        .route("/submit", post(submit).layer(DefaultBodyLimit::disable()))
}
