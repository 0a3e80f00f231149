//! API error type with IntoResponse
//!
//! Store and template failures map to a generic 500 page. The full error
//! chain rides along as an [`ErrorDetail`] extension for the debug-errors
//! middleware. Unreadable request bodies keep axum's own status.

use std::error::Error as _;

use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::db::DbError;

const GENERIC_500: &str = "<!DOCTYPE html>\n<html><head><title>500 Internal Server Error</title></head>\
<body><h1>Internal Server Error</h1></body></html>\n";

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Store failure (500, logged)
    #[error(transparent)]
    Database(#[from] DbError),

    /// Template failure (500, logged)
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Request body could not be read as a form (status from axum)
    #[error("rejected form: {0}")]
    Rejected(#[from] FormRejection),
}

/// Diagnostic text attached to error responses
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

impl ApiError {
    /// The error and all of its sources, one per line
    pub fn chain(&self) -> String {
        let mut out = self.to_string();
        let mut source = self.source();
        while let Some(e) = source {
            out.push_str("\ncaused by: ");
            out.push_str(&e.to_string());
            source = e.source();
        }
        out
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = self.chain();
        match self {
            Self::Database(_) => tracing::error!("Database error: {}", detail),
            Self::Template(_) => tracing::error!("Template error: {}", detail),
            Self::Rejected(rejection) => {
                tracing::warn!("Rejected submit body: {}", detail);
                return rejection.into_response();
            }
        }

        let mut response = (StatusCode::INTERNAL_SERVER_ERROR, Html(GENERIC_500)).into_response();
        response.extensions_mut().insert(ErrorDetail(detail));
        response
    }
}
