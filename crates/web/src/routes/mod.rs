//! HTTP route handlers for the web application.
//!
//! # Route Structure
//!
//! ```text
//! GET  /          - Home page
//! GET  /health    - Liveness check
//! GET  /static/*  - Static assets (served by the router in lib.rs)
//! ```
//!
//! Everything else falls through to a 404.

pub mod home;

use axum::{Router, http::Uri, routing::get};

use crate::error::AppError;
use crate::state::AppState;

/// Create all routes for the web application.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health))
        .fallback(not_found)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Fallback handler for unmatched paths.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_owned())
}
