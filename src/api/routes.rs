//! API route configuration.

use crate::api::handlers::{health_handler, links_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET /links`  - List stored mappings (most recent first)
/// - `GET /health` - Service health report
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(links_handler))
        .route("/health", get(health_handler))
}
