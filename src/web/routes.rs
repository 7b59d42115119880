//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{index_handler, shorten_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Browser-facing routes.
///
/// # Endpoints
///
/// - `GET  /`        - Index page with the shorten form
/// - `POST /shorten` - Shorten form submission (other methods get 405)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/shorten", post(shorten_handler))
}
