//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /r/{code}` - Short link redirect (public)
//! - `/api/*`         - JSON endpoints (link listing, health)
//! - `GET  /`         - Index page with the shorten form
//! - `POST /shorten`  - Shorten form submission
//!
//! Anything else falls through to the router's 404 response.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/r/{code}", get(redirect_handler))
        .nest("/api", api::routes::routes())
        .merge(web::routes::routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
