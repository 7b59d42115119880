//! Index page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the index page.
///
/// Renders `templates/index.html`: the shorten form posting to `/shorten`
/// via HTMX, with a target element for the returned fragment.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {}

/// Renders the index page.
///
/// # Endpoint
///
/// `GET /`
///
/// Unrouted paths never reach this handler; the router's fallback answers
/// them with 404.
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {}
}
