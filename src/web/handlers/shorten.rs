//! Handler for the shorten form endpoint.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, http::HeaderMap};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_origin::origin_from_headers;

/// Form payload for the shorten endpoint.
///
/// `url` defaults to the empty string when the field is absent, so both a
/// missing and an empty value fail validation with a 400 rather than an
/// extractor rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,
}

/// Fragment injected into the index page after a successful submission.
#[derive(Template, WebTemplate)]
#[template(path = "shortened.html")]
pub struct ShortenedTemplate {
    pub short_url: String,
}

/// Creates a short link for a submitted URL.
///
/// # Endpoint
///
/// `POST /shorten` — other methods on this path get 405 from the router.
///
/// # Request
///
/// `application/x-www-form-urlencoded` body with a non-empty `url` field.
///
/// # Response
///
/// 200 with an HTML fragment containing the short link, built from the
/// request's declared origin plus `/r/<code>`.
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing, empty, or not a valid
/// HTTP(S) URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ShortenForm>,
) -> Result<ShortenedTemplate, AppError> {
    form.validate()?;

    let origin = origin_from_headers(&headers)?;

    let link = state.link_service.create_short_link(form.url).await?;
    let short_url = state.link_service.build_short_url(&origin, &link.code);

    tracing::debug!(code = %link.code, "shortened");

    Ok(ShortenedTemplate { short_url })
}
