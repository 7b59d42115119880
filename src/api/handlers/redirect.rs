//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// A plain `302 Found` redirect.
///
/// axum's `Redirect` only offers 303/307/308 constructors; short links use
/// the classic found-redirect status.
pub struct Found {
    location: String,
}

impl Found {
    pub fn to(uri: &str) -> Self {
        Self {
            location: uri.to_owned(),
        }
    }
}

impl IntoResponse for Found {
    fn into_response(self) -> Response {
        (StatusCode::FOUND, [(header::LOCATION, self.location)]).into_response()
    }
}

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /r/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Found, AppError> {
    let link = state.link_service.get_link_by_code(&code).await?;

    tracing::debug!(code = %link.code, "redirecting");

    Ok(Found::to(&link.long_url))
}
