//! Origin extraction from HTTP request headers.
//!
//! The shorten endpoint echoes a full short link back to the client, built
//! from the origin the request declared.

use crate::AppError;
use axum::http::{HeaderMap, header};

/// Extracts the request origin (scheme + host) used to build displayed links.
///
/// Prefers the `Origin` header, which browsers send on form posts. When it
/// is absent or opaque (`null`), falls back to `http://<Host>` so
/// browserless clients still receive an absolute link.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - Neither `Origin` nor `Host` yields a usable value
/// - A header value contains invalid UTF-8
pub fn origin_from_headers(headers: &HeaderMap) -> Result<String, AppError> {
    if let Some(origin) = headers.get(header::ORIGIN) {
        let origin = origin
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Origin header", serde_json::json!({})))?;

        if !origin.is_empty() && origin != "null" {
            return Ok(origin.trim_end_matches('/').to_string());
        }
    }

    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Origin and Host headers", serde_json::json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", serde_json::json!({})))?;

    Ok(format!("http://{host}"))
}
