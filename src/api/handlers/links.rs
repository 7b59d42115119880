//! Handler for the link listing endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::links::{LinkSummary, LinksResponse, ListLinksQuery};
use crate::error::AppError;
use crate::state::AppState;

const DEFAULT_LIMIT: usize = 50;
const MAX_LIMIT: usize = 500;

/// Lists stored mappings, most recent first.
///
/// # Endpoint
///
/// `GET /api/links?limit=50`
///
/// # Response
///
/// ```json
/// {
///   "total": 2,
///   "items": [
///     {
///       "code": "AbC123",
///       "long_url": "https://example.com/",
///       "clicks": 0,
///       "created_at": "2026-08-07T12:00:00Z"
///     }
///   ]
/// }
/// ```
pub async fn links_handler(
    State(state): State<AppState>,
    Query(query): Query<ListLinksQuery>,
) -> Result<Json<LinksResponse>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);

    let total = state.link_service.link_count().await?;
    let items: Vec<LinkSummary> = state
        .link_service
        .list_links(limit)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(LinksResponse { total, items }))
}
