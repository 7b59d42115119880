//! DTOs for the link listing endpoint.

use crate::domain::entities::Link;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query parameters for the listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListLinksQuery {
    /// Maximum number of items to return (default 50, capped at 500).
    pub limit: Option<usize>,
}

/// Response for the link listing endpoint.
#[derive(Debug, Serialize)]
pub struct LinksResponse {
    /// Total number of stored mappings, independent of `limit`.
    pub total: usize,
    pub items: Vec<LinkSummary>,
}

/// A stored mapping as returned by the listing endpoint.
#[derive(Debug, Serialize)]
pub struct LinkSummary {
    pub code: String,
    pub long_url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkSummary {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            long_url: link.long_url,
            clicks: link.clicks,
            created_at: link.created_at,
        }
    }
}
