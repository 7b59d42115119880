//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link.
///
/// Represents the mapping between a short code and a long URL.
#[derive(Debug, Clone)]
pub struct Link {
    pub code: String,
    pub long_url: String,
    /// Aggregate click counter surfaced by the listing endpoint. Nothing in
    /// the redirect path increments it.
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link with a zeroed click counter.
    pub fn new(code: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            long_url,
            clicks: 0,
            created_at,
        }
    }
}

/// Input data for storing a new mapping.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
}
