//! In-memory implementation of the link repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Default)]
struct StoreInner {
    by_code: HashMap<String, Link>,
    /// Reverse index for deduplication lookups: long URL → code.
    code_by_url: HashMap<String, String>,
}

/// Mutex-guarded in-memory redirect store.
///
/// The map is shared by concurrently handled requests; every operation
/// takes the lock for the duration of an O(1) map access (or an O(n log n)
/// sort for listing). The lock is never held across an await point.
pub struct MemoryLinkRepository {
    inner: Mutex<StoreInner>,
}

impl MemoryLinkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner::default()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::internal("Link store lock poisoned", json!({})))
    }
}

impl Default for MemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn upsert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let NewLink { code, long_url } = new_link;
        let link = Link::new(code.clone(), long_url.clone(), Utc::now());

        let mut store = self.lock()?;

        if let Some(previous) = store.by_code.insert(code.clone(), link.clone()) {
            // Overwritten mapping: drop the stale reverse entry unless another
            // code has since claimed that URL.
            if previous.long_url != long_url
                && store
                    .code_by_url
                    .get(&previous.long_url)
                    .is_some_and(|c| *c == code)
            {
                store.code_by_url.remove(&previous.long_url);
            }
        }

        store.code_by_url.insert(long_url, code);

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let store = self.lock()?;
        Ok(store.by_code.get(code).cloned())
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, AppError> {
        let store = self.lock()?;
        Ok(store
            .code_by_url
            .get(long_url)
            .and_then(|code| store.by_code.get(code))
            .cloned())
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Link>, AppError> {
        let store = self.lock()?;
        let mut links: Vec<Link> = store.by_code.values().cloned().collect();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        links.truncate(limit);
        Ok(links)
    }

    async fn count(&self) -> Result<usize, AppError> {
        let store = self.lock()?;
        Ok(store.by_code.len())
    }
}
