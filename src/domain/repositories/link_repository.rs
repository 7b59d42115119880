//! Repository trait for the redirect store.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the short-code → URL mapping.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - mutex-guarded in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a mapping, overwriting any existing mapping for the same code.
    ///
    /// Always succeeds apart from internal store errors.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unusable.
    async fn upsert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unusable.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its original long URL.
    ///
    /// Used to check if a URL has already been shortened.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unusable.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, AppError>;

    /// Lists the most recently created links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unusable.
    async fn list_recent(&self, limit: usize) -> Result<Vec<Link>, AppError>;

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unusable.
    async fn count(&self) -> Result<usize, AppError>;
}
