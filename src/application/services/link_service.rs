//! Link creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_normalizer::normalize_url;
use serde_json::json;

/// Service for creating and retrieving shortened links.
///
/// Handles URL normalization, code generation, and deduplication on top of
/// the redirect store.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a short link for the given URL.
    ///
    /// # Deduplication
    ///
    /// If a link for the same normalized URL already exists, returns the
    /// existing link instead of minting a second code.
    ///
    /// # Code Generation
    ///
    /// Generates a random 6-character alphanumeric code and retries up to
    /// 10 times on collision before failing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is invalid.
    /// Returns [`AppError::Internal`] if no free code was found.
    pub async fn create_short_link(&self, long_url: String) -> Result<Link, AppError> {
        let normalized_url = normalize_url(&long_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if let Some(existing_link) = self.repository.find_by_long_url(&normalized_url).await? {
            return Ok(existing_link);
        }

        let code = self.generate_unique_code().await?;

        let new_link = NewLink {
            code,
            long_url: normalized_url,
        };

        self.repository.upsert(new_link).await
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link_by_code(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Lists the most recently created links, newest first.
    pub async fn list_links(&self, limit: usize) -> Result<Vec<Link>, AppError> {
        self.repository.list_recent(limit).await
    }

    /// Returns the number of stored links.
    pub async fn link_count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }

    /// Constructs the full short URL from a request origin and a code.
    pub fn build_short_url(&self, origin: &str, code: &str) -> String {
        format!("{}/r/{}", origin.trim_end_matches('/'), code)
    }

    /// Generates a short code not yet present in the store.
    ///
    /// Attempts up to 10 times before failing.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();

            if self.repository.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn create_test_link(code: &str, url: &str) -> Link {
        Link::new(code.to_string(), url.to_string(), Utc::now())
    }

    #[tokio::test]
    async fn test_create_short_link_success() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_by_long_url()
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_upsert()
            .withf(|new_link| new_link.long_url == "https://example.com/")
            .times(1)
            .returning(|new_link| {
                Ok(Link::new(new_link.code, new_link.long_url, Utc::now()))
            });

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_short_link("https://example.com".to_string())
            .await;

        assert!(result.is_ok());
        let link = result.unwrap();
        assert_eq!(link.long_url, "https://example.com/");
        assert_eq!(link.code.len(), 6);
    }

    #[tokio::test]
    async fn test_create_short_link_normalizes_url() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_by_long_url()
            .withf(|url| url == "https://example.com/path")
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_upsert()
            .times(1)
            .returning(|new_link| {
                Ok(Link::new(new_link.code, new_link.long_url, Utc::now()))
            });

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_short_link("https://EXAMPLE.COM:443/path".to_string())
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().long_url, "https://example.com/path");
    }

    #[tokio::test]
    async fn test_create_short_link_deduplication() {
        let mut mock_repo = MockLinkRepository::new();

        let existing_link = create_test_link("AbC123", "https://example.com/");
        mock_repo
            .expect_find_by_long_url()
            .times(1)
            .returning(move |_| Ok(Some(existing_link.clone())));

        mock_repo.expect_upsert().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_short_link("https://example.com".to_string())
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().code, "AbC123");
    }

    #[tokio::test]
    async fn test_create_short_link_invalid_url() {
        let mock_repo = MockLinkRepository::new();

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_short_link("not-a-url".to_string()).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_short_link_retries_on_collision() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_by_long_url()
            .times(1)
            .returning(|_| Ok(None));

        // First candidate collides, second is free.
        let taken = create_test_link("AbC123", "https://other.com/");
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(taken.clone())));
        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_upsert()
            .times(1)
            .returning(|new_link| {
                Ok(Link::new(new_link.code, new_link.long_url, Utc::now()))
            });

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_short_link("https://example.com".to_string())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_short_link_collision_attempts_exhausted() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_by_long_url()
            .times(1)
            .returning(|_| Ok(None));

        let taken = create_test_link("AbC123", "https://other.com/");
        mock_repo
            .expect_find_by_code()
            .times(10)
            .returning(move |_| Ok(Some(taken.clone())));

        mock_repo.expect_upsert().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_short_link("https://example.com".to_string())
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_get_link_by_code_found() {
        let mut mock_repo = MockLinkRepository::new();

        let link = create_test_link("AbC123", "https://example.com/");
        mock_repo
            .expect_find_by_code()
            .withf(|code| code == "AbC123")
            .times(1)
            .returning(move |_| Ok(Some(link.clone())));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.get_link_by_code("AbC123").await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().long_url, "https://example.com/");
    }

    #[tokio::test]
    async fn test_get_link_by_code_not_found() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.get_link_by_code("missing").await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_build_short_url() {
        let service = LinkService::new(Arc::new(MockLinkRepository::new()));

        assert_eq!(
            service.build_short_url("http://localhost:8080", "AbC123"),
            "http://localhost:8080/r/AbC123"
        );

        // Trailing slash on the origin is not doubled.
        assert_eq!(
            service.build_short_url("http://localhost:8080/", "AbC123"),
            "http://localhost:8080/r/AbC123"
        );
    }
}
