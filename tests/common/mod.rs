#![allow(dead_code)]

use std::sync::Arc;

use breve::application::services::LinkService;
use breve::domain::entities::NewLink;
use breve::domain::repositories::LinkRepository;
use breve::infrastructure::persistence::MemoryLinkRepository;
use breve::state::AppState;

/// Builds an `AppState` around a fresh in-memory store.
///
/// The repository is returned alongside so tests can seed and inspect the
/// store directly.
pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repository = Arc::new(MemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(repository.clone()));

    (AppState::new(link_service), repository)
}

pub async fn seed_link(repository: &MemoryLinkRepository, code: &str, url: &str) {
    repository
        .upsert(NewLink {
            code: code.to_string(),
            long_url: url.to_string(),
        })
        .await
        .unwrap();
}
