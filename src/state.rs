use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::MemoryLinkRepository;

/// The link service as wired in production: backed by the in-memory store.
pub type SharedLinkService = LinkService<MemoryLinkRepository>;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<SharedLinkService>,
}

impl AppState {
    pub fn new(link_service: Arc<SharedLinkService>) -> Self {
        Self { link_service }
    }
}
