//! Repository trait definitions for the domain layer.
//!
//! The trait here abstracts the redirect store following the Repository
//! pattern; the concrete store lives in `crate::infrastructure::persistence`.
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall`. See the
//! integration tests in `tests/repository_link.rs` for contract coverage
//! of the real store.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
