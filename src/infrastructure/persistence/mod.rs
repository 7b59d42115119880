//! Redirect store implementation.
//!
//! Concrete implementation of the domain repository trait. Storage is a
//! process-owned in-memory map; mappings live for the lifetime of the
//! process.

pub mod memory_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
