//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define WHAT the services need from storage,
//! but NOT how it's actually done. That's the adapter's job.
//!
//! ```text
//! Domain Layer             │  Adapter Layer
//! ─────────────────────────┼────────────────────────
//! trait ItemRepository     │  InMemoryItemRepository
//!   fn list()              │  MySqlItemRepository
//!   fn create()            │
//! trait MuseumRepository   │  InMemoryMuseumRepository
//!   fn find_by_id() ...    │  MySqlMuseumRepository
//! ```
//!
//! Implementations are interchangeable: a caller can only tell them apart
//! by latency and by whether data survives a restart.

pub mod item_repository;
pub mod museum_repository;

use thiserror::Error;

use crate::error::ValidationError;

/// Errors that can occur during repository operations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A lookup or targeted update addressed a nonexistent entity
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// Input rejected by the backend's own minimal checks
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Any other backend failure, passed through untranslated
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wrap a backend error as an opaque storage failure
    pub fn storage(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        RepositoryError::Storage(err.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn storage_error_keeps_its_source() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "connection reset");
        let err = RepositoryError::storage(io);

        assert!(!err.is_not_found());
        assert_eq!(err.source().unwrap().to_string(), "connection reset");
    }

    #[test]
    fn not_found_display() {
        let err = RepositoryError::NotFound {
            entity: "museum",
            id: 42,
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "museum not found: 42");
    }
}
