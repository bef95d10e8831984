//! Museum Repository - Abstract persistence for Museums

use async_trait::async_trait;

use crate::model::museum::{Museum, NewMuseum};
use crate::repository::RepositoryError;

/// Page size for cross-user museum listings.
///
/// Absent or out-of-range requests fall back to [`ListLimit::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListLimit(u32);

impl ListLimit {
    pub const DEFAULT: u32 = 10;
    pub const MAX: u32 = 100;

    pub fn new(requested: Option<i64>) -> Self {
        match requested {
            Some(n) if (1..=i64::from(Self::MAX)).contains(&n) => Self(n as u32),
            _ => Self(Self::DEFAULT),
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl Default for ListLimit {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Museum Repository Trait
///
/// This is a PORT in hexagonal architecture.
#[async_trait]
pub trait MuseumRepository: Send + Sync {
    /// Find a museum by ID. A missing museum is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: i64) -> Result<Option<Museum>, RepositoryError>;

    /// Public museums not owned by `exclude_user_id`, newest first,
    /// at most `limit` of them
    async fn get_public_museums_excluding_user(
        &self,
        exclude_user_id: i64,
        limit: ListLimit,
    ) -> Result<Vec<Museum>, RepositoryError>;

    /// Rename a museum.
    ///
    /// Fails with `RepositoryError::NotFound` when no museum has `id`.
    async fn update_title(&self, id: i64, title: &str) -> Result<(), RepositoryError>;

    /// Store a new museum, assigning its identifier and creation time
    async fn insert(&self, museum: NewMuseum) -> Result<Museum, RepositoryError>;

    /// Check if a museum exists
    async fn exists(&self, id: i64) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_limit_defaults() {
        assert_eq!(ListLimit::new(None).get(), 10);
        assert_eq!(ListLimit::default().get(), 10);
    }

    #[test]
    fn test_list_limit_accepts_range() {
        assert_eq!(ListLimit::new(Some(1)).get(), 1);
        assert_eq!(ListLimit::new(Some(25)).get(), 25);
        assert_eq!(ListLimit::new(Some(100)).get(), 100);
    }

    #[test]
    fn test_list_limit_out_of_range_falls_back() {
        assert_eq!(ListLimit::new(Some(0)).get(), 10);
        assert_eq!(ListLimit::new(Some(-5)).get(), 10);
        assert_eq!(ListLimit::new(Some(101)).get(), 10);
        assert_eq!(ListLimit::new(Some(i64::MAX)).get(), 10);
    }
}
