//! Item Repository - Abstract persistence for Items

use async_trait::async_trait;

use crate::model::item::Item;
use crate::repository::RepositoryError;

/// Item Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// All methods take `&self`: implementations synchronize internally so a
/// single instance can be shared across concurrent requests.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items, ordered by ascending identifier
    async fn list(&self) -> Result<Vec<Item>, RepositoryError>;

    /// Store a new item, assigning its identifier and creation time.
    ///
    /// Fails with `RepositoryError::Validation` when `name` is empty.
    /// Length limits are a service-layer rule.
    async fn create(&self, name: &str) -> Result<Item, RepositoryError>;
}
