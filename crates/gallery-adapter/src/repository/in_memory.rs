//! In-Memory Repository Implementations
//!
//! Restart-volatile implementations of the repository traits.
//! Used for development and as the fallback when MySQL is disabled or
//! fails to come up.
//!
//! Each store keeps its rows and its id counter behind one `RwLock`:
//! reads share the lock and hand back copies, writes take it exclusively,
//! so identifiers are assigned strictly in lock order.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use gallery_domain::{
    Item, ItemRepository, ListLimit, Museum, MuseumRepository, NewMuseum, RepositoryError,
    ValidationError,
};
use tracing::debug;

/// Rows plus the last identifier handed out (never reused)
#[derive(Debug)]
struct Table<T> {
    last_id: i64,
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            last_id: 0,
            rows: Vec::new(),
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

fn read<T>(table: &RwLock<Table<T>>) -> Result<RwLockReadGuard<'_, Table<T>>, RepositoryError> {
    table
        .read()
        .map_err(|_| RepositoryError::storage("Failed to acquire read lock"))
}

fn write<T>(table: &RwLock<Table<T>>) -> Result<RwLockWriteGuard<'_, Table<T>>, RepositoryError> {
    table
        .write()
        .map_err(|_| RepositoryError::storage("Failed to acquire write lock"))
}

/// In-memory Item Repository
///
/// Cloning shares the underlying store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<Table<Item>>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best-effort bulk seed for local development.
    ///
    /// Names the store rejects are skipped.
    pub fn seeded<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let repo = Self::new();
        for name in names {
            if let Err(err) = repo.insert(name.as_ref()) {
                debug!(name = name.as_ref(), error = %err, "seed entry skipped");
            }
        }
        repo
    }

    fn insert(&self, name: &str) -> Result<Item, RepositoryError> {
        if name.is_empty() {
            return Err(ValidationError::Empty { field: "name" }.into());
        }
        let mut items = write(&self.items)?;
        let item = Item {
            id: items.next_id(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        items.rows.push(item.clone());
        Ok(item)
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list(&self) -> Result<Vec<Item>, RepositoryError> {
        Ok(read(&self.items)?.rows.clone())
    }

    async fn create(&self, name: &str) -> Result<Item, RepositoryError> {
        self.insert(name)
    }
}

/// In-memory Museum Repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryMuseumRepository {
    museums: Arc<RwLock<Table<Museum>>>,
}

impl InMemoryMuseumRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MuseumRepository for InMemoryMuseumRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Museum>, RepositoryError> {
        Ok(read(&self.museums)?
            .rows
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn get_public_museums_excluding_user(
        &self,
        exclude_user_id: i64,
        limit: ListLimit,
    ) -> Result<Vec<Museum>, RepositoryError> {
        let mut page: Vec<Museum> = read(&self.museums)?
            .rows
            .iter()
            .filter(|m| m.is_public() && !m.is_owned_by(exclude_user_id))
            .cloned()
            .collect();
        page.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        page.truncate(limit.as_usize());
        Ok(page)
    }

    async fn update_title(&self, id: i64, title: &str) -> Result<(), RepositoryError> {
        let mut museums = write(&self.museums)?;
        let museum = museums
            .rows
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(RepositoryError::NotFound {
                entity: "museum",
                id,
            })?;
        museum.name = title.to_string();
        Ok(())
    }

    async fn insert(&self, museum: NewMuseum) -> Result<Museum, RepositoryError> {
        let mut museums = write(&self.museums)?;
        let stored = Museum {
            id: museums.next_id(),
            user_id: museum.user_id,
            name: museum.name,
            description: museum.description,
            visibility: museum.visibility,
            image_url: museum.image_url,
            created_at: Utc::now(),
        };
        museums.rows.push(stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_domain::Visibility;
    use std::collections::HashSet;

    fn new_museum(user_id: i64, name: &str, visibility: Visibility) -> NewMuseum {
        NewMuseum {
            user_id,
            name: name.to_string(),
            description: String::new(),
            visibility,
            image_url: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let repo = InMemoryItemRepository::new();

        let first = repo.create("First item").await.unwrap();
        let second = repo.create("Second item").await.unwrap();
        assert_eq!((first.id, first.name.as_str()), (1, "First item"));
        assert_eq!((second.id, second.name.as_str()), (2, "Second item"));

        let items = repo.list().await.unwrap();
        assert_eq!(items, vec![first, second]);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name_without_consuming_an_id() {
        let repo = InMemoryItemRepository::new();

        let err = repo.create("").await.unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::Validation(ValidationError::Empty { field: "name" })
        ));

        // No length limit at this layer
        let long = repo.create(&"x".repeat(500)).await.unwrap();
        assert_eq!(long.id, 1);
    }

    #[tokio::test]
    async fn test_list_returns_a_copy() {
        let repo = InMemoryItemRepository::new();
        repo.create("Keep me").await.unwrap();

        let mut listed = repo.list().await.unwrap();
        listed[0].name = "mutated".to_string();
        listed.clear();

        let again = repo.list().await.unwrap();
        assert_eq!(again.len(), 1);
        assert_eq!(again[0].name, "Keep me");
    }

    #[tokio::test]
    async fn test_seeding_skips_rejected_names() {
        let repo = InMemoryItemRepository::seeded(["First item", "", "Second item"]);

        let items = repo.list().await.unwrap();
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["First item", "Second item"]);
        assert_eq!(items[1].id, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_gapless_ids() {
        let repo = InMemoryItemRepository::new();

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(&format!("item {i}")).await.unwrap().id })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=64).collect::<Vec<_>>());

        // Stored order is id order
        let listed: Vec<_> = repo.list().await.unwrap().iter().map(|i| i.id).collect();
        assert_eq!(listed, (1..=64).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_museum_insert_and_find() {
        let repo = InMemoryMuseumRepository::new();

        let stored = repo
            .insert(new_museum(3, "Sketches", Visibility::Private))
            .await
            .unwrap();
        assert_eq!(stored.id, 1);

        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(stored));
        assert_eq!(repo.find_by_id(2).await.unwrap(), None);
        assert!(repo.exists(1).await.unwrap());
        assert!(!repo.exists(2).await.unwrap());
    }

    #[tokio::test]
    async fn test_public_listing_filters_orders_and_limits() {
        let repo = InMemoryMuseumRepository::new();
        for (owner, visibility) in [
            (1, Visibility::Public),
            (2, Visibility::Public),
            (2, Visibility::Private),
            (3, Visibility::Public),
            (1, Visibility::Public),
            (4, Visibility::Public),
        ] {
            repo.insert(new_museum(owner, "m", visibility)).await.unwrap();
        }

        let page = repo
            .get_public_museums_excluding_user(1, ListLimit::new(Some(10)))
            .await
            .unwrap();
        assert!(page.iter().all(|m| m.is_public() && !m.is_owned_by(1)));
        // Newest first
        assert_eq!(page.iter().map(|m| m.id).collect::<Vec<_>>(), vec![6, 4, 2]);

        let page = repo
            .get_public_museums_excluding_user(1, ListLimit::new(Some(2)))
            .await
            .unwrap();
        assert_eq!(page.len(), 2);

        let owners: HashSet<_> = repo
            .get_public_museums_excluding_user(2, ListLimit::default())
            .await
            .unwrap()
            .iter()
            .map(|m| m.user_id)
            .collect();
        assert!(!owners.contains(&2));
    }

    #[tokio::test]
    async fn test_update_title() {
        let repo = InMemoryMuseumRepository::new();
        repo.insert(new_museum(3, "Old", Visibility::Public))
            .await
            .unwrap();

        repo.update_title(1, "New").await.unwrap();
        assert_eq!(repo.find_by_id(1).await.unwrap().unwrap().name, "New");

        let err = repo.update_title(99, "new title").await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { id: 99, .. }));
    }
}
