//! Item Service - validation in front of the item repository

use std::sync::Arc;

use gallery_domain::{Item, ItemRepository, MAX_ITEM_NAME_CHARS};

use crate::error::ServiceError;
use crate::validation::required_text;

/// Business rules for Items
#[derive(Clone)]
pub struct ItemService {
    repo: Arc<dyn ItemRepository>,
}

impl ItemService {
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Item>, ServiceError> {
        Ok(self.repo.list().await?)
    }

    /// Create an item named `name` with surrounding whitespace removed.
    ///
    /// The trimmed name must be 1..=100 characters.
    pub async fn create(&self, name: &str) -> Result<Item, ServiceError> {
        let name = required_text("name", name, MAX_ITEM_NAME_CHARS)?;
        Ok(self.repo.create(name).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use gallery_domain::{RepositoryError, ValidationError};
    use std::sync::Mutex;

    /// Minimal item store for testing
    #[derive(Default)]
    struct VecItemRepo {
        items: Mutex<Vec<Item>>,
    }

    #[async_trait]
    impl ItemRepository for VecItemRepo {
        async fn list(&self) -> Result<Vec<Item>, RepositoryError> {
            Ok(self.items.lock().unwrap().clone())
        }

        async fn create(&self, name: &str) -> Result<Item, RepositoryError> {
            let mut items = self.items.lock().unwrap();
            let item = Item {
                id: items.len() as i64 + 1,
                name: name.to_string(),
                created_at: Utc::now(),
            };
            items.push(item.clone());
            Ok(item)
        }
    }

    fn service() -> (ItemService, Arc<VecItemRepo>) {
        let repo = Arc::new(VecItemRepo::default());
        (ItemService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_create_validation() {
        let (svc, repo) = service();

        for bad in ["", " ", "\t\n "] {
            let err = svc.create(bad).await.unwrap_err();
            assert!(matches!(
                err,
                ServiceError::Validation(ValidationError::Empty { field: "name" })
            ));
        }

        let err = svc.create(&"a".repeat(101)).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::TooLong { max: 100, .. })
        ));

        // Nothing invalid reached storage
        assert!(repo.items.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_stores_trimmed_name() {
        let (svc, _) = service();

        let item = svc.create("  ok  ").await.unwrap();
        assert_eq!(item.name, "ok");

        let padded = format!("   {}   ", "b".repeat(100));
        let item = svc.create(&padded).await.unwrap();
        assert_eq!(item.name, "b".repeat(100));
    }

    #[tokio::test]
    async fn test_list_returns_creation_order() {
        let (svc, _) = service();

        svc.create("First item").await.unwrap();
        svc.create("Second item").await.unwrap();

        let names: Vec<_> = svc
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["First item", "Second item"]);
    }
}
