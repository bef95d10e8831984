//! MySQL Item Repository

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use gallery_domain::{Item, ItemRepository, RepositoryError, ValidationError};
use sqlx::{FromRow, MySqlPool};

#[derive(Debug, FromRow)]
struct ItemRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MySqlItemRepository {
    pool: MySqlPool,
}

impl MySqlItemRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for MySqlItemRepository {
    async fn list(&self) -> Result<Vec<Item>, RepositoryError> {
        let rows: Vec<ItemRow> =
            sqlx::query_as("SELECT id, name, created_at FROM items ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(RepositoryError::storage)?;
        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn create(&self, name: &str) -> Result<Item, RepositoryError> {
        if name.is_empty() {
            return Err(ValidationError::Empty { field: "name" }.into());
        }
        // TIMESTAMP keeps whole seconds; match what a later read returns
        let created_at = Utc::now().trunc_subsecs(0);

        let result = sqlx::query("INSERT INTO items (name, created_at) VALUES (?, ?)")
            .bind(name)
            .bind(created_at)
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::storage)?;
        let id = i64::try_from(result.last_insert_id()).map_err(RepositoryError::storage)?;

        Ok(Item {
            id,
            name: name.to_string(),
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mysql::test_support::settings_from_env;
    use crate::repository::mysql::{MySqlBackend, ReadinessPolicy};

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_reports_assigned_id_and_lists_ascending() {
        let backend = MySqlBackend::connect(&settings_from_env(), &ReadinessPolicy::default())
            .await
            .expect("bootstrap failed");
        let repo = backend.item_repository();

        let a = repo.create("integration a").await.expect("insert failed");
        let b = repo.create("integration b").await.expect("insert failed");
        assert!(b.id > a.id);

        let listed = repo.list().await.expect("list failed");
        let ids: Vec<_> = listed.iter().map(|i| i.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert!(listed.contains(&a));

        assert!(matches!(
            repo.create("").await,
            Err(RepositoryError::Validation(_))
        ));

        backend.close().await;
    }
}
