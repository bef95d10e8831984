//! MySQL Museum Repository

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use gallery_domain::{ListLimit, Museum, MuseumRepository, NewMuseum, RepositoryError};
use sqlx::{FromRow, MySqlPool};

const MUSEUM_COLUMNS: &str = "id, user_id, name, description, \
     CAST(visibility AS CHAR) AS visibility, image_url, created_at";

#[derive(Debug, FromRow)]
struct MuseumRow {
    id: i64,
    user_id: i64,
    name: String,
    description: Option<String>,
    visibility: String,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<MuseumRow> for Museum {
    type Error = RepositoryError;

    fn try_from(row: MuseumRow) -> Result<Self, Self::Error> {
        Ok(Museum {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            description: row.description.unwrap_or_default(),
            visibility: row.visibility.parse().map_err(RepositoryError::storage)?,
            image_url: row.image_url.unwrap_or_default(),
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct MySqlMuseumRepository {
    pool: MySqlPool,
}

impl MySqlMuseumRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MuseumRepository for MySqlMuseumRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Museum>, RepositoryError> {
        let row: Option<MuseumRow> =
            sqlx::query_as(&format!("SELECT {MUSEUM_COLUMNS} FROM museums WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(RepositoryError::storage)?;
        row.map(Museum::try_from).transpose()
    }

    async fn get_public_museums_excluding_user(
        &self,
        exclude_user_id: i64,
        limit: ListLimit,
    ) -> Result<Vec<Museum>, RepositoryError> {
        let rows: Vec<MuseumRow> = sqlx::query_as(&format!(
            "SELECT {MUSEUM_COLUMNS} FROM museums \
             WHERE visibility = 'public' AND user_id <> ? \
             ORDER BY created_at DESC, id DESC \
             LIMIT ?"
        ))
        .bind(exclude_user_id)
        .bind(limit.get())
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::storage)?;
        rows.into_iter().map(Museum::try_from).collect()
    }

    async fn update_title(&self, id: i64, title: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE museums SET name = ? WHERE id = ?")
            .bind(title)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::storage)?;

        // sqlx negotiates CLIENT_FOUND_ROWS: an unchanged title still counts
        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound {
                entity: "museum",
                id,
            });
        }
        Ok(())
    }

    async fn insert(&self, museum: NewMuseum) -> Result<Museum, RepositoryError> {
        let created_at = Utc::now().trunc_subsecs(0);

        let result = sqlx::query(
            "INSERT INTO museums (user_id, name, description, visibility, image_url, created_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(museum.user_id)
        .bind(&museum.name)
        .bind(&museum.description)
        .bind(museum.visibility.as_str())
        .bind(&museum.image_url)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::storage)?;
        let id = i64::try_from(result.last_insert_id()).map_err(RepositoryError::storage)?;

        Ok(Museum {
            id,
            user_id: museum.user_id,
            name: museum.name,
            description: museum.description,
            visibility: museum.visibility,
            image_url: museum.image_url,
            created_at,
        })
    }
}
