//! Museum Service - validation and listing rules for Museums

use std::sync::Arc;

use gallery_domain::{
    ListLimit, MuseumCreateRequest, MuseumRepository, MuseumResponse, NewMuseum,
    MAX_MUSEUM_TITLE_CHARS,
};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ServiceError;
use crate::validation::{positive_id, required_text};

/// Business rules for Museums
#[derive(Clone)]
pub struct MuseumService {
    repo: Arc<dyn MuseumRepository>,
}

impl MuseumService {
    pub fn new(repo: Arc<dyn MuseumRepository>) -> Self {
        Self { repo }
    }

    /// Public museums owned by anyone but `exclude_user_id`, in random order.
    ///
    /// `limit` is normalised by [`ListLimit::new`]. The shuffle covers only the
    /// page the repository returned; each call draws from the thread-local
    /// generator, so consecutive calls see different orders.
    pub async fn other_users_public_museums(
        &self,
        exclude_user_id: i64,
        limit: Option<i64>,
    ) -> Result<Vec<MuseumResponse>, ServiceError> {
        let mut page = self.public_page(exclude_user_id, limit).await?;
        page.shuffle(&mut rand::thread_rng());
        Ok(page)
    }

    /// Same as [`other_users_public_museums`](Self::other_users_public_museums)
    /// with a caller-supplied generator
    pub async fn other_users_public_museums_with_rng<R>(
        &self,
        exclude_user_id: i64,
        limit: Option<i64>,
        rng: &mut R,
    ) -> Result<Vec<MuseumResponse>, ServiceError>
    where
        R: Rng + Send + ?Sized,
    {
        let mut page = self.public_page(exclude_user_id, limit).await?;
        page.shuffle(rng);
        Ok(page)
    }

    pub async fn get_museum(&self, id: i64) -> Result<MuseumResponse, ServiceError> {
        let id = positive_id("museum id", id)?;
        let museum = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound {
                entity: "museum",
                id,
            })?;
        Ok(museum.to_response())
    }

    /// Rename museum `id` to the trimmed `title` (1..=200 characters)
    pub async fn update_title(&self, id: i64, title: &str) -> Result<(), ServiceError> {
        let id = positive_id("museum id", id)?;
        let title = required_text("title", title, MAX_MUSEUM_TITLE_CHARS)?;
        self.repo.update_title(id, title).await?;
        Ok(())
    }

    /// Create a museum owned by `req.user_id`
    pub async fn create(&self, req: MuseumCreateRequest) -> Result<MuseumResponse, ServiceError> {
        let user_id = positive_id("user id", req.user_id)?;
        let name = required_text("museum name", &req.name, MAX_MUSEUM_TITLE_CHARS)?;

        let museum = self
            .repo
            .insert(NewMuseum {
                user_id,
                name: name.to_string(),
                description: req.description,
                visibility: req.visibility,
                image_url: req.image_url,
            })
            .await?;
        Ok(museum.to_response())
    }

    async fn public_page(
        &self,
        exclude_user_id: i64,
        limit: Option<i64>,
    ) -> Result<Vec<MuseumResponse>, ServiceError> {
        let exclude_user_id = positive_id("user id", exclude_user_id)?;
        let museums = self
            .repo
            .get_public_museums_excluding_user(exclude_user_id, ListLimit::new(limit))
            .await?;
        Ok(museums.iter().map(|m| m.to_response()).collect())
    }
}
