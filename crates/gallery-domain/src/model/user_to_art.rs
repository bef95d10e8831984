//! User-to-Art favorite
//!
//! One favorite per (user, object) pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserToArt {
    pub id: i64,
    pub user_id: i64,
    pub object_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserToArtCreateRequest {
    pub object_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserToArtResponse {
    pub id: i64,
    pub user_id: i64,
    pub object_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteArtwork {
    pub object_id: i64,
    pub favorited_at: DateTime<Utc>,
}

/// A user's complete favorites list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFavoritesResponse {
    pub user_id: i64,
    pub total: usize,
    pub favorites: Vec<FavoriteArtwork>,
}

impl UserToArt {
    pub fn to_response(&self) -> UserToArtResponse {
        UserToArtResponse {
            id: self.id,
            user_id: self.user_id,
            object_id: self.object_id,
            created_at: self.created_at,
        }
    }

    pub fn to_favorite_artwork(&self) -> FavoriteArtwork {
        FavoriteArtwork {
            object_id: self.object_id,
            favorited_at: self.created_at,
        }
    }

    pub fn is_favorited_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

impl UserFavoritesResponse {
    /// Build the favorites list for `user_id` from that user's rows
    pub fn from_favorites(user_id: i64, rows: &[UserToArt]) -> Self {
        let favorites: Vec<FavoriteArtwork> = rows
            .iter()
            .filter(|f| f.is_favorited_by(user_id))
            .map(UserToArt::to_favorite_artwork)
            .collect();
        Self {
            user_id,
            total: favorites.len(),
            favorites,
        }
    }
}
