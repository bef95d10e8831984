//! Museum - a user's curated, optionally public collection
//!
//! A Museum is owned by exactly one user. Its visibility decides whether
//! other users may see it in cross-user listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum museum title length, in characters
pub const MAX_MUSEUM_TITLE_CHARS: usize = 200;

/// Public/private flag on a museum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

impl Visibility {
    /// Stored representation (matches the `ENUM('public', 'private')` column)
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored visibility value that is neither `public` nor `private`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown visibility '{0}'")]
pub struct UnknownVisibility(pub String);

impl FromStr for Visibility {
    type Err = UnknownVisibility;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Visibility::Public),
            "private" => Ok(Visibility::Private),
            other => Err(UnknownVisibility(other.to_string())),
        }
    }
}

/// Museum as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Museum {
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    pub name: String,
    pub description: String,
    pub visibility: Visibility,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl Museum {
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }

    pub fn to_response(&self) -> MuseumResponse {
        MuseumResponse {
            id: self.id,
            user_id: self.user_id,
            name: self.name.clone(),
            description: self.description.clone(),
            visibility: self.visibility,
            image_url: self.image_url.clone(),
            created_at: self.created_at,
        }
    }
}

/// Validated payload handed to `MuseumRepository::insert`.
///
/// The backend assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMuseum {
    pub user_id: i64,
    pub name: String,
    pub description: String,
    pub visibility: Visibility,
    pub image_url: String,
}

/// Request payload for creating a museum
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuseumCreateRequest {
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub image_url: String,
}

/// Partial update: each `None` leaves the field untouched.
///
/// `Some(String::new())` is an explicit "set to empty", distinct from absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuseumUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl MuseumUpdateRequest {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.visibility.is_none()
            && self.image_url.is_none()
    }

    /// Returns an updated copy of `museum`
    pub fn apply(&self, museum: &Museum) -> Museum {
        let mut updated = museum.clone();
        if let Some(name) = &self.name {
            updated.name = name.clone();
        }
        if let Some(description) = &self.description {
            updated.description = description.clone();
        }
        if let Some(visibility) = self.visibility {
            updated.visibility = visibility;
        }
        if let Some(image_url) = &self.image_url {
            updated.image_url = image_url.clone();
        }
        updated
    }
}

/// Museum as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuseumResponse {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: String,
    pub visibility: Visibility,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}
