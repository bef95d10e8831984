//! Museum-to-Art link - an external art object placed in a museum
//!
//! One link per (museum, object) pair; the relational schema enforces it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuseumToArt {
    pub id: i64,
    pub museum_id: i64,
    /// Identifier in the external art catalog
    pub object_id: i64,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Request payload for adding an artwork to a museum
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuseumToArtCreateRequest {
    pub object_id: i64,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuseumToArtResponse {
    pub id: i64,
    pub museum_id: i64,
    pub object_id: i64,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// An artwork as seen from inside one museum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkInMuseum {
    pub object_id: i64,
    pub description: String,
    pub added_at: DateTime<Utc>,
}

impl MuseumToArt {
    pub fn to_response(&self) -> MuseumToArtResponse {
        MuseumToArtResponse {
            id: self.id,
            museum_id: self.museum_id,
            object_id: self.object_id,
            description: self.description.clone(),
            created_at: self.created_at,
        }
    }

    pub fn to_artwork_in_museum(&self) -> ArtworkInMuseum {
        ArtworkInMuseum {
            object_id: self.object_id,
            description: self.description.clone(),
            added_at: self.created_at,
        }
    }
}
