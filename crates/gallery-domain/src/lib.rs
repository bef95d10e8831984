//! # Gallery Domain Layer
//!
//! Entities, validation errors and repository ports.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Entities & response shaping                   ││
//! │  │  repository/- Trait definitions (not implementations)       ││
//! │  │  error      - Validation errors                             ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Switching from MySQL to the in-memory store (or back) never touches
//! this crate.

pub mod error;
pub mod model;
pub mod repository;

// Re-export commonly used types
pub use error::ValidationError;

pub use model::{
    item::{Item, MAX_ITEM_NAME_CHARS},
    museum::{
        Museum, MuseumCreateRequest, MuseumResponse, MuseumUpdateRequest, NewMuseum,
        UnknownVisibility, Visibility, MAX_MUSEUM_TITLE_CHARS,
    },
    museum_to_art::{ArtworkInMuseum, MuseumToArt, MuseumToArtCreateRequest, MuseumToArtResponse},
    user::{User, UserCreateRequest, UserResponse},
    user_to_art::{
        FavoriteArtwork, UserFavoritesResponse, UserToArt, UserToArtCreateRequest,
        UserToArtResponse,
    },
};

pub use repository::{
    item_repository::ItemRepository,
    museum_repository::{ListLimit, MuseumRepository},
    RepositoryError,
};
