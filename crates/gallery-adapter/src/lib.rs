//! # Gallery Adapter Layer
//!
//! Storage backends for the repository ports (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `repository/in_memory` - restart-volatile stores, also the fallback
//! - `repository/mysql` - durable store plus its bootstrap (readiness, schema)

pub mod repository;

pub use repository::in_memory::{InMemoryItemRepository, InMemoryMuseumRepository};
pub use repository::mysql::{
    BootstrapError, MySqlBackend, MySqlItemRepository, MySqlMuseumRepository, MySqlSettings,
    ReadinessPolicy,
};
