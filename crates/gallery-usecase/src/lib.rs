//! # Gallery Use Case Layer
//!
//! Application-specific business rules.
//! Services validate input, then delegate to whichever repository
//! implementation the composition root selected at startup.
//!
//! Invalid input never reaches a repository.

pub use gallery_domain;

pub mod error;
pub mod item_service;
pub mod museum_service;
mod validation;

pub use error::ServiceError;
pub use item_service::ItemService;
pub use museum_service::MuseumService;
