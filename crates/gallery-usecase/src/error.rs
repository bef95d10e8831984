//! Service-level error taxonomy

use gallery_domain::{RepositoryError, ValidationError};
use thiserror::Error;

/// Errors surfaced to the boundary layer.
///
/// `Validation` and `NotFound` are the two recognized sentinels; everything
/// else is an opaque `Storage` failure.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error(transparent)]
    Storage(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => ServiceError::NotFound { entity, id },
            RepositoryError::Validation(v) => ServiceError::Validation(v),
            other => ServiceError::Storage(other),
        }
    }
}
