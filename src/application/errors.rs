use crate::domain::errors::RecordError;
use thiserror::Error;

/// Errors from the record services (sales, profile).
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] RecordError),

    #[error("Database not available")]
    StorageUnavailable,

    #[error("Storage error: {0:#}")]
    Storage(anyhow::Error),
}

impl ServiceError {
    pub fn storage(source: impl Into<anyhow::Error>) -> Self {
        Self::Storage(source.into())
    }
}
