use crate::application::errors::ServiceError;
use crate::domain::documents::{Document, DocumentId, to_fields};
use crate::domain::records::Record;
use crate::domain::repositories::DocumentStore;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::info;

/// Validated create/list access to one record collection.
pub struct RecordService<R> {
    store: Option<Arc<dyn DocumentStore>>,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for RecordService<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> RecordService<R> {
    pub fn new(store: Option<Arc<dyn DocumentStore>>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    pub async fn add(&self, record: &R) -> Result<DocumentId, ServiceError> {
        record.validate()?;
        let store = self.store()?;
        let fields = to_fields(record).map_err(ServiceError::storage)?;
        let id = store
            .create(R::COLLECTION, fields)
            .await
            .map_err(ServiceError::Storage)?;
        info!("Stored {} {}", R::COLLECTION, id);
        Ok(id)
    }

    pub async fn list(&self, limit: Option<usize>) -> Result<Vec<Document>, ServiceError> {
        self.store()?
            .find(R::COLLECTION, limit)
            .await
            .map_err(ServiceError::Storage)
    }

    fn store(&self) -> Result<&Arc<dyn DocumentStore>, ServiceError> {
        self.store.as_ref().ok_or(ServiceError::StorageUnavailable)
    }
}
