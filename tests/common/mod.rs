#![allow(dead_code)]

use anyhow::{Result, bail};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use umkm_forecast::application::Application;
use umkm_forecast::config::Config;
use umkm_forecast::domain::documents::{Document, DocumentId};
use umkm_forecast::domain::repositories::DocumentStore;
use umkm_forecast::infrastructure::InMemoryDocumentStore;

/// Store whose every operation fails, counting the attempts.
#[derive(Default)]
pub struct FailingDocumentStore {
    pub attempts: AtomicUsize,
}

impl FailingDocumentStore {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for FailingDocumentStore {
    async fn create(&self, _collection: &str, _fields: Map<String, Value>) -> Result<DocumentId> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        bail!("connection reset by peer")
    }

    async fn find(&self, _collection: &str, _limit: Option<usize>) -> Result<Vec<Document>> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        bail!("connection reset by peer")
    }

    async fn collection_names(&self) -> Result<Vec<String>> {
        bail!("connection reset by peer")
    }

    fn name(&self) -> &str {
        "broken"
    }
}

pub fn memory_app() -> (Application, Arc<InMemoryDocumentStore>) {
    let store = Arc::new(InMemoryDocumentStore::new("umkm"));
    let app = Application::with_store(&Config::default(), Some(store.clone()));
    (app, store)
}

pub fn failing_app() -> (Application, Arc<FailingDocumentStore>) {
    let store = Arc::new(FailingDocumentStore::default());
    let app = Application::with_store(&Config::default(), Some(store.clone()));
    (app, store)
}

pub fn storageless_app() -> Application {
    Application::with_store(&Config::default(), None)
}
