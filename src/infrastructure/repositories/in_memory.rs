//! In-Memory Document Store
//!
//! Thread-safe implementation of `DocumentStore` backed by a `Vec` behind a
//! `tokio::sync::RwLock`.
//!
//! # Limitations
//!
//! - Data is lost on application restart
//! - No persistence across multiple instances
//! - Collections are scanned linearly

use crate::domain::documents::{CREATED_AT, Document, DocumentId, UPDATED_AT};
use crate::domain::repositories::DocumentStore;
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory implementation of DocumentStore
pub struct InMemoryDocumentStore {
    documents: Arc<RwLock<Vec<(String, Document)>>>,
    name: String,
}

impl InMemoryDocumentStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            documents: Arc::new(RwLock::new(Vec::new())),
            name: name.into(),
        }
    }

    /// Total number of stored documents across collections
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new("memory")
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn create(&self, collection: &str, mut fields: Map<String, Value>) -> Result<DocumentId> {
        let now = Value::String(Utc::now().to_rfc3339());
        fields.insert(CREATED_AT.to_string(), now.clone());
        fields.insert(UPDATED_AT.to_string(), now);

        let id = DocumentId::new(Uuid::new_v4().to_string());
        self.documents
            .write()
            .await
            .push((collection.to_string(), Document::new(id.clone(), fields)));
        Ok(id)
    }

    async fn find(&self, collection: &str, limit: Option<usize>) -> Result<Vec<Document>> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .filter(|(c, _)| c == collection)
            .map(|(_, doc)| doc.clone())
            .take(limit.unwrap_or(usize::MAX))
            .collect())
    }

    async fn collection_names(&self) -> Result<Vec<String>> {
        let documents = self.documents.read().await;
        let names: BTreeSet<&String> = documents.iter().map(|(c, _)| c).collect();
        Ok(names.into_iter().cloned().collect())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
