//! Persistence port
//!
//! The service stores every record as a schemaless document in a named
//! collection. Business logic only sees this trait; the SQLite and in-memory
//! implementations live in `infrastructure`.

use crate::domain::documents::{Document, DocumentId};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Generic document store
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document and return its generated id.
    ///
    /// The store adds `created_at` and `updated_at` timestamps.
    async fn create(&self, collection: &str, fields: Map<String, Value>) -> Result<DocumentId>;

    /// Documents of a collection in insertion order, at most `limit` of them.
    async fn find(&self, collection: &str, limit: Option<usize>) -> Result<Vec<Document>>;

    /// Names of collections that hold at least one document.
    async fn collection_names(&self) -> Result<Vec<String>>;

    /// Human readable name of the underlying database
    fn name(&self) -> &str;
}
