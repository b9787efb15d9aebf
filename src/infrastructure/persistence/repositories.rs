use crate::domain::documents::{CREATED_AT, Document, DocumentId, UPDATED_AT};
use crate::domain::repositories::DocumentStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use sqlx::{Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

/// `DocumentStore` backed by the `documents` table.
pub struct SqliteDocumentStore {
    pool: SqlitePool,
    name: String,
}

impl SqliteDocumentStore {
    pub fn new(pool: SqlitePool, name: impl Into<String>) -> Self {
        Self {
            pool,
            name: name.into(),
        }
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn create(&self, collection: &str, mut fields: Map<String, Value>) -> Result<DocumentId> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        fields.insert(CREATED_AT.to_string(), Value::String(now.clone()));
        fields.insert(UPDATED_AT.to_string(), Value::String(now.clone()));

        let body = serde_json::to_string(&fields).context("Failed to encode document")?;

        sqlx::query(
            r#"
            INSERT INTO documents (id, collection, body, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(collection)
        .bind(body)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to insert into {}", collection))?;

        debug!("Persisted document {} in {}", id, collection);
        Ok(DocumentId::new(id))
    }

    async fn find(&self, collection: &str, limit: Option<usize>) -> Result<Vec<Document>> {
        // SQLite treats a negative LIMIT as unbounded
        let limit = limit.map(|l| l as i64).unwrap_or(-1);
        let rows = sqlx::query(
            "SELECT id, body FROM documents WHERE collection = ? ORDER BY seq ASC LIMIT ?",
        )
        .bind(collection)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("Failed to query {}", collection))?;

        let mut documents = Vec::with_capacity(rows.len());
        for row in rows {
            let id: String = row.try_get("id")?;
            let body: String = row.try_get("body")?;
            let fields: Map<String, Value> = serde_json::from_str(&body)
                .with_context(|| format!("Corrupt document {} in {}", id, collection))?;
            documents.push(Document::new(DocumentId::new(id), fields));
        }
        Ok(documents)
    }

    async fn collection_names(&self) -> Result<Vec<String>> {
        let rows = sqlx::query("SELECT DISTINCT collection FROM documents ORDER BY collection")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| {
                row.try_get::<String, _>("collection")
                    .map_err(anyhow::Error::from)
            })
            .collect()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
