//! Backend and storage health report served on `/test`.

use crate::domain::repositories::DocumentStore;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// Collections listed in the report at most
pub const MAX_REPORTED_COLLECTIONS: usize = 10;

const MAX_ERROR_CHARS: usize = 80;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

#[derive(Clone)]
pub struct StatusService {
    store: Option<Arc<dyn DocumentStore>>,
    database_url_set: bool,
}

impl StatusService {
    pub fn new(store: Option<Arc<dyn DocumentStore>>, database_url_set: bool) -> Self {
        Self {
            store,
            database_url_set,
        }
    }

    /// Never fails: storage problems are described in the report.
    pub async fn report(&self) -> StatusReport {
        let mut report = StatusReport {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: None,
            database_name: None,
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        };

        let Some(store) = &self.store else {
            return report;
        };

        report.database = "✅ Available".to_string();
        report.database_url = Some(
            if self.database_url_set {
                "✅ Set"
            } else {
                "❌ Not Set"
            }
            .to_string(),
        );
        report.database_name = Some(store.name().to_string());
        report.connection_status = "Connected".to_string();

        match store.collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_REPORTED_COLLECTIONS);
                report.collections = names;
                report.database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                warn!("Storage health check failed: {:#}", e);
                let detail: String = format!("{:#}", e).chars().take(MAX_ERROR_CHARS).collect();
                report.database = format!("⚠️ Connected but Error: {}", detail);
            }
        }

        report
    }
}
