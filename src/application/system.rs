use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

use crate::application::forecast_service::ForecastService;
use crate::application::record_service::RecordService;
use crate::application::status_service::StatusService;
use crate::config::Config;
use crate::domain::records::{Profile, SalesRecord};
use crate::domain::repositories::DocumentStore;
use crate::infrastructure::persistence::{Database, SqliteDocumentStore};
use crate::infrastructure::repositories::InMemoryDocumentStore;

/// Wired services shared by every request handler.
///
/// Cloning is cheap: all services hold the same `Arc` store.
#[derive(Clone)]
pub struct Application {
    pub store: Option<Arc<dyn DocumentStore>>,
    pub forecasts: ForecastService,
    pub sales: RecordService<SalesRecord>,
    pub profiles: RecordService<Profile>,
    pub status: StatusService,
}

impl Application {
    pub async fn build(config: Config) -> Result<Self> {
        let store = Self::connect_store(&config).await?;
        Ok(Self::with_store(&config, store))
    }

    /// Wire the services around an already constructed store.
    pub fn with_store(config: &Config, store: Option<Arc<dyn DocumentStore>>) -> Self {
        let database_url_set = config.database.url.is_some();
        Self {
            forecasts: ForecastService::new(store.clone()),
            sales: RecordService::new(store.clone()),
            profiles: RecordService::new(store.clone()),
            status: StatusService::new(store.clone(), database_url_set),
            store,
        }
    }

    async fn connect_store(config: &Config) -> Result<Option<Arc<dyn DocumentStore>>> {
        let db = &config.database;
        let Some(url) = db.url.as_deref() else {
            warn!("DATABASE_URL not set, running without storage");
            return Ok(None);
        };

        if db.is_memory() {
            info!("Using in-memory document store '{}'", db.name);
            let store: Arc<dyn DocumentStore> =
                Arc::new(InMemoryDocumentStore::new(db.name.clone()));
            return Ok(Some(store));
        }

        info!("Initializing Database at {}", url);
        let database = Database::new(url, db.max_connections)
            .await
            .context("Failed to initialize database")?;
        let store: Arc<dyn DocumentStore> =
            Arc::new(SqliteDocumentStore::new(database.pool, db.name.clone()));
        Ok(Some(store))
    }
}
