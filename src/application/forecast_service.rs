//! Forecast use case: run the engine, then record the prediction.
//!
//! Forecasting is the primary result and storage is best-effort. A failed
//! write, a missing store, or a prediction the record schema refuses only
//! leaves `saved_id` empty; it never turns a computed forecast into an error.

use crate::domain::documents::{DocumentId, to_fields};
use crate::domain::errors::ForecastError;
use crate::domain::forecasting::{self, Method};
use crate::domain::records::{PredictionRecord, Record};
use crate::domain::repositories::DocumentStore;
use anyhow::{Context, Result, bail};
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of a prediction request
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub predicted: f64,
    pub method: Method,
    /// Window exactly as requested, not the clamped one
    pub window: i64,
    pub saved_id: Option<DocumentId>,
}

#[derive(Clone)]
pub struct ForecastService {
    store: Option<Arc<dyn DocumentStore>>,
}

impl ForecastService {
    pub fn new(store: Option<Arc<dyn DocumentStore>>) -> Self {
        Self { store }
    }

    pub async fn predict(
        &self,
        series: &[Option<f64>],
        method: &str,
        window: i64,
        alpha: Option<f64>,
    ) -> Result<Prediction, ForecastError> {
        let forecast = forecasting::predict(series, method, window, alpha)?;
        debug!(
            "Forecast {} over {} points (window={}, alpha={:?}) = {}",
            forecast.method,
            forecast.input_points.len(),
            window,
            alpha,
            forecast.predicted
        );

        let record = PredictionRecord::from_forecast(&forecast, window);
        let saved_id = match self.save(&record).await {
            Ok(id) => Some(id),
            Err(e) => {
                warn!("Prediction not saved: {:#}", e);
                None
            }
        };

        Ok(Prediction {
            predicted: forecast.predicted,
            method: forecast.method,
            window,
            saved_id,
        })
    }

    async fn save(&self, record: &PredictionRecord) -> Result<DocumentId> {
        let Some(store) = &self.store else {
            bail!("database not available");
        };
        record.validate()?;
        let fields = to_fields(record).context("Failed to encode prediction")?;
        store.create(PredictionRecord::COLLECTION, fields).await
    }
}
