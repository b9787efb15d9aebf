//! JSON request and response bodies of the HTTP API.

use crate::application::Prediction;
use crate::domain::documents::DocumentId;
use crate::domain::forecasting::{DEFAULT_WINDOW, Method};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SALES_LIMIT: usize = 100;
pub const DEFAULT_PROFILE_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Historical values; `null` entries are ignored
    pub series: Vec<Option<f64>>,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_window")]
    pub window: i64,
    #[serde(default)]
    pub alpha: Option<f64>,
}

fn default_method() -> String {
    Method::default().to_string()
}

fn default_window() -> i64 {
    DEFAULT_WINDOW
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predicted: f64,
    pub method: Method,
    pub window: i64,
    pub saved_id: Option<String>,
}

impl From<Prediction> for PredictResponse {
    fn from(p: Prediction) -> Self {
        Self {
            predicted: p.predicted,
            method: p.method,
            window: p.window,
            saved_id: p.saved_id.map(String::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertedResponse {
    pub inserted_id: String,
}

impl From<DocumentId> for InsertedResponse {
    fn from(id: DocumentId) -> Self {
        Self {
            inserted_id: id.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}
