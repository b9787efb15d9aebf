use crate::application::ServiceError;
use crate::domain::errors::ForecastError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Every error a handler can return, rendered as `{ "detail": "..." }`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Body or query string the extractors could not parse.
    #[error("{detail}")]
    Malformed { status: StatusCode, detail: String },
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Malformed {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Malformed {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Forecast(_) => StatusCode::BAD_REQUEST,
            ApiError::Service(ServiceError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Service(ServiceError::StorageUnavailable | ServiceError::Storage(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Malformed { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.to_string();
        if status.is_server_error() {
            error!("Request failed: {}", detail);
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
