//! HTTP routes and handlers

use crate::application::{Application, StatusReport};
use crate::domain::documents::Document;
use crate::domain::records::{Profile, SalesRecord};
use crate::interfaces::api_error::ApiError;
use crate::interfaces::dto::{
    DEFAULT_PROFILE_LIMIT, DEFAULT_SALES_LIMIT, InsertedResponse, ListQuery, PredictRequest,
    PredictResponse,
};
use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn router(app: Application) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/test", get(test_database))
        .route("/api/sales", post(add_sales).get(list_sales))
        .route("/api/predict", post(predict))
        .route("/api/profile", get(list_profiles).post(create_profile))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app)
}

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "UMKM Prediction Backend is running" }))
}

pub async fn test_database(State(app): State<Application>) -> Json<StatusReport> {
    Json(app.status.report().await)
}

pub async fn add_sales(
    State(app): State<Application>,
    body: Result<Json<SalesRecord>, JsonRejection>,
) -> Result<Json<InsertedResponse>, ApiError> {
    let Json(record) = body?;
    let id = app.sales.add(&record).await?;
    Ok(Json(id.into()))
}

pub async fn list_sales(
    State(app): State<Application>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Document>>, ApiError> {
    let Query(query) = query?;
    let limit = query.limit.unwrap_or(DEFAULT_SALES_LIMIT);
    Ok(Json(app.sales.list(Some(limit)).await?))
}

pub async fn predict(
    State(app): State<Application>,
    body: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(req) = body?;
    let prediction = app
        .forecasts
        .predict(&req.series, &req.method, req.window, req.alpha)
        .await?;
    Ok(Json(prediction.into()))
}

pub async fn list_profiles(
    State(app): State<Application>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Document>>, ApiError> {
    let Query(query) = query?;
    let limit = query.limit.unwrap_or(DEFAULT_PROFILE_LIMIT);
    Ok(Json(app.profiles.list(Some(limit)).await?))
}

pub async fn create_profile(
    State(app): State<Application>,
    body: Result<Json<Profile>, JsonRejection>,
) -> Result<Json<InsertedResponse>, ApiError> {
    let Json(profile) = body?;
    let id = app.profiles.add(&profile).await?;
    Ok(Json(id.into()))
}
