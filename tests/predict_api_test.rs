//! Forecast endpoint behaviour, exercised through the axum handlers.

mod common;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use common::{failing_app, memory_app, storageless_app};
use serde_json::json;
use std::collections::HashSet;
use umkm_forecast::domain::forecasting::Method;
use umkm_forecast::domain::repositories::DocumentStore;
use umkm_forecast::interfaces::api::predict;
use umkm_forecast::interfaces::dto::PredictRequest;

fn request(body: serde_json::Value) -> Result<Json<PredictRequest>, JsonRejection> {
    Ok(Json(serde_json::from_value(body).expect("valid request body")))
}

#[tokio::test]
async fn test_sma_prediction_is_returned_and_saved() {
    let (app, store) = memory_app();

    let Json(response) = predict(
        State(app),
        request(json!({ "series": [10, 20, 30, 40], "method": "sma", "window": 2 })),
    )
    .await
    .unwrap();

    assert_eq!(response.predicted, 35.0);
    assert_eq!(response.method, Method::Sma);
    assert_eq!(response.window, 2);

    let saved = store.find("prediction", None).await.unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(response.saved_id, Some(String::from(saved[0].id.clone())));
}

#[tokio::test]
async fn test_defaults_are_sma_window_three() {
    let (app, _store) = memory_app();

    let Json(response) = predict(State(app), request(json!({ "series": [1, 2, 3, 4, 5] })))
        .await
        .unwrap();

    assert_eq!(response.method, Method::Sma);
    assert_eq!(response.window, 3);
    assert_eq!(response.predicted, 4.0);
}

#[tokio::test]
async fn test_ema_default_alpha_matches_explicit_half() {
    let (app, _store) = memory_app();

    let Json(derived) = predict(
        State(app.clone()),
        request(json!({ "series": [10, 20, 30], "method": "ema", "window": 3 })),
    )
    .await
    .unwrap();
    let Json(explicit) = predict(
        State(app),
        request(json!({ "series": [10, 20, 30], "method": "ema", "alpha": 0.5 })),
    )
    .await
    .unwrap();

    assert_eq!(derived.predicted, 22.5);
    assert_eq!(explicit.predicted, 22.5);
}

#[tokio::test]
async fn test_method_is_normalised_to_lowercase() {
    let (app, store) = memory_app();

    let Json(response) = predict(
        State(app),
        request(json!({ "series": [10, 20, 30], "method": "EmA", "alpha": 0.5 })),
    )
    .await
    .unwrap();

    assert_eq!(response.method, Method::Ema);
    let saved = store.find("prediction", None).await.unwrap();
    assert_eq!(saved[0].get("method"), Some(&json!("ema")));
}

#[tokio::test]
async fn test_nulls_dropped_and_window_clamped() {
    let (app, store) = memory_app();

    let Json(response) = predict(
        State(app),
        request(json!({ "series": [10, null, 20], "method": "sma", "window": 5 })),
    )
    .await
    .unwrap();

    assert_eq!(response.predicted, 15.0);
    assert_eq!(response.window, 5);
    let saved = store.find("prediction", None).await.unwrap();
    assert_eq!(saved[0].get("input_points"), Some(&json!([10.0, 20.0])));
}

#[tokio::test]
async fn test_short_series_is_a_bad_request() {
    let (app, store) = memory_app();

    let err = predict(State(app), request(json!({ "series": [null, 5] })))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    assert!(err.to_string().contains("series too short"));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_unknown_method_is_a_bad_request() {
    let (app, store) = memory_app();

    let err = predict(
        State(app),
        request(json!({ "series": [1, 2, 3], "method": "arima" })),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    assert!(err.to_string().contains("unknown method"));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_storage_failure_only_clears_saved_id() {
    let body = json!({ "series": [3.5, 4.25, 9.0, 7.75], "method": "ema", "window": 4 });

    let (healthy, _) = memory_app();
    let Json(expected) = predict(State(healthy), request(body.clone()))
        .await
        .unwrap();

    let (broken, store) = failing_app();
    let Json(actual) = predict(State(broken), request(body)).await.unwrap();

    assert_eq!(store.attempts(), 1);
    assert!(expected.saved_id.is_some());
    assert_eq!(actual.saved_id, None);
    assert_eq!(actual.predicted.to_bits(), expected.predicted.to_bits());
    assert_eq!(actual.method, expected.method);
    assert_eq!(actual.window, expected.window);
}

#[tokio::test]
async fn test_prediction_without_storage() {
    let Json(response) = predict(
        State(storageless_app()),
        request(json!({ "series": [5, 8, 13], "window": 0 })),
    )
    .await
    .unwrap();

    assert_eq!(response.predicted, 13.0);
    assert_eq!(response.saved_id, None);
}

#[tokio::test]
async fn test_each_prediction_gets_its_own_record() {
    let (app, store) = memory_app();

    let mut ids = HashSet::new();
    for _ in 0..3 {
        let Json(response) = predict(
            State(app.clone()),
            request(json!({ "series": [10, 20, 30], "method": "sma" })),
        )
        .await
        .unwrap();
        assert_eq!(response.predicted, 20.0);
        ids.insert(response.saved_id.unwrap());
    }

    assert_eq!(ids.len(), 3);
    assert_eq!(store.find("prediction", None).await.unwrap().len(), 3);
}
