//! Router-level tests

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;
use weather_core::model::{
    ClassifierParams, GaussianModel, LogisticModel, RegressionModel, RegressionParams,
};
use weather_core::ModelBundle;

use crate::config::Config;
use crate::error::{FEATURES_ERROR, FEATURES_LIST_ERROR};
use crate::{create_router, AppState};

fn regression() -> RegressionParams {
    let mut per_city = BTreeMap::new();
    per_city.insert("Lima".to_string(), RegressionModel::linear([0.5, 0.0, 0.0, 0.0], 10.0));
    RegressionParams::new(per_city)
}

fn classifier() -> ClassifierParams {
    let mut priors = BTreeMap::new();
    priors.insert("light rain".to_string(), 0.4);
    priors.insert("clear sky".to_string(), 0.6);
    let mut means = BTreeMap::new();
    means.insert("light rain".to_string(), [15.0, 88.0, 1008.0, 4.0]);
    means.insert("clear sky".to_string(), [24.0, 50.0, 1016.0, 2.0]);
    let mut vars = BTreeMap::new();
    vars.insert("light rain".to_string(), [2.0, 16.0, 4.0, 1.0]);
    vars.insert("clear sky".to_string(), [3.0, 25.0, 4.0, 1.0]);

    ClassifierParams::enabled(GaussianModel {
        classes: vec!["light rain".to_string(), "clear sky".to_string()],
        priors,
        means,
        vars,
    })
}

fn state(classifier: ClassifierParams, debug: bool) -> AppState {
    let config = Config {
        log_level: if debug { "DEBUG" } else { "INFO" }.to_string(),
        ..Config::default()
    };
    AppState {
        models: Arc::new(ModelBundle::new(
            regression(),
            classifier,
            LogisticModel::new(-1.0, vec![2.0, 0.5]),
        )),
        config,
    }
}

async fn send_raw(state: AppState, method: &str, uri: &str, body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = create_router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn send(state: AppState, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let (status, raw) = send_raw(state, method, uri, body).await;
    (status, serde_json::from_str(&raw).unwrap())
}

async fn post(state: AppState, uri: &str, body: Value) -> (StatusCode, Value) {
    send(state, "POST", uri, &body.to_string()).await
}

// ============================================================================
// /predict
// ============================================================================

#[tokio::test]
async fn test_unknown_city_uses_default_model() {
    let body = json!({
        "city": "Bogota",
        "features": {"temp": 17.14, "hum": 66, "pres": 1014, "wind": 2.24}
    });
    let (status, resp) = post(state(ClassifierParams::default(), false), "/predict", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        resp,
        json!({
            "ok": true,
            "result": {
                "prediction": {"temperature_next": 20.0},
                "classification": {"enabled": false}
            }
        })
    );
}

#[tokio::test]
async fn test_known_city_and_classification() {
    let body = json!({
        "city": "Lima",
        "features": {"temp": 16.0, "hum": 85, "pres": 1009, "wind": 3.5}
    });
    let (status, resp) = post(state(classifier(), false), "/predict", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["result"]["prediction"]["temperature_next"], 18.0);

    let classification = &resp["result"]["classification"];
    assert_eq!(classification["enabled"], true);
    assert_eq!(classification["prediction"], "light rain");

    let probs = classification["probs"].as_object().unwrap();
    let total: f64 = probs.values().map(|p| p.as_f64().unwrap()).sum();
    assert!((total - 1.0).abs() < 1e-9);
    assert!(resp.get("debug").is_none());
}

#[tokio::test]
async fn test_probs_keep_class_order() {
    // Classes are ["light rain", "clear sky"]; sorted keys would flip them
    let body = json!({"city": "Lima", "features": {"temp": 20, "hum": 70, "pres": 1012, "wind": 3}});
    let (status, raw) =
        send_raw(state(classifier(), false), "POST", "/predict", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let rain = raw.find("\"light rain\":").unwrap();
    let clear = raw.find("\"clear sky\":").unwrap();
    assert!(rain < clear, "probs out of class order: {}", raw);
}

#[tokio::test]
async fn test_overflowing_reading_is_internal_error() {
    let body = json!({
        "city": "Lima",
        "features": {"temp": 1e200, "hum": 66, "pres": 1014, "wind": 2.24}
    });
    let (status, resp) = post(state(classifier(), false), "/predict", body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp["error"], "Internal error");
    assert!(resp["detail"].as_str().unwrap().contains("non-finite class probability"));
    assert!(resp.get("ok").is_none());
}

#[tokio::test]
async fn test_debug_block() {
    let body = json!({"city": " Lima ", "features": {"temp": 1, "hum": 2, "pres": 3, "wind": 4}});
    let (status, resp) = post(state(ClassifierParams::default(), true), "/predict", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        resp["debug"],
        json!({"city": "Lima", "features": {"temp": 1.0, "hum": 2.0, "pres": 3.0, "wind": 4.0}})
    );
}

#[tokio::test]
async fn test_missing_feature_is_bad_request() {
    let body = json!({"city": "Lima", "features": {"temp": 1, "hum": 2, "pres": 3}});
    let (status, resp) = post(state(classifier(), false), "/predict", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp, json!({"error": FEATURES_ERROR}));
}

#[tokio::test]
async fn test_invalid_json_is_bad_request() {
    let (status, resp) = send(state(classifier(), false), "POST", "/predict", "{city:").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp, json!({"error": "Body is not valid JSON"}));
}

#[tokio::test]
async fn test_empty_body_is_missing_features() {
    let (status, resp) = send(state(classifier(), false), "POST", "/predict", "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["error"], FEATURES_ERROR);
}

#[tokio::test]
async fn test_empty_city_looks_up_default_key() {
    let mut st = state(ClassifierParams::default(), false);
    let mut params = regression();
    params
        .per_city
        .insert("default".to_string(), RegressionModel::average(5.0));
    st.models = Arc::new(ModelBundle::new(params, ClassifierParams::default(), LogisticModel::default()));

    let body = json!({"features": {"temp": 1, "hum": 2, "pres": 3, "wind": 4}});
    let (_, resp) = post(st, "/predict", body).await;
    assert_eq!(resp["result"]["prediction"]["temperature_next"], 5.0);
}

// ============================================================================
// /score
// ============================================================================

#[tokio::test]
async fn test_score() {
    // z = -1 + 2*1 + 0.5*0 = 1
    let (status, resp) = post(state(classifier(), false), "/score", json!({"features": [1, 0]})).await;

    assert_eq!(status, StatusCode::OK);
    let p = resp["result"]["probability"].as_f64().unwrap();
    assert!((p - 1.0 / (1.0 + (-1.0f64).exp())).abs() < 1e-12);
    assert_eq!(resp["result"]["label"], 1);
}

#[tokio::test]
async fn test_score_coerces_junk_and_ignores_extra() {
    // z = -1 + 2*0 (string coerced) + 0.5*2 = 0 -> p = 0.5 -> label 1
    let body = json!({"features": ["hot", 2, 1000, 1000]});
    let (status, resp) = post(state(classifier(), true), "/score", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["result"]["probability"], 0.5);
    assert_eq!(resp["result"]["label"], 1);
    assert_eq!(resp["debug"]["features"], json!([0.0, 2.0, 1000.0, 1000.0]));
    assert_eq!(resp["debug"]["z"], 0.0);
}

#[tokio::test]
async fn test_score_low_probability() {
    let (_, resp) = post(state(classifier(), false), "/score", json!({"features": []})).await;
    assert_eq!(resp["result"]["label"], 0);
}

#[tokio::test]
async fn test_score_requires_list() {
    let (status, resp) = post(state(classifier(), false), "/score", json!({"features": "1,2"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp, json!({"error": FEATURES_LIST_ERROR}));
}

// ============================================================================
// /invoke/*
// ============================================================================

#[tokio::test]
async fn test_invoke_predict_with_string_body() {
    let inner = json!({
        "city": "Bogota",
        "features": {"temp": 17.14, "hum": 66, "pres": 1014, "wind": 2.24}
    });
    let event = json!({"body": inner.to_string()});
    let (status, resp) = post(state(ClassifierParams::default(), false), "/invoke/predict", event).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["statusCode"], 200);
    assert_eq!(resp["headers"]["Content-Type"], "application/json");

    let body: Value = serde_json::from_str(resp["body"].as_str().unwrap()).unwrap();
    assert_eq!(body["result"]["prediction"]["temperature_next"], 20.0);
}

#[tokio::test]
async fn test_invoke_score_with_object_body() {
    let event = json!({"body": {"features": [0.5]}});
    let (_, resp) = post(state(classifier(), false), "/invoke/score", event).await;

    assert_eq!(resp["statusCode"], 200);
    let body: Value = serde_json::from_str(resp["body"].as_str().unwrap()).unwrap();
    assert_eq!(body["result"]["label"], 1);
}

#[tokio::test]
async fn test_invoke_reports_errors_in_envelope() {
    let event = json!({"body": "{broken"});
    let (status, resp) = post(state(classifier(), false), "/invoke/predict", event).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["statusCode"], 400);
    let body: Value = serde_json::from_str(resp["body"].as_str().unwrap()).unwrap();
    assert_eq!(body, json!({"error": "Body is not valid JSON"}));
}

#[tokio::test]
async fn test_invoke_missing_body_is_empty_request() {
    let (_, resp) = post(state(classifier(), false), "/invoke/predict", json!({})).await;

    assert_eq!(resp["statusCode"], 400);
    let body: Value = serde_json::from_str(resp["body"].as_str().unwrap()).unwrap();
    assert_eq!(body["error"], FEATURES_ERROR);
}

// ============================================================================
// /health
// ============================================================================

#[tokio::test]
async fn test_health() {
    let (status, resp) = send(state(classifier(), false), "GET", "/health", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["status"], "healthy");
    assert_eq!(resp["models"]["per_city"], 1);
    assert_eq!(resp["models"]["classifier_enabled"], true);
    assert_eq!(resp["models"]["logistic_weights"], 2);
}
