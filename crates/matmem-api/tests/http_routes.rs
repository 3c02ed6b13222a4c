// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Route-level tests driving the router in-process.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use matmem_api::{create_http_server, ApiState};
use matmem_services::{ServiceSettings, SimulationServiceImpl};

fn app() -> Router {
    let service = SimulationServiceImpl::new(ServiceSettings::default());
    create_http_server(ApiState::new(Arc::new(service)))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn test_root_and_health_check() {
    for uri in ["/", "/v1/system/health_check"] {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["message"], "Material Memory Simulator API");
    }
}

#[tokio::test]
async fn test_materials_catalog() {
    let (status, body) = get("/v1/materials").await;
    assert_eq!(status, StatusCode::OK);

    let catalog = body.as_object().unwrap();
    assert_eq!(catalog.len(), 5);
    for key in ["wood", "metal", "cloth", "soil", "water"] {
        let entry = &catalog[key];
        let layers = entry["tau_list"].as_array().unwrap().len();
        assert!(layers > 0);
        assert_eq!(entry["k_list"].as_array().unwrap().len(), layers);
        assert_eq!(entry["w_list"].as_array().unwrap().len(), layers);
        assert!(entry["nonlinearity"]["kind"].is_string());
    }
}

#[tokio::test]
async fn test_unknown_material_is_404() {
    let (status, body) = get("/v1/materials/glass").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(body["detail"].as_str().unwrap().contains("glass"));
}

#[tokio::test]
async fn test_stimuli_listing() {
    let (status, body) = get("/v1/stimuli").await;
    assert_eq!(status, StatusCode::OK);
    let kinds = body.as_array().unwrap();
    assert_eq!(kinds.len(), 7);
    let noise = kinds.iter().find(|k| k["key"] == "noise").unwrap();
    assert_eq!(noise["deterministic"], false);
}

#[tokio::test]
async fn test_simulate_defaults() {
    let (status, body) =
        post_json("/v1/simulate", json!({"material_type": "metal", "stimulus_type": "pulse"}))
            .await;
    assert_eq!(status, StatusCode::OK);

    let n = body["time"].as_array().unwrap().len();
    assert_eq!(n, 1000);
    assert_eq!(body["stimulus"].as_array().unwrap().len(), n);
    assert_eq!(body["response"].as_array().unwrap().len(), n);
    for row in body["internal_states"].as_array().unwrap() {
        assert_eq!(row.as_array().unwrap().len(), n);
    }

    let analysis = &body["analysis"];
    assert!(analysis["memory_tau"].is_number());
    assert!(analysis["mutual_information"].as_f64().unwrap() >= 0.0);
    assert!(analysis["peak_time"].as_f64().unwrap() < 1.0);
    assert!(analysis.get("spectral").is_none());
}

#[tokio::test]
async fn test_simulate_extended_analysis() {
    let (status, body) = post_json(
        "/v1/simulate",
        json!({
            "material_type": "wood",
            "stimulus_type": "sine",
            "duration": 20.0,
            "extended_analysis": true
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let analysis = &body["analysis"];
    for section in ["causality", "spectral", "information_theory", "stationarity"] {
        assert!(analysis[section].is_object(), "missing {}", section);
    }
    assert!(analysis["system_stability"].is_string());
}

#[tokio::test]
async fn test_simulate_rejects_bad_input() {
    let (status, body) =
        post_json("/v1/simulate", json!({"material_type": "glass", "stimulus_type": "pulse"}))
            .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");

    let (status, _) = post_json(
        "/v1/simulate",
        json!({"material_type": "wood", "stimulus_type": "pulse", "dt": -0.1}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json("/v1/simulate", json!({"stimulus_type": "pulse"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let (status, body) = send(
        Request::builder()
            .method(Method::POST)
            .uri("/v1/simulate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_compare_preserves_order() {
    let requests: Vec<Value> = ["water", "wood", "metal"]
        .iter()
        .map(|m| json!({"material_type": m, "stimulus_type": "heat", "duration": 2.0}))
        .collect();
    let (status, body) = post_json("/v1/compare", Value::Array(requests)).await;
    assert_eq!(status, StatusCode::OK);

    let order: Vec<&str> = body["comparisons"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["material_type"].as_str().unwrap())
        .collect();
    assert_eq!(order, vec!["water", "wood", "metal"]);
}

#[tokio::test]
async fn test_compare_limit() {
    let requests: Vec<Value> = (0..6)
        .map(|_| json!({"material_type": "wood", "stimulus_type": "heat", "duration": 1.0}))
        .collect();
    let (status, body) = post_json("/v1/compare", Value::Array(requests)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains('5'));
}

#[tokio::test]
async fn test_analyze_recorded_signals() {
    let dt = 0.01;
    let stimulus: Vec<f64> = (0..500).map(|i| ((i as f64) * dt * 3.0).sin()).collect();
    let response: Vec<f64> = (0..500)
        .map(|i| if i < 5 { 0.0 } else { stimulus[i - 5] })
        .collect();

    let (status, body) = post_json(
        "/v1/analyze",
        json!({
            "stimulus": stimulus,
            "response": response,
            "dt": dt,
            "extended_analysis": true
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["memory_tau"].is_number());
    let lag = body["causality"]["optimal_lag"].as_f64().unwrap();
    assert!((lag - 0.05).abs() < 1e-9, "lag = {}", lag);
}

#[tokio::test]
async fn test_analyze_length_mismatch() {
    let (status, _) = post_json(
        "/v1/analyze",
        json!({"stimulus": [0.0, 1.0, 2.0], "response": [0.0, 1.0], "dt": 0.1}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analyze_rejects_bad_time_axis() {
    let signal: Vec<f64> = (0..300).map(|i| (i as f64 * 0.05).sin()).collect();

    for dt in [0.0, -0.01] {
        let (status, _) = post_json(
            "/v1/analyze",
            json!({"stimulus": signal, "response": signal, "dt": dt, "extended_analysis": false}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "dt = {}", dt);
    }

    let time: Vec<f64> = (0..300).map(|i| 3.0 - i as f64 * 0.01).collect();
    let (status, body) = post_json(
        "/v1/analyze",
        json!({"stimulus": signal, "response": signal, "dt": 0.01, "time": time}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("strictly increasing"));
}

#[tokio::test]
async fn test_openapi_document_served() {
    let (status, body) = get("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Material Memory Simulator API");
    assert!(body["paths"]["/v1/simulate"]["post"].is_object());
}

#[tokio::test]
async fn test_unversioned_aliases_match_v1() {
    let (status, aliased) = get("/materials").await;
    assert_eq!(status, StatusCode::OK);
    let (_, versioned) = get("/v1/materials").await;
    assert_eq!(aliased, versioned);

    let request = json!({"material_type": "metal", "stimulus_type": "pulse", "duration": 2.0});
    let (status, body) = post_json("/simulate", request.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["time"].as_array().unwrap().len(), 200);

    let (status, body) = post_json("/compare", json!([request])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["comparisons"][0]["material_type"], "metal");

    // Only the front-end routes are aliased
    let (status, _) = get("/stimuli").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (status, body) = get("/v2/nothing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Not Found");
}
