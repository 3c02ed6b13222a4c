// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// HTTP server implementation (Axum)
//
// Routing, middleware and shared state for the REST API.

use axum::{
    http::StatusCode,
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::common::ApiError;
use crate::middleware::{create_cors_layer, log_request_response_bodies};
use crate::openapi::ApiDoc;
use matmem_services::SimulationService;

/// Application state shared across all HTTP handlers
#[derive(Clone)]
pub struct ApiState {
    pub simulation_service: Arc<dyn SimulationService>,
}

impl ApiState {
    pub fn new(simulation_service: Arc<dyn SimulationService>) -> Self {
        Self { simulation_service }
    }
}

/// Create the main HTTP server application
pub fn create_http_server(state: ApiState) -> Router {
    use crate::endpoints::system;

    Router::new()
        .route("/", get(system::get_root))
        // OpenAPI document
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .nest("/v1", create_v1_router())
        .merge(create_unversioned_router())
        .fallback(|| async {
            tracing::warn!(target: "matmem-api", "Unmatched request - 404 Not Found");
            (
                StatusCode::NOT_FOUND,
                Json(ApiError::new("Not Found")),
            )
        })
        .with_state(state)
        .layer(middleware::from_fn(log_request_response_bodies))
        .layer(create_cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::span!(
                        target: "matmem-api",
                        tracing::Level::DEBUG,
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &axum::http::Request<_>, _span: &tracing::Span| {
                    tracing::debug!(target: "matmem-api", "Incoming request: {} {}", request.method(), request.uri());
                })
                .on_response(|response: &axum::http::Response<_>, latency: std::time::Duration, _span: &tracing::Span| {
                    tracing::debug!(
                        target: "matmem-api",
                        "Response: status={}, latency={:?}",
                        response.status(),
                        latency
                    );
                })
                .on_failure(|error: tower_http::classify::ServerErrorsFailureClass, latency: std::time::Duration, _span: &tracing::Span| {
                    tracing::error!(target: "matmem-api", "Request failed: {}, latency={:?}", error, latency);
                }),
        )
}

/// Format: /v1/{resource}
fn create_v1_router() -> Router<ApiState> {
    use crate::endpoints::{analysis, materials, simulation, system};

    Router::new()
        .route("/system/health_check", get(system::get_health_check))
        .route("/materials", get(materials::get_materials))
        .route("/materials/:key", get(materials::get_material))
        .route("/stimuli", get(materials::get_stimuli))
        .route("/simulate", post(simulation::post_simulate))
        .route("/compare", post(simulation::post_compare))
        .route("/analyze", post(analysis::post_analyze))
}

/// Unprefixed aliases for the routes the bundled front end calls
fn create_unversioned_router() -> Router<ApiState> {
    use crate::endpoints::{materials, simulation};

    Router::new()
        .route("/materials", get(materials::get_materials))
        .route("/simulate", post(simulation::post_simulate))
        .route("/compare", post(simulation::post_compare))
}
