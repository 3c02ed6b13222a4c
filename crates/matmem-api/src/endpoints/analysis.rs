// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
 * Analysis of caller-supplied signals
 */

use crate::common::{ApiError, ApiResult};
use crate::transports::http::server::ApiState;
use crate::v1::AnalyzeRequestV1;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use matmem_services::SimulationService;
use serde_json::Value;

/// POST /v1/analyze
#[utoipa::path(
    post,
    path = "/v1/analyze",
    tag = "analysis",
    request_body = AnalyzeRequestV1,
    responses(
        (status = 200, description = "Analysis report", body = std::collections::HashMap<String, serde_json::Value>),
        (status = 400, description = "Mismatched lengths or invalid dt", body = ApiError),
        (status = 422, description = "Signals cannot be analyzed", body = ApiError)
    )
)]
pub async fn post_analyze(
    State(state): State<ApiState>,
    payload: Result<Json<AnalyzeRequestV1>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(request) = payload?;
    tracing::debug!(
        target: "matmem-api",
        "Analyzing {} samples at dt={}",
        request.response.len(),
        request.dt
    );

    let report = state.simulation_service.analyze_signals(request.into()).await?;
    let body = serde_json::to_value(&report)
        .map_err(|e| ApiError::internal(format!("Failed to encode analysis: {}", e)))?;
    Ok(Json(body))
}
