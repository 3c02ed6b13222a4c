// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
 * Simulation endpoints
 *
 * Single runs and side-by-side material comparison.
 */

use crate::common::{ApiError, ApiResult};
use crate::transports::http::server::ApiState;
use crate::v1::{
    CompareResponseV1, ComparisonEntryV1, SimulateRequestV1, SimulateResponseV1,
};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use matmem_services::{SimulationRequest, SimulationService};

/// POST /v1/simulate
#[utoipa::path(
    post,
    path = "/v1/simulate",
    tag = "simulation",
    request_body = SimulateRequestV1,
    responses(
        (status = 200, description = "Stimulus, response, layer states and analysis", body = SimulateResponseV1),
        (status = 400, description = "Invalid parameters", body = ApiError),
        (status = 422, description = "Response cannot be analyzed", body = ApiError)
    )
)]
pub async fn post_simulate(
    State(state): State<ApiState>,
    payload: Result<Json<SimulateRequestV1>, JsonRejection>,
) -> ApiResult<Json<SimulateResponseV1>> {
    let Json(request) = payload?;
    tracing::info!(
        target: "matmem-api",
        "Simulating {} with {} stimulus",
        request.material_type,
        request.stimulus_type
    );

    let outcome = state
        .simulation_service
        .run_simulation(request.into())
        .await?;
    Ok(Json(outcome.try_into()?))
}

/// POST /v1/compare
#[utoipa::path(
    post,
    path = "/v1/compare",
    tag = "simulation",
    request_body = Vec<SimulateRequestV1>,
    responses(
        (status = 200, description = "One result per request, in request order", body = CompareResponseV1),
        (status = 400, description = "Too many requests or invalid parameters", body = ApiError)
    )
)]
pub async fn post_compare(
    State(state): State<ApiState>,
    payload: Result<Json<Vec<SimulateRequestV1>>, JsonRejection>,
) -> ApiResult<Json<CompareResponseV1>> {
    let Json(requests) = payload?;
    tracing::info!(target: "matmem-api", "Comparing {} materials", requests.len());

    let requests: Vec<SimulationRequest> = requests.into_iter().map(Into::into).collect();
    let entries = state.simulation_service.compare(requests).await?;

    let comparisons = entries
        .into_iter()
        .map(ComparisonEntryV1::try_from)
        .collect::<ApiResult<Vec<_>>>()?;
    Ok(Json(CompareResponseV1 { comparisons }))
}
