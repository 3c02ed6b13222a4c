// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
 * System endpoints
 */

use crate::common::ApiResult;
use crate::transports::http::server::ApiState;
use crate::v1::HealthCheckResponseV1;
use axum::{extract::State, Json};
use matmem_services::SimulationService;

/// GET /v1/system/health_check
#[utoipa::path(
    get,
    path = "/v1/system/health_check",
    tag = "system",
    responses(
        (status = 200, description = "Service is up", body = HealthCheckResponseV1)
    )
)]
pub async fn get_health_check(
    State(state): State<ApiState>,
) -> ApiResult<Json<HealthCheckResponseV1>> {
    let health = state.simulation_service.health().await?;
    Ok(Json(health.into()))
}

/// GET /
///
/// Same payload as the health check, for clients probing the root.
#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses(
        (status = 200, description = "Service is up", body = HealthCheckResponseV1)
    )
)]
pub async fn get_root(State(state): State<ApiState>) -> ApiResult<Json<HealthCheckResponseV1>> {
    get_health_check(State(state)).await
}
