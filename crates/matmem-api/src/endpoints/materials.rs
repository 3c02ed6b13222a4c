// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
 * Material and stimulus catalog endpoints
 */

use crate::common::{ApiError, ApiResult};
use crate::transports::http::server::ApiState;
use crate::v1::{MaterialCatalogV1, MaterialInfoV1, StimulusKindV1};
use axum::{
    extract::{Path, State},
    Json,
};
use matmem_services::SimulationService;
use std::collections::BTreeMap;

/// GET /v1/materials
#[utoipa::path(
    get,
    path = "/v1/materials",
    tag = "materials",
    responses(
        (status = 200, description = "Material presets keyed by material type", body = BTreeMap<String, MaterialInfoV1>)
    )
)]
pub async fn get_materials(State(state): State<ApiState>) -> ApiResult<Json<MaterialCatalogV1>> {
    let materials = state.simulation_service.list_materials().await?;
    let catalog = materials
        .into_iter()
        .map(|info| {
            let key = info.key.clone();
            MaterialInfoV1::try_from(info).map(|v1| (key, v1))
        })
        .collect::<Result<BTreeMap<_, _>, ApiError>>()?;
    Ok(Json(catalog))
}

/// GET /v1/materials/:key
#[utoipa::path(
    get,
    path = "/v1/materials/{key}",
    tag = "materials",
    params(
        ("key" = String, Path, description = "Material type, e.g. wood")
    ),
    responses(
        (status = 200, description = "Material preset", body = MaterialInfoV1),
        (status = 404, description = "Unknown material", body = ApiError)
    )
)]
pub async fn get_material(
    State(state): State<ApiState>,
    Path(key): Path<String>,
) -> ApiResult<Json<MaterialInfoV1>> {
    let info = state.simulation_service.get_material(&key).await?;
    Ok(Json(info.try_into()?))
}

/// GET /v1/stimuli
#[utoipa::path(
    get,
    path = "/v1/stimuli",
    tag = "materials",
    responses(
        (status = 200, description = "Supported stimulus waveforms", body = Vec<StimulusKindV1>)
    )
)]
pub async fn get_stimuli(State(state): State<ApiState>) -> ApiResult<Json<Vec<StimulusKindV1>>> {
    let kinds = state.simulation_service.list_stimulus_kinds().await?;
    Ok(Json(kinds.into_iter().map(StimulusKindV1::from).collect()))
}
