// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// OpenAPI documentation generation
//
// Generated at compile time by utoipa from the endpoint annotations.

use utoipa::OpenApi;

use crate::{
    common::{ApiError, ApiErrorCode},
    v1::{
        AnalyzeRequestV1, CompareResponseV1, ComparisonEntryV1, HealthCheckResponseV1,
        MaterialInfoV1, SimulateRequestV1, SimulateResponseV1, StimulusKindV1,
    },
};

/// OpenAPI documentation for the simulator REST API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Material Memory Simulator API",
        description = "Nonlinear multi-timescale delay simulation of natural materials, with memory, information, spectral and stability analysis",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        crate::endpoints::system::get_root,
        crate::endpoints::system::get_health_check,
        crate::endpoints::materials::get_materials,
        crate::endpoints::materials::get_material,
        crate::endpoints::materials::get_stimuli,
        crate::endpoints::simulation::post_simulate,
        crate::endpoints::simulation::post_compare,
        crate::endpoints::analysis::post_analyze,
    ),
    components(
        schemas(
            HealthCheckResponseV1,
            MaterialInfoV1,
            StimulusKindV1,
            SimulateRequestV1,
            SimulateResponseV1,
            ComparisonEntryV1,
            CompareResponseV1,
            AnalyzeRequestV1,
            ApiError,
            ApiErrorCode,
        )
    ),
    tags(
        (name = "system", description = "Health endpoints"),
        (name = "materials", description = "Material presets and stimulus waveforms"),
        (name = "simulation", description = "Simulation runs and material comparison"),
        (name = "analysis", description = "Analysis of recorded signals"),
    )
)]
pub struct ApiDoc;
