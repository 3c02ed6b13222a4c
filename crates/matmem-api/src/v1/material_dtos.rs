// Copyright 2025 Neuraville Inc.
// Licensed under the Apache License, Version 2.0

//! Material and stimulus catalog DTOs

use matmem_services::{MaterialInfo, StimulusKindInfo};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::common::{ApiError, ApiResult};

/// One material preset
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MaterialInfoV1 {
    pub name: String,
    /// Layer time constants in seconds
    pub tau_list: Vec<f64>,
    /// Layer input gains
    pub k_list: Vec<f64>,
    /// Layer output weights
    pub w_list: Vec<f64>,
    /// Tagged nonlinear transform, e.g. `{"kind": "saturating", "gain": 2.0}`
    pub nonlinearity: serde_json::Value,
}

impl TryFrom<MaterialInfo> for MaterialInfoV1 {
    type Error = ApiError;

    fn try_from(info: MaterialInfo) -> ApiResult<Self> {
        let nonlinearity = serde_json::to_value(info.nonlinearity)
            .map_err(|e| ApiError::internal(format!("Failed to encode nonlinearity: {}", e)))?;
        Ok(Self {
            name: info.name,
            tau_list: info.tau_list,
            k_list: info.k_list,
            w_list: info.w_list,
            nonlinearity,
        })
    }
}

/// Material key → preset
pub type MaterialCatalogV1 = BTreeMap<String, MaterialInfoV1>;

/// One stimulus waveform kind
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StimulusKindV1 {
    pub key: String,
    /// `false` when the waveform draws random samples
    pub deterministic: bool,
}

impl From<StimulusKindInfo> for StimulusKindV1 {
    fn from(info: StimulusKindInfo) -> Self {
        Self {
            key: info.key,
            deterministic: info.deterministic,
        }
    }
}
