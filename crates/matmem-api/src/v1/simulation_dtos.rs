// Copyright 2025 Neuraville Inc.
// Licensed under the Apache License, Version 2.0

//! Simulation API DTOs
//!
//! Request/response types for single runs and material comparison

use matmem_services::{ComparisonEntry, SimulationOutcome, SimulationRequest};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::{ApiError, ApiResult};

/// Simulation request; omitted numeric fields take the server defaults
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SimulateRequestV1 {
    /// wood, metal, cloth, soil or water
    #[schema(example = "wood")]
    pub material_type: String,
    /// pulse, sine, heat, pressure, sound, light or noise
    #[schema(example = "pulse")]
    pub stimulus_type: String,
    /// Seconds (default 10)
    pub duration: Option<f64>,
    /// Amplitude (default 1)
    pub intensity: Option<f64>,
    /// Hz, for periodic waveforms (default 1)
    pub frequency: Option<f64>,
    /// Time step in seconds (default 0.01)
    pub dt: Option<f64>,
    /// Include causality, spectral, information, stationarity and stability sections
    pub extended_analysis: Option<bool>,
}

impl From<SimulateRequestV1> for SimulationRequest {
    fn from(req: SimulateRequestV1) -> Self {
        SimulationRequest {
            material_type: req.material_type,
            stimulus_type: req.stimulus_type,
            duration: req.duration,
            intensity: req.intensity,
            frequency: req.frequency,
            dt: req.dt,
            extended_analysis: req.extended_analysis,
        }
    }
}

/// Simulation output
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SimulateResponseV1 {
    pub time: Vec<f64>,
    pub stimulus: Vec<f64>,
    pub response: Vec<f64>,
    /// One row per material layer
    pub internal_states: Vec<Vec<f64>>,
    /// Memory metrics, mutual information and optional extended sections
    pub analysis: serde_json::Value,
}

impl TryFrom<SimulationOutcome> for SimulateResponseV1 {
    type Error = ApiError;

    fn try_from(outcome: SimulationOutcome) -> ApiResult<Self> {
        let analysis = serde_json::to_value(&outcome.analysis)
            .map_err(|e| ApiError::internal(format!("Failed to encode analysis: {}", e)))?;
        Ok(Self {
            time: outcome.time,
            stimulus: outcome.stimulus,
            response: outcome.response,
            internal_states: outcome.internal_states,
            analysis,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComparisonEntryV1 {
    pub material_type: String,
    pub data: SimulateResponseV1,
}

impl TryFrom<ComparisonEntry> for ComparisonEntryV1 {
    type Error = ApiError;

    fn try_from(entry: ComparisonEntry) -> ApiResult<Self> {
        Ok(Self {
            material_type: entry.material_type,
            data: entry.data.try_into()?,
        })
    }
}

/// Results in request order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompareResponseV1 {
    pub comparisons: Vec<ComparisonEntryV1>,
}
