// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Transport-agnostic Data Transfer Objects (DTOs).

These types define the stable contract between adapters and services.
*/

use matmem_analysis::AnalysisReport;
use matmem_model::{MaterialModel, Nonlinearity};
use serde::{Deserialize, Serialize};

// ============================================================================
// SETTINGS
// ============================================================================

/// Runtime limits and defaults the service applies to requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSettings {
    pub default_dt: f64,
    pub default_duration: f64,
    pub default_intensity: f64,
    pub default_frequency: f64,
    /// Largest accepted `ceil(duration / dt)`
    pub max_samples: usize,
    /// Largest accepted comparison batch
    pub max_compare: usize,
    pub max_lag: usize,
    pub bins: usize,
    pub stationarity_window: usize,
    pub extended_by_default: bool,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            default_dt: 0.01,
            default_duration: 10.0,
            default_intensity: 1.0,
            default_frequency: 1.0,
            max_samples: 200_000,
            max_compare: 5,
            max_lag: 100,
            bins: 20,
            stationarity_window: 50,
            extended_by_default: false,
        }
    }
}

// ============================================================================
// SYSTEM DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub version: String,
}

// ============================================================================
// CATALOG DTOs
// ============================================================================

/// Public view of a material preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialInfo {
    pub key: String,
    pub name: String,
    pub tau_list: Vec<f64>,
    pub k_list: Vec<f64>,
    pub w_list: Vec<f64>,
    pub nonlinearity: Nonlinearity,
}

impl MaterialInfo {
    pub fn from_model(key: &str, model: &MaterialModel) -> Self {
        Self {
            key: key.to_string(),
            name: model.name.clone(),
            tau_list: model.tau.clone(),
            k_list: model.k.clone(),
            w_list: model.w.clone(),
            nonlinearity: model.nonlinearity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StimulusKindInfo {
    pub key: String,
    /// `false` for kinds drawing random samples
    pub deterministic: bool,
}

// ============================================================================
// SIMULATION DTOs
// ============================================================================

/// Parameters of one simulation; unset fields take the configured defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub material_type: String,
    pub stimulus_type: String,
    pub duration: Option<f64>,
    pub intensity: Option<f64>,
    pub frequency: Option<f64>,
    pub dt: Option<f64>,
    pub extended_analysis: Option<bool>,
}

impl SimulationRequest {
    pub fn new(material_type: impl Into<String>, stimulus_type: impl Into<String>) -> Self {
        Self {
            material_type: material_type.into(),
            stimulus_type: stimulus_type.into(),
            duration: None,
            intensity: None,
            frequency: None,
            dt: None,
            extended_analysis: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub time: Vec<f64>,
    pub stimulus: Vec<f64>,
    pub response: Vec<f64>,
    /// One row per layer
    pub internal_states: Vec<Vec<f64>>,
    pub analysis: AnalysisReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub material_type: String,
    pub data: SimulationOutcome,
}

// ============================================================================
// ANALYSIS DTOs
// ============================================================================

/// Caller-supplied signals to analyze without simulating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalAnalysisRequest {
    pub stimulus: Vec<f64>,
    pub response: Vec<f64>,
    pub dt: f64,
    /// Defaults to `i·dt`
    pub time: Option<Vec<f64>>,
    pub extended_analysis: Option<bool>,
}
