// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Simulation service trait.

Catalog lookups, simulation runs, multi-material comparison and analysis of
caller-supplied signals.
*/

use crate::types::*;
use async_trait::async_trait;

/// Simulation service (transport-agnostic)
#[async_trait]
pub trait SimulationService: Send + Sync {
    // ========================================================================
    // HEALTH
    // ========================================================================

    /// Liveness report with the service version
    async fn health(&self) -> ServiceResult<HealthStatus>;

    // ========================================================================
    // CATALOG
    // ========================================================================

    /// All material presets in catalog order
    async fn list_materials(&self) -> ServiceResult<Vec<MaterialInfo>>;

    /// One material preset
    ///
    /// # Errors
    /// * `ServiceError::NotFound` - Unknown key
    ///
    async fn get_material(&self, key: &str) -> ServiceResult<MaterialInfo>;

    /// Supported stimulus waveforms
    async fn list_stimulus_kinds(&self) -> ServiceResult<Vec<StimulusKindInfo>>;

    // ========================================================================
    // SIMULATION & ANALYSIS
    // ========================================================================

    /// Generate the stimulus, simulate the material and analyze the response
    ///
    /// # Errors
    /// * `ServiceError::InvalidInput` - Unknown keys, bad parameters or too many samples
    /// * `ServiceError::Unprocessable` - Response unusable for analysis
    ///
    async fn run_simulation(&self, request: SimulationRequest) -> ServiceResult<SimulationOutcome>;

    /// Run independent simulations side by side
    ///
    /// # Errors
    /// * `ServiceError::InvalidInput` - More requests than the configured limit,
    ///   or any request invalid
    ///
    async fn compare(&self, requests: Vec<SimulationRequest>) -> ServiceResult<Vec<ComparisonEntry>>;

    /// Analyze caller-supplied stimulus/response signals
    async fn analyze_signals(&self, request: SignalAnalysisRequest) -> ServiceResult<matmem_analysis::AnalysisReport>;
}
