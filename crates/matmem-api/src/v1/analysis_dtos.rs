// Copyright 2025 Neuraville Inc.
// Licensed under the Apache License, Version 2.0

//! Signal analysis DTOs

use matmem_services::SignalAnalysisRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Analyze recorded stimulus/response signals without simulating
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequestV1 {
    pub stimulus: Vec<f64>,
    pub response: Vec<f64>,
    /// Sample spacing in seconds
    pub dt: f64,
    /// Sample times; `i * dt` when omitted
    pub time: Option<Vec<f64>>,
    pub extended_analysis: Option<bool>,
}

impl From<AnalyzeRequestV1> for SignalAnalysisRequest {
    fn from(req: AnalyzeRequestV1) -> Self {
        SignalAnalysisRequest {
            stimulus: req.stimulus,
            response: req.response,
            dt: req.dt,
            time: req.time,
            extended_analysis: req.extended_analysis,
        }
    }
}
