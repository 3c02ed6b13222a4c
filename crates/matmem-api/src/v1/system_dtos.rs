// Copyright 2025 Neuraville Inc.
// Licensed under the Apache License, Version 2.0

//! System API DTOs

use matmem_services::HealthStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthCheckResponseV1 {
    pub status: String,
    pub message: String,
    pub version: String,
}

impl From<HealthStatus> for HealthCheckResponseV1 {
    fn from(health: HealthStatus) -> Self {
        Self {
            status: health.status,
            message: health.message,
            version: health.version,
        }
    }
}
