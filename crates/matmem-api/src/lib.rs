// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Material Memory Simulator REST API
//
// Axum routes over the transport-agnostic `SimulationService`, plus the
// `matmem-server` binary that wires configuration and logging around them.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod common;
pub mod endpoints;
pub mod middleware;
pub mod openapi;
pub mod transports;
pub mod v1;

// Re-export commonly used types
pub use common::{ApiError, ApiErrorCode, ApiResult};
pub use transports::http::server::{create_http_server, ApiState};
