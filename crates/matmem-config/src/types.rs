// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! Each struct maps to one section of `matmem_configuration.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MatmemConfig {
    pub api: ApiConfig,
    pub simulation: SimulationConfig,
    pub analysis: AnalysisConfig,
    pub logging: LoggingConfig,
}

/// HTTP listener
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Request defaults and resource limits for simulation runs
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub default_dt: f64,
    pub default_duration: f64,
    pub default_intensity: f64,
    pub default_frequency: f64,
    /// Largest accepted `ceil(duration / dt)` per run
    pub max_samples: usize,
    /// Largest accepted comparison batch
    pub max_compare: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            default_dt: 0.01,
            default_duration: 10.0,
            default_intensity: 1.0,
            default_frequency: 1.0,
            max_samples: 200_000,
            max_compare: 5,
        }
    }
}

/// Analyzer settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub max_lag: usize,
    pub bins: usize,
    pub stationarity_window: usize,
    /// Run the extended suite when a request does not say
    pub extended_by_default: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_lag: 100,
            bins: 20,
            stationarity_window: 50,
            extended_by_default: false,
        }
    }
}

/// Logging output
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
    pub file_logging: bool,
    pub log_dir: PathBuf,
    pub retention_days: u64,
    pub retention_runs: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file_logging: false,
            log_dir: PathBuf::from("logs"),
            retention_days: 7,
            retention_runs: 10,
        }
    }
}
