// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Checks value ranges and reports every problem at once.

use crate::{ConfigError, ConfigResult, MatmemConfig};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    InvalidPortRange { port_name: String, port: u16 },
    MissingRequired { field: String },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPortRange { port_name, port } => {
                write!(
                    f,
                    "Port {} = {} is outside valid range (1024-65535)",
                    port_name, port
                )
            }
            Self::MissingRequired { field } => {
                write!(f, "Missing required configuration: {}", field)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every failed check
pub fn validate_config(config: &MatmemConfig) -> ConfigResult<()> {
    let errors = collect_errors(config);
    if errors.is_empty() {
        return Ok(());
    }

    let error_messages = errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::ValidationError(format!(
        "Configuration validation failed:\n{}",
        error_messages
    )))
}

/// All validation failures of `config`, in section order
pub fn collect_errors(config: &MatmemConfig) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();
    validate_api(config, &mut errors);
    validate_simulation(config, &mut errors);
    validate_analysis(config, &mut errors);
    validate_logging(config, &mut errors);
    errors
}

fn invalid(field: &str, reason: impl Into<String>) -> ConfigValidationError {
    ConfigValidationError::InvalidValue {
        field: field.to_string(),
        reason: reason.into(),
    }
}

fn validate_api(config: &MatmemConfig, errors: &mut Vec<ConfigValidationError>) {
    if config.api.port < 1024 {
        errors.push(ConfigValidationError::InvalidPortRange {
            port_name: "api.port".to_string(),
            port: config.api.port,
        });
    }
    if config.api.host.trim().is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "api.host".to_string(),
        });
    }
}

fn validate_simulation(config: &MatmemConfig, errors: &mut Vec<ConfigValidationError>) {
    let sim = &config.simulation;
    for (field, value) in [
        ("simulation.default_dt", sim.default_dt),
        ("simulation.default_duration", sim.default_duration),
    ] {
        if !(value > 0.0) || !value.is_finite() {
            errors.push(invalid(field, format!("must be finite and > 0, got {}", value)));
        }
    }
    for (field, value) in [
        ("simulation.default_intensity", sim.default_intensity),
        ("simulation.default_frequency", sim.default_frequency),
    ] {
        if !value.is_finite() {
            errors.push(invalid(field, "must be finite"));
        }
    }
    if sim.max_samples < 2 {
        errors.push(invalid("simulation.max_samples", "must be at least 2"));
    }
    if sim.max_compare == 0 {
        errors.push(invalid("simulation.max_compare", "must be at least 1"));
    }
}

fn validate_analysis(config: &MatmemConfig, errors: &mut Vec<ConfigValidationError>) {
    let analysis = &config.analysis;
    if analysis.max_lag == 0 {
        errors.push(invalid("analysis.max_lag", "must be at least 1"));
    }
    if analysis.bins == 0 {
        errors.push(invalid("analysis.bins", "must be at least 1"));
    }
    if analysis.stationarity_window < 2 {
        errors.push(invalid("analysis.stationarity_window", "must be at least 2"));
    }
}

fn validate_logging(config: &MatmemConfig, errors: &mut Vec<ConfigValidationError>) {
    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(invalid(
            "logging.level",
            format!("'{}' is not one of {:?}", config.logging.level, LOG_LEVELS),
        ));
    }
    if !LOG_FORMATS.contains(&config.logging.format.as_str()) {
        errors.push(invalid(
            "logging.format",
            format!("'{}' is not one of {:?}", config.logging.format, LOG_FORMATS),
        ));
    }
}
