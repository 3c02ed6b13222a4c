// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Material Memory Configuration
//!
//! Type-safe configuration loader with support for:
//! - TOML file parsing (`matmem_configuration.toml`)
//! - Environment variable overrides (`MATMEM_*`)
//! - CLI argument overrides
//!
//! ## Usage
//!
//! ```rust,no_run
//! use matmem_config::{load_config, MatmemConfig};
//!
//! let config = load_config(None, None).expect("Failed to load config");
//! println!("API: {}:{}", config.api.host, config.api.port);
//! ```
//!
//! Every section is `#[serde(default)]`, so a partial file only needs the
//! values it changes.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// File name searched for by [`find_config_file`]
pub const CONFIG_FILE_NAME: &str = "matmem_configuration.toml";

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{
    apply_cli_overrides, apply_environment_overrides, find_config_file, load_config,
    load_config_or_default,
};
pub use types::*;
pub use validation::{validate_config, ConfigValidationError};

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found. Searched: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax: {0}")]
    ParseError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
