// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use matmem_api::{create_http_server, ApiState};
use matmem_config::{load_config_or_default, validate_config, MatmemConfig};
use matmem_observability::{
    debug_flags_help, init_logging, CrateDebugFlags, LogFormat, ObservabilityConfig,
    DEBUG_ENV_VAR,
};
use matmem_services::{ServiceSettings, SimulationServiceImpl};

/// Material Memory Simulator - REST API server
#[derive(Parser, Debug)]
#[command(name = "matmem-server", version, about, long_about = None, after_help = debug_flags_help())]
struct Args {
    /// Path to matmem_configuration.toml (searched for when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address
    #[arg(long)]
    host: Option<String>,

    /// Bind port
    #[arg(short, long)]
    port: Option<u16>,

    /// Default log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Console log format (pretty or json)
    #[arg(long)]
    log_format: Option<String>,

    /// Write JSON log files under the configured log directory
    #[arg(long, default_value_t = false)]
    file_logging: bool,

    /// Include extended analysis unless a request says otherwise
    #[arg(long, default_value_t = false)]
    extended_analysis: bool,
}

impl Args {
    /// Overrides in the form `matmem-config` expects
    fn to_overrides(&self) -> HashMap<String, String> {
        let mut overrides = HashMap::new();
        if let Some(host) = &self.host {
            overrides.insert("api_host".to_string(), host.clone());
        }
        if let Some(port) = self.port {
            overrides.insert("api_port".to_string(), port.to_string());
        }
        if let Some(level) = &self.log_level {
            overrides.insert("log_level".to_string(), level.clone());
        }
        if let Some(format) = &self.log_format {
            overrides.insert("log_format".to_string(), format.clone());
        }
        if self.file_logging {
            overrides.insert("file_logging".to_string(), "true".to_string());
        }
        if self.extended_analysis {
            overrides.insert("extended_analysis".to_string(), "true".to_string());
        }
        overrides
    }
}

fn observability_config(config: &MatmemConfig) -> Result<ObservabilityConfig> {
    let format = config
        .logging
        .format
        .parse::<LogFormat>()
        .map_err(anyhow::Error::msg)?;
    Ok(ObservabilityConfig {
        level: config.logging.level.to_lowercase(),
        format,
        file_logging: config.logging.file_logging,
        log_dir: config.logging.log_dir.clone(),
        retention_days: config.logging.retention_days,
        retention_runs: config.logging.retention_runs,
    })
}

fn service_settings(config: &MatmemConfig) -> ServiceSettings {
    ServiceSettings {
        default_dt: config.simulation.default_dt,
        default_duration: config.simulation.default_duration,
        default_intensity: config.simulation.default_intensity,
        default_frequency: config.simulation.default_frequency,
        max_samples: config.simulation.max_samples,
        max_compare: config.simulation.max_compare,
        max_lag: config.analysis.max_lag,
        bins: config.analysis.bins,
        stationarity_window: config.analysis.stationarity_window,
        extended_by_default: config.analysis.extended_by_default,
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(target: "matmem-api", "Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!(target: "matmem-api", "Shutdown signal received...");
}

#[tokio::main]
async fn main() -> Result<()> {
    // `--debug-<crate>` flags are open-ended, so they bypass clap
    let (debug_args, cli_args): (Vec<String>, Vec<String>) =
        std::env::args().partition(|arg| arg.starts_with("--debug-"));
    let args = Args::parse_from(cli_args);

    let mut debug_flags = CrateDebugFlags::from_args(debug_args);
    if let Ok(value) = std::env::var(DEBUG_ENV_VAR) {
        debug_flags.merge_env_value(&value);
    }

    let overrides = args.to_overrides();
    let (config, from_file) = load_config_or_default(args.config.as_deref(), Some(&overrides))
        .context("Failed to load configuration")?;
    validate_config(&config)?;

    let _logging_guard = init_logging(&observability_config(&config)?, &debug_flags)?;

    if !from_file {
        info!(target: "matmem-api", "No configuration file found, using defaults");
    }
    for name in debug_flags.unknown_crates() {
        warn!(target: "matmem-api", "Ignoring debug flag for unknown crate '{}'", name);
    }

    let service = SimulationServiceImpl::new(service_settings(&config));
    let app = create_http_server(ApiState::new(Arc::new(service)));

    let addr: SocketAddr = format!("{}:{}", config.api.host, config.api.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", config.api.host, config.api.port))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        target: "matmem-api",
        "Material Memory Simulator API v{} listening on http://{}",
        matmem_api::VERSION,
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!(target: "matmem-api", "Server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_map() {
        let args = Args::parse_from([
            "matmem-server",
            "--port",
            "9000",
            "--log-level",
            "debug",
            "--extended-analysis",
        ]);
        let overrides = args.to_overrides();
        assert_eq!(overrides.get("api_port").map(String::as_str), Some("9000"));
        assert_eq!(overrides.get("log_level").map(String::as_str), Some("debug"));
        assert_eq!(
            overrides.get("extended_analysis").map(String::as_str),
            Some("true")
        );
        assert!(!overrides.contains_key("api_host"));
    }

    #[test]
    fn test_service_settings_follow_config() {
        let mut config = MatmemConfig::default();
        config.simulation.max_compare = 3;
        config.analysis.bins = 32;
        let settings = service_settings(&config);
        assert_eq!(settings.max_compare, 3);
        assert_eq!(settings.bins, 32);
        assert_eq!(settings.default_dt, config.simulation.default_dt);
    }
}
