// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! This module implements the 3-tier configuration loading system:
//! 1. TOML file (base defaults)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{ConfigError, ConfigResult, MatmemConfig, CONFIG_FILE_NAME};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Find the configuration file
///
/// Search order:
/// 1. `MATMEM_CONFIG_PATH` environment variable
/// 2. Current working directory
/// 3. Parent directory
/// 4. Workspace root (searches up to 5 levels)
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("MATMEM_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by MATMEM_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));

        // Parent directory and up to 5 ancestors
        let mut current = cwd.clone();
        for _ in 0..5 {
            if let Some(parent) = current.parent() {
                let candidate = parent.join(CONFIG_FILE_NAME);
                if !search_paths.contains(&candidate) {
                    search_paths.push(candidate);
                }
                current = parent.to_path_buf();
            }
        }
    }

    if let Some(found) = search_paths.iter().find(|p| p.exists()) {
        return Ok(found.clone());
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "Configuration file '{}' not found in any of these locations:\n{}\n\nSet MATMEM_CONFIG_PATH environment variable to specify custom location.",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration from TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns error if config file is not found or contains invalid TOML
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<MatmemConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };

    let content = fs::read_to_string(&config_file)?;
    let mut config: MatmemConfig = toml::from_str(&content)?;

    apply_environment_overrides(&mut config);
    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    Ok(config)
}

/// Like [`load_config`], but a missing file (when none was named explicitly)
/// yields the built-in defaults with overrides applied.
///
/// Returns the configuration and whether a file was read.
pub fn load_config_or_default(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<(MatmemConfig, bool)> {
    if config_path.is_some() {
        return load_config(config_path, cli_args).map(|c| (c, true));
    }
    match find_config_file() {
        Ok(path) => load_config(Some(&path), cli_args).map(|c| (c, true)),
        Err(ConfigError::FileNotFound(_)) => {
            let mut config = MatmemConfig::default();
            apply_environment_overrides(&mut config);
            if let Some(cli) = cli_args {
                apply_cli_overrides(&mut config, cli);
            }
            Ok((config, false))
        }
        Err(e) => Err(e),
    }
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `MATMEM_API_HOST` -> `api.host`
/// - `MATMEM_API_PORT` -> `api.port`
/// - `MATMEM_LOG_LEVEL` -> `logging.level`
/// - `MATMEM_LOG_DIR` -> `logging.log_dir`
/// - `MATMEM_MAX_SAMPLES` -> `simulation.max_samples`
/// - `MATMEM_MAX_COMPARE` -> `simulation.max_compare`
pub fn apply_environment_overrides(config: &mut MatmemConfig) {
    if let Ok(value) = env::var("MATMEM_API_HOST") {
        config.api.host = value;
    }
    if let Ok(value) = env::var("MATMEM_API_PORT") {
        if let Ok(port) = value.parse::<u16>() {
            config.api.port = port;
        }
    }

    if let Ok(value) = env::var("MATMEM_LOG_LEVEL") {
        config.logging.level = value;
    }
    if let Ok(value) = env::var("MATMEM_LOG_DIR") {
        config.logging.log_dir = PathBuf::from(value);
    }

    if let Ok(value) = env::var("MATMEM_MAX_SAMPLES") {
        if let Ok(samples) = value.parse::<usize>() {
            config.simulation.max_samples = samples;
        }
    }
    if let Ok(value) = env::var("MATMEM_MAX_COMPARE") {
        if let Ok(count) = value.parse::<usize>() {
            config.simulation.max_compare = count;
        }
    }
}

/// Apply CLI argument overrides to configuration
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - Map of CLI arguments (e.g., `{"api_host": "127.0.0.1", "api_port": "9000"}`)
pub fn apply_cli_overrides(config: &mut MatmemConfig, cli_args: &HashMap<String, String>) {
    if let Some(value) = cli_args.get("api_host") {
        config.api.host = value.clone();
    }
    if let Some(value) = cli_args.get("api_port") {
        if let Ok(port) = value.parse::<u16>() {
            config.api.port = port;
        }
    }
    if let Some(value) = cli_args.get("log_level") {
        config.logging.level = value.clone();
    }
    if let Some(value) = cli_args.get("log_format") {
        config.logging.format = value.clone();
    }
    if let Some(value) = cli_args.get("file_logging") {
        config.logging.file_logging = value.to_lowercase() == "true" || value == "1";
    }
    if let Some(value) = cli_args.get("extended_analysis") {
        config.analysis.extended_by_default = value.to_lowercase() == "true" || value == "1";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::tempdir;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_find_config_file_env_var() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("custom_config.toml");
        File::create(&config_path).unwrap();

        env::set_var("MATMEM_CONFIG_PATH", config_path.to_str().unwrap());
        let result = find_config_file();
        env::remove_var("MATMEM_CONFIG_PATH");

        assert_eq!(result.unwrap(), config_path);
    }

    #[test]
    fn test_missing_env_path_is_error() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        env::set_var("MATMEM_CONFIG_PATH", "/nonexistent/matmem.toml");
        let result = find_config_file();
        env::remove_var("MATMEM_CONFIG_PATH");

        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_minimal_config() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        env::remove_var("MATMEM_API_PORT");
        env::remove_var("MATMEM_MAX_SAMPLES");
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        let mut file = File::create(&config_path).unwrap();
        writeln!(file, "[api]").unwrap();
        writeln!(file, "port = 9000").unwrap();
        writeln!(file, "[simulation]").unwrap();
        writeln!(file, "max_samples = 5000").unwrap();

        let config = load_config(Some(&config_path), None).unwrap();

        assert_eq!(config.api.port, 9000);
        assert_eq!(config.simulation.max_samples, 5000);
        assert_eq!(config.analysis.bins, 20);
    }

    #[test]
    fn test_invalid_toml() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[api\nport = ").unwrap();

        let result = load_config(Some(&config_path), None);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_environment_overrides() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let mut config = MatmemConfig::default();

        env::set_var("MATMEM_API_HOST", "192.168.1.100");
        env::set_var("MATMEM_API_PORT", "9999");
        env::set_var("MATMEM_MAX_COMPARE", "8");

        apply_environment_overrides(&mut config);

        env::remove_var("MATMEM_API_HOST");
        env::remove_var("MATMEM_API_PORT");
        env::remove_var("MATMEM_MAX_COMPARE");

        assert_eq!(config.api.host, "192.168.1.100");
        assert_eq!(config.api.port, 9999);
        assert_eq!(config.simulation.max_compare, 8);
    }

    #[test]
    fn test_unparseable_env_value_ignored() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let mut config = MatmemConfig::default();
        env::set_var("MATMEM_MAX_SAMPLES", "lots");
        apply_environment_overrides(&mut config);
        env::remove_var("MATMEM_MAX_SAMPLES");

        assert_eq!(config.simulation.max_samples, 200_000);
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = MatmemConfig::default();
        let mut cli_args = HashMap::new();
        cli_args.insert("api_host".to_string(), "10.0.0.1".to_string());
        cli_args.insert("api_port".to_string(), "7777".to_string());
        cli_args.insert("extended_analysis".to_string(), "true".to_string());

        apply_cli_overrides(&mut config, &cli_args);

        assert_eq!(config.api.host, "10.0.0.1");
        assert_eq!(config.api.port, 7777);
        assert!(config.analysis.extended_by_default);
    }

    #[test]
    fn test_override_precedence() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        let mut file = File::create(&config_path).unwrap();
        writeln!(file, "[api]").unwrap();
        writeln!(file, "host = \"file-host\"").unwrap();
        writeln!(file, "port = 8000").unwrap();

        env::set_var("MATMEM_API_HOST", "env-host");
        env::set_var("MATMEM_API_PORT", "9000");

        let mut cli_args = HashMap::new();
        cli_args.insert("api_host".to_string(), "cli-host".to_string());

        let config = load_config(Some(&config_path), Some(&cli_args)).unwrap();

        env::remove_var("MATMEM_API_HOST");
        env::remove_var("MATMEM_API_PORT");

        // CLI wins for host, env wins for port (no CLI override)
        assert_eq!(config.api.host, "cli-host");
        assert_eq!(config.api.port, 9000);
    }

    #[test]
    fn test_default_when_no_file() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        env::set_var("MATMEM_CONFIG_PATH", missing.to_str().unwrap());

        let result = load_config_or_default(None, None);
        env::remove_var("MATMEM_CONFIG_PATH");

        assert!(result.is_ok());
        let (config, from_file) = result.unwrap();
        assert!(!from_file);
        assert_eq!(config.api.port, 8000);
    }
}
