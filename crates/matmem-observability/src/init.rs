// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Logging initialization
//!
//! Console output always; with the `file-logging` feature and
//! `file_logging = true`, also JSON files in a timestamped run folder:
//! ```text
//! ./logs/
//!   └── run_20250101_120000/
//!       ├── matmem-api.log
//!       ├── matmem-engine.log
//!       └── matmem.log (combined)
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::cli::CrateDebugFlags;
use crate::config::{LogFormat, ObservabilityConfig};

const RUN_PREFIX: &str = "run_";
const RUN_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Keeps file writers alive; logs are flushed when it is dropped
pub struct LoggingGuard {
    #[cfg(feature = "file-logging")]
    _file_guards: Vec<tracing_appender::non_blocking::WorkerGuard>,
    run_dir: Option<PathBuf>,
}

impl LoggingGuard {
    /// Run folder receiving log files, if file logging is active
    pub fn run_dir(&self) -> Option<&Path> {
        self.run_dir.as_deref()
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` wins over the configured level and debug flags when set.
///
/// # Errors
///
/// Fails if the log folder cannot be created or a global subscriber is
/// already installed.
pub fn init_logging(
    config: &ObservabilityConfig,
    debug_flags: &CrateDebugFlags,
) -> Result<LoggingGuard> {
    let filter = debug_flags.to_filter_string(&config.level);
    let make_filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter));

    let mut layers: Vec<BoxedLayer> = Vec::new();

    let console_layer = match config.format {
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .with_filter(make_filter())
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_filter(make_filter())
            .boxed(),
    };
    layers.push(console_layer);

    let mut guard = LoggingGuard {
        #[cfg(feature = "file-logging")]
        _file_guards: Vec::new(),
        run_dir: None,
    };

    if config.file_logging {
        #[cfg(feature = "file-logging")]
        {
            let run_dir = create_run_dir(&config.log_dir)?;
            cleanup_old_logs(&config.log_dir, config.retention_days, config.retention_runs)?;
            add_file_layers(&run_dir, &filter, &mut layers, &mut guard._file_guards);
            guard.run_dir = Some(run_dir);
        }
    }

    Registry::default()
        .with(layers)
        .try_init()
        .context("Failed to install global tracing subscriber")?;

    if config.file_logging && guard.run_dir.is_none() {
        tracing::warn!("file_logging requested but the file-logging feature is disabled");
    }

    Ok(guard)
}

#[cfg(feature = "file-logging")]
fn add_file_layers(
    run_dir: &Path,
    filter: &str,
    layers: &mut Vec<BoxedLayer>,
    file_guards: &mut Vec<tracing_appender::non_blocking::WorkerGuard>,
) {
    use tracing_appender::rolling;

    for crate_name in crate::KNOWN_CRATES {
        let appender = rolling::daily(run_dir, format!("{}.log", crate_name));
        let (writer, file_guard) = tracing_appender::non_blocking(appender);
        file_guards.push(file_guard);

        // Only this crate's events
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(EnvFilter::new(format!("off,{}=debug", crate_name)))
            .boxed();
        layers.push(layer);
    }

    let appender = rolling::daily(run_dir, "matmem.log");
    let (writer, file_guard) = tracing_appender::non_blocking(appender);
    file_guards.push(file_guard);
    layers.push(
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(EnvFilter::new(filter))
            .boxed(),
    );
}

fn create_run_dir(base_log_dir: &Path) -> Result<PathBuf> {
    let timestamp = Utc::now().format(RUN_TIMESTAMP_FORMAT);
    let run_dir = base_log_dir.join(format!("{}{}", RUN_PREFIX, timestamp));
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("Failed to create log directory: {}", run_dir.display()))?;
    Ok(run_dir)
}

fn parse_run_timestamp(dir_name: &str) -> Option<DateTime<Utc>> {
    let stamp = dir_name.strip_prefix(RUN_PREFIX)?;
    let naive = NaiveDateTime::parse_from_str(stamp, RUN_TIMESTAMP_FORMAT).ok()?;
    Some(Utc.from_utc_datetime(&naive))
}

/// Run folders to delete: older than `retention_days`, then the oldest
/// beyond `retention_runs`
fn runs_to_remove(
    mut runs: Vec<(PathBuf, DateTime<Utc>)>,
    now: DateTime<Utc>,
    retention_days: u64,
    retention_runs: usize,
) -> Vec<PathBuf> {
    let cutoff = now - chrono::Duration::days(retention_days as i64);
    runs.sort_by_key(|(_, stamp)| *stamp);

    let (expired, kept): (Vec<_>, Vec<_>) =
        runs.into_iter().partition(|(_, stamp)| *stamp < cutoff);

    let excess = kept.len().saturating_sub(retention_runs);
    expired
        .into_iter()
        .chain(kept.into_iter().take(excess))
        .map(|(path, _)| path)
        .collect()
}

/// Apply the retention policy to `run_*` folders under `base_log_dir`
pub fn cleanup_old_logs(
    base_log_dir: &Path,
    retention_days: u64,
    retention_runs: usize,
) -> Result<()> {
    if !base_log_dir.exists() {
        return Ok(());
    }

    let mut runs = Vec::new();
    for entry in std::fs::read_dir(base_log_dir)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }
        let stamp = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(parse_run_timestamp);
        if let Some(stamp) = stamp {
            runs.push((path, stamp));
        }
    }

    for path in runs_to_remove(runs, Utc::now(), retention_days, retention_runs) {
        if let Err(e) = std::fs::remove_dir_all(&path) {
            eprintln!(
                "Warning: Failed to remove old log directory {}: {}",
                path.display(),
                e
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp(s: &str) -> DateTime<Utc> {
        parse_run_timestamp(&format!("run_{}", s)).unwrap()
    }

    #[test]
    fn test_parse_run_timestamp() {
        let parsed = stamp("20250102_030405");
        assert_eq!(parsed.format("%Y-%m-%d %H:%M:%S").to_string(), "2025-01-02 03:04:05");
        assert!(parse_run_timestamp("run_garbage").is_none());
        assert!(parse_run_timestamp("20250102_030405").is_none());
    }

    #[test]
    fn test_retention_by_age_and_count() {
        let now = stamp("20250110_000000");
        let runs = vec![
            (PathBuf::from("c"), stamp("20250109_000000")),
            (PathBuf::from("old"), stamp("20241201_000000")),
            (PathBuf::from("a"), stamp("20250107_000000")),
            (PathBuf::from("b"), stamp("20250108_000000")),
        ];

        let removed = runs_to_remove(runs, now, 7, 2);
        assert_eq!(removed, vec![PathBuf::from("old"), PathBuf::from("a")]);
    }

    #[test]
    fn test_cleanup_only_touches_run_folders() {
        let dir = tempfile::tempdir().unwrap();
        let keep_other = dir.path().join("notes");
        let ancient = dir.path().join("run_20000101_000000");
        let fresh = dir.path().join(format!(
            "run_{}",
            Utc::now().format(RUN_TIMESTAMP_FORMAT)
        ));
        for d in [&keep_other, &ancient, &fresh] {
            std::fs::create_dir_all(d).unwrap();
        }

        cleanup_old_logs(dir.path(), 7, 10).unwrap();

        assert!(keep_other.exists());
        assert!(!ancient.exists());
        assert!(fresh.exists());
    }

    #[test]
    fn test_cleanup_missing_dir_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(cleanup_old_logs(&dir.path().join("absent"), 7, 10).is_ok());
    }
}
