// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! CLI argument parsing for per-crate debug flags
//!
//! Supports flags like `--debug-matmem-engine` or `--debug-all`.

use std::collections::BTreeSet;
use std::env;

use crate::KNOWN_CRATES;

/// Environment variable holding comma-separated crate names (or `all`)
pub const DEBUG_ENV_VAR: &str = "MATMEM_DEBUG";

/// Crates whose log target should be raised to `debug`
///
/// # Example
/// ```rust
/// use matmem_observability::CrateDebugFlags;
///
/// let flags = CrateDebugFlags::from_args(vec!["--debug-matmem-api".to_string()]);
/// assert!(flags.is_enabled("matmem-api"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrateDebugFlags {
    pub enabled_crates: BTreeSet<String>,
}

impl CrateDebugFlags {
    /// Parse `--debug-{crate-name}` and `--debug-all` out of an argument list
    ///
    /// Unrelated arguments are ignored.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut flags = CrateDebugFlags::default();
        for arg in args {
            if arg == "--debug-all" {
                flags.enable_all();
            } else if let Some(crate_name) = arg.strip_prefix("--debug-") {
                flags.enable(crate_name);
            }
        }
        flags
    }

    /// Merge the value of [`DEBUG_ENV_VAR`]
    pub fn merge_env_value(&mut self, value: &str) {
        if value.trim() == "all" {
            self.enable_all();
            return;
        }
        for crate_name in value.split(',') {
            self.enable(crate_name);
        }
    }

    pub fn enable(&mut self, crate_name: &str) {
        let crate_name = crate_name.trim();
        if !crate_name.is_empty() {
            self.enabled_crates.insert(crate_name.to_string());
        }
    }

    pub fn enable_all(&mut self) {
        for crate_name in KNOWN_CRATES {
            self.enabled_crates.insert(crate_name.to_string());
        }
    }

    pub fn is_enabled(&self, crate_name: &str) -> bool {
        self.enabled_crates.contains(crate_name)
    }

    pub fn any_enabled(&self) -> bool {
        !self.enabled_crates.is_empty()
    }

    /// Names passed that do not match any workspace crate
    pub fn unknown_crates(&self) -> Vec<&str> {
        self.enabled_crates
            .iter()
            .map(String::as_str)
            .filter(|name| !KNOWN_CRATES.contains(name))
            .collect()
    }

    /// `EnvFilter` directive string
    ///
    /// Format: `"matmem-api=debug,matmem-engine=debug,info"`, with
    /// `base_level` as the trailing default.
    pub fn to_filter_string(&self, base_level: &str) -> String {
        let mut filters: Vec<String> = self
            .enabled_crates
            .iter()
            .map(|crate_name| format!("{}=debug", crate_name))
            .collect();
        filters.push(base_level.to_string());
        filters.join(",")
    }
}

/// Debug flags from the process arguments plus [`DEBUG_ENV_VAR`]
pub fn parse_debug_flags() -> CrateDebugFlags {
    let mut flags = CrateDebugFlags::from_args(env::args());
    if let Ok(value) = env::var(DEBUG_ENV_VAR) {
        flags.merge_env_value(&value);
    }
    flags
}

/// Help text for the debug flags, appended to the server's `--help`
pub fn debug_flags_help() -> String {
    format!(
        r#"Debug Flags:
  --debug-all                    Enable debug logging for all crates
  --debug-{{crate-name}}          Enable debug logging for one crate

Available crates:
  {}

Environment Variable:
  {}={{crate-name}}[,{{crate-name}}]
  {}=all

Examples:
  --debug-matmem-engine
  --debug-matmem-api --debug-matmem-services
"#,
        KNOWN_CRATES.join(", "),
        DEBUG_ENV_VAR,
        DEBUG_ENV_VAR
    )
}
