// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # matmem-observability
//!
//! Logging setup shared by the simulator binaries.
//!
//! Every crate in the workspace logs under a target equal to its crate name
//! (`matmem-engine`, `matmem-api`, ...), so a single `--debug-<crate>` flag
//! raises the verbosity of exactly one layer of the stack.
//!
//! ## Features
//! - `file-logging`: per-run log folders with JSON files and retention cleanup

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod init;

pub use cli::*;
pub use config::*;
pub use init::*;

/// Log targets accepted by the debug flags
pub const KNOWN_CRATES: &[&str] = &[
    "matmem-model",
    "matmem-engine",
    "matmem-analysis",
    "matmem-services",
    "matmem-api",
];
