// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # Material Memory Models
//!
//! Everything the simulator and the analyzers are parameterised by:
//! - **Types**: error taxonomy shared by every layer of the workspace
//! - **Models**: material parameter sets, nonlinear input transforms and the
//!   fixed preset catalog
//! - **Stimulus**: waveform synthesis producing the `(t, u)` pair fed to the
//!   simulator
//!
//! Nothing in this crate holds mutable state. The catalog is initialised once
//! and only read afterwards.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod models;
pub mod stimulus;
pub mod types;

pub use types::{Error, MatmemError, Result};

pub use models::{
    get_material, list_materials, material, MaterialKind, MaterialModel, Nonlinearity,
};

pub use stimulus::{generate_stimulus, generate_stimulus_with_rng, Stimulus, StimulusKind};
