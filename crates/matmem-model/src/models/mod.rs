// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # Material Model Architecture
//!
//! A material is a bank of leaky-integrator layers driven by one shared,
//! nonlinearly transformed input. The transform is a tagged variant carried by
//! the material, not a subtype of it.
//!
//! ## Adding a New Preset
//!
//! 1. Add a variant to `MaterialKind`
//! 2. Add its parameter set in `catalog.rs`
//! 3. Extend the catalog tests

pub mod catalog;
pub mod material;
pub mod nonlinear;

// Re-export core types
pub use catalog::{get_material, list_materials, material, MaterialKind};
pub use material::MaterialModel;
pub use nonlinear::Nonlinearity;
