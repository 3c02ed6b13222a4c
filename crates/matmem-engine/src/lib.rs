// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # Delay Simulation Engine
//!
//! Turns a stimulus time series into the material's response plus the
//! per-layer internal states.
//!
//! ## Integration Scheme
//! Fixed-step explicit Euler. Each step evaluates the material's nonlinear
//! transform once on the previous input sample and feeds that value to every
//! layer. The scheme is stable while `dt < 2·min(tau)`; larger steps are
//! accepted but logged.

pub mod simulator;

pub use simulator::{simulate, DelaySimulator, SimulationResult};
