// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Service implementations backed by the simulation and analysis crates.
*/

pub mod simulation_service_impl;

// Re-export for convenience
pub use simulation_service_impl::SimulationServiceImpl;
