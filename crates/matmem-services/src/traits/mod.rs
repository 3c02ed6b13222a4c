// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Service trait definitions.

These traits define the stable application boundary between
transport adapters and domain logic.
*/

pub mod simulation_service;

// Re-export for convenience
pub use simulation_service::SimulationService;
