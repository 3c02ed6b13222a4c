// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// API v1 request/response types

pub mod analysis_dtos;
pub mod material_dtos;
pub mod simulation_dtos;
pub mod system_dtos;

pub use analysis_dtos::*;
pub use material_dtos::*;
pub use simulation_dtos::*;
pub use system_dtos::*;
