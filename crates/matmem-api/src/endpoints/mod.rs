// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// HTTP endpoint handlers, grouped by resource

pub mod analysis;
pub mod materials;
pub mod simulation;
pub mod system;
