// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Core type definitions shared across the workspace.

pub mod error;

pub use error::{Error, MatmemError, Result};
