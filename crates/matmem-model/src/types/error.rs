// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for simulation and analysis operations

use thiserror::Error;

/// Failures raised by the model, simulator and analyzers.
///
/// Statistical edge cases (no autocorrelation decay, zero spectral power,
/// too few stationarity windows) are reported through documented fallback
/// values in the result types and never surface here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatmemError {
    /// Malformed material or simulation parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Material key not present in the preset catalog
    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    /// Stimulus kind key not recognised
    #[error("Unknown stimulus kind: {0}")]
    UnknownStimulusKind(String),

    /// Zero-variance or too-short signal breaking a normalization step
    #[error("Degenerate signal: {0}")]
    DegenerateSignal(String),
}

impl MatmemError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        MatmemError::InvalidParameter(msg.into())
    }

    pub fn degenerate(msg: impl Into<String>) -> Self {
        MatmemError::DegenerateSignal(msg.into())
    }
}

pub type Result<T> = core::result::Result<T, MatmemError>;
pub type Error = MatmemError;
