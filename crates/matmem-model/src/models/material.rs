// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Material Parameter Sets
//!
//! ```text
//! Layer dynamics (per layer i):
//!     dx_i/dt = -x_i / tau_i + k_i · f(u)
//!
//! Response:
//!     y = Σ w_i · x_i
//! ```

use serde::{Deserialize, Serialize};

use super::nonlinear::Nonlinearity;
use crate::types::{MatmemError, Result};

/// Nonlinear multi-timescale material model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialModel {
    /// Display name
    pub name: String,

    /// Layer time constants in seconds (all > 0)
    pub tau: Vec<f64>,

    /// Per-layer input gains
    pub k: Vec<f64>,

    /// Per-layer output weights
    pub w: Vec<f64>,

    /// Transform applied to the stimulus before it reaches the layers
    pub nonlinearity: Nonlinearity,
}

impl MaterialModel {
    /// Create a validated material model
    pub fn new(
        name: impl Into<String>,
        tau: Vec<f64>,
        k: Vec<f64>,
        w: Vec<f64>,
        nonlinearity: Nonlinearity,
    ) -> Result<Self> {
        let model = Self {
            name: name.into(),
            tau,
            k,
            w,
            nonlinearity,
        };
        model.validate()?;
        Ok(model)
    }

    /// Number of integrator layers
    pub fn num_layers(&self) -> usize {
        self.tau.len()
    }

    /// Evaluate the material's input transform
    #[inline(always)]
    pub fn nonlinear(&self, u: f64) -> f64 {
        self.nonlinearity.apply(u)
    }

    /// Smallest layer time constant
    pub fn min_tau(&self) -> f64 {
        self.tau.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest step for which explicit Euler stays stable on every layer
    /// (`dt < 2·min(tau)`).
    pub fn stable_step_limit(&self) -> f64 {
        2.0 * self.min_tau()
    }

    /// Check the layer invariants: equal lengths, at least one layer,
    /// finite coefficients and strictly positive time constants.
    pub fn validate(&self) -> Result<()> {
        if self.tau.is_empty() {
            return Err(MatmemError::invalid(format!(
                "material '{}' must have at least one layer",
                self.name
            )));
        }
        if self.k.len() != self.tau.len() || self.w.len() != self.tau.len() {
            return Err(MatmemError::invalid(format!(
                "material '{}' layer lengths differ: tau={}, k={}, w={}",
                self.name,
                self.tau.len(),
                self.k.len(),
                self.w.len()
            )));
        }
        for (i, &tau) in self.tau.iter().enumerate() {
            if !(tau > 0.0) || !tau.is_finite() {
                return Err(MatmemError::invalid(format!(
                    "material '{}': tau[{}] = {} must be finite and > 0",
                    self.name, i, tau
                )));
            }
        }
        if self.k.iter().chain(self.w.iter()).any(|v| !v.is_finite()) {
            return Err(MatmemError::invalid(format!(
                "material '{}': gains and weights must be finite",
                self.name
            )));
        }
        self.nonlinearity
            .validate()
            .map_err(|msg| MatmemError::invalid(format!("material '{}': {}", self.name, msg)))
    }
}
