// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Nonlinear Input Transforms
//!
//! ```text
//! Saturating:      f(u) = tanh(g·u)
//! Linear:          f(u) = g·u
//! Threshold:       f(u) = 1 / (1 + exp(-g·(u - θ)))
//! MagnitudeDecay:  f(u) = exp(-g·|u|)
//! Resonance:       f(u) = g·u          (placeholder, ω unused)
//! ```

use serde::{Deserialize, Serialize};

/// Scalar transform applied to the stimulus before it drives the layers.
///
/// `Resonance` is a linear pass-through placeholder: `omega` is carried so the
/// preset keeps its documented parameters, but no frequency-dependent
/// behaviour is modelled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Nonlinearity {
    Saturating { gain: f64 },
    Linear { gain: f64 },
    Threshold { gain: f64, threshold: f64 },
    MagnitudeDecay { gain: f64 },
    Resonance { omega: f64, gain: f64 },
}

impl Nonlinearity {
    /// Evaluate the transform at `u`
    #[inline(always)]
    pub fn apply(&self, u: f64) -> f64 {
        match *self {
            Nonlinearity::Saturating { gain } => (gain * u).tanh(),
            Nonlinearity::Linear { gain } => gain * u,
            Nonlinearity::Threshold { gain, threshold } => {
                1.0 / (1.0 + (-gain * (u - threshold)).exp())
            }
            Nonlinearity::MagnitudeDecay { gain } => (-gain * u.abs()).exp(),
            Nonlinearity::Resonance { gain, .. } => gain * u,
        }
    }

    /// Short human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Nonlinearity::Saturating { .. } => "saturating",
            Nonlinearity::Linear { .. } => "linear",
            Nonlinearity::Threshold { .. } => "threshold",
            Nonlinearity::MagnitudeDecay { .. } => "magnitude_decay",
            Nonlinearity::Resonance { .. } => "resonance",
        }
    }

    /// True when `apply(0.0) == 0.0`, i.e. a zero stimulus keeps a resting
    /// material at rest.
    pub fn fixes_origin(&self) -> bool {
        matches!(
            self,
            Nonlinearity::Saturating { .. }
                | Nonlinearity::Linear { .. }
                | Nonlinearity::Resonance { .. }
        )
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        let finite = match *self {
            Nonlinearity::Saturating { gain }
            | Nonlinearity::Linear { gain }
            | Nonlinearity::MagnitudeDecay { gain } => gain.is_finite(),
            Nonlinearity::Threshold { gain, threshold } => {
                gain.is_finite() && threshold.is_finite()
            }
            Nonlinearity::Resonance { omega, gain } => omega.is_finite() && gain.is_finite(),
        };
        if finite {
            Ok(())
        } else {
            Err(format!("{} transform parameters must be finite", self.label()))
        }
    }
}
