// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Largest-Lyapunov-exponent heuristic and stability classification.
//!
//! The estimate embeds the signal in two dimensions and averages the
//! log-ratio of successive distances from each point to its next ten
//! neighbours in time. It is a coarse chaos indicator, not a rigorous
//! Lyapunov spectrum.

use std::fmt;

use matmem_model::{MatmemError, Result};
use serde::{Deserialize, Serialize};

const EMBEDDING_DIM: usize = 2;
const NEIGHBOURS: usize = 10;
const MIN_DISTANCE: f64 = 1e-10;

/// Positive exponents above this are classified as unstable
pub const UNSTABLE_THRESHOLD: f64 = 0.1;

/// Estimate the largest Lyapunov exponent of `x` sampled every `dt` seconds.
///
/// Returns 0 when the series is too short to embed.
pub fn lyapunov_exponent_estimation(x: &[f64], dt: f64) -> Result<f64> {
    if !(dt > 0.0) || !dt.is_finite() {
        return Err(MatmemError::invalid(format!("dt must be finite and > 0, got {dt}")));
    }

    let n = x.len();
    if n < 10 {
        return Ok(0.0);
    }

    let lag = (n / 20).max(1);
    let points: Vec<(f64, f64)> = (0..n - EMBEDDING_DIM * lag)
        .map(|i| (x[i], x[i + lag]))
        .collect();
    if points.len() < 5 {
        return Ok(0.0);
    }

    let mut rates = Vec::new();
    for i in 0..points.len().saturating_sub(NEIGHBOURS) {
        let (ax, ay) = points[i];
        let distances: Vec<f64> = points[i + 1..i + 1 + NEIGHBOURS]
            .iter()
            .map(|&(bx, by)| ((bx - ax).powi(2) + (by - ay).powi(2)).sqrt())
            .collect();
        if distances.iter().all(|&d| d > MIN_DISTANCE) {
            let rate = distances
                .windows(2)
                .map(|w| (w[1] / w[0]).ln())
                .sum::<f64>()
                / (NEIGHBOURS - 1) as f64;
            rates.push(rate);
        }
    }

    if rates.is_empty() {
        return Ok(0.0);
    }
    Ok(rates.iter().sum::<f64>() / rates.len() as f64 / dt)
}

/// Qualitative stability of a trajectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stability {
    Stable,
    Marginal,
    Unstable,
}

impl Stability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stability::Stable => "stable",
            Stability::Marginal => "marginal",
            Stability::Unstable => "unstable",
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a Lyapunov estimate to a stability class.
pub fn classify_stability(lyapunov: f64) -> Stability {
    if lyapunov < 0.0 {
        Stability::Stable
    } else if lyapunov > UNSTABLE_THRESHOLD {
        Stability::Unstable
    } else {
        Stability::Marginal
    }
}
