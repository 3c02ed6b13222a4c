// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Memory retention analysis of a response signal.

use matmem_model::{MatmemError, Result};
use serde::{Deserialize, Serialize};

use crate::stats::{argmax_by, histogram, shannon_entropy};

/// Default number of autocorrelation lags
pub const DEFAULT_MAX_LAG: usize = 100;

/// Histogram resolution for the response entropy
const ENTROPY_BINS: usize = 20;

/// Lag used to anchor the decay-rate estimate
const DECAY_ANCHOR_LAG: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryAnalysis {
    /// Normalized autocorrelation for lags `0..max_lag`
    pub autocorrelation: Vec<f64>,
    /// Time at which the autocorrelation first drops below `1/e`
    pub memory_tau: f64,
    /// Shannon entropy (nats) of the response distribution
    pub entropy: f64,
    pub peak_response: f64,
    pub peak_time: f64,
    /// `None` when the anchored autocorrelation is non-positive
    pub decay_rate: Option<f64>,
}

/// Non-negative-lag autocorrelation of `y`, normalized by lag 0.
pub fn autocorrelation(y: &[f64], max_lag: usize) -> Result<Vec<f64>> {
    let n = y.len();
    let lags = max_lag.min(n);
    let mut ac: Vec<f64> = (0..lags)
        .map(|k| y[k..].iter().zip(y).map(|(a, b)| a * b).sum())
        .collect();

    let zero_lag = ac.first().copied().unwrap_or(0.0);
    if zero_lag == 0.0 || !zero_lag.is_finite() {
        return Err(MatmemError::degenerate(
            "autocorrelation at lag 0 is zero; response carries no energy",
        ));
    }
    for v in ac.iter_mut() {
        *v /= zero_lag;
    }
    Ok(ac)
}

/// Reject a time axis that is not finite and strictly increasing.
pub fn check_time_axis(t: &[f64]) -> Result<()> {
    if let Some(i) = t.iter().position(|v| !v.is_finite()) {
        return Err(MatmemError::invalid(format!("t[{i}] is not finite")));
    }
    if let Some(i) = t.windows(2).position(|w| w[1] <= w[0]) {
        return Err(MatmemError::invalid(format!(
            "t must be strictly increasing: t[{}] = {} is followed by {}",
            i,
            t[i],
            t[i + 1]
        )));
    }
    Ok(())
}

/// Autocorrelation decay, entropy and peak statistics of `y` sampled on `t`.
pub fn analyze_memory(t: &[f64], y: &[f64], max_lag: usize) -> Result<MemoryAnalysis> {
    if t.len() != y.len() {
        return Err(MatmemError::invalid(format!(
            "t and y lengths differ: {} vs {}",
            t.len(),
            y.len()
        )));
    }
    if t.len() < 2 {
        return Err(MatmemError::invalid("memory analysis needs at least 2 samples"));
    }
    if max_lag == 0 {
        return Err(MatmemError::invalid("max_lag must be >= 1"));
    }
    check_time_axis(t)?;

    let n = t.len();
    let ac = autocorrelation(y, max_lag)?;

    let threshold = (-1.0f64).exp();
    let memory_tau = match ac.iter().position(|&v| v < threshold) {
        Some(idx) => t[idx.min(n - 1)],
        None => t[n - 1],
    };

    let entropy = shannon_entropy(&histogram(y, ENTROPY_BINS));

    // y is non-empty here
    let peak_idx = argmax_by(y, f64::abs).unwrap_or(0);
    let peak_response = y[peak_idx].abs();
    let peak_time = t[peak_idx];

    let anchor = ac[DECAY_ANCHOR_LAG.min(ac.len() - 1)];
    let elapsed = t[DECAY_ANCHOR_LAG.min(n - 1)] - t[0];
    let decay_rate = (anchor > 0.0 && elapsed > 0.0).then(|| -anchor.ln() / elapsed);

    Ok(MemoryAnalysis {
        autocorrelation: ac,
        memory_tau,
        entropy,
        peak_response,
        peak_time,
        decay_rate,
    })
}
