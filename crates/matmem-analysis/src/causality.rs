// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Lagged cross-correlation test of stimulus → response influence.
//!
//! A simplified surrogate for Granger-style causality: the response is
//! correlated against the stimulus over non-negative lags and the strongest
//! lag is tested with the Pearson t statistic.

use matmem_model::{MatmemError, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::stats::{argmax_by, mean, std_dev};

const MAX_LAG_CAP: usize = 100;
const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// `1 - r²` at or below this makes the t statistic undefined
const PERFECT_CORRELATION_EPS: f64 = 1e-12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalityResult {
    pub max_correlation: f64,
    /// Lag of the strongest correlation, in seconds
    pub optimal_lag: f64,
    pub p_value: f64,
    pub is_significant: bool,
    pub cross_correlation: Vec<f64>,
}

/// Two-sided p-value of a Pearson correlation `r` over `n` samples.
///
/// Needs `n >= 3` so the t statistic has at least one degree of freedom.
pub fn pearson_p_value(r: f64, n: usize) -> Result<f64> {
    if n < 3 {
        return Err(MatmemError::invalid(format!(
            "p-value needs at least 3 samples, got {n}"
        )));
    }
    let one_minus_r2 = 1.0 - r * r;
    if one_minus_r2 <= PERFECT_CORRELATION_EPS {
        return Ok(1.0);
    }
    let dof = (n - 2) as f64;
    let t_stat = r * dof.sqrt() / one_minus_r2.sqrt();
    let dist = StudentsT::new(0.0, 1.0, dof)
        .map_err(|e| MatmemError::degenerate(format!("Student-t with {dof} dof: {e}")))?;
    Ok(2.0 * (1.0 - dist.cdf(t_stat.abs())))
}

/// Correlate `y` against `u` over lags `0..min(100, N/10)`.
pub fn validate_causality(u: &[f64], y: &[f64], dt: f64) -> Result<CausalityResult> {
    if u.len() != y.len() {
        return Err(MatmemError::invalid(format!(
            "u and y lengths differ: {} vs {}",
            u.len(),
            y.len()
        )));
    }
    if !(dt > 0.0) || !dt.is_finite() {
        return Err(MatmemError::invalid(format!("dt must be finite and > 0, got {dt}")));
    }

    let n = u.len();
    let max_lag = MAX_LAG_CAP.min(n / 10);
    if max_lag == 0 {
        return Err(MatmemError::degenerate(format!(
            "causality test needs at least 10 samples, got {n}"
        )));
    }

    let std_u = std_dev(u);
    let std_y = std_dev(y);
    if std_u == 0.0 || std_y == 0.0 {
        return Err(MatmemError::degenerate(
            "causality test requires non-constant stimulus and response",
        ));
    }

    let mean_u = mean(u);
    let mean_y = mean(y);
    let uc: Vec<f64> = u.iter().map(|v| v - mean_u).collect();
    let yc: Vec<f64> = y.iter().map(|v| v - mean_y).collect();

    let norm = std_u * std_y * n as f64;
    let cross_correlation: Vec<f64> = (0..max_lag)
        .map(|lag| {
            let sum: f64 = yc[lag..].iter().zip(&uc).map(|(a, b)| a * b).sum();
            sum / norm
        })
        .collect();

    let best = argmax_by(&cross_correlation, f64::abs).unwrap_or(0);
    let max_correlation = cross_correlation[best];
    let p_value = pearson_p_value(max_correlation, n)?;

    Ok(CausalityResult {
        max_correlation,
        optimal_lag: best as f64 * dt,
        p_value,
        is_significant: p_value < SIGNIFICANCE_LEVEL,
        cross_correlation,
    })
}
