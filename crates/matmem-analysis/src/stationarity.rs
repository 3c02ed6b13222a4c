// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Windowed stationarity test.
//!
//! The signal is cut into equal windows. Trends in the per-window mean and
//! variance are fitted by least squares, and a Kruskal-Wallis H test checks
//! whether the windows share one distribution.

use matmem_model::{MatmemError, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::stats::{linear_trend, mean, std_dev, variance};

pub const DEFAULT_WINDOW_SIZE: usize = 50;
const MIN_WINDOWS: usize = 3;
const SIGNIFICANCE_LEVEL: f64 = 0.05;
const TREND_TOLERANCE: f64 = 0.1;

/// p-value used when the H statistic is undefined (all values tied)
const UNDEFINED_P_VALUE: f64 = 0.5;

pub const INSUFFICIENT_DATA: &str = "insufficient_data";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationarityResult {
    pub is_stationary: bool,
    /// Set when the test could not run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean_trend: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variance_trend: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kruskal_p_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean_stability: Option<f64>,
}

impl StationarityResult {
    fn insufficient() -> Self {
        Self {
            is_stationary: false,
            reason: Some(INSUFFICIENT_DATA.to_string()),
            mean_trend: None,
            variance_trend: None,
            kruskal_p_value: None,
            mean_stability: None,
        }
    }
}

/// Kruskal-Wallis H test across `groups`; returns the p-value.
///
/// Ranks are averaged over ties and H is tie-corrected. When every value is
/// tied the statistic is undefined and 0.5 is returned.
pub fn kruskal_wallis(groups: &[&[f64]]) -> Result<f64> {
    let k = groups.len();
    if k < 2 {
        return Err(MatmemError::invalid("Kruskal-Wallis needs at least 2 groups"));
    }

    let mut pooled: Vec<(f64, usize)> = groups
        .iter()
        .enumerate()
        .flat_map(|(g, values)| values.iter().map(move |&v| (v, g)))
        .collect();
    let n = pooled.len();
    if n < 2 {
        return Ok(UNDEFINED_P_VALUE);
    }
    pooled.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut rank_sums = vec![0.0; k];
    let mut tie_term = 0.0;
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && pooled[j].0 == pooled[i].0 {
            j += 1;
        }
        // 1-based ranks i+1..=j share their average
        let avg_rank = (i + 1 + j) as f64 / 2.0;
        for &(_, g) in &pooled[i..j] {
            rank_sums[g] += avg_rank;
        }
        let t = (j - i) as f64;
        tie_term += t * t * t - t;
        i = j;
    }

    let nf = n as f64;
    let correction = 1.0 - tie_term / (nf * nf * nf - nf);
    if correction <= 0.0 {
        return Ok(UNDEFINED_P_VALUE);
    }

    let h: f64 = 12.0 / (nf * (nf + 1.0))
        * rank_sums
            .iter()
            .zip(groups)
            .filter(|(_, g)| !g.is_empty())
            .map(|(r, g)| r * r / g.len() as f64)
            .sum::<f64>()
        - 3.0 * (nf + 1.0);
    let h = h / correction;

    let chi2 = ChiSquared::new((k - 1) as f64)
        .map_err(|e| MatmemError::degenerate(format!("chi-squared with {} dof: {e}", k - 1)))?;
    Ok((1.0 - chi2.cdf(h.max(0.0))).clamp(0.0, 1.0))
}

/// Test `signal` for stationarity over windows of `window_size` samples.
pub fn stationarity_test(signal: &[f64], window_size: usize) -> Result<StationarityResult> {
    if window_size == 0 {
        return Err(MatmemError::invalid("window_size must be >= 1"));
    }

    let n_windows = signal.len() / window_size;
    if n_windows < MIN_WINDOWS {
        return Ok(StationarityResult::insufficient());
    }

    let windows: Vec<&[f64]> = signal
        .chunks_exact(window_size)
        .take(n_windows)
        .collect();
    let means: Vec<f64> = windows.iter().map(|w| mean(w)).collect();
    let variances: Vec<f64> = windows.iter().map(|w| variance(w)).collect();

    let mean_trend = linear_trend(&means);
    let variance_trend = linear_trend(&variances);
    let p_value = kruskal_wallis(&windows)?;

    let is_stationary = mean_trend.abs() < TREND_TOLERANCE * std_dev(&means)
        && variance_trend.abs() < TREND_TOLERANCE * std_dev(&variances)
        && p_value > SIGNIFICANCE_LEVEL;

    let mean_abs = means.iter().map(|m| m.abs()).sum::<f64>() / means.len() as f64;
    let mean_stability = if mean_abs > 0.0 {
        std_dev(&means) / mean_abs
    } else {
        0.0
    };

    Ok(StationarityResult {
        is_stationary,
        reason: None,
        mean_trend: Some(mean_trend),
        variance_trend: Some(variance_trend),
        kruskal_p_value: Some(p_value),
        mean_stability: Some(mean_stability),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_windows() {
        let result = stationarity_test(&[1.0; 149], 50).unwrap();
        assert!(!result.is_stationary);
        assert_eq!(result.reason.as_deref(), Some(INSUFFICIENT_DATA));
        assert!(result.mean_trend.is_none());
    }

    #[test]
    fn test_insufficient_serializes_compactly() {
        let result = stationarity_test(&[1.0; 10], 50).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"is_stationary": false, "reason": "insufficient_data"})
        );
    }

    #[test]
    fn test_zero_window_rejected() {
        assert!(stationarity_test(&[1.0; 10], 0).is_err());
    }

    #[test]
    fn test_kruskal_identical_values() {
        let a = [1.0, 1.0, 1.0];
        assert_eq!(kruskal_wallis(&[&a, &a]).unwrap(), UNDEFINED_P_VALUE);
    }

    #[test]
    fn test_kruskal_separated_groups() {
        let a: Vec<f64> = (0..30).map(|i| i as f64).collect();
        let b: Vec<f64> = (100..130).map(|i| i as f64).collect();
        let p = kruskal_wallis(&[&a, &b]).unwrap();
        assert!(p < 1e-6, "p = {p}");
    }

    #[test]
    fn test_kruskal_known_value() {
        // H = 12/(6*7) * (3^2/2 + 7^2/2 + 11^2/2) - 21 = 4.571428...
        let a = [1.0, 2.0];
        let b = [3.0, 4.0];
        let c = [5.0, 6.0];
        let p = kruskal_wallis(&[&a, &b, &c]).unwrap();
        let expected = (-(32.0f64 / 7.0) / 2.0).exp();
        assert!((p - expected).abs() < 1e-9, "p = {p}");
    }

    #[test]
    fn test_trending_signal_not_stationary() {
        let signal: Vec<f64> = (0..300).map(|i| i as f64 * 0.1).collect();
        let result = stationarity_test(&signal, 50).unwrap();
        assert!(!result.is_stationary);
        assert!(result.mean_trend.unwrap() > 4.9);
    }

    #[test]
    fn test_constant_signal_stability_zero_mean() {
        let result = stationarity_test(&[0.0; 200], 50).unwrap();
        assert_eq!(result.mean_stability, Some(0.0));
        assert_eq!(result.kruskal_p_value, Some(UNDEFINED_P_VALUE));
        // zero spread means the strict trend bounds cannot hold
        assert!(!result.is_stationary);
    }
}
