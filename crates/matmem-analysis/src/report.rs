// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Combined analysis report for one stimulus/response pair.

use matmem_model::{MatmemError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::causality::{validate_causality, CausalityResult};
use crate::dynamics::{classify_stability, lyapunov_exponent_estimation, Stability};
use crate::information::{
    calculate_mutual_information, information_theoretic_measures, InformationMeasures,
    DEFAULT_BINS,
};
use crate::memory::{analyze_memory, MemoryAnalysis, DEFAULT_MAX_LAG};
use crate::spectral::{spectral_analysis, SpectralAnalysis};
use crate::stationarity::{stationarity_test, StationarityResult, DEFAULT_WINDOW_SIZE};

/// Analysis knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    pub max_lag: usize,
    pub bins: usize,
    pub stationarity_window: usize,
    /// Include causality, spectral, information, stationarity and stability
    pub extended: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            max_lag: DEFAULT_MAX_LAG,
            bins: DEFAULT_BINS,
            stationarity_window: DEFAULT_WINDOW_SIZE,
            extended: false,
        }
    }
}

/// Memory metrics flattened at the top level, extended sections optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub memory: MemoryAnalysis,
    /// Nats
    pub mutual_information: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub causality: Option<CausalityResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spectral: Option<SpectralAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub information_theory: Option<InformationMeasures>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stationarity: Option<StationarityResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyapunov_exponent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_stability: Option<Stability>,
}

/// Drop a section whose input is degenerate; propagate every other error.
fn optional_section<T>(name: &str, result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(MatmemError::DegenerateSignal(reason)) => {
            debug!(target: "matmem-analysis", "Skipping {} section: {}", name, reason);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Analyze the response `y` to stimulus `u` on the time axis `t`.
///
/// The memory metrics and mutual information are always computed. With
/// `options.extended`, sections whose input is degenerate for that test
/// (for example a constant stimulus in the causality test) are omitted.
pub fn analyze(
    t: &[f64],
    u: &[f64],
    y: &[f64],
    dt: f64,
    options: &AnalysisOptions,
) -> Result<AnalysisReport> {
    if !(dt > 0.0) || !dt.is_finite() {
        return Err(MatmemError::invalid(format!("dt must be finite and > 0, got {dt}")));
    }
    let memory = analyze_memory(t, y, options.max_lag)?;
    let mutual_information = calculate_mutual_information(u, y, options.bins)?;

    let mut report = AnalysisReport {
        memory,
        mutual_information,
        causality: None,
        spectral: None,
        information_theory: None,
        stationarity: None,
        lyapunov_exponent: None,
        system_stability: None,
    };

    if options.extended {
        report.causality = optional_section("causality", validate_causality(u, y, dt))?;
        report.spectral = optional_section("spectral", spectral_analysis(y, dt))?;
        report.information_theory = Some(information_theoretic_measures(u, y, options.bins)?);
        report.stationarity = Some(stationarity_test(y, options.stationarity_window)?);

        let lyapunov = lyapunov_exponent_estimation(y, dt)?;
        report.lyapunov_exponent = Some(lyapunov);
        report.system_stability = Some(classify_stability(lyapunov));
    }

    debug!(
        target: "matmem-analysis",
        "Analyzed {} samples (extended={}): memory_tau={:.3}, MI={:.4}",
        y.len(),
        options.extended,
        report.memory.memory_tau,
        report.mutual_information
    );

    Ok(report)
}
