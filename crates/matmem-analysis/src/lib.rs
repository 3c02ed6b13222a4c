// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # Response Analysis
//!
//! Statistical characterisation of a simulated (or recorded) material
//! response:
//! - **memory**: autocorrelation decay, entropy, peak statistics
//! - **information**: histogram-based entropies and mutual information
//! - **causality**: lagged cross-correlation with a Pearson significance test
//! - **spectral**: Welch PSD and band powers
//! - **dynamics**: Lyapunov heuristic and stability class
//! - **stationarity**: windowed trend and Kruskal-Wallis test
//! - **report**: all of the above combined into one serializable report
//!
//! Every entrypoint is a pure function over slices.

pub mod causality;
pub mod dynamics;
pub mod information;
pub mod memory;
pub mod report;
pub mod spectral;
pub mod stationarity;
pub mod stats;

pub use causality::{validate_causality, CausalityResult};
pub use dynamics::{classify_stability, lyapunov_exponent_estimation, Stability};
pub use information::{
    calculate_mutual_information, information_theoretic_measures, InformationMeasures,
};
pub use memory::{analyze_memory, MemoryAnalysis};
pub use report::{analyze, AnalysisOptions, AnalysisReport};
pub use spectral::{spectral_analysis, SpectralAnalysis};
pub use stationarity::{stationarity_test, StationarityResult};
