// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # matmem - Material Memory Simulator
//!
//! Models how natural materials (wood, metal, cloth, soil, water) respond to
//! an external stimulus with a delayed, saturating, multi-timescale "memory",
//! then quantifies that memory statistically.
//!
//! ## Quick Start
//!
//! ```rust
//! use matmem::prelude::*;
//!
//! let stimulus = generate_stimulus(StimulusKind::Pulse, 10.0, 1.0, 1.0, 0.01)?;
//! let result = simulate(material(MaterialKind::Metal), 0.01, &stimulus.t, &stimulus.u)?;
//!
//! let report = analyze(
//!     &stimulus.t,
//!     &stimulus.u,
//!     &result.y,
//!     0.01,
//!     &AnalysisOptions::default(),
//! )?;
//! assert!(report.memory.peak_time < 1.0);
//! # Ok::<(), MatmemError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - **`services`** (default): the async `SimulationService` boundary used by
//!   the REST API
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Model: matmem-model                                    │
//! │  (MaterialModel, Nonlinearity, catalog, stimuli)        │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Engine: matmem-engine                                  │
//! │  (explicit Euler over the layer chain)                  │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Analysis: matmem-analysis                              │
//! │  (memory, MI, causality, Welch, Lyapunov, stationarity) │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Boundary: matmem-services, matmem-api                  │
//! │  (DTOs, async service, axum routes)                     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## License
//!
//! Apache-2.0

pub use matmem_analysis as analysis;
pub use matmem_engine as engine;
pub use matmem_model as model;

#[cfg(feature = "services")]
pub use matmem_services as services;

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::analysis::{
        analyze, analyze_memory, calculate_mutual_information, information_theoretic_measures,
        lyapunov_exponent_estimation, spectral_analysis, stationarity_test, validate_causality,
        AnalysisOptions, AnalysisReport, Stability,
    };
    pub use crate::engine::{simulate, DelaySimulator, SimulationResult};
    pub use crate::model::{
        generate_stimulus, get_material, list_materials, material, MaterialKind, MaterialModel,
        MatmemError, Nonlinearity, Stimulus, StimulusKind,
    };

    #[cfg(feature = "services")]
    pub use crate::services::{
        ServiceError, ServiceSettings, SimulationRequest, SimulationService,
        SimulationServiceImpl,
    };
}
