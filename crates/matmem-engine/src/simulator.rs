// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Multi-layer leaky-integrator simulator.

use matmem_model::{MaterialModel, MatmemError, Result};
use ndarray::{Array2, ArrayView1};
use tracing::{debug, warn};

/// Output of one simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Weighted response `y[n] = Σ w[i]·x[i,n]`
    pub y: Vec<f64>,

    /// Layer states, shape `(num_layers, len(t))`
    pub x_states: Array2<f64>,
}

impl SimulationResult {
    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    pub fn num_layers(&self) -> usize {
        self.x_states.nrows()
    }

    /// State trajectory of one layer
    pub fn layer(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.num_layers()).then(|| self.x_states.row(index))
    }

    /// Layer states as nested rows, for JSON transport
    pub fn states_as_rows(&self) -> Vec<Vec<f64>> {
        self.x_states.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}

/// Simulator bound to one material
#[derive(Debug, Clone, Copy)]
pub struct DelaySimulator<'a> {
    material: &'a MaterialModel,
    dt: f64,
}

impl<'a> DelaySimulator<'a> {
    /// Validate the material and the step size.
    pub fn new(material: &'a MaterialModel, dt: f64) -> Result<Self> {
        material.validate()?;
        if !(dt > 0.0) || !dt.is_finite() {
            return Err(MatmemError::invalid(format!(
                "dt must be finite and > 0, got {dt}"
            )));
        }

        let limit = material.stable_step_limit();
        if dt >= limit {
            warn!(
                target: "matmem-engine",
                "dt={} exceeds the explicit-Euler stability bound {} for '{}'; response will diverge",
                dt,
                limit,
                material.name
            );
        }

        Ok(Self { material, dt })
    }

    pub fn material(&self) -> &MaterialModel {
        self.material
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Integrate the layers over the stimulus `u` sampled on `t`.
    pub fn run(&self, t: &[f64], u: &[f64]) -> Result<SimulationResult> {
        if t.len() != u.len() {
            return Err(MatmemError::invalid(format!(
                "t and u lengths differ: {} vs {}",
                t.len(),
                u.len()
            )));
        }
        if t.len() < 2 {
            return Err(MatmemError::invalid(format!(
                "at least 2 samples required, got {}",
                t.len()
            )));
        }

        let material = self.material;
        let dt = self.dt;
        let n = t.len();
        let layers = material.num_layers();

        let mut x_states = Array2::<f64>::zeros((layers, n));
        let mut y = vec![0.0; n];

        for step in 1..n {
            // One transform evaluation per step, shared by all layers
            let drive = material.nonlinear(u[step - 1]);

            let mut response = 0.0;
            for i in 0..layers {
                let prev = x_states[[i, step - 1]];
                let next = prev + dt * (-prev / material.tau[i] + material.k[i] * drive);
                x_states[[i, step]] = next;
                response += material.w[i] * next;
            }
            y[step] = response;
        }

        debug!(
            target: "matmem-engine",
            "Simulated '{}': {} samples x {} layers (dt={})",
            material.name,
            n,
            layers,
            dt
        );

        Ok(SimulationResult { y, x_states })
    }
}

/// Simulate `material` driven by `u` on the time axis `t`.
pub fn simulate(
    material: &MaterialModel,
    dt: f64,
    t: &[f64],
    u: &[f64],
) -> Result<SimulationResult> {
    DelaySimulator::new(material, dt)?.run(t, u)
}
