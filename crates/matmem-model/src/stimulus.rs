// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Stimulus waveform synthesis.
//!
//! Every generator samples `t[i] = i·dt` for `i < ceil(duration / dt)` and
//! returns the time axis together with the waveform.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use crate::types::{MatmemError, Result};

/// Supported stimulus waveforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StimulusKind {
    /// Rectangular pulse of width `min(0.1·duration, 1)`
    Pulse,
    Sine,
    /// Exponential approach to `intensity`
    Heat,
    /// Gaussian bump centred at a quarter of the duration
    Pressure,
    /// Exponentially decaying sinusoid
    Sound,
    /// Three short Gaussian flashes
    Light,
    /// White Gaussian noise
    Noise,
}

impl StimulusKind {
    pub const ALL: [StimulusKind; 7] = [
        StimulusKind::Pulse,
        StimulusKind::Sine,
        StimulusKind::Heat,
        StimulusKind::Pressure,
        StimulusKind::Sound,
        StimulusKind::Light,
        StimulusKind::Noise,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            StimulusKind::Pulse => "pulse",
            StimulusKind::Sine => "sine",
            StimulusKind::Heat => "heat",
            StimulusKind::Pressure => "pressure",
            StimulusKind::Sound => "sound",
            StimulusKind::Light => "light",
            StimulusKind::Noise => "noise",
        }
    }

    /// Whether repeated generation with the same arguments yields the same samples
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, StimulusKind::Noise)
    }
}

impl fmt::Display for StimulusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for StimulusKind {
    type Err = MatmemError;

    fn from_str(s: &str) -> Result<Self> {
        StimulusKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| MatmemError::UnknownStimulusKind(s.to_string()))
    }
}

/// Sampled stimulus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stimulus {
    pub t: Vec<f64>,
    pub u: Vec<f64>,
    pub dt: f64,
}

impl Stimulus {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

/// Generate a stimulus. `noise` draws from the thread-local RNG.
pub fn generate_stimulus(
    kind: StimulusKind,
    duration: f64,
    intensity: f64,
    frequency: f64,
    dt: f64,
) -> Result<Stimulus> {
    generate_stimulus_with_rng(
        kind,
        duration,
        intensity,
        frequency,
        dt,
        &mut rand::thread_rng(),
    )
}

/// Generate a stimulus drawing any random samples from `rng`.
pub fn generate_stimulus_with_rng<R: Rng>(
    kind: StimulusKind,
    duration: f64,
    intensity: f64,
    frequency: f64,
    dt: f64,
    rng: &mut R,
) -> Result<Stimulus> {
    if ![duration, intensity, frequency, dt]
        .iter()
        .all(|v| v.is_finite())
    {
        return Err(MatmemError::invalid(
            "stimulus arguments must be finite",
        ));
    }
    if duration <= 0.0 {
        return Err(MatmemError::invalid(format!(
            "duration must be > 0, got {duration}"
        )));
    }
    if dt <= 0.0 {
        return Err(MatmemError::invalid(format!("dt must be > 0, got {dt}")));
    }

    let n = (duration / dt).ceil() as usize;
    let t: Vec<f64> = (0..n).map(|i| i as f64 * dt).collect();

    let u: Vec<f64> = match kind {
        StimulusKind::Pulse => {
            let pulse_width = (0.1 * duration).min(1.0);
            t.iter()
                .map(|&ti| if ti < pulse_width { intensity } else { 0.0 })
                .collect()
        }
        StimulusKind::Sine => t
            .iter()
            .map(|&ti| intensity * (2.0 * PI * frequency * ti).sin())
            .collect(),
        StimulusKind::Heat => t
            .iter()
            .map(|&ti| intensity * (1.0 - (-5.0 * ti / duration).exp()))
            .collect(),
        StimulusKind::Pressure => {
            let center = duration / 4.0;
            let width = duration / 10.0;
            t.iter()
                .map(|&ti| intensity * (-(ti - center).powi(2) / (2.0 * width * width)).exp())
                .collect()
        }
        StimulusKind::Sound => t
            .iter()
            .map(|&ti| {
                intensity * (-3.0 * ti / duration).exp() * (2.0 * PI * frequency * ti).sin()
            })
            .collect(),
        StimulusKind::Light => {
            let flashes = [0.1 * duration, 0.3 * duration, 0.6 * duration];
            t.iter()
                .map(|&ti| {
                    flashes
                        .iter()
                        .map(|&tf| intensity * (-(ti - tf).powi(2) / 0.01).exp())
                        .sum()
                })
                .collect()
        }
        StimulusKind::Noise => (0..n)
            .map(|_| {
                let z: f64 = rng.sample(StandardNormal);
                intensity * z
            })
            .collect(),
    };

    tracing::trace!(
        target: "matmem-model",
        "Generated {} stimulus: {} samples, dt={}",
        kind,
        n,
        dt
    );

    Ok(Stimulus { t, u, dt })
}
