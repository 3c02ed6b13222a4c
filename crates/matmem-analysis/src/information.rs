// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Histogram-based information measures between stimulus and response.

use std::f64::consts::LN_2;

use matmem_model::{MatmemError, Result};
use serde::{Deserialize, Serialize};

use crate::stats::{histogram, histogram_2d, shannon_entropy};

pub const DEFAULT_BINS: usize = 20;

/// Marginal and joint entropies in nats
#[derive(Debug, Clone, Copy)]
struct Entropies {
    input: f64,
    output: f64,
    joint: f64,
}

impl Entropies {
    fn mutual_information(&self) -> f64 {
        self.input + self.output - self.joint
    }
}

fn entropies(u: &[f64], y: &[f64], bins: usize) -> Result<Entropies> {
    if u.len() != y.len() {
        return Err(MatmemError::invalid(format!(
            "u and y lengths differ: {} vs {}",
            u.len(),
            y.len()
        )));
    }
    if u.is_empty() {
        return Err(MatmemError::invalid("information measures need at least 1 sample"));
    }
    if bins == 0 {
        return Err(MatmemError::invalid("bins must be >= 1"));
    }

    Ok(Entropies {
        input: shannon_entropy(&histogram(u, bins)),
        output: shannon_entropy(&histogram(y, bins)),
        joint: shannon_entropy(&histogram_2d(u, y, bins)),
    })
}

/// Mutual information `I(u; y)` in nats, clamped at 0.
pub fn calculate_mutual_information(u: &[f64], y: &[f64], bins: usize) -> Result<f64> {
    let h = entropies(u, y, bins)?;
    Ok(h.mutual_information().max(0.0))
}

/// Extended information suite, all values in bits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InformationMeasures {
    pub entropy_input: f64,
    pub entropy_output: f64,
    pub joint_entropy: f64,
    /// Clamped at 0
    pub mutual_information: f64,
    /// `H(y|u) = H(u,y) - H(u)`
    pub conditional_entropy: f64,
    /// Mutual information over `min(H(u), H(y))`, clamped at 0
    pub normalized_mutual_information: f64,
    /// Approximate surrogate `max(0, I - H(y|u)/2)`.
    ///
    /// This is not a conditional transfer entropy over lagged histories; it
    /// only reuses the marginal and joint histograms.
    pub transfer_entropy: f64,
    /// Share of input entropy carried to the output
    pub information_efficiency: f64,
}

/// Entropy, mutual-information and derived ratios between `u` and `y`.
pub fn information_theoretic_measures(
    u: &[f64],
    y: &[f64],
    bins: usize,
) -> Result<InformationMeasures> {
    let h = entropies(u, y, bins)?;
    let h_u = h.input / LN_2;
    let h_y = h.output / LN_2;
    let h_uy = h.joint / LN_2;

    // Unclamped; the derived ratios use the raw estimate
    let mi = h_u + h_y - h_uy;
    let conditional = h_uy - h_u;

    let min_marginal = h_u.min(h_y);
    let normalized = if min_marginal > 0.0 {
        (mi / min_marginal).max(0.0)
    } else {
        0.0
    };

    Ok(InformationMeasures {
        entropy_input: h_u,
        entropy_output: h_y,
        joint_entropy: h_uy,
        mutual_information: mi.max(0.0),
        conditional_entropy: conditional,
        normalized_mutual_information: normalized,
        transfer_entropy: (mi - 0.5 * conditional).max(0.0),
        information_efficiency: if h_u > 0.0 { mi / h_u } else { 0.0 },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64 / n as f64).collect()
    }

    #[test]
    fn test_identical_signals_share_all_information() {
        // 20 distinct levels, 20 samples each
        let u: Vec<f64> = (0..400).map(|i| (i % 20) as f64).collect();
        let mi = calculate_mutual_information(&u, &u, 20).unwrap();
        let h = shannon_entropy(&histogram(&u, 20));
        assert!((mi - h).abs() < 1e-9);

        let m = information_theoretic_measures(&u, &u, 20).unwrap();
        assert!((m.normalized_mutual_information - 1.0).abs() < 1e-9);
        assert!(m.conditional_entropy.abs() < 1e-9);
        assert!((m.information_efficiency - 1.0).abs() < 1e-9);
        // 20 equally filled bins
        assert!((m.entropy_input - 20f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn test_constant_input_carries_nothing() {
        let u = vec![1.0; 100];
        let y = ramp(100);
        assert_eq!(calculate_mutual_information(&u, &y, 20).unwrap(), 0.0);

        let m = information_theoretic_measures(&u, &y, 20).unwrap();
        assert_eq!(m.entropy_input, 0.0);
        assert_eq!(m.normalized_mutual_information, 0.0);
        assert_eq!(m.information_efficiency, 0.0);
    }

    #[test]
    fn test_partially_determined_output() {
        // u in {0, 1}; y in {0, 1, 2, 3} with y determined by u only up to one bit.
        // H(u) = 1, H(y) = 2, H(u,y) = 2, so I = 1 and H(y|u) = 1.
        let u: Vec<f64> = (0..400).map(|i| ((i % 4) / 2) as f64).collect();
        let y: Vec<f64> = (0..400).map(|i| (i % 4) as f64).collect();
        let m = information_theoretic_measures(&u, &y, 20).unwrap();

        assert!((m.entropy_input - 1.0).abs() < 1e-9);
        assert!((m.entropy_output - 2.0).abs() < 1e-9);
        assert!((m.joint_entropy - 2.0).abs() < 1e-9);
        assert!((m.mutual_information - 1.0).abs() < 1e-9);
        assert!((m.conditional_entropy - 1.0).abs() < 1e-9);
        // max(0, 1 - 0.5 * 1)
        assert!((m.transfer_entropy - 0.5).abs() < 1e-9);
        assert!((m.information_efficiency - 1.0).abs() < 1e-9);
        assert!((m.normalized_mutual_information - 1.0).abs() < 1e-9);

        let mi_nats = calculate_mutual_information(&u, &y, 20).unwrap();
        assert!((mi_nats - LN_2).abs() < 1e-9);
    }

    #[test]
    fn test_independent_signals_clamp_transfer_entropy() {
        // Every (u, y) pair equally likely: I = 0, H(y|u) = 1, 0 - 0.5 clamps to 0
        let u: Vec<f64> = (0..400).map(|i| ((i % 4) / 2) as f64).collect();
        let y: Vec<f64> = (0..400).map(|i| (i % 2) as f64).collect();
        let m = information_theoretic_measures(&u, &y, 20).unwrap();

        assert!((m.conditional_entropy - 1.0).abs() < 1e-9);
        assert!(m.mutual_information.abs() < 1e-9);
        assert_eq!(m.transfer_entropy, 0.0);
        assert!(m.information_efficiency.abs() < 1e-9);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(calculate_mutual_information(&[1.0], &[1.0, 2.0], 20).is_err());
        assert!(calculate_mutual_information(&[], &[], 20).is_err());
        assert!(information_theoretic_measures(&[1.0], &[1.0], 0).is_err());
    }
}
