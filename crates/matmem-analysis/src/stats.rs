// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Small descriptive-statistics helpers shared by the analyzers.

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divides by N).
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation.
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Least-squares slope of `values` against their index `0..n`.
pub fn linear_trend(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let x_mean = (n - 1) as f64 / 2.0;
    let y_mean = mean(values);
    let (num, den) = values
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(num, den), (i, &y)| {
            let dx = i as f64 - x_mean;
            (num + dx * (y - y_mean), den + dx * dx)
        });
    num / den
}

/// Index of the first maximum of `score(value)`.
pub(crate) fn argmax_by<F: Fn(f64) -> f64>(values: &[f64], score: F) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        let s = score(v);
        match best {
            Some((_, b)) if s <= b => {}
            _ => best = Some((i, s)),
        }
    }
    best.map(|(i, _)| i)
}

/// Trapezoidal integral of `y` over the sample points `x`.
pub fn trapezoid(y: &[f64], x: &[f64]) -> f64 {
    y.windows(2)
        .zip(x.windows(2))
        .map(|(yw, xw)| 0.5 * (yw[0] + yw[1]) * (xw[1] - xw[0]))
        .sum()
}

/// Equal-width binning over the observed range of a signal.
///
/// A constant signal is binned over `[v - 0.5, v + 0.5]`; the last bin is
/// closed on the right.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Binning {
    lo: f64,
    width: f64,
    bins: usize,
}

impl Binning {
    pub(crate) fn over(values: &[f64], bins: usize) -> Self {
        let (mut lo, mut hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }
        Self {
            lo,
            width: (hi - lo) / bins as f64,
            bins,
        }
    }

    pub(crate) fn index(&self, v: f64) -> usize {
        let raw = ((v - self.lo) / self.width).floor();
        if raw <= 0.0 {
            0
        } else {
            (raw as usize).min(self.bins - 1)
        }
    }
}

/// Bin counts of a 1-D histogram over the signal's own range.
pub fn histogram(values: &[f64], bins: usize) -> Vec<u64> {
    let mut counts = vec![0u64; bins];
    if bins == 0 || values.is_empty() {
        return counts;
    }
    let binning = Binning::over(values, bins);
    for &v in values {
        counts[binning.index(v)] += 1;
    }
    counts
}

/// Row-major `bins × bins` joint histogram of paired samples.
pub fn histogram_2d(a: &[f64], b: &[f64], bins: usize) -> Vec<u64> {
    let mut counts = vec![0u64; bins * bins];
    if bins == 0 || a.is_empty() {
        return counts;
    }
    let bin_a = Binning::over(a, bins);
    let bin_b = Binning::over(b, bins);
    for (&va, &vb) in a.iter().zip(b) {
        counts[bin_a.index(va) * bins + bin_b.index(vb)] += 1;
    }
    counts
}

/// Shannon entropy in nats of the distribution given by `counts`.
///
/// Empty cells are skipped; the counts are normalized to probabilities, so
/// any positive rescaling of the histogram yields the same value.
pub fn shannon_entropy(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.ln()
        })
        .sum()
}
