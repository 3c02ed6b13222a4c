// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Welch power-spectral-density estimate and band powers.

use std::f64::consts::PI;

use matmem_model::{MatmemError, Result};
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;
use serde::{Deserialize, Serialize};

use crate::stats::{argmax_by, mean, trapezoid};

const MAX_SEGMENT: usize = 256;
const LOW_BAND_EDGE_HZ: f64 = 0.5;
const HIGH_BAND_EDGE_HZ: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectralAnalysis {
    pub frequencies: Vec<f64>,
    pub psd: Vec<f64>,
    /// Strongest non-DC frequency
    pub dominant_frequency: f64,
    pub total_power: f64,
    /// Below 0.5 Hz
    pub low_freq_power: f64,
    /// 0.5 Hz up to (excluding) 2 Hz
    pub mid_freq_power: f64,
    /// 2 Hz and above
    pub high_freq_power: f64,
    pub low_freq_ratio: f64,
}

/// Periodic Hann window of length `m`.
fn hann(m: usize) -> Vec<f64> {
    (0..m)
        .map(|i| 0.5 - 0.5 * (2.0 * PI * i as f64 / m as f64).cos())
        .collect()
}

/// One-sided Welch PSD with 50 % overlap; returns `(frequencies, psd)`.
pub fn welch(signal: &[f64], fs: f64, nperseg: usize) -> Result<(Vec<f64>, Vec<f64>)> {
    if nperseg < 2 || nperseg > signal.len() {
        return Err(MatmemError::degenerate(format!(
            "Welch segment length {} invalid for {} samples",
            nperseg,
            signal.len()
        )));
    }

    let window = hann(nperseg);
    let scale = 1.0 / (fs * window.iter().map(|w| w * w).sum::<f64>());
    let step = nperseg - nperseg / 2;
    let segments = (signal.len() - nperseg) / step + 1;
    let bins = nperseg / 2 + 1;

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(nperseg);

    let mut psd = vec![0.0; bins];
    let mut buffer = vec![Complex::new(0.0, 0.0); nperseg];
    for s in 0..segments {
        let segment = &signal[s * step..s * step + nperseg];
        let seg_mean = mean(segment);
        for ((slot, &x), &w) in buffer.iter_mut().zip(segment).zip(&window) {
            *slot = Complex::new((x - seg_mean) * w, 0.0);
        }
        fft.process(&mut buffer);
        for (p, c) in psd.iter_mut().zip(&buffer) {
            *p += c.norm_sqr() * scale;
        }
    }

    let last = bins - 1;
    let nyquist_present = nperseg % 2 == 0;
    for (k, p) in psd.iter_mut().enumerate() {
        *p /= segments as f64;
        // One-sided: fold negative frequencies except DC and Nyquist
        if k != 0 && !(nyquist_present && k == last) {
            *p *= 2.0;
        }
    }

    let frequencies = (0..bins).map(|k| k as f64 * fs / nperseg as f64).collect();
    Ok((frequencies, psd))
}

fn band_power(psd: &[f64], freqs: &[f64], keep: impl Fn(f64) -> bool) -> f64 {
    let (p, f): (Vec<f64>, Vec<f64>) = psd
        .iter()
        .zip(freqs)
        .filter(|(_, f)| keep(**f))
        .map(|(&p, &f)| (p, f))
        .unzip();
    trapezoid(&p, &f)
}

/// Frequency content of `signal` sampled every `dt` seconds.
pub fn spectral_analysis(signal: &[f64], dt: f64) -> Result<SpectralAnalysis> {
    if !(dt > 0.0) || !dt.is_finite() {
        return Err(MatmemError::invalid(format!("dt must be finite and > 0, got {dt}")));
    }
    let nperseg = MAX_SEGMENT.min(signal.len() / 4);
    if nperseg < 2 {
        return Err(MatmemError::degenerate(format!(
            "spectral analysis needs at least 8 samples, got {}",
            signal.len()
        )));
    }

    let fs = 1.0 / dt;
    let (frequencies, psd) = welch(signal, fs, nperseg)?;

    let dominant = argmax_by(&psd[1..], |p| p).map(|i| i + 1).unwrap_or(0);
    let total_power = trapezoid(&psd, &frequencies);
    let low = band_power(&psd, &frequencies, |f| f < LOW_BAND_EDGE_HZ);
    let mid = band_power(&psd, &frequencies, |f| {
        (LOW_BAND_EDGE_HZ..HIGH_BAND_EDGE_HZ).contains(&f)
    });
    let high = band_power(&psd, &frequencies, |f| f >= HIGH_BAND_EDGE_HZ);

    Ok(SpectralAnalysis {
        dominant_frequency: frequencies[dominant],
        low_freq_ratio: if total_power > 0.0 { low / total_power } else { 0.0 },
        frequencies,
        psd,
        total_power,
        low_freq_power: low,
        mid_freq_power: mid,
        high_freq_power: high,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f64, n: usize, dt: f64) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * PI * freq * i as f64 * dt).sin())
            .collect()
    }

    #[test]
    fn test_hann_is_periodic() {
        let w = hann(4);
        assert_eq!(w[0], 0.0);
        assert!((w[2] - 1.0).abs() < 1e-12);
        assert!((w[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_frequency_grid() {
        let signal = sine(5.0, 1024, 0.01);
        let result = spectral_analysis(&signal, 0.01).unwrap();
        assert_eq!(result.frequencies.len(), 129);
        assert_eq!(result.frequencies[0], 0.0);
        assert!((result.frequencies[128] - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_high_band_dominates_fast_sine() {
        let signal = sine(5.0, 2048, 0.01);
        let result = spectral_analysis(&signal, 0.01).unwrap();
        assert!((result.dominant_frequency - 5.0).abs() <= 100.0 / 256.0);
        assert!(result.high_freq_power > result.mid_freq_power);
        assert!(result.high_freq_power > result.low_freq_power);
        assert!(result.low_freq_ratio < 0.1);
    }

    #[test]
    fn test_sine_power_matches_variance() {
        // Parseval: integrated density ≈ variance (0.5 for a unit sine)
        let signal = sine(6.25, 4096, 0.01);
        let result = spectral_analysis(&signal, 0.01).unwrap();
        assert!((result.total_power - 0.5).abs() < 0.05, "{}", result.total_power);
    }

    #[test]
    fn test_constant_signal_has_no_power() {
        let result = spectral_analysis(&[2.0; 64], 0.1).unwrap();
        assert!(result.total_power.abs() < 1e-20);
        assert_eq!(result.low_freq_ratio, 0.0);
    }

    #[test]
    fn test_rejects_short_or_bad_input() {
        assert!(matches!(
            spectral_analysis(&[1.0; 7], 0.1),
            Err(MatmemError::DegenerateSignal(_))
        ));
        assert!(matches!(
            spectral_analysis(&[1.0; 64], -0.1),
            Err(MatmemError::InvalidParameter(_))
        ));
    }
}
