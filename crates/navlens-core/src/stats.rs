//! Statistical utility functions shared by the metrics and scoring engines.
//!
//! All helpers are NaN-tolerant: non-finite inputs are excluded before any
//! moment is computed, and degenerate cases (empty input, zero variance)
//! yield `None` rather than NaN or a panic.

use ndarray::Array1;

/// Minimum threshold for standard deviation to avoid division by zero.
/// Values below this threshold are treated as zero variance.
pub const MIN_STD_THRESHOLD: f64 = 1e-10;

/// Keep only finite values, as an owned array.
pub fn finite(values: &[f64]) -> Array1<f64> {
    values
        .iter()
        .copied()
        .filter(|x| x.is_finite())
        .collect::<Vec<f64>>()
        .into()
}

/// Arithmetic mean of the finite values. `None` on empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    let v = finite(values);
    if v.is_empty() {
        return None;
    }
    Some(v.sum() / v.len() as f64)
}

/// Sample standard deviation (N-1 denominator) of the finite values.
///
/// Requires at least two observations.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    let v = finite(values);
    let n = v.len();
    if n < 2 {
        return None;
    }
    let m = v.sum() / n as f64;
    let variance = v.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (n - 1) as f64;
    Some(variance.sqrt())
}

/// Percentile of the finite values with linear interpolation between ranks.
///
/// `q` is in `[0, 1]`. Matches the pandas/numpy default (`linear`)
/// interpolation so that quantile-based metrics agree with upstream
/// reference values.
pub fn percentile(values: &[f64], q: f64) -> Option<f64> {
    if !(0.0..=1.0).contains(&q) {
        return None;
    }
    let mut v: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
    if v.is_empty() {
        return None;
    }
    v.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = q * (v.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return Some(v[lo]);
    }
    let frac = rank - lo as f64;
    Some(v[lo] + (v[hi] - v[lo]) * frac)
}

/// Bias-corrected sample skewness (adjusted Fisher-Pearson, the pandas
/// convention). Requires at least three observations and non-degenerate
/// variance.
pub fn skewness(values: &[f64]) -> Option<f64> {
    let v = finite(values);
    let n = v.len();
    if n < 3 {
        return None;
    }
    let nf = n as f64;
    let m = v.sum() / nf;
    let m2 = v.iter().map(|x| (x - m).powi(2)).sum::<f64>() / nf;
    let m3 = v.iter().map(|x| (x - m).powi(3)).sum::<f64>() / nf;
    if m2.sqrt() < MIN_STD_THRESHOLD {
        return None;
    }
    let g1 = m3 / m2.powf(1.5);
    Some(g1 * (nf * (nf - 1.0)).sqrt() / (nf - 2.0))
}

/// Bias-corrected sample excess kurtosis (the pandas convention).
/// Requires at least four observations and non-degenerate variance.
pub fn excess_kurtosis(values: &[f64]) -> Option<f64> {
    let v = finite(values);
    let n = v.len();
    if n < 4 {
        return None;
    }
    let nf = n as f64;
    let m = v.sum() / nf;
    let m2 = v.iter().map(|x| (x - m).powi(2)).sum::<f64>() / nf;
    let m4 = v.iter().map(|x| (x - m).powi(4)).sum::<f64>() / nf;
    if m2.sqrt() < MIN_STD_THRESHOLD {
        return None;
    }
    let g2 = m4 / (m2 * m2) - 3.0;
    Some(((nf + 1.0) * g2 + 6.0) * (nf - 1.0) / ((nf - 2.0) * (nf - 3.0)))
}
