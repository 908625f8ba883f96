//! Level conversions: decibels and peak normalization

use crate::domain::{DbScale, Sample};

/// Added to |x| before the logarithm so silent samples map to a finite
/// (very low) level instead of -inf
pub const DB_FLOOR: f64 = 1e-20;

/// Convert amplitude (`20·log10`) or power (`10·log10`) values to dB
pub fn db<T: Sample>(x: &[T], scale: DbScale) -> Vec<f64> {
    let factor = scale.factor();
    x.iter()
        .map(|&v| factor * (v.magnitude() + DB_FLOOR).log10())
        .collect()
}

/// Largest absolute sample value, 0.0 for an empty signal
pub fn peak<T: Sample>(x: &[T]) -> f64 {
    x.iter().map(|&v| v.magnitude()).fold(0.0, f64::max)
}

/// Scale so the largest absolute sample is 1. A zero signal is returned as is.
pub fn normalize<T: Sample>(x: &[T]) -> Vec<T> {
    let max = peak(x);
    if max == 0.0 {
        return x.to_vec();
    }
    x.iter().map(|&v| v / max).collect()
}
