//! Elementary discrete-time signals
//!
//! Every generator maps a time axis `n` to a fresh signal of the same length.

use crate::domain::{Onset, Sample, SampleIndex};
use num_complex::Complex64;

/// Unit impulse δ[n - n0]: 1.0 at every onset present in `n`, 0.0 elsewhere.
///
/// Onsets that do not appear on the axis are ignored.
pub fn unit_impulse(n: &[SampleIndex], n0: impl Into<Onset>) -> Vec<f64> {
    let onset = n0.into();
    n.iter()
        .map(|&k| if onset.contains(k) { 1.0 } else { 0.0 })
        .collect()
}

/// Unit step u[n - n0]
pub fn unit_step(n: &[SampleIndex], n0: SampleIndex) -> Vec<f64> {
    n.iter().map(|&k| if k >= n0 { 1.0 } else { 0.0 }).collect()
}

/// Rectangular pulse, 1.0 on `n1 ..= n2`. An empty range gives all zeros.
pub fn rect_pulse(n: &[SampleIndex], n1: SampleIndex, n2: SampleIndex) -> Vec<f64> {
    n.iter()
        .map(|&k| if (n1..=n2).contains(&k) { 1.0 } else { 0.0 })
        .collect()
}

/// Causal exponential `a^(n - n0)` for `n >= n0`, zero before.
///
/// The exponent is taken as the exact distance `n - n0`, so any pair of
/// `i64` indices is valid.
///
/// Pass an `f64` base for a real sequence or a `Complex64` base for a
/// complex one.
pub fn exponential_sequence<T: Sample>(n: &[SampleIndex], a: T, n0: SampleIndex) -> Vec<T> {
    n.iter()
        .map(|&k| {
            if k >= n0 {
                a.powu(k.abs_diff(n0))
            } else {
                T::ZERO
            }
        })
        .collect()
}

/// Complex exponential `e^{j(ω·n + φ)}`
pub fn complex_exponential(n: &[SampleIndex], omega: f64, phi: f64) -> Vec<Complex64> {
    n.iter()
        .map(|&k| Complex64::from_polar(1.0, omega * k as f64 + phi))
        .collect()
}

/// Real sinusoid `A·cos(ω·n + φ)`
pub fn sinusoidal_sequence(n: &[SampleIndex], amplitude: f64, omega: f64, phi: f64) -> Vec<f64> {
    n.iter()
        .map(|&k| amplitude * (omega * k as f64 + phi).cos())
        .collect()
}
