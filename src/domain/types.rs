//! Core domain types

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

/// Sample index `n` on a discrete-time axis
pub type SampleIndex = i64;

/// Build the half-open time axis `[start, stop)`, like `np.arange`.
pub fn time_axis(start: SampleIndex, stop: SampleIndex) -> Vec<SampleIndex> {
    (start..stop).collect()
}

/// Element type of a signal: real (`f64`) or complex (`Complex64`).
///
/// Generators that can produce either take the element type from their
/// arguments, so the caller picks real or complex output at compile time.
pub trait Sample:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    /// Non-negative integer power, by repeated squaring. Exponents past the
    /// `i32` range are exact; the result under- or overflows as `f64` would.
    fn powu(self, mut exp: u64) -> Self {
        let mut base = self;
        let mut acc = Self::ONE;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc * base;
            }
            exp >>= 1;
            if exp > 0 {
                base = base * base;
            }
        }
        acc
    }

    /// Absolute value (modulus for complex samples)
    fn magnitude(self) -> f64;
}

impl Sample for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn magnitude(self) -> f64 {
        self.abs()
    }
}

impl Sample for Complex64 {
    const ZERO: Self = Complex64::new(0.0, 0.0);
    const ONE: Self = Complex64::new(1.0, 0.0);

    fn magnitude(self) -> f64 {
        self.norm()
    }
}

/// Position(s) at which a unit impulse is placed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Onset {
    Single(SampleIndex),
    Multiple(Vec<SampleIndex>),
}

impl Onset {
    pub fn contains(&self, n: SampleIndex) -> bool {
        match self {
            Onset::Single(pos) => *pos == n,
            Onset::Multiple(positions) => positions.contains(&n),
        }
    }
}

impl From<SampleIndex> for Onset {
    fn from(pos: SampleIndex) -> Self {
        Onset::Single(pos)
    }
}

impl From<Vec<SampleIndex>> for Onset {
    fn from(positions: Vec<SampleIndex>) -> Self {
        Onset::Multiple(positions)
    }
}

impl From<&[SampleIndex]> for Onset {
    fn from(positions: &[SampleIndex]) -> Self {
        Onset::Multiple(positions.to_vec())
    }
}

impl<const N: usize> From<[SampleIndex; N]> for Onset {
    fn from(positions: [SampleIndex; N]) -> Self {
        Onset::Multiple(positions.to_vec())
    }
}

/// How `db` interprets its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbScale {
    /// 20·log10
    #[default]
    Amplitude,
    /// 10·log10
    Power,
}

impl DbScale {
    pub fn factor(self) -> f64 {
        match self {
            DbScale::Amplitude => 20.0,
            DbScale::Power => 10.0,
        }
    }
}
