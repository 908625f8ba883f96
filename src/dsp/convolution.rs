//! Direct-form discrete convolution

use crate::domain::Sample;
use serde::{Deserialize, Serialize};

/// Which part of the full convolution to return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConvMode {
    /// Every overlap: length N + M - 1
    #[default]
    Full,
    /// Centered slice of the full result: length max(N, M)
    Same,
    /// Only positions where one input fully covers the other:
    /// length max(N, M) - min(N, M) + 1
    Valid,
}

impl ConvMode {
    /// Output length for inputs of length `n` and `m` (0 if either is empty)
    pub fn output_len(self, n: usize, m: usize) -> usize {
        if n == 0 || m == 0 {
            return 0;
        }
        match self {
            ConvMode::Full => n + m - 1,
            ConvMode::Same => n.max(m),
            ConvMode::Valid => n.max(m) - n.min(m) + 1,
        }
    }

    /// Offset of this mode's output within the full result
    fn start(self, n: usize, m: usize) -> usize {
        match self {
            ConvMode::Full => 0,
            ConvMode::Same => (n.min(m) - 1) / 2,
            ConvMode::Valid => n.min(m) - 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ConvMode::Full => "full",
            ConvMode::Same => "same",
            ConvMode::Valid => "valid",
        }
    }
}

/// Convolve `x` with `h`: `y[k] = Σ x[i]·h[k - i]`.
///
/// Either input empty gives an empty result.
pub fn convolve<T: Sample>(x: &[T], h: &[T], mode: ConvMode) -> Vec<T> {
    if x.is_empty() || h.is_empty() {
        return Vec::new();
    }

    let mut full = vec![T::ZERO; x.len() + h.len() - 1];
    for (i, &xi) in x.iter().enumerate() {
        for (j, &hj) in h.iter().enumerate() {
            full[i + j] = full[i + j] + xi * hj;
        }
    }

    let start = mode.start(x.len(), h.len());
    let len = mode.output_len(x.len(), h.len());
    full.drain(start..start + len).collect()
}
