//! Sample-rate changes without filtering

use crate::domain::Sample;
use std::num::NonZeroUsize;

/// Keep every `m`-th sample starting at index 0. Output length is
/// `ceil(len / m)`. No anti-alias filtering.
pub fn downsample<T: Clone>(x: &[T], m: NonZeroUsize) -> Vec<T> {
    x.iter().step_by(m.get()).cloned().collect()
}

/// Insert `l - 1` zeros after every sample. Output length is `len * l`.
pub fn upsample<T: Sample>(x: &[T], l: NonZeroUsize) -> Vec<T> {
    let l = l.get();
    let mut y = vec![T::ZERO; x.len() * l];
    for (i, &v) in x.iter().enumerate() {
        y[i * l] = v;
    }
    y
}
