//! Operations on finite discrete-time signals
//!
//! Two kinds of shift live here and they are not interchangeable:
//! `shift_signal` rotates the samples of a finite buffer (circular), while
//! `time_shift` keeps the samples and relabels the time axis (linear).

use crate::domain::{Sample, SampleIndex};

/// Circular shift by `k` samples (positive = right). Samples pushed past one
/// end reappear at the other.
pub fn shift_signal<T: Clone>(x: &[T], k: i64) -> Vec<T> {
    let mut y = x.to_vec();
    if y.is_empty() {
        return y;
    }
    let len = y.len() as i64;
    y.rotate_right(k.rem_euclid(len) as usize);
    y
}

/// Linear time shift `x[n - k]`: the samples are untouched, the axis moves by `k`.
///
/// Indices saturate at the `i64` bounds instead of wrapping.
pub fn time_shift<T: Clone>(
    x: &[T],
    n: &[SampleIndex],
    k: SampleIndex,
) -> (Vec<T>, Vec<SampleIndex>) {
    (x.to_vec(), n.iter().map(|&i| i.saturating_add(k)).collect())
}

/// Time reversal `x[-n]`. `i64::MIN` maps to `i64::MAX`.
pub fn time_reverse<T: Clone>(x: &[T], n: &[SampleIndex]) -> (Vec<T>, Vec<SampleIndex>) {
    (
        x.iter().rev().cloned().collect(),
        n.iter().rev().map(|&i| i.saturating_neg()).collect(),
    )
}

/// Amplitude scaling `g·x[n]`
pub fn scale<T: Sample>(x: &[T], gain: f64) -> Vec<T> {
    x.iter().map(|&v| v * gain).collect()
}

/// Sample-wise sum of two signals on the same axis. Extra samples in the
/// longer input are dropped.
pub fn add<T: Sample>(x: &[T], y: &[T]) -> Vec<T> {
    x.iter().zip(y).map(|(&a, &b)| a + b).collect()
}

/// Even part `½(x[n] + x[-n])`.
///
/// `x[-n]` is the reversed buffer, so `x` must sit on an axis symmetric
/// about zero (e.g. `-4..=4`).
pub fn even_part<T: Sample>(x: &[T]) -> Vec<T> {
    x.iter()
        .zip(x.iter().rev())
        .map(|(&a, &b)| (a + b) * 0.5f64)
        .collect()
}

/// Odd part `½(x[n] - x[-n])`, same axis requirement as [`even_part`].
pub fn odd_part<T: Sample>(x: &[T]) -> Vec<T> {
    x.iter()
        .zip(x.iter().rev())
        .map(|(&a, &b)| (a - b) * 0.5f64)
        .collect()
}

/// Both halves of the even/odd decomposition; they sum back to `x`.
pub fn even_odd<T: Sample>(x: &[T]) -> (Vec<T>, Vec<T>) {
    (even_part(x), odd_part(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::time_axis;

    #[test]
    fn shift_signal_wraps_right() {
        assert_eq!(shift_signal(&[1, 2, 3, 4, 5], 2), vec![4, 5, 1, 2, 3]);
    }

    #[test]
    fn shift_signal_wraps_left_and_beyond_length() {
        assert_eq!(shift_signal(&[1, 2, 3, 4, 5], -1), vec![2, 3, 4, 5, 1]);
        assert_eq!(shift_signal(&[1, 2, 3, 4, 5], 7), vec![4, 5, 1, 2, 3]);
    }

    #[test]
    fn shift_signal_is_invertible() {
        let x = vec![0.3, -1.2, 4.0, 2.2, 0.0, 9.5];
        for k in -13..14 {
            assert_eq!(shift_signal(&shift_signal(&x, k), -k), x, "k = {k}");
        }
    }

    #[test]
    fn shift_signal_of_empty_is_empty() {
        let empty: Vec<f64> = Vec::new();
        assert!(shift_signal(&empty, 3).is_empty());
    }

    #[test]
    fn time_shift_moves_axis_not_samples() {
        let n = time_axis(-1, 2);
        let (y, m) = time_shift(&[1.0, 2.0, 3.0], &n, 5);
        assert_eq!(y, vec![1.0, 2.0, 3.0]);
        assert_eq!(m, vec![4, 5, 6]);
    }

    #[test]
    fn time_shift_saturates_at_axis_bounds() {
        let (_, m) = time_shift(&[1.0, 2.0], &[i64::MAX - 1, i64::MAX], 5);
        assert_eq!(m, vec![i64::MAX, i64::MAX]);
        let (_, m) = time_shift(&[1.0], &[i64::MIN + 2], -10);
        assert_eq!(m, vec![i64::MIN]);
    }

    #[test]
    fn time_reverse_of_min_index_saturates() {
        let (_, m) = time_reverse(&[1.0, 2.0], &[i64::MIN, 0]);
        assert_eq!(m, vec![0, i64::MAX]);
    }

    #[test]
    fn time_reverse_flips_around_origin() {
        let n = time_axis(0, 3);
        let (y, m) = time_reverse(&[1.0, 2.0, 3.0], &n);
        assert_eq!(y, vec![3.0, 2.0, 1.0]);
        assert_eq!(m, vec![-2, -1, 0]);
    }

    #[test]
    fn scale_and_add() {
        assert_eq!(scale(&[1.0, -0.5], 2.0), vec![2.0, -1.0]);
        assert_eq!(add(&[1.0, 1.0, 1.0], &[0.5, 0.0]), vec![1.5, 1.0]);
    }

    #[test]
    fn even_and_odd_parts_reconstruct_signal() {
        let x = vec![0.1f64, -0.4, 0.25, 0.3, -0.2, 0.45, 0.0, -0.1, 0.35];
        let (even, odd) = even_odd(&x);
        let sum = add(&even, &odd);
        for (a, b) in sum.iter().zip(&x) {
            assert!((a - b).abs() < 1e-15);
        }
    }

    #[test]
    fn even_part_is_symmetric_and_odd_part_antisymmetric() {
        let x = vec![3.0, 1.0, -2.0, 5.0, 0.5];
        let (even, odd) = even_odd(&x);
        let len = x.len();
        for i in 0..len {
            assert_eq!(even[i], even[len - 1 - i]);
            assert_eq!(odd[i], -odd[len - 1 - i]);
        }
        assert_eq!(odd[len / 2], 0.0);
    }
}
