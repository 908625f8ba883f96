//! Periodicity of discrete-time sinusoids
//!
//! `cos(4π/5·n)` repeats every 5 samples. `cos(7n)` never repeats: 7 is not a
//! rational multiple of 2π, so no integer period exists.

use super::format_values;
use crate::domain::{time_axis, Figure, Lesson, LessonOutput, Panel, Series};
use crate::dsp::sinusoidal_sequence;
use std::f64::consts::PI;

const TOLERANCE: f64 = 1e-9;

/// Smallest `N <= len / 2` with `x[i + N] == x[i]` (within tolerance) for every
/// `i` the buffer covers
pub fn detect_period(x: &[f64]) -> Option<usize> {
    (1..=x.len() / 2).find(|&p| x.iter().zip(&x[p..]).all(|(a, b)| (a - b).abs() < TOLERANCE))
}

pub fn compute() -> LessonOutput {
    let n = time_axis(-10, 11);
    let periodic = sinusoidal_sequence(&n, 1.0, 4.0 * PI / 5.0, 0.0);
    let non_periodic = sinusoidal_sequence(&n, 1.0, 7.0, 0.0);

    let mut output = LessonOutput::new(Lesson::Sinusoids, "Discrete-Time Sinusoids");
    output.figure(Figure::new("periodic_sinusoid", "cos(4π/5 n)").panel(Panel::stem(
        "Periodic Discrete-Time Sinusoid cos(4π/5 n)",
        Series::over_axis("x[n]", &n, &periodic),
    )));
    output.figure(Figure::new("non_periodic_sinusoid", "cos(7 n)").panel(Panel::stem(
        "Non-Periodic Discrete-Time Sinusoid cos(7 n)",
        Series::over_axis("x[n]", &n, &non_periodic),
    )));

    for (label, x) in [("cos(4π/5 n)", &periodic), ("cos(7 n)", &non_periodic)] {
        match detect_period(x) {
            Some(p) => output.line(format!("{label}: period = {p} samples")),
            None => output.line(format!("{label}: no period within {} samples", x.len() / 2)),
        }
    }
    output.line("Non-Periodic Discrete-Time Sinusoid cos(7 n):");
    output.line(format_values(&non_periodic, 8));
    output
}
