//! Complex exponentials and Euler's formula: e^(jωn) = cos(ωn) + j·sin(ωn)

use crate::domain::{time_axis, Figure, Lesson, LessonOutput, Panel, PlotStyle, Series};
use crate::dsp::complex_exponential;
use std::f64::consts::PI;

const PERIOD: f64 = 8.0;

pub fn compute() -> LessonOutput {
    let n = time_axis(0, 32);
    let omega = 2.0 * PI / PERIOD;
    let z = complex_exponential(&n, omega, 0.0);

    let real: Vec<f64> = z.iter().map(|c| c.re).collect();
    let imag: Vec<f64> = z.iter().map(|c| c.im).collect();
    let magnitude: Vec<f64> = z.iter().map(|c| c.norm()).collect();
    let phase: Vec<f64> = z.iter().map(|c| c.arg()).collect();

    // one period is enough to trace the unit circle
    let cycle = PERIOD as usize + 1;
    let points = Series::xy("z[n]", real[..cycle].to_vec(), imag[..cycle].to_vec());
    let path = Series::xy("path", points.x.clone(), points.y.clone()).with_style(PlotStyle::Line);

    let mut output = LessonOutput::new(
        Lesson::ComplexExponentials,
        "Euler's Formula Verification: e^(jωn) = cos(ωn) + j·sin(ωn)",
    );
    output.figure(
        Figure::new("complex_exponential", "Complex Exponential e^(j2πn/8)")
            .panel(Panel::stem("Real Part: cos(ωn)", Series::over_axis("Re{z[n]}", &n, &real)))
            .panel(Panel::stem("Imaginary Part: sin(ωn)", Series::over_axis("Im{z[n]}", &n, &imag)))
            .panel(
                Panel::stem("Magnitude |z[n]|", Series::over_axis("|z[n]|", &n, &magnitude))
                    .with_labels("n", "|z[n]|"),
            )
            .panel(
                Panel::stem("Phase ∠z[n]", Series::over_axis("∠z[n]", &n, &phase))
                    .with_labels("n", "radians"),
            )
            .panel(
                Panel::stem("Complex Plane", points)
                    .with_style(PlotStyle::Scatter)
                    .with_series(path)
                    .with_labels("Real", "Imaginary"),
            ),
    );

    output.line(format!("Frequency ω = 2π/8 = {omega:.4} rad/sample"));
    for (k, angle) in [(0, "0"), (2, "π/2"), (4, "π")] {
        output.line(format!("At n={k}:"));
        output.line(format!(
            "  e^(j·{angle}) = {:.4}{:+.4}j",
            z[k].re, z[k].im
        ));
        output.line(format!(
            "  cos({angle}) + j·sin({angle}) = {:.4} + j·{:.4}",
            real[k], imag[k]
        ));
    }
    let max_error = magnitude
        .iter()
        .map(|m| (m - 1.0).abs())
        .fold(0.0, f64::max);
    output.line(format!(
        "All magnitudes = 1 (max deviation {max_error:.1e}), as |e^(jωn)| = 1 for real ω"
    ));
    output.line(format!("Period = {PERIOD} samples"));
    output
}
