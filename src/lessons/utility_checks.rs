//! Quick sanity checks of the signal library

use crate::domain::{time_axis, DbScale, Figure, Lesson, LessonOutput, Onset, Panel, Series};
use crate::dsp::{
    complex_exponential, db, exponential_sequence, normalize, unit_impulse, unit_step,
};
use std::f64::consts::PI;

pub fn compute() -> LessonOutput {
    let n = time_axis(-5, 6);

    let delta = unit_impulse(&n, Onset::Single(0));
    let u = unit_step(&n, 0);
    let x = exponential_sequence(&n, 0.8f64, 0);
    let z = complex_exponential(&time_axis(0, 8), 2.0 * PI / 8.0, 0.0);

    let step_ok = n.iter().zip(&u).filter(|&(&k, _)| k >= 0).all(|(_, &v)| v == 1.0);
    let causal: Vec<f64> = n
        .iter()
        .zip(&x)
        .filter(|&(&k, _)| k >= 0)
        .map(|(_, &v)| v)
        .take(3)
        .collect();
    let levels = db(&[1.0, 0.5, 0.1], DbScale::Amplitude);

    let mut output = LessonOutput::new(Lesson::UtilityChecks, "DSP Utility Functions - Basic Tests");
    output.figure(
        Figure::new("utility_checks", "Signal Library Checks")
            .panel(Panel::stem("δ[n]", Series::over_axis("δ[n]", &n, &delta)))
            .panel(Panel::stem("u[n]", Series::over_axis("u[n]", &n, &u)))
            .panel(Panel::stem(
                "0.8^n u[n] (normalized)",
                Series::over_axis("x[n]", &n, &normalize(&x)),
            )),
    );

    output.line(format!(
        "Unit impulse at n=0: sum = {:.1}",
        delta.iter().sum::<f64>()
    ));
    output.line(format!("Unit step at n=0: values at n>=0 = {step_ok}"));
    output.line(format!(
        "Exponential 0.8^n: first 3 values = {}",
        super::format_values(&causal, 2)
    ));
    output.line(format!(
        "Complex exponential period-8: |z| = {:.4}",
        z[0].norm()
    ));
    output.line(format!(
        "Amplitude [1, 0.5, 0.1] in dB = {}",
        super::format_values(&levels, 2)
    ));
    output
}
