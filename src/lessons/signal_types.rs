//! Basic discrete-time signals: impulse, step, exponential, sinusoid

use crate::domain::{time_axis, Figure, Lesson, LessonOutput, Onset, Panel, Series};
use crate::dsp::{exponential_sequence, sinusoidal_sequence, unit_impulse, unit_step};
use std::f64::consts::PI;

const DECAY: f64 = 0.8;
const PERIOD: f64 = 8.0;

pub fn compute() -> LessonOutput {
    let n = time_axis(-10, 21);
    let at = |k: i64| n.iter().position(|&i| i == k).unwrap_or_default();

    let delta = unit_impulse(&n, Onset::Single(0));
    let u = unit_step(&n, 0);
    let x_exp = exponential_sequence(&n, DECAY, 0);
    let x_sin = sinusoidal_sequence(&n, 1.0, 2.0 * PI / PERIOD, 0.0);

    let mut output = LessonOutput::new(Lesson::SignalTypes, "Signal Properties");
    output.figure(
        Figure::new("basic_signals", "Basic Discrete-Time Signals")
            .panel(Panel::stem("Unit Impulse δ[n]", Series::over_axis("δ[n]", &n, &delta)))
            .panel(Panel::stem("Unit Step u[n]", Series::over_axis("u[n]", &n, &u)))
            .panel(Panel::stem(
                format!("Exponential Sequence x[n] = {DECAY}^n u[n]"),
                Series::over_axis("x[n]", &n, &x_exp),
            ))
            .panel(Panel::stem(
                "Sinusoidal Sequence x[n] = cos(2πn/8)",
                Series::over_axis("x[n]", &n, &x_sin),
            )),
    );

    output.line(format!("Unit Impulse at n=0: δ[0] = {:.1}", delta[at(0)]));
    output.line(format!("Unit Step at n=0: u[0] = {:.1}", u[at(0)]));
    output.line(format!("Unit Step at n=-1: u[-1] = {:.1}", u[at(-1)]));
    output.line(format!("Exponential at n=0: {DECAY}^0 = {:.1}", x_exp[at(0)]));
    output.line(format!("Exponential at n=5: {DECAY}^5 = {:.4}", x_exp[at(5)]));
    output.line(format!("Sinusoidal at n=0: cos(0) = {:.4}", x_sin[at(0)]));
    output.line(format!("Sinusoidal period: {PERIOD} samples"));
    output
}
