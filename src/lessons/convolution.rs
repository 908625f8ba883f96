//! Convolution examples: rectangles, an exponential impulse response, and
//! the full/same/valid output modes

use super::format_values;
use crate::domain::{Figure, Lesson, LessonOutput, Onset, Panel, Series};
use crate::dsp::{convolve, exponential_sequence, unit_impulse, ConvMode};

const ALPHA: f64 = 0.7;

fn indices(len: usize) -> Vec<i64> {
    (0..len as i64).collect()
}

fn stem(title: &str, label: &str, x: &[f64]) -> Panel {
    Panel::stem(title, Series::over_axis(label, &indices(x.len()), x))
}

fn rectangles(output: &mut LessonOutput) {
    let x = [1.0; 4];
    let h = [1.0; 3];
    let y = convolve(&x, &h, ConvMode::Full);

    output.line("Example 1: Convolution of Two Rectangular Pulses");
    output.line(format!("x[n] = {} (length {})", format_values(&x, 0), x.len()));
    output.line(format!("h[n] = {} (length {})", format_values(&h, 0), h.len()));
    output.line(format!(
        "y[n] = x[n] * h[n] = {} (length {})",
        format_values(&y, 0),
        y.len()
    ));
    output.line(format!(
        "Expected output length: {} + {} - 1 = {}",
        x.len(),
        h.len(),
        y.len()
    ));

    output.figure(
        Figure::new("convolution_rectangles", "Convolution of Rectangular Pulses")
            .panel(stem("Input Signal x[n]", "x[n]", &x))
            .panel(stem("Impulse Response h[n]", "h[n]", &h))
            .panel(stem("Output y[n] = x[n] * h[n]", "y[n]", &y)),
    );
}

fn exponential_response(output: &mut LessonOutput) {
    let x = unit_impulse(&indices(5), Onset::Single(0));
    let h = exponential_sequence(&indices(8), ALPHA, 0);
    let y = convolve(&x, &h, ConvMode::Full);

    output.line("Example 2: Convolution with Exponential Decay");
    output.line("x[n] = impulse at n=0");
    output.line(format!("h[n] = exponential decay: {ALPHA}^n"));
    output.line(format!("y[n] = x[n] * h[n] = {}", format_values(&y, 4)));
    output.line("Note: Convolving with impulse returns the impulse response!");

    output.figure(
        Figure::new(
            "convolution_exponential",
            "Convolution with Exponential Impulse Response",
        )
        .panel(stem("Input: Impulse δ[n]", "δ[n]", &x))
        .panel(stem(&format!("Impulse Response h[n] = {ALPHA}^n"), "h[n]", &h))
        .panel(stem("Output y[n] = h[n]", "y[n]", &y)),
    );
}

fn modes(output: &mut LessonOutput) {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let h = [1.0; 3];

    output.line("Example 3: Convolution Modes");
    output.line(format!("x[n] = {}", format_values(&x, 0)));
    output.line(format!("h[n] = {} (moving average filter)", format_values(&h, 0)));

    let mut figure = Figure::new("convolution_modes", "Convolution Modes");
    for mode in [ConvMode::Full, ConvMode::Same, ConvMode::Valid] {
        let y = convolve(&x, &h, mode);
        output.line(format!(
            "mode='{}': {} (length {})",
            mode.name(),
            format_values(&y, 0),
            y.len()
        ));
        figure = figure.panel(stem(&format!("mode = {}", mode.name()), "y[n]", &y));
    }
    output.figure(figure);
}

pub fn compute() -> LessonOutput {
    let mut output = LessonOutput::new(Lesson::Convolution, "Convolution - Basic Examples");
    rectangles(&mut output);
    exponential_response(&mut output);
    modes(&mut output);
    output
}
