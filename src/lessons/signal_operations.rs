//! Time shift, time reversal, amplitude scaling and addition

use crate::domain::{time_axis, Figure, Lesson, LessonOutput, Panel, Series};
use crate::dsp::{add, rect_pulse, scale, time_reverse, time_shift};

const SHIFT: i64 = 5;
const GAIN: f64 = 2.0;

pub fn compute() -> LessonOutput {
    let n = time_axis(-10, 11);
    let x = rect_pulse(&n, -3, 3);

    let (x_shifted, n_shifted) = time_shift(&x, &n, SHIFT);
    let (x_reversed, n_reversed) = time_reverse(&x, &n);
    let x_scaled = scale(&x, GAIN);

    let x2 = scale(&rect_pulse(&n, 0, 5), 0.5);
    let x_sum = add(&x, &x2);

    let mut output = LessonOutput::new(Lesson::SignalOperations, "Signal Operations Summary");
    output.figure(
        Figure::new("signal_operations", "Discrete-Time Signal Operations")
            .panel(Panel::stem("Original Signal x[n]", Series::over_axis("x[n]", &n, &x)))
            .panel(Panel::stem(
                format!("Time-Shifted x[n-{SHIFT}]"),
                Series::over_axis(format!("x[n-{SHIFT}]"), &n_shifted, &x_shifted),
            ))
            .panel(Panel::stem(
                "Time-Reversed x[-n]",
                Series::over_axis("x[-n]", &n_reversed, &x_reversed),
            ))
            .panel(Panel::stem(
                format!("Amplitude-Scaled {GAIN}·x[n]"),
                Series::over_axis(format!("{GAIN}·x[n]"), &n, &x_scaled),
            ))
            .panel(Panel::stem("Second Signal x2[n]", Series::over_axis("x2[n]", &n, &x2)))
            .panel(
                Panel::stem("Signal Addition x[n] + x2[n]", Series::over_axis("x[n]", &n, &x))
                    .with_series(Series::over_axis("x2[n]", &n, &x2))
                    .with_series(Series::over_axis("x[n] + x2[n]", &n, &x_sum)),
            ),
    );

    output.line("Original signal: rectangular pulse from n=-3 to n=3");
    output.line(format!("Time shift: shifted right by {SHIFT} samples (x[n-{SHIFT}])"));
    output.line("Time reversal: signal flipped around n=0 (x[-n])");
    output.line(format!("Amplitude scaling: multiplied by {GAIN} ({GAIN}·x[n])"));
    output.line("Signal addition: sum of two signals");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_series(output: &LessonOutput, panel: usize) -> (Vec<f64>, Vec<f64>) {
        let s = output.figures[0].panels[panel].series.last().cloned().unwrap();
        (s.x, s.y)
    }

    #[test]
    fn shifted_pulse_occupies_two_to_eight() {
        let output = compute();
        let (x, y) = panel_series(&output, 1);
        let support: Vec<f64> = x
            .iter()
            .zip(&y)
            .filter(|&(_, &v)| v == 1.0)
            .map(|(&k, _)| k)
            .collect();
        assert_eq!(support, vec![2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn symmetric_pulse_is_unchanged_by_reversal() {
        let output = compute();
        let (x0, y0) = panel_series(&output, 0);
        let (x1, y1) = panel_series(&output, 2);
        assert_eq!(x0, x1);
        assert_eq!(y0, y1);
    }

    #[test]
    fn addition_overlaps_on_zero_to_three() {
        let output = compute();
        let (x, y) = panel_series(&output, 5);
        for (&k, &v) in x.iter().zip(&y) {
            let expected = match k as i64 {
                -3..=-1 => 1.0,
                0..=3 => 1.5,
                4..=5 => 0.5,
                _ => 0.0,
            };
            assert_eq!(v, expected, "n = {k}");
        }
    }
}
