//! Lesson programs
//!
//! Each lesson builds its signals with `dsp` and returns a [`LessonOutput`]:
//! plot data for the charting layer plus summary lines for the console.
//! Lessons are pure; writing figures and printing happens in the sinks.

pub mod complex_exponentials;
pub mod convolution;
pub mod even_odd;
pub mod signal_operations;
pub mod signal_types;
pub mod sinusoids;
pub mod utility_checks;

use crate::domain::{Lesson, LessonOutput};

/// Compute one lesson. `seed` only affects lessons that draw random signals.
pub fn compute(lesson: Lesson, seed: Option<u64>) -> LessonOutput {
    match lesson {
        Lesson::SignalTypes => signal_types::compute(),
        Lesson::Sinusoids => sinusoids::compute(),
        Lesson::ComplexExponentials => complex_exponentials::compute(),
        Lesson::EvenOdd => even_odd::compute(seed),
        Lesson::SignalOperations => signal_operations::compute(),
        Lesson::Convolution => convolution::compute(),
        Lesson::UtilityChecks => utility_checks::compute(),
    }
}

/// Render samples as `[a, b, c]` with a fixed number of decimals
pub(crate) fn format_values(x: &[f64], decimals: usize) -> String {
    let items: Vec<String> = x.iter().map(|v| format!("{v:.decimals$}")).collect();
    format!("[{}]", items.join(", "))
}
