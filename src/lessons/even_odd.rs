//! Even/odd decomposition of a random signal
//!
//! Any signal on a symmetric axis splits into an even part ½(x[n] + x[-n])
//! and an odd part ½(x[n] - x[-n]) that add back to the original.

use super::format_values;
use crate::domain::{time_axis, Figure, Lesson, LessonOutput, Panel, Series};
use crate::dsp::{add, even_odd, time_reverse};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const HALF_WIDTH: i64 = 4;

/// Nine samples uniform in [-0.5, 0.5)
pub fn random_signal(rng: &mut impl Rng) -> Vec<f64> {
    (-HALF_WIDTH..=HALF_WIDTH)
        .map(|_| rng.gen::<f64>() - 0.5)
        .collect()
}

pub fn compute(seed: Option<u64>) -> LessonOutput {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let n = time_axis(-HALF_WIDTH, HALF_WIDTH + 1);
    let x = random_signal(&mut rng);

    let (flipped, _) = time_reverse(&x, &n);
    let (even, odd) = even_odd(&x);
    let sum = add(&even, &odd);

    let max_error = sum
        .iter()
        .zip(&x)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);
    let even_symmetric = even.iter().zip(even.iter().rev()).all(|(a, b)| a == b);
    let odd_antisymmetric = odd.iter().zip(odd.iter().rev()).all(|(a, b)| *a == -*b);

    let mut output = LessonOutput::new(Lesson::EvenOdd, "Even and Odd Parts");
    output.figure(
        Figure::new("even_odd_parts", "Even/Odd Decomposition of a Random Signal")
            .panel(Panel::stem("x[n]", Series::over_axis("x[n]", &n, &x)))
            .panel(Panel::stem("x[-n]", Series::over_axis("x[-n]", &n, &flipped)))
            .panel(Panel::stem("Even part", Series::over_axis("xe[n]", &n, &even)))
            .panel(Panel::stem("Odd part", Series::over_axis("xo[n]", &n, &odd)))
            .panel(Panel::stem(
                "Even + Odd = x[n]",
                Series::over_axis("xe[n] + xo[n]", &n, &sum),
            )),
    );

    match seed {
        Some(seed) => output.line(format!("Random signal (seed {seed}):")),
        None => output.line("Random signal (unseeded):"),
    }
    output.line(format!("  x[n]  = {}", format_values(&x, 4)));
    output.line(format!("  xe[n] = {}", format_values(&even, 4)));
    output.line(format!("  xo[n] = {}", format_values(&odd, 4)));
    output.line(format!("Even part symmetric: {even_symmetric}"));
    output.line(format!("Odd part antisymmetric: {odd_antisymmetric}"));
    output.line(format!("Max |xe[n] + xo[n] - x[n]| = {max_error:.2e}"));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_signal_is_centered_on_zero() {
        let mut rng = StdRng::seed_from_u64(9);
        let x = random_signal(&mut rng);
        assert_eq!(x.len(), 9);
        assert!(x.iter().all(|&v| (-0.5..0.5).contains(&v)));
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        assert_eq!(compute(Some(3)), compute(Some(3)));
    }

    #[test]
    fn reconstruction_and_symmetry_hold() {
        let output = compute(Some(11));
        assert!(output.summary.contains(&"Even part symmetric: true".to_string()));
        assert!(output
            .summary
            .contains(&"Odd part antisymmetric: true".to_string()));

        let panels = &output.figures[0].panels;
        let x = &panels[0].series[0].y;
        let sum = &panels[4].series[0].y;
        for (a, b) in sum.iter().zip(x) {
            assert!((a - b).abs() < 1e-15);
        }
    }
}
