//! Integration tests: lesson → sinks pipeline
//!
//! Runs lessons through the real adapters without a terminal:
//!
//! - `JsonFigureWriter` into a temporary directory, files parsed back
//! - `TextConsole` into a `Vec<u8>` instead of stdout
//!
//! Run with: cargo test --test lesson_pipeline

use std::path::Path;

use dtsignals_lib::adapters::{JsonFigureWriter, MemorySink, TextConsole};
use dtsignals_lib::domain::{DemoConfig, Lesson, PlotStyle};
use dtsignals_lib::runner::LessonRunner;

fn run_to_dir(dir: &Path, lessons: &[Lesson], seed: u64) -> String {
    let figures = JsonFigureWriter::new(dir);
    let console = TextConsole::new(Vec::new(), true);
    let mut runner = LessonRunner::new(figures, console, Some(seed));
    runner.run_all(lessons).unwrap();
    let (_, console) = runner.into_sinks();
    String::from_utf8(console.into_inner()).unwrap()
}

#[test]
fn test_every_lesson_writes_readable_figures() {
    let dir = tempfile::tempdir().unwrap();
    run_to_dir(dir.path(), &Lesson::ALL, 1);

    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.file_stem()?.to_str().map(String::from)
        })
        .collect();
    names.sort();

    for expected in [
        "basic_signals",
        "complex_exponential",
        "convolution_exponential",
        "convolution_modes",
        "convolution_rectangles",
        "even_odd_parts",
        "non_periodic_sinusoid",
        "periodic_sinusoid",
        "signal_operations",
        "utility_checks",
    ] {
        assert!(names.iter().any(|n| n == expected), "missing {expected}: {names:?}");
    }

    for name in &names {
        let figure = JsonFigureWriter::load(&dir.path().join(format!("{name}.json"))).unwrap();
        assert_eq!(&figure.name, name);
        for panel in &figure.panels {
            for series in &panel.series {
                assert_eq!(series.x.len(), series.y.len(), "{name}/{}", panel.title);
            }
        }
    }
}

#[test]
fn test_console_shows_convolution_summary() {
    let dir = tempfile::tempdir().unwrap();
    let text = run_to_dir(dir.path(), &[Lesson::Convolution], 1);

    assert!(text.contains("Example 1: Convolution of Two Rectangular Pulses"));
    assert!(text.contains("y[n] = x[n] * h[n] = [1, 2, 3, 3, 2, 1] (length 6)"));
    assert!(text.contains("mode='valid': [6, 9, 12] (length 3)"));
}

#[test]
fn test_seeded_even_odd_is_reproducible_across_runs() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let a = run_to_dir(first.path(), &[Lesson::EvenOdd], 2024);
    let b = run_to_dir(second.path(), &[Lesson::EvenOdd], 2024);
    assert_eq!(a, b);

    let fa = JsonFigureWriter::load(&first.path().join("even_odd_parts.json")).unwrap();
    let fb = JsonFigureWriter::load(&second.path().join("even_odd_parts.json")).unwrap();
    assert_eq!(fa, fb);
}

#[test]
fn test_complex_plane_panel_is_scatter() {
    let mut runner = LessonRunner::new(MemorySink::new(), MemorySink::new(), None);
    runner.run(Lesson::ComplexExponentials).unwrap();
    let (figures, _) = runner.into_sinks();

    let styles: Vec<PlotStyle> = figures.figures[0].panels.iter().map(|p| p.style).collect();
    assert_eq!(styles.last(), Some(&PlotStyle::Scatter));
    assert_eq!(styles.iter().filter(|&&s| s == PlotStyle::Stem).count(), 4);

    let plane = figures.figures[0].panels.last().unwrap();
    assert!(plane.series.iter().any(|s| s.style == Some(PlotStyle::Line)));
}

#[test]
fn test_config_file_drives_lesson_selection() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("run.json");
    std::fs::write(
        &config_path,
        r#"{"output_dir": "figures", "seed": 3, "text_plots": false, "lessons": ["sinusoids"]}"#,
    )
    .unwrap();

    let config = DemoConfig::load(&config_path).unwrap();
    assert_eq!(config.lessons, vec![Lesson::Sinusoids]);

    let out = dir.path().join(&config.output_dir);
    let mut runner = LessonRunner::new(
        JsonFigureWriter::new(&out),
        TextConsole::new(Vec::new(), config.text_plots),
        config.seed,
    );
    assert_eq!(runner.run_all(&config.lessons).unwrap(), 1);

    let (figures, console) = runner.into_sinks();
    assert_eq!(figures.written().len(), 2);
    let text = String::from_utf8(console.into_inner()).unwrap();
    assert!(text.contains("cos(4π/5 n): period = 5 samples"));
    assert!(!text.contains("[periodic_sinusoid]"));
}
