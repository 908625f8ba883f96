//! Discrete-Time Signal Lessons
//!
//! Signal generators (impulse, step, exponentials, sinusoids), signal
//! operations, rate changes, level conversions and convolution, plus the
//! lesson programs that visualize them.
//!
//! ## Architecture (Hexagonal / Ports & Adapters)
//!
//! - `domain/` - Pure domain types, no I/O dependencies
//! - `dsp/` - Signal processing (pure functions, no I/O)
//! - `lessons/` - Lesson programs producing plot data and summaries
//! - `ports/` - Trait definitions for lesson consumers (figures, console)
//! - `adapters/` - Implementations of ports (JSON figure files, text console)
//! - `runner` - Drives lessons into the sinks

// Core domain (pure, no I/O)
pub mod domain;
pub mod dsp;
pub mod lessons;
pub mod ports;

// Adapters (external I/O)
pub mod adapters;

pub mod runner;

use adapters::{JsonFigureWriter, TextConsole};
use domain::{DemoConfig, SignalResult};
use runner::LessonRunner;

/// Run the configured lessons: figure files under `config.output_dir`,
/// summaries on stdout. Returns the number of lessons run.
pub fn run(config: &DemoConfig) -> SignalResult<usize> {
    log::debug!("Running with {config:?}");
    let figures = JsonFigureWriter::new(&config.output_dir);
    let console = TextConsole::new(std::io::stdout().lock(), config.text_plots);
    let mut runner = LessonRunner::new(figures, console, config.seed);
    let count = runner.run_all(&config.lessons)?;

    let (figures, _) = runner.into_sinks();
    log::info!(
        "{count} lesson(s) done, {} figure(s) in {}",
        figures.written().len(),
        figures.output_dir().display()
    );
    Ok(count)
}
