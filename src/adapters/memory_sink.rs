//! In-memory sink for tests and embedding.
//!
//! Implements both ports; use one instance per port.

use crate::domain::{Figure, LessonOutput, SignalResult};
use crate::ports::{FigureSink, ReportSink};

#[derive(Debug, Default)]
pub struct MemorySink {
    pub figures: Vec<Figure>,
    pub reports: Vec<LessonOutput>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of all published figures, in order
    pub fn figure_names(&self) -> Vec<&str> {
        self.figures.iter().map(|f| f.name.as_str()).collect()
    }
}

impl FigureSink for MemorySink {
    fn publish(&mut self, figure: &Figure) -> SignalResult<()> {
        log::debug!("[MEMORY SINK] figure {}", figure.name);
        self.figures.push(figure.clone());
        Ok(())
    }
}

impl ReportSink for MemorySink {
    fn report(&mut self, output: &LessonOutput) -> SignalResult<()> {
        log::debug!("[MEMORY SINK] report {}", output.lesson);
        self.reports.push(output.clone());
        Ok(())
    }
}
