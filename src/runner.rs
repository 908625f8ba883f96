//! Drives lessons into the figure and report sinks

use crate::domain::{Lesson, LessonOutput, SignalResult};
use crate::lessons;
use crate::ports::{FigureSink, ReportSink};

pub struct LessonRunner<F: FigureSink, R: ReportSink> {
    figures: F,
    reports: R,
    seed: Option<u64>,
}

impl<F: FigureSink, R: ReportSink> LessonRunner<F, R> {
    pub fn new(figures: F, reports: R, seed: Option<u64>) -> Self {
        Self {
            figures,
            reports,
            seed,
        }
    }

    /// Compute one lesson, publish its figures, then report its summary
    pub fn run(&mut self, lesson: Lesson) -> SignalResult<LessonOutput> {
        log::info!("Running lesson {lesson}");
        let output = lessons::compute(lesson, self.seed);
        for figure in &output.figures {
            log::debug!("{lesson}: publishing figure {}", figure.name);
            self.figures.publish(figure)?;
        }
        self.reports.report(&output)?;
        Ok(output)
    }

    /// Run lessons in order, stopping at the first sink error
    pub fn run_all(&mut self, lessons: &[Lesson]) -> SignalResult<usize> {
        if lessons.is_empty() {
            log::warn!("No lessons selected");
        }
        for &lesson in lessons {
            self.run(lesson)?;
        }
        Ok(lessons.len())
    }

    pub fn into_sinks(self) -> (F, R) {
        (self.figures, self.reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemorySink;
    use crate::domain::{Figure, SignalError};

    struct FailingSink;

    impl FigureSink for FailingSink {
        fn publish(&mut self, figure: &Figure) -> SignalResult<()> {
            Err(SignalError::InvalidFigureName(figure.name.clone()))
        }
    }

    #[test]
    fn figures_are_published_before_report() {
        let mut figures = MemorySink::new();
        let mut reports = MemorySink::new();
        let mut runner = LessonRunner::new(&mut figures, &mut reports, Some(5));

        let output = runner.run(Lesson::Convolution).unwrap();

        assert_eq!(
            figures.figure_names(),
            vec![
                "convolution_rectangles",
                "convolution_exponential",
                "convolution_modes"
            ]
        );
        assert_eq!(reports.reports, vec![output]);
    }

    #[test]
    fn run_all_keeps_order() {
        let mut runner = LessonRunner::new(MemorySink::new(), MemorySink::new(), Some(5));
        let count = runner
            .run_all(&[Lesson::EvenOdd, Lesson::SignalTypes])
            .unwrap();
        let (_, reports) = runner.into_sinks();

        assert_eq!(count, 2);
        let order: Vec<Lesson> = reports.reports.iter().map(|r| r.lesson).collect();
        assert_eq!(order, vec![Lesson::EvenOdd, Lesson::SignalTypes]);
    }

    #[test]
    fn sink_error_stops_the_run_before_reporting() {
        let mut reports = MemorySink::new();
        let mut runner = LessonRunner::new(FailingSink, &mut reports, None);

        assert!(runner.run_all(&Lesson::ALL).is_err());
        drop(runner);
        assert!(reports.reports.is_empty());
    }
}
