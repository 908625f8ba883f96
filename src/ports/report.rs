//! Console port

use crate::domain::{LessonOutput, SignalResult};

/// Presents a lesson's summary to a human
pub trait ReportSink {
    /// Called once per lesson, after its figures were published
    fn report(&mut self, output: &LessonOutput) -> SignalResult<()>;
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn report(&mut self, output: &LessonOutput) -> SignalResult<()> {
        (**self).report(output)
    }
}
