//! Charting layer port

use crate::domain::{Figure, SignalResult};

/// Receives plot data, e.g. to render it or store it as a figure file
pub trait FigureSink {
    /// Publish one finished figure
    fn publish(&mut self, figure: &Figure) -> SignalResult<()>;
}

impl<S: FigureSink + ?Sized> FigureSink for &mut S {
    fn publish(&mut self, figure: &Figure) -> SignalResult<()> {
        (**self).publish(figure)
    }
}
