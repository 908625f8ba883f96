//! Console output: lesson summaries and text stem plots

use crate::domain::{LessonOutput, PlotStyle, Series, SignalResult};
use crate::ports::ReportSink;
use std::io::Write;

const RULE_WIDTH: usize = 60;
const PLOT_HEIGHT: usize = 9;

/// Writes lesson reports to any writer (stdout in the binary)
pub struct TextConsole<W: Write> {
    out: W,
    text_plots: bool,
}

impl<W: Write> TextConsole<W> {
    pub fn new(out: W, text_plots: bool) -> Self {
        Self { out, text_plots }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Draw one series as a stem plot, one column per sample, top row first.
///
/// `o` marks a sample, `|` its stem, `-` the zero line.
pub fn render_stem(series: &Series, height: usize) -> Vec<String> {
    if series.is_empty() || height < 2 {
        return Vec::new();
    }

    let lo = series.y.iter().copied().fold(0.0, f64::min);
    let mut hi = series.y.iter().copied().fold(0.0, f64::max);
    if hi == lo {
        hi = lo + 1.0;
    }
    let row = |v: f64| ((v - lo) / (hi - lo) * (height - 1) as f64).round() as usize;
    let zero = row(0.0);
    let rows: Vec<usize> = series.y.iter().map(|&v| row(v)).collect();

    (0..height)
        .rev()
        .map(|line| {
            rows.iter()
                .map(|&r| {
                    if r == line {
                        'o'
                    } else if (r > zero && line > zero && line < r)
                        || (r < zero && line < zero && line > r)
                    {
                        '|'
                    } else if line == zero {
                        '-'
                    } else {
                        ' '
                    }
                })
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

impl<W: Write> ReportSink for TextConsole<W> {
    fn report(&mut self, output: &LessonOutput) -> SignalResult<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out)?;
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "{}", output.title)?;
        writeln!(self.out, "{rule}")?;
        for line in &output.summary {
            writeln!(self.out, "{line}")?;
        }

        if self.text_plots {
            for figure in &output.figures {
                for panel in figure.panels.iter().filter(|p| p.style == PlotStyle::Stem) {
                    // overlaid series do not fit in text; draw the last (the result)
                    let Some(series) = panel.series.last() else {
                        continue;
                    };
                    writeln!(self.out)?;
                    writeln!(self.out, "{} [{}]", panel.title, figure.name)?;
                    for line in render_stem(series, PLOT_HEIGHT) {
                        writeln!(self.out, "  {line}")?;
                    }
                    if let (Some(first), Some(last)) = (series.x.first(), series.x.last()) {
                        writeln!(self.out, "  {} = {first} .. {last}", panel.x_label)?;
                    }
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
