//! Plot data handed to the charting layer
//!
//! A `Figure` is a named set of panels; each panel holds one or more series of
//! real `(x, y)` points and a style hint. Complex signals are split into real
//! views (real part, imaginary part, magnitude, phase) before they get here.

use super::lesson::Lesson;
use super::types::SampleIndex;
use serde::{Deserialize, Serialize};

/// How a panel should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotStyle {
    /// Lollipop plot, the usual picture of a discrete-time signal
    Stem,
    /// Connected points, e.g. a path drawn under scatter markers
    Line,
    Scatter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Overrides the panel style for this series only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<PlotStyle>,
}

impl Series {
    /// A real signal over its integer time axis
    pub fn over_axis(label: impl Into<String>, n: &[SampleIndex], values: &[f64]) -> Self {
        Self {
            label: label.into(),
            x: n.iter().map(|&k| k as f64).collect(),
            y: values.to_vec(),
            style: None,
        }
    }

    /// Arbitrary `(x, y)` pairs, e.g. a trajectory in the complex plane
    pub fn xy(label: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            x,
            y,
            style: None,
        }
    }

    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub title: String,
    pub style: PlotStyle,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

impl Panel {
    /// Stem panel with the conventional `n` / `x[n]` axis labels
    pub fn stem(title: impl Into<String>, series: Series) -> Self {
        Self {
            title: title.into(),
            style: PlotStyle::Stem,
            x_label: "n".to_string(),
            y_label: "x[n]".to_string(),
            series: vec![series],
        }
    }

    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// File-safe name, e.g. `basic_signals`
    pub name: String,
    pub title: String,
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            panels: Vec::new(),
        }
    }

    pub fn panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }
}

/// Everything one lesson produces: figures for the charting layer and
/// human-readable lines for the console
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonOutput {
    pub lesson: Lesson,
    pub title: String,
    pub figures: Vec<Figure>,
    pub summary: Vec<String>,
}

impl LessonOutput {
    pub fn new(lesson: Lesson, title: impl Into<String>) -> Self {
        Self {
            lesson,
            title: title.into(),
            figures: Vec::new(),
            summary: Vec::new(),
        }
    }

    pub fn figure(&mut self, figure: Figure) {
        self.figures.push(figure);
    }

    pub fn line(&mut self, text: impl Into<String>) {
        self.summary.push(text.into());
    }
}
