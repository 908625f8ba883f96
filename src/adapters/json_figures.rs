//! Figure files as JSON
//!
//! Each published figure becomes `<output_dir>/<figure name>.json`, a plain
//! serialization of [`Figure`] that any plotting front end can draw.

use crate::domain::{Figure, SignalError, SignalResult};
use crate::ports::FigureSink;
use std::path::{Path, PathBuf};

pub struct JsonFigureWriter {
    output_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl JsonFigureWriter {
    /// The directory is created on first publish, not here
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            written: Vec::new(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Files written so far, in publish order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Read a figure file back
    pub fn load(path: &Path) -> SignalResult<Figure> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// Figure names become file names: reject anything with path separators,
/// "..", or characters outside alphanumerics, '-' and '_'.
fn sanitize_name(name: &str) -> SignalResult<&str> {
    let trimmed = name.trim();
    let invalid = || SignalError::InvalidFigureName(name.to_string());
    if trimmed.is_empty() || trimmed.contains("..") {
        return Err(invalid());
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(invalid());
    }
    Ok(trimmed)
}

impl FigureSink for JsonFigureWriter {
    fn publish(&mut self, figure: &Figure) -> SignalResult<()> {
        let name = sanitize_name(&figure.name)?;
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(format!("{name}.json"));
        let json = serde_json::to_string_pretty(figure)?;
        std::fs::write(&path, json)?;
        log::info!("Figure saved as '{}'", path.display());
        self.written.push(path);
        Ok(())
    }
}
