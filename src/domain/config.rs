//! Run configuration
//!
//! A `DemoConfig` controls where figure files go, how random lesson inputs are
//! seeded, and which lessons run. It can be loaded from a JSON file; any field
//! left out keeps its default.

use super::error::{SignalError, SignalResult};
use super::lesson::Lesson;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for a lesson run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Directory receiving figure JSON files
    pub output_dir: PathBuf,
    /// Seed for random test signals; `None` draws from entropy
    pub seed: Option<u64>,
    /// Render text stem plots on the console
    pub text_plots: bool,
    /// Lessons to run, in order
    pub lessons: Vec<Lesson>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("data"),
            seed: None,
            text_plots: true,
            lessons: Lesson::ALL.to_vec(),
        }
    }
}

/// Command-line values layered over a loaded config. `None`, `false` and an
/// empty lesson list leave the config value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub output_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub no_plots: bool,
    pub lessons: Vec<Lesson>,
}

impl DemoConfig {
    /// Apply command-line overrides on top of this config
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(output_dir) = overrides.output_dir {
            self.output_dir = output_dir;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if overrides.no_plots {
            self.text_plots = false;
        }
        if !overrides.lessons.is_empty() {
            self.lessons = overrides.lessons;
        }
        self
    }

    /// Read a configuration from a JSON file
    pub fn load(path: &Path) -> SignalResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            SignalError::Config(format!("Failed to read config '{}': {e}", path.display()))
        })?;
        let config: DemoConfig = serde_json::from_str(&json).map_err(|e| {
            SignalError::Config(format!("Failed to parse config '{}': {e}", path.display()))
        })?;
        config.validate()?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write this configuration as pretty JSON
    pub fn save(&self, path: &Path) -> SignalResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    fn validate(&self) -> SignalResult<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(SignalError::Config("output_dir cannot be empty".to_string()));
        }
        Ok(())
    }
}
