//! Core domain types
//!
//! Pure types with no I/O dependencies: sample element types, impulse onsets,
//! lesson identifiers, plot data, run configuration and errors.

pub mod config;
pub mod error;
pub mod figure;
pub mod lesson;
pub mod types;

pub use config::*;
pub use error::*;
pub use figure::*;
pub use lesson::*;
pub use types::*;
