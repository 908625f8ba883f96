//! Adapters: implementations of the port traits
//!
//! - `json_figures` - figure files on disk (serde_json)
//! - `text_console` - summaries and text stem plots on any `io::Write`
//! - `memory_sink` - in-memory capture for tests

pub mod json_figures;
pub mod memory_sink;
pub mod text_console;

pub use json_figures::JsonFigureWriter;
pub use memory_sink::MemorySink;
pub use text_console::TextConsole;
