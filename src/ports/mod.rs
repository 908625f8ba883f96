//! Port traits (interfaces)
//!
//! These traits define the boundaries between the lessons and their
//! consumers. Adapters implement them to reach a file system or a console.

pub mod figure;
pub mod report;

pub use figure::*;
pub use report::*;
