//! CLI interface
//!
//! This module handles argument classification and the top-level error
//! report.

pub mod app;
pub mod report;

// Re-export main types
pub use app::*;
pub use report::*;
