//! copy-dlls - copy the DLLs behind a list of import libraries
//!
//! Given a destination directory and a list of `.lib` files, copies the
//! `.dll` that sits next to each one into the destination, leaving files
//! that are already there untouched.

// Public modules
pub mod cli;
pub mod error;
pub mod runner;

// Re-export commonly used types
pub use error::{Category, CopyError, Result};

/// Current version of copy-dlls
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
