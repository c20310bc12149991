//! Copy engine
//!
//! This module resolves the destination directory and copies the DLL that
//! belongs to each `.lib` argument into it.

pub mod context;
pub mod copy;
pub mod destination;

// Re-export main types
pub use context::*;
pub use copy::*;
pub use destination::*;
