//! Error types for copy-dlls

use std::collections::TryReserveError;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for copy-dlls operations
pub type Result<T> = std::result::Result<T, CopyError>;

/// Main error type for copy-dlls
///
/// Every variant is terminal for the run; the top-level reporter turns it
/// into a categorized message on standard error.
#[derive(Error, Debug)]
pub enum CopyError {
    /// Argument storage could not be allocated
    #[error("Out of memory")]
    OutOfMemory(#[from] TryReserveError),

    /// A path could not be resolved or a file could not be copied
    #[error("{context}: {source}")]
    FileSystem {
        context: String,
        #[source]
        source: io::Error,
    },

    /// Writing progress output failed
    #[error("{0}")]
    Io(#[source] io::Error),

    /// A library argument is not a `.lib` path
    #[error("Bad lib file: {}", .0.display())]
    BadLibFile(PathBuf),

    /// The destination resolved to something other than a directory
    #[error("No such directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The `.dll` next to a `.lib` argument is missing
    #[error("No such DLL: {}", .0.display())]
    MissingDll(PathBuf),
}

/// Report category, in the order the reporter checks them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    OutOfMemory,
    FileSystem,
    Io,
    InvalidArgument,
    Runtime,
    Exception,
    Unexpected,
}

impl Category {
    /// Title printed in front of " error"
    pub fn title(self) -> &'static str {
        match self {
            Category::OutOfMemory => "Out of memory",
            Category::FileSystem => "File system",
            Category::Io => "I/O",
            Category::InvalidArgument => "Invalid argument",
            Category::Runtime => "Runtime",
            Category::Exception => "Exception",
            Category::Unexpected => "Unexpected",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl CopyError {
    /// Build a file system error with a short description of the failed operation
    pub fn file_system(context: impl Into<String>, source: io::Error) -> Self {
        CopyError::FileSystem {
            context: context.into(),
            source,
        }
    }

    /// Category this error is reported under
    pub fn category(&self) -> Category {
        match self {
            CopyError::OutOfMemory(_) => Category::OutOfMemory,
            CopyError::FileSystem { .. } => Category::FileSystem,
            CopyError::Io(_) => Category::Io,
            CopyError::BadLibFile(_) => Category::InvalidArgument,
            CopyError::NotADirectory(_) | CopyError::MissingDll(_) => Category::Runtime,
        }
    }

    /// Detail line for the report, `None` when the category says it all
    pub fn detail(&self) -> Option<String> {
        match self {
            CopyError::OutOfMemory(_) => None,
            other => Some(other.to_string()),
        }
    }
}
