//! Destination directory resolution

use crate::error::{CopyError, Result};
use crate::runner::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the destination to a canonical directory path
///
/// Runs before any library is touched, so a bad destination aborts the
/// run without side effects.
pub fn resolve_destination(raw: &Path, ctx: &Context) -> Result<PathBuf> {
    let dir = fs::canonicalize(raw).map_err(|e| {
        CopyError::file_system(format!("Failed to resolve '{}'", raw.display()), e)
    })?;

    if !dir.is_dir() {
        return Err(CopyError::NotADirectory(dir));
    }

    ctx.print_destination(&dir)?;
    Ok(dir)
}
