//! Library copying
//!
//! Each `.lib` argument names an import library; the DLL next to it is what
//! gets copied into the destination directory.

use crate::error::{CopyError, Result};
use crate::runner::Context;
use std::ffi::OsStr;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

const LIB_EXTENSION: &str = "lib";
const DLL_EXTENSION: &str = "dll";

/// What happened to a single DLL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The DLL was written to this path
    Copied(PathBuf),
    /// A file with this path already existed and was left alone
    Skipped(PathBuf),
}

impl CopyOutcome {
    pub fn target(&self) -> &Path {
        match self {
            CopyOutcome::Copied(p) | CopyOutcome::Skipped(p) => p,
        }
    }
}

/// Map `foo/bar.lib` to `foo/bar.dll`
///
/// The extension comparison is case-sensitive.
pub fn dll_for_lib(lib: &Path) -> Result<PathBuf> {
    if lib.extension() != Some(OsStr::new(LIB_EXTENSION)) {
        return Err(CopyError::BadLibFile(lib.to_path_buf()));
    }
    Ok(lib.with_extension(DLL_EXTENSION))
}

/// Copy `src` into `dst_dir` under the same file name, unless that name is taken
pub fn copy_skip_existing(src: &Path, dst_dir: &Path) -> Result<CopyOutcome> {
    let name = src.file_name().ok_or_else(|| {
        CopyError::file_system(
            format!("Failed to copy '{}'", src.display()),
            io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;
    let target = dst_dir.join(name);

    let copy_err = |e: io::Error| {
        CopyError::file_system(
            format!(
                "Failed to copy '{}' to '{}'",
                src.display(),
                target.display()
            ),
            e,
        )
    };

    // create_new makes the existence check and the creation one step, and
    // an existing target is skipped without touching the source
    let mut writer = match OpenOptions::new().write(true).create_new(true).open(&target) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Ok(CopyOutcome::Skipped(target.clone()));
        }
        Err(e) => return Err(copy_err(e)),
    };

    let written = File::open(src).and_then(|mut reader| {
        io::copy(&mut reader, &mut writer)?;
        let meta = reader.metadata()?;
        writer.set_permissions(meta.permissions())
    });

    if let Err(e) = written {
        drop(writer);
        // Cleanup is best effort; the copy error is what gets reported
        if let Err(cleanup) = fs::remove_file(&target) {
            return Err(CopyError::file_system(
                format!(
                    "Failed to copy '{}' to '{}' ({}), and failed to remove the partial target",
                    src.display(),
                    target.display(),
                    e
                ),
                cleanup,
            ));
        }
        return Err(copy_err(e));
    }

    Ok(CopyOutcome::Copied(target))
}

/// Copies the DLLs for a list of `.lib` paths into one directory
pub struct LibraryCopier<'a> {
    destination: PathBuf,
    ctx: &'a Context,
}

impl<'a> LibraryCopier<'a> {
    /// `destination` must already be resolved
    pub fn new(destination: PathBuf, ctx: &'a Context) -> Self {
        LibraryCopier { destination, ctx }
    }

    /// Copy the DLL that belongs to one `.lib` path
    pub fn copy_one(&self, lib: &Path) -> Result<CopyOutcome> {
        let dll = dll_for_lib(lib)?;
        if !dll.exists() {
            return Err(CopyError::MissingDll(dll));
        }

        // A skipped copy is logged the same way; the DLL is in place either way
        let outcome = copy_skip_existing(&dll, &self.destination)?;
        self.ctx.print_copied(&dll)?;
        Ok(outcome)
    }

    /// Copy every library in order, stopping at the first failure
    pub fn copy_all<I, P>(&self, libs: I) -> Result<Vec<CopyOutcome>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        libs.into_iter()
            .map(|lib| self.copy_one(lib.as_ref()))
            .collect()
    }
}
