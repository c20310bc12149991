//! Top-level error report
//!
//! Every failure of a run ends up here exactly once and is turned into a
//! short categorized message on standard error plus a failing exit code.

use crate::error::{Category, CopyError, Result};
use std::any::Any;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::process;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Marker at the start of every report line
pub const PREFIX_TAG: &str = "!!! ";

/// A failure ready to be shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub category: Category,
    pub detail: Option<String>,
}

impl Report {
    /// Build a report from a panic payload
    ///
    /// A payload carrying a message is an `Exception`; anything else is
    /// `Unexpected` with no detail.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned());

        match message {
            Some(msg) => Report {
                category: Category::Exception,
                detail: Some(msg),
            },
            None => Report {
                category: Category::Unexpected,
                detail: None,
            },
        }
    }

    /// Write the report lines
    pub fn write_to<W: Write>(&self, program_name: &str, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}{}", PREFIX_TAG, program_name)?;
        match &self.detail {
            Some(detail) if !detail.is_empty() => writeln!(
                out,
                "{}{} error: {}",
                PREFIX_TAG,
                self.category.title(),
                detail
            )?,
            _ => writeln!(out, "{}{} error.", PREFIX_TAG, self.category.title())?,
        }
        out.flush()
    }
}

impl From<&CopyError> for Report {
    fn from(err: &CopyError) -> Self {
        Report {
            category: err.category(),
            detail: err.detail(),
        }
    }
}

/// Run `f`, writing a report to `out` if it fails or panics
///
/// Returns the process exit code, or the error hit while writing the report.
pub fn try_guard_with<W, F>(program_name: &str, out: &mut W, f: F) -> io::Result<i32>
where
    W: Write,
    F: FnOnce() -> Result<()>,
{
    let report = match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(())) => return Ok(EXIT_SUCCESS),
        Ok(Err(err)) => Report::from(&err),
        Err(payload) => Report::from_panic(payload.as_ref()),
    };

    report.write_to(program_name, out)?;
    Ok(EXIT_FAILURE)
}

/// Run `f`, writing a report to `out` if it fails or panics
///
/// Returns the process exit code. A report that cannot be written aborts
/// the process.
pub fn guard_with<W, F>(program_name: &str, out: &mut W, f: F) -> i32
where
    W: Write,
    F: FnOnce() -> Result<()>,
{
    match try_guard_with(program_name, out, f) {
        Ok(code) => code,
        Err(_) => process::abort(),
    }
}

/// Run `f`, reporting any failure on standard error
pub fn guard<F>(program_name: &str, f: F) -> i32
where
    F: FnOnce() -> Result<()>,
{
    let stderr = io::stderr();
    let mut out = stderr.lock();
    guard_with(program_name, &mut out, f)
}
