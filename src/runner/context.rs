//! Run context for copying libraries
//!
//! The context carries the verbosity and the program name used to prefix
//! progress lines, plus the writer those lines go to.

use crate::error::{CopyError, Result};
use std::cell::RefCell;
use std::io::{self, Write};
use std::path::Path;

/// Program name used when argv[0] is missing
pub const DEFAULT_PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Normal = 0,
    Verbose = 1,
}

/// State shared by the destination resolver and the library copier
pub struct Context {
    /// File name of the running program, without directories
    pub program_name: String,

    /// Verbosity level
    pub verbosity: Verbosity,

    /// Where progress lines are written
    out: RefCell<Box<dyn Write>>,
}

impl Context {
    /// Create a new context writing to standard output
    pub fn new() -> Self {
        Context {
            program_name: DEFAULT_PROGRAM_NAME.to_string(),
            verbosity: Verbosity::Normal,
            out: RefCell::new(Box::new(io::stdout())),
        }
    }

    /// Set the program name from argv[0], keeping only its file name
    pub fn with_program_name(mut self, argv0: &Path) -> Self {
        if let Some(name) = argv0.file_name() {
            self.program_name = name.to_string_lossy().into_owned();
        }
        self
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Redirect progress lines
    pub fn with_output(mut self, out: Box<dyn Write>) -> Self {
        self.out = RefCell::new(out);
        self
    }

    pub fn is_verbose(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }

    /// Print a progress line (only in verbose mode)
    pub fn print_verbose(&self, message: &str) -> Result<()> {
        if !self.is_verbose() {
            return Ok(());
        }
        let mut out = self.out.borrow_mut();
        writeln!(out, "[{}] {}", self.program_name, message)
            .and_then(|()| out.flush())
            .map_err(CopyError::Io)
    }

    /// Print the resolved destination
    pub fn print_destination(&self, dir: &Path) -> Result<()> {
        self.print_verbose(&format!("Destination: {}", dir.display()))
    }

    /// Print a completed copy
    pub fn print_copied(&self, dll: &Path) -> Result<()> {
        self.print_verbose(&format!("Copied: {}", dll.display()))
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::rc::Rc;

    /// Writer that keeps everything written to it for later inspection
    #[derive(Clone, Default)]
    pub(crate) struct SharedBuf(pub(crate) Rc<RefCell<Vec<u8>>>);

    impl SharedBuf {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_context_new() {
        let ctx = Context::new();
        assert_eq!(ctx.verbosity, Verbosity::Normal);
        assert_eq!(ctx.program_name, "copy-dlls");
        assert!(!ctx.is_verbose());
    }

    #[test]
    fn test_with_program_name_strips_directories() {
        let ctx = Context::new().with_program_name(Path::new("/usr/local/bin/copy-dlls"));
        assert_eq!(ctx.program_name, "copy-dlls");

        let ctx = Context::new().with_program_name(Path::new("tool"));
        assert_eq!(ctx.program_name, "tool");
    }

    #[test]
    fn test_print_verbose_format() {
        let buf = SharedBuf::default();
        let ctx = Context::new()
            .with_program_name(Path::new("bin/tool"))
            .with_verbosity(Verbosity::Verbose)
            .with_output(Box::new(buf.clone()));

        ctx.print_verbose("hello").unwrap();
        ctx.print_copied(Path::new("a/b.dll")).unwrap();

        assert_eq!(buf.contents(), "[tool] hello\n[tool] Copied: a/b.dll\n");
    }

    #[test]
    fn test_quiet_context_prints_nothing() {
        let buf = SharedBuf::default();
        let ctx = Context::new().with_output(Box::new(buf.clone()));

        ctx.print_destination(Path::new("/tmp")).unwrap();
        assert!(buf.contents().is_empty());
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let ctx = Context::new()
            .with_verbosity(Verbosity::Verbose)
            .with_output(Box::new(BrokenPipe));

        let err = ctx.print_verbose("lost").unwrap_err();
        assert_eq!(err.category(), crate::error::Category::Io);
    }

    #[test]
    fn test_verbosity_levels() {
        assert!(Verbosity::Verbose > Verbosity::Normal);
    }
}
