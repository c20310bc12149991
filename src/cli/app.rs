//! Main CLI application

use crate::error::Result;
use crate::runner::{resolve_destination, Context, LibraryCopier, Verbosity};
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::Path;

/// The only flag with a meaning
pub const VERBOSE_FLAG: &str = "-v";

/// Command line split into positional arguments and flags
///
/// The program name is not part of it. Order is kept within each group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    positionals: Vec<OsString>,
    flags: Vec<OsString>,
}

impl Invocation {
    /// Classify an argument list that no longer holds argv[0]
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut invocation = Invocation::default();

        for arg in args {
            let arg = arg.into();
            let group = if is_flag(&arg) {
                &mut invocation.flags
            } else {
                &mut invocation.positionals
            };
            group.try_reserve(1)?;
            group.push(arg);
        }

        Ok(invocation)
    }

    pub fn positionals(&self) -> &[OsString] {
        &self.positionals
    }

    pub fn flags(&self) -> &[OsString] {
        &self.flags
    }

    pub fn is_empty(&self) -> bool {
        self.positionals.is_empty() && self.flags.is_empty()
    }

    /// Whether `name` was passed exactly as written
    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.iter().any(|f| f.as_os_str() == OsStr::new(name))
    }

    pub fn verbosity(&self) -> Verbosity {
        if self.has_flag(VERBOSE_FLAG) {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    /// First positional argument
    pub fn destination(&self) -> Option<&Path> {
        self.positionals.first().map(Path::new)
    }

    /// Every positional argument after the destination
    pub fn libraries(&self) -> impl Iterator<Item = &Path> {
        self.positionals.iter().skip(1).map(Path::new)
    }
}

/// A flag is anything starting with a dash; the empty string is positional
fn is_flag(arg: &OsStr) -> bool {
    arg.as_encoded_bytes().first() == Some(&b'-')
}

/// Resolve the destination and copy every library into it
///
/// Without a positional argument there is nothing to do.
pub fn execute(invocation: &Invocation, ctx: &Context) -> Result<()> {
    let Some(raw) = invocation.destination() else {
        return Ok(());
    };

    let destination = resolve_destination(raw, ctx)?;
    LibraryCopier::new(destination, ctx).copy_all(invocation.libraries())?;

    Ok(())
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<()> {
    let mut args = env::args_os();
    let argv0 = args.next();
    let invocation = Invocation::from_args(args)?;

    if invocation.is_empty() {
        return Ok(());
    }

    let mut ctx = Context::new().with_verbosity(invocation.verbosity());
    if let Some(argv0) = &argv0 {
        ctx = ctx.with_program_name(Path::new(argv0));
    }

    execute(&invocation, &ctx)
}
