use copy_dlls::cli;
use copy_dlls::runner::DEFAULT_PROGRAM_NAME;
use std::{env, panic, process};

fn main() {
    let program_name = env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string());

    // Panics are reported by the guard, not by the default hook
    panic::set_hook(Box::new(|_| {}));

    process::exit(cli::guard(&program_name, cli::run));
}
