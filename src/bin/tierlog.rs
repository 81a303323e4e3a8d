#![deny(unsafe_code)]

use mimalloc::MiMalloc;

/// High-performance memory allocator for improved allocation throughput.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[path = "cli.rs"]
mod cli;

use std::{env, io, process::ExitCode};

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter for the crates' own diagnostics.
const TRACE_ENV: &str = "TIERLOG_TRACE";

fn main() -> ExitCode {
    install_trace_subscriber();

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    cli::run_with(env::args_os(), &mut stdout, &mut stderr)
}

/// Routes `tracing` output of the tierlog crates to stderr. Off unless
/// `TIERLOG_TRACE` holds a filter such as `tierlog=debug`.
fn install_trace_subscriber() {
    let filter = EnvFilter::try_from_env(TRACE_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
