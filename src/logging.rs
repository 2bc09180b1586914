//! Diagnostic logging on stderr.
//!
//! User-facing messages stay on stdout; this only carries tracing output.

use tracing::trace;
use tracing_subscriber::EnvFilter;

/// Map `-v` count to a default filter directive.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing. `RUST_LOG`, when set, wins over the verbosity flag.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();

    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
