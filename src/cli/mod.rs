mod args;
mod commands;
mod util;

pub use args::Cli;

use tracing_subscriber::EnvFilter;

/// Logs go to stderr so command output stays pipeable.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "ragconf=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
