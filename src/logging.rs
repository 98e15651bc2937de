//! Diagnostic logging setup for the binary.
//!
//! Logs go to stderr so they never mix with passwords on stdout. The level
//! comes from `PASSFORGE_LOG` (an `EnvFilter` directive), defaulting to
//! `warn`, or `debug` when verbose output is requested.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PASSFORGE_LOG";

fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
