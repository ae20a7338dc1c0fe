//! Tracing initialization
//!
//! Diagnostics always go to stderr; stdout is reserved for reports.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Environment variable holding a tracing filter, e.g. `termfreq=debug`
pub const LOG_ENV: &str = "TERMFREQ_LOG";

/// Pick the default filter from the verbosity flags
pub fn default_filter(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "termfreq=debug"
    } else {
        "warn"
    }
}

/// Initialize the tracing subscriber
///
/// `TERMFREQ_LOG` wins over the flags when it is set and valid. Calling this
/// more than once is harmless.
pub fn init_tracing(verbose: bool, quiet: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, quiet)));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(verbose)
            .init();
    });
}
