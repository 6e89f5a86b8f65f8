//! Logging init: structured diagnostics on stderr.
//!
//! Stdout is reserved for operator messages, and nothing is written to disk
//! besides the downloaded PDF, so there is no log file.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,pdfetch=info,pdfetch_core=info";

/// Initialize logging to stderr. `RUST_LOG` overrides the default filter.
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
