//! Development-time tracing for debugging dirsplit.
//!
//! Diagnostics are controlled via `RUST_LOG` and written to stderr; stdout
//! stays reserved for product output (nothing is printed on success).

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for development logging.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset. Output: stderr, compact
/// format.
///
/// # Example
/// ```bash
/// RUST_LOG=dirsplit=debug dirsplit split
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
