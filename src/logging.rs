//! Diagnostic tracing for the `guess` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing subscriber for diagnostic logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format, so it never mixes with the game prompts.
///
/// # Example
/// ```bash
/// RUST_LOG=question_tree=debug guess play
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
