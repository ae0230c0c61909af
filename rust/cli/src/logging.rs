//! Diagnostic logging setup for the `tongits` binary.
//!
//! Engine and bot crates emit `tracing` events; this installs the subscriber
//! that prints them. Output goes to stderr so it never mixes with the game
//! transcript on stdout.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Filter applied when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize logging for the application.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_logging();
        init_logging();
        tracing::debug!("still running");
    }
}
