//! Diagnostic tracing for the `seqkit` binary.
//!
//! Library code only emits events; installing a subscriber is left to the
//! binary. Command output goes to stdout, tracing to stderr.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, falling back to [`DEFAULT_FILTER`]. Output is compact
/// and goes to stderr.
///
/// Events seqkit emits:
/// - `info`: `drawing` before a draw run, with `draws` and `seeded`.
/// - `debug`: config load and missing-config fallbacks (`path`, `choices`),
///   zero-total-weight fallbacks in weighted selection, the `draw complete`
///   summary, and `init` leaving an existing config untouched.
/// - `trace`: a closure probed by `throws` panicked.
///
/// # Example
/// ```bash
/// RUST_LOG=seqkit=debug seqkit draw --seed 7
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
