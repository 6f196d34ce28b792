//! Error type for the pure combinators in [`crate::core`].

use thiserror::Error;

/// Result alias for core combinators.
pub type Result<T> = std::result::Result<T, SeqError>;

/// Failures raised by sequence and selection combinators.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SeqError {
    /// The sequence had no element to take.
    #[error("sequence exhausted: no element to take")]
    Exhausted,

    /// Weighted selection was driven by a selector outside `[0, 1)`.
    #[error("selector {0} is outside [0, 1)")]
    SelectorOutOfRange(f64),

    /// The cumulative walk never passed the target point.
    ///
    /// Only reachable through floating point edge cases (overflowing or
    /// non-finite weights). Treat it as a bug, not as a recoverable state.
    #[error("internal error: weighted selection overran (target {target}, total {total})")]
    SelectionOverrun { target: f64, total: f64 },
}
