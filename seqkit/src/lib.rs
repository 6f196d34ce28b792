//! Higher-order combinators over sequences, pairs and type hierarchies.
//!
//! - **[`core`]**: Pure combinators (folding, pair transforms, partial
//!   application, hierarchy walks, weighted selection). No I/O.
//! - **[`io`]**: Sampler configuration on disk.
//!
//! [`sampling`] composes the two to implement `seqkit draw` and `seqkit check`.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod sampling;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::SeqError;
