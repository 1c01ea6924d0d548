//! Error taxonomy for the association engine
//!
//! The only fallible operation in the core is the PMI ranking; everything
//! else (skipped similarity pairs, zero-baseline candidates) is a silent
//! policy, not an error.

use thiserror::Error;

/// Errors reported by the ranking operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    /// The aggregate counts backing the query are zero or degenerate, so
    /// no meaningful probability ratio can be formed. Non-fatal: the
    /// caller decides whether to report it.
    #[error("insufficient data to rank '{relation}' collocations of '{head}'")]
    InsufficientData {
        /// The queried dependency relation
        relation: String,
        /// The queried head word
        head: String,
    },

    /// The bias constant was outside `[0, 1)`. Values at or above 1 can
    /// drive the discounted joint count non-positive for every candidate,
    /// which the engine rejects up front instead of clamping.
    #[error("bias constant {0} is outside [0, 1)")]
    BiasOutOfRange(f64),
}
