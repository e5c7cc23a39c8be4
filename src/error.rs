//! Error types.
//!
//! Every variant is a precondition violation detected at the entry of a
//! public operation. The computation is deterministic, so nothing here is
//! retryable.

use thiserror::Error;

/// Errors raised by the solver, the generator, and the table driver.
#[derive(Debug, Error)]
pub enum HarmonicError {
    /// `k` must be at least 1.
    #[error("k should be >= 1, got {k}")]
    InvalidK {
        /// The rejected value.
        k: i64,
    },

    /// A defined query value was negative.
    #[error("mu should be >= 0, got {mu}")]
    NegativeMu {
        /// The rejected value, rendered exactly.
        mu: String,
    },

    /// The generator was entered at a depth outside `[1, k]`.
    #[error("depth i={i} is outside [1, {k}]")]
    DepthOutOfRange {
        /// The rejected depth.
        i: usize,
        /// Problem size.
        k: usize,
    },

    /// The generator was entered with an accumulator outside `[0, 1)`.
    #[error("accumulator s={s} is outside [0, 1)")]
    AccumulatorOutOfRange {
        /// The rejected value, rendered exactly.
        s: String,
    },

    /// `k` exceeds the configured search limit.
    #[error("k={k} exceeds the search limit max_k={max_k}")]
    KTooLarge {
        /// The rejected value.
        k: usize,
        /// The configured limit.
        max_k: usize,
    },

    /// A solution vector passed to the score function has the wrong length.
    #[error("solution length {actual} != k-1 = {expected}")]
    LengthMismatch {
        /// `k - 1`.
        expected: usize,
        /// Length actually received.
        actual: usize,
    },

    /// Input that is not an integer, fraction, or decimal literal.
    #[error("cannot parse {input:?} as a rational number")]
    ParseRational { input: String },

    /// Unknown mu label for the table driver.
    #[error("unknown mu label {label:?} (expected one, lee, capr, or eku)")]
    UnknownLabel { label: String },

    /// Solver configuration rejected by `validate`.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Writer failure while rendering output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HarmonicError>;
