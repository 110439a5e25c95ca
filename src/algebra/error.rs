//! Errors raised by the ternary logic engine.

use thiserror::Error;

/// Result alias for engine calls.
pub type Result<T> = std::result::Result<T, AlgebraError>;

/// Everything that can go wrong when talking to the engine.
///
/// The domain is closed, so every variant is a caller mistake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("{operation} is dyadic and needs a second input")]
    ArityMismatch { operation: &'static str },

    #[error("not a trit: {0} (expected -, 0 or +)")]
    InvalidTrit(String),

    #[error("{0} is monadic and has no matrix notation")]
    NotDyadic(&'static str),

    #[error("{0} is dyadic and has no vector notation")]
    NotMonadic(&'static str),
}
