use thiserror::Error;
use waybill_core::{CoreError, CounterError};

pub type Result<T> = std::result::Result<T, GenerateError>;

/// Errors a generation attempt can surface to the caller.
///
/// Neither variant is retried or masked inside the core; retry policy
/// belongs to the caller.
#[derive(Debug, Clone, Error)]
pub enum GenerateError {
    /// The sequence store could not be incremented. A server-side
    /// condition, surfaced instead of fabricating a fallback sequence.
    #[error("counter unavailable: {0}")]
    CounterUnavailable(#[from] CounterError),
    /// The encoder violated its own output contract. A programming-bug
    /// signal, not a user-facing condition.
    #[error("encoding failed: {0}")]
    Encoding(#[from] CoreError),
}
