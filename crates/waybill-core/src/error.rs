use thiserror::Error;

/// Errors related to the core encoding logic of the tracking-number service.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("invalid country code: {0}")]
    InvalidCountryCode(String),
    #[error("invalid tracking number: {0}")]
    InvalidTrackingNumber(String),
    #[error("entropy token too short: need {needed} bytes, got {got}")]
    InsufficientEntropy { needed: usize, got: usize },
    /// The encoder produced output violating the alphabet/length contract.
    ///
    /// This signals a logic defect in the encoder itself, not bad input.
    #[error("encoding invariant violated: {0}")]
    EncodingInvariant(String),
}

#[derive(Debug, Clone, Error)]
pub enum CounterError {
    #[error("counter store unavailable: {0}")]
    Unavailable(String),
    #[error("counter operation timed out: {0}")]
    Timeout(String),
    #[error("counter store initialization failed: {0}")]
    Initialization(String),
    #[error("counter operation failed: {0}")]
    Operation(String),
}
