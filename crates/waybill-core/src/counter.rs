use crate::error::CounterError;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, CounterError>;

/// An atomic-increment counter shared by all generator instances.
///
/// The backing store owns the sequence: values are strictly increasing
/// per key, never reused, and durable across generator restarts. The
/// generator only ever increments; it never reads or decrements.
///
/// Implementations must be safe under concurrent use from many tasks
/// and processes without external locking, and must bound each
/// operation with a timeout rather than hang on an unreachable store.
#[async_trait]
pub trait CounterStore: Send + Sync + 'static {
    /// Atomically increments the counter for `key` and returns the new
    /// value.
    ///
    /// No two calls for the same key ever observe the same value. An
    /// unreachable or timed-out store yields an error; implementations
    /// must never fabricate a fallback value.
    async fn increment(&self, key: &str) -> Result<u64>;
}
