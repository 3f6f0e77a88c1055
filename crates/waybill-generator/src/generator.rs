use crate::error::{GenerateError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};
use waybill_core::encoder;
use waybill_core::{CounterStore, EntropySource, GenerationRequest, TrackingNumber};

/// The single logical counter key shared by all tracking-number
/// generation.
///
/// A global sequence rather than per-customer or per-route: the
/// encoder folds only 4 digits of the value in, so partitioning the
/// key space would buy nothing.
pub const TRACKING_SEQUENCE_KEY: &str = "waybill:tracking:seq";

/// The tracking-number generation operation, behind a trait so the
/// HTTP layer can hold it as a type-erased handle and tests can
/// substitute it.
#[async_trait]
pub trait TrackingNumberService: Send + Sync + 'static {
    /// Generates the next tracking number for one shipment record.
    async fn next_tracking_number(&self, request: &GenerationRequest) -> Result<TrackingNumber>;
}

/// Orchestrates counter store, entropy source, and encoder into one
/// generation operation.
///
/// Performs exactly one counter increment per attempt — never zero,
/// never more — so caller retries are visible as distinct sequence
/// consumption even when the result is discarded. Holds no lock across
/// the increment + encode sequence; each call's sequence value is
/// exclusive to it, so interleaving with concurrent calls is safe.
#[derive(Debug, Clone)]
pub struct TrackingNumberGenerator<C, E> {
    counter: Arc<C>,
    entropy: Arc<E>,
    counter_key: String,
}

impl<C: CounterStore, E: EntropySource> TrackingNumberGenerator<C, E> {
    /// Creates a generator using the default [`TRACKING_SEQUENCE_KEY`].
    pub fn new(counter: C, entropy: E) -> Self {
        Self::with_counter_key(counter, entropy, TRACKING_SEQUENCE_KEY)
    }

    /// Creates a generator with a custom counter key.
    ///
    /// All generator instances sharing a backing store must use the
    /// same key to share one sequence.
    pub fn with_counter_key(counter: C, entropy: E, counter_key: impl Into<String>) -> Self {
        Self {
            counter: Arc::new(counter),
            entropy: Arc::new(entropy),
            counter_key: counter_key.into(),
        }
    }
}

#[async_trait]
impl<C: CounterStore, E: EntropySource> TrackingNumberService for TrackingNumberGenerator<C, E> {
    async fn next_tracking_number(&self, request: &GenerationRequest) -> Result<TrackingNumber> {
        // One increment per attempt. A store failure surfaces before
        // any entropy is drawn or encoding happens.
        let sequence = self.counter.increment(&self.counter_key).await?;
        let token = self.entropy.next_token();

        let number = encoder::encode(
            &request.origin,
            &request.destination,
            sequence,
            token.as_bytes(),
        )
        .map_err(|e| {
            // The encoder's central guarantee is broken; raise loudly.
            error!(error = %e, sequence, "encoder violated its output contract");
            GenerateError::Encoding(e)
        })?;

        debug!(
            tracking_number = %number,
            origin = %request.origin,
            destination = %request.destination,
            sequence,
            "generated tracking number"
        );

        Ok(number)
    }
}
