use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use waybill_core::counter::Result;
use waybill_core::CounterStore;

/// In-memory implementation of [`CounterStore`] using DashMap.
///
/// Suitable for tests and single-process local runs only: the sequence
/// is neither durable nor shared across processes, which the
/// production contract requires. DashMap's sharded locks make the
/// per-key increment atomic with respect to all in-process callers.
///
/// Clones share the same counters, matching the handle semantics of
/// the Redis adapter.
#[derive(Debug, Clone, Default)]
pub struct MemoryCounterStore {
    counters: Arc<DashMap<String, u64>>,
}

impl MemoryCounterStore {
    /// Creates a new in-memory counter store with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CounterStore for MemoryCounterStore {
    async fn increment(&self, key: &str) -> Result<u64> {
        let mut entry = self.counters.entry(key.to_owned()).or_insert(0);
        *entry += 1;
        Ok(*entry)
    }
}
