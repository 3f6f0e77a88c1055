//! Counter store adapters for the Waybill tracking-number service.
//!
//! The Redis adapter is the production backing store for the shared
//! sequence; the in-memory adapter exists for tests and local runs.

pub mod memory;
pub mod redis;

pub use memory::MemoryCounterStore;
pub use redis::RedisCounterStore;
