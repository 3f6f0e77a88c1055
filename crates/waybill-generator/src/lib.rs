//! Tracking-number generation service.
//!
//! This crate orchestrates the counter store, entropy source, and
//! identifier encoder into the single `generate` operation. Core types
//! are re-exported from `waybill_core`.

pub mod entropy;
pub mod error;
pub mod generator;

pub use entropy::{FixedEntropy, OsEntropy};
pub use error::GenerateError;
pub use generator::{TrackingNumberGenerator, TrackingNumberService, TRACKING_SEQUENCE_KEY};
