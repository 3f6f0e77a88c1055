//! Core types and traits for the Waybill tracking-number service.
//!
//! This crate provides the pure domain layer: validated identifier
//! types, the identifier encoder, and the capability traits the
//! generator is wired up with.

pub mod counter;
pub mod country;
pub mod encoder;
pub mod entropy;
pub mod error;
pub mod request;
pub mod tracking_number;

pub use counter::CounterStore;
pub use country::CountryCode;
pub use entropy::{EntropySource, EntropyToken};
pub use error::{CoreError, CounterError};
pub use request::GenerationRequest;
pub use tracking_number::TrackingNumber;
