//! HTTP binding for the Waybill tracking-number service.
//!
//! Exposes `GET /next-tracking-number` plus a health probe, validates
//! query parameters, and maps generation errors onto the JSON error
//! envelope.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::ApiError;
pub use state::AppState;
