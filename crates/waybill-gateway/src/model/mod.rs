mod tracking;

pub use tracking::{HealthResponse, TrackingNumberParams, TrackingNumberResponse};
