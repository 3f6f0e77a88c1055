use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use jiff::Timestamp;
use serde::Serialize;
use waybill_generator::GenerateError;

pub type Result<T> = std::result::Result<T, ApiError>;

/// JSON envelope returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}

/// Gateway-level error type mapping onto HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// A request parameter is missing or malformed (400).
    BadRequest(String),
    /// The sequence store could not be reached (503).
    CounterUnavailable(String),
    /// The encoder broke its own output contract (500). The message is
    /// logged but never leaked to the client.
    Internal(String),
}

impl ApiError {
    fn status_and_reason(&self) -> (StatusCode, &'static str) {
        match self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "Bad Request"),
            Self::CounterUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        }
    }
}

impl From<GenerateError> for ApiError {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::CounterUnavailable(e) => Self::CounterUnavailable(e.to_string()),
            GenerateError::Encoding(e) => Self::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, reason) = self.status_and_reason();

        let message = match &self {
            Self::BadRequest(message) => message.clone(),
            Self::CounterUnavailable(_) => "Tracking number sequence is unavailable.".to_string(),
            Self::Internal(_) => "An internal error occurred.".to_string(),
        };

        match &self {
            Self::Internal(detail) => tracing::error!(error = %detail, "internal server error"),
            Self::CounterUnavailable(detail) => {
                tracing::warn!(error = %detail, "counter store unavailable")
            }
            Self::BadRequest(_) => {}
        }

        let body = ErrorEnvelope {
            timestamp: Timestamp::now().to_string(),
            status: status.as_u16(),
            error: reason.to_string(),
            message,
            path: "/next-tracking-number".to_string(),
        };

        (status, Json(body)).into_response()
    }
}
