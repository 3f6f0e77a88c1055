use crate::error::ApiError;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use waybill_core::{CountryCode, GenerationRequest};

/// Raw query parameters of `GET /next-tracking-number`.
///
/// All fields are optional at the deserialization layer so that
/// missing parameters produce our own envelope message instead of an
/// extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct TrackingNumberParams {
    pub origin_country_id: Option<String>,
    pub destination_country_id: Option<String>,
    pub weight: Option<String>,
    pub created_at: Option<String>,
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub customer_slug: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TrackingNumberResponse {
    pub tracking_number: String,
    pub created_at: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

fn require(value: Option<String>, name: &str) -> Result<String, ApiError> {
    value.ok_or_else(|| {
        ApiError::BadRequest(format!("Required parameter '{name}' is not present."))
    })
}

fn parse_country(value: Option<String>, name: &str) -> Result<CountryCode, ApiError> {
    let value = require(value, name)?;
    // Strict at the boundary: exactly two uppercase letters, matching
    // the documented ISO 3166-1 alpha-2 parameter shape.
    if value.len() != 2 || !value.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(ApiError::BadRequest(format!(
            "Invalid {name} format. Must be ISO 3166-1 alpha-2 format."
        )));
    }
    CountryCode::new(&value).map_err(|e| ApiError::BadRequest(e.to_string()))
}

fn parse_weight(value: Option<String>) -> Result<f64, ApiError> {
    let value = require(value, "weight")?;
    let weight: f64 = value
        .parse()
        .map_err(|_| ApiError::BadRequest("Weight must be a positive number.".to_string()))?;
    if !weight.is_finite() || weight <= 0.0 {
        return Err(ApiError::BadRequest(
            "Weight must be a positive number.".to_string(),
        ));
    }
    if let Some((_, fraction)) = value.split_once('.') {
        if fraction.len() > 3 {
            return Err(ApiError::BadRequest(
                "Weight must have up to three decimal places.".to_string(),
            ));
        }
    }
    Ok(weight)
}

fn parse_created_at(value: Option<String>) -> Result<Timestamp, ApiError> {
    let value = require(value, "created_at")?;
    value.parse().map_err(|_| {
        ApiError::BadRequest("Invalid date format. Must be in RFC 3339 format.".to_string())
    })
}

fn require_non_blank(value: Option<String>, name: &str) -> Result<String, ApiError> {
    let value = require(value, name)?;
    if value.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("{name} cannot be empty")));
    }
    Ok(value)
}

impl TrackingNumberParams {
    /// Validates the raw parameters into a [`GenerationRequest`].
    ///
    /// Checks run in declaration order and the first violation wins,
    /// so each 400 envelope carries exactly one message.
    pub fn into_request(self) -> Result<GenerationRequest, ApiError> {
        let origin = parse_country(self.origin_country_id, "origin_country_id")?;
        let destination = parse_country(self.destination_country_id, "destination_country_id")?;
        let weight = parse_weight(self.weight)?;
        let created_at = parse_created_at(self.created_at)?;
        let customer_id = require(self.customer_id, "customer_id")?;
        let customer_name = require_non_blank(self.customer_name, "customer_name")?;
        let customer_slug = require_non_blank(self.customer_slug, "customer_slug")?;

        Ok(GenerationRequest::builder()
            .origin(origin)
            .destination(destination)
            .weight(weight)
            .created_at(created_at)
            .customer_id(customer_id)
            .customer_name(customer_name)
            .customer_slug(customer_slug)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_params() -> TrackingNumberParams {
        TrackingNumberParams {
            origin_country_id: Some("MY".to_string()),
            destination_country_id: Some("ID".to_string()),
            weight: Some("1.234".to_string()),
            created_at: Some("2018-11-20T19:29:32+08:00".to_string()),
            customer_id: Some("de619854-b59b-425e-9db4-943979e1bd49".to_string()),
            customer_name: Some("RedBox Logistics".to_string()),
            customer_slug: Some("redbox-logistics".to_string()),
        }
    }

    fn message(err: ApiError) -> String {
        match err {
            ApiError::BadRequest(message) => message,
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn valid_params_build_a_request() {
        let request = valid_params().into_request().unwrap();
        assert_eq!(request.origin.as_str(), "MY");
        assert_eq!(request.destination.as_str(), "ID");
        assert_eq!(request.weight, 1.234);
    }

    #[test]
    fn missing_parameter_message() {
        let mut params = valid_params();
        params.origin_country_id = None;
        assert_eq!(
            message(params.into_request().unwrap_err()),
            "Required parameter 'origin_country_id' is not present."
        );
    }

    #[test]
    fn lowercase_country_is_rejected_at_the_boundary() {
        let mut params = valid_params();
        params.origin_country_id = Some("my".to_string());
        assert_eq!(
            message(params.into_request().unwrap_err()),
            "Invalid origin_country_id format. Must be ISO 3166-1 alpha-2 format."
        );
    }

    #[test]
    fn three_letter_destination_is_rejected() {
        let mut params = valid_params();
        params.destination_country_id = Some("IDN".to_string());
        assert_eq!(
            message(params.into_request().unwrap_err()),
            "Invalid destination_country_id format. Must be ISO 3166-1 alpha-2 format."
        );
    }

    #[test]
    fn non_numeric_weight_is_rejected() {
        let mut params = valid_params();
        params.weight = Some("heavy".to_string());
        assert_eq!(
            message(params.into_request().unwrap_err()),
            "Weight must be a positive number."
        );
    }

    #[test]
    fn zero_and_negative_weight_are_rejected() {
        for bad in ["0", "-1.5"] {
            let mut params = valid_params();
            params.weight = Some(bad.to_string());
            assert_eq!(
                message(params.into_request().unwrap_err()),
                "Weight must be a positive number."
            );
        }
    }

    #[test]
    fn weight_with_four_decimals_is_rejected() {
        let mut params = valid_params();
        params.weight = Some("1.2345".to_string());
        assert_eq!(
            message(params.into_request().unwrap_err()),
            "Weight must have up to three decimal places."
        );
    }

    #[test]
    fn invalid_created_at_is_rejected() {
        let mut params = valid_params();
        params.created_at = Some("20th November 2018".to_string());
        assert_eq!(
            message(params.into_request().unwrap_err()),
            "Invalid date format. Must be in RFC 3339 format."
        );
    }

    #[test]
    fn blank_customer_name_is_rejected() {
        let mut params = valid_params();
        params.customer_name = Some("   ".to_string());
        assert_eq!(
            message(params.into_request().unwrap_err()),
            "customer_name cannot be empty"
        );
    }

    #[test]
    fn first_violation_wins() {
        let mut params = valid_params();
        params.origin_country_id = Some("usa".to_string());
        params.weight = Some("-1".to_string());
        assert_eq!(
            message(params.into_request().unwrap_err()),
            "Invalid origin_country_id format. Must be ISO 3166-1 alpha-2 format."
        );
    }
}
