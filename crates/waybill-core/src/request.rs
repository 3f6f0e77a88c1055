use crate::country::CountryCode;
use jiff::Timestamp;
use typed_builder::TypedBuilder;

/// Shipment metadata accompanying one tracking-number generation call.
///
/// Only `origin` and `destination` feed the identifier's bytes; the
/// remaining fields are accepted for auditing by callers and for
/// forward compatibility, and are deliberately not folded into the
/// derivation. The full field set is part of the boundary contract and
/// must stay stable even though three of its fields are unused by the
/// algorithm.
#[derive(Debug, Clone, TypedBuilder)]
pub struct GenerationRequest {
    /// Origin country of the shipment.
    pub origin: CountryCode,
    /// Destination country of the shipment.
    pub destination: CountryCode,
    /// Shipment weight in kilograms (positive, up to 3 decimals).
    pub weight: f64,
    /// When the shipment record was created.
    pub created_at: Timestamp,
    /// Opaque customer identifier.
    #[builder(setter(into))]
    pub customer_id: String,
    /// Customer display name.
    #[builder(setter(into))]
    pub customer_name: String,
    /// Customer name in slug-case (e.g. "redbox-logistics").
    #[builder(setter(into))]
    pub customer_slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_constructs_request() {
        let request = GenerationRequest::builder()
            .origin(CountryCode::new("US").unwrap())
            .destination(CountryCode::new("CA").unwrap())
            .weight(1.234)
            .created_at(Timestamp::UNIX_EPOCH)
            .customer_id("de619854-b59b-425e-9db4-943979e1bd49")
            .customer_name("RedBox Logistics")
            .customer_slug("redbox-logistics")
            .build();

        assert_eq!(request.origin.as_str(), "US");
        assert_eq!(request.destination.as_str(), "CA");
        assert_eq!(request.customer_slug, "redbox-logistics");
    }
}
