//! The identifier encoder.
//!
//! A pure function from (origin, destination, sequence, entropy) to a
//! validated [`TrackingNumber`]. No shared state.

use crate::country::CountryCode;
use crate::entropy::ENTROPY_LEN;
use crate::error::CoreError;
use crate::tracking_number::{TrackingNumber, ALPHABET, MAX_LENGTH};
use std::fmt::Write;

/// The counter's contribution is bounded to 4 decimal digits by
/// reducing the sequence value modulo this constant.
///
/// This trades long-run uniqueness for fixed width: two calls whose
/// sequence values differ by a multiple of 10000 render the same
/// 4-digit field, and only the independent entropy token disambiguates
/// them. Known, accepted weakness; do not widen the field without
/// revisiting the 16-character output contract.
pub const SEQUENCE_MODULUS: u64 = 10_000;

/// Encodes one generation event into a tracking number.
///
/// Layout: `origin(2) + destination(2) + sequence mod 10000 as 4
/// zero-padded digits + 6 entropy-derived characters`, truncated to at
/// most [`MAX_LENGTH`] characters.
///
/// Each of the first [`ENTROPY_LEN`] entropy bytes is mapped into the
/// 36-character `[A-Z0-9]` alphabet; bytes are mapped, never dropped,
/// so the rendered width never shrinks below 6 characters. Fewer than
/// [`ENTROPY_LEN`] entropy bytes is an error.
pub fn encode(
    origin: &CountryCode,
    destination: &CountryCode,
    sequence: u64,
    entropy: &[u8],
) -> Result<TrackingNumber, CoreError> {
    if entropy.len() < ENTROPY_LEN {
        return Err(CoreError::InsufficientEntropy {
            needed: ENTROPY_LEN,
            got: entropy.len(),
        });
    }

    let mut out = String::with_capacity(MAX_LENGTH);
    out.push_str(origin.as_str());
    out.push_str(destination.as_str());
    write!(out, "{:04}", sequence % SEQUENCE_MODULUS)
        .map_err(|e| CoreError::EncodingInvariant(format!("sequence field render failed: {e}")))?;
    for &byte in &entropy[..ENTROPY_LEN] {
        out.push(ALPHABET[byte as usize % ALPHABET.len()] as char);
    }

    // Generic bound so future field-width changes cannot exceed the
    // 16-character contract. A no-op at the current 14-character layout.
    out.truncate(MAX_LENGTH);

    // Mandatory defensive check of the alphabet/length contract. A
    // failure here is a logic defect in this function, not bad input.
    TrackingNumber::new(out).map_err(|e| CoreError::EncodingInvariant(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CountryCode {
        CountryCode::new(s).unwrap()
    }

    /// Entropy bytes that map to "AB12CD" through the alphabet.
    const AB12CD: [u8; 6] = [0, 1, 27, 28, 2, 3];

    #[test]
    fn golden_case() {
        let number = encode(&code("US"), &code("CA"), 42, &AB12CD).unwrap();
        assert_eq!(number.as_str(), "USCA0042AB12CD");
        assert_eq!(number.as_str().len(), 14);
    }

    #[test]
    fn sequence_is_zero_padded() {
        let number = encode(&code("US"), &code("CA"), 7, &AB12CD).unwrap();
        assert_eq!(&number.as_str()[4..8], "0007");
    }

    #[test]
    fn sequence_wraps_at_modulus() {
        let low = encode(&code("US"), &code("CA"), 42, &AB12CD).unwrap();
        let high = encode(&code("US"), &code("CA"), 10_042, &AB12CD).unwrap();
        // Same 4-digit field; only entropy disambiguates wraparound.
        assert_eq!(&low.as_str()[4..8], "0042");
        assert_eq!(low, high);
    }

    #[test]
    fn lowercase_codes_are_normalized_upstream() {
        let number = encode(&code("us"), &code("ca"), 42, &AB12CD).unwrap();
        assert_eq!(&number.as_str()[..4], "USCA");
    }

    #[test]
    fn entropy_bytes_are_mapped_not_dropped() {
        // Bytes beyond the alphabet width wrap around instead of being
        // skipped, so the entropy field is always 6 characters wide.
        let entropy = [36, 37, 255, 128, 0, 200];
        let number = encode(&code("DE"), &code("FR"), 1, &entropy).unwrap();
        assert_eq!(number.as_str().len(), 14);
        assert_eq!(&number.as_str()[8..9], "A"); // 36 % 36 == 0
    }

    #[test]
    fn extra_entropy_bytes_are_ignored() {
        let long = [0, 1, 27, 28, 2, 3, 99, 100];
        let number = encode(&code("US"), &code("CA"), 42, &long).unwrap();
        assert_eq!(number.as_str(), "USCA0042AB12CD");
    }

    #[test]
    fn short_entropy_is_an_error() {
        let err = encode(&code("US"), &code("CA"), 42, &[1, 2, 3]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientEntropy { needed: 6, got: 3 }
        ));
    }

    #[test]
    fn output_matches_contract_for_many_sequences() {
        for sequence in [0, 1, 9_999, 10_000, 123_456_789, u64::MAX] {
            let number = encode(&code("SG"), &code("MY"), sequence, &AB12CD).unwrap();
            assert!(number.as_str().len() <= MAX_LENGTH);
            assert!(number
                .as_str()
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn field_layout_is_stable() {
        let number = encode(&code("JP"), &code("KR"), 1_234, &AB12CD).unwrap();
        let s = number.as_str();
        assert_eq!(&s[0..2], "JP");
        assert_eq!(&s[2..4], "KR");
        assert_eq!(&s[4..8], "1234");
        assert_eq!(&s[8..14], "AB12CD");
    }
}
