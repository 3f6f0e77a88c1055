use rand::rngs::OsRng;
use rand::RngCore;
use waybill_core::entropy::ENTROPY_LEN;
use waybill_core::{EntropySource, EntropyToken};

/// Entropy source backed by the operating system's CSPRNG.
///
/// `OsRng` reads from the OS entropy pool on demand and is safe for
/// concurrent use. Entropy exhaustion manifests as a panic at the OS
/// boundary, which is treated as fatal rather than surfaced per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn next_token(&self) -> EntropyToken {
        let mut bytes = [0u8; ENTROPY_LEN];
        OsRng.fill_bytes(&mut bytes);
        EntropyToken::new(bytes)
    }
}

/// Entropy source that returns the same token on every call.
///
/// For tests that need deterministic encoder output.
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy([u8; ENTROPY_LEN]);

impl FixedEntropy {
    /// Creates a source that always yields `bytes`.
    pub fn new(bytes: [u8; ENTROPY_LEN]) -> Self {
        Self(bytes)
    }
}

impl EntropySource for FixedEntropy {
    fn next_token(&self) -> EntropyToken {
        EntropyToken::new(self.0)
    }
}
