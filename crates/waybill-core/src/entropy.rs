use std::fmt;

/// Number of entropy bytes folded into each tracking number.
pub const ENTROPY_LEN: usize = 6;

/// Per-call random bytes folded into the identifier for collision
/// resistance.
///
/// An `EntropyToken` has no relationship to the counter sequence or to
/// wall-clock time; it exists purely to disambiguate calls that share
/// the same truncated sequence value.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct EntropyToken([u8; ENTROPY_LEN]);

impl EntropyToken {
    /// Wraps raw entropy bytes in a token.
    pub fn new(bytes: [u8; ENTROPY_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw entropy bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for EntropyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Not secret, but there is no point printing raw bytes.
        f.write_str("EntropyToken(..)")
    }
}

/// A source of per-call random bytes.
///
/// Implementations must draw from a cryptographically sufficient
/// source and be independent across calls. OS entropy exhaustion is a
/// startup-time concern, so the per-call operation is infallible.
///
/// Injected as a capability (rather than reaching for a global RNG) so
/// tests can supply deterministic entropy and assert exact encoder
/// output.
pub trait EntropySource: Send + Sync + 'static {
    /// Draws a fresh entropy token.
    fn next_token(&self) -> EntropyToken;
}
