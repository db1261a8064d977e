//! CSP nonce generation.

use rand::{RngCore, rngs::OsRng};

/// Number of random bytes behind a generated nonce
pub const NONCE_BYTES: usize = 16;

/// Shortest nonce length (in characters) worth sending to a browser
pub const RECOMMENDED_NONCE_LEN: usize = NONCE_BYTES * 2;

/// Generate a hex-encoded nonce from the operating system's CSPRNG
pub fn generate_nonce() -> String {
    let mut bytes = [0u8; NONCE_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Provider of nonce values for a new Content-Security-Policy
///
/// Any `Fn() -> String` closure is a source, which lets callers (and tests)
/// pin the nonce without going through `with_nonce`.
pub trait NonceSource {
    fn generate(&self) -> String;
}

/// Nonce source backed by the operating system's random number generator
#[derive(Debug, Clone, Copy, Default)]
pub struct OsNonceSource;

impl NonceSource for OsNonceSource {
    fn generate(&self) -> String {
        generate_nonce()
    }
}

impl<F> NonceSource for F
where
    F: Fn() -> String,
{
    fn generate(&self) -> String {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_nonce_is_hex_of_recommended_length() {
        let nonce = generate_nonce();
        assert_eq!(nonce.len(), RECOMMENDED_NONCE_LEN);
        assert!(
            nonce.chars().all(|c| c.is_ascii_hexdigit()),
            "Nonce should be lowercase hex, got: {nonce}"
        );
        assert!(hex::decode(&nonce).is_ok());
    }

    #[test]
    fn test_generated_nonces_differ() {
        assert_ne!(generate_nonce(), generate_nonce());
    }

    #[test]
    fn test_closure_source() {
        let source = || "fixed".to_string();
        assert_eq!(source.generate(), "fixed");
        assert_eq!(OsNonceSource.generate().len(), RECOMMENDED_NONCE_LEN);
    }
}
