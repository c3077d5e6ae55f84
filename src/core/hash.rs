//! Keyed Hashing for the Final Gate
//!
//! HMAC-SHA256 helpers used by the gate verifier. The gate is a puzzle
//! check, not a trust boundary; the comparison is constant-time anyway.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute HMAC-SHA256 over `message` keyed with `key`, as lowercase hex.
pub fn compute_hmac_hex(key: &str, message: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verify `expected_hex` against HMAC-SHA256 of `message` keyed with `key`.
///
/// Hex decoding accepts either case. An undecodable expected value fails
/// verification rather than erroring; the comparison itself is
/// constant-time via [`Mac::verify_slice`].
pub fn verify_hmac_hex(key: &str, message: &str, expected_hex: &str) -> bool {
    let Ok(expected) = hex::decode(expected_hex) else {
        return false;
    };
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(message.as_bytes());
    mac.verify_slice(&expected).is_ok()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 4231 test case 2 (short key, short data).
    const RFC4231_KEY: &str = "Jefe";
    const RFC4231_DATA: &str = "what do ya want for nothing?";
    const RFC4231_MAC: &str =
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843";

    #[test]
    fn test_known_answer() {
        assert_eq!(compute_hmac_hex(RFC4231_KEY, RFC4231_DATA), RFC4231_MAC);
    }

    #[test]
    fn test_verify_accepts_known_answer() {
        assert!(verify_hmac_hex(RFC4231_KEY, RFC4231_DATA, RFC4231_MAC));
    }

    #[test]
    fn test_verify_is_hex_case_insensitive() {
        let upper = RFC4231_MAC.to_uppercase();
        assert!(verify_hmac_hex(RFC4231_KEY, RFC4231_DATA, &upper));
    }

    #[test]
    fn test_verify_rejects_wrong_key() {
        assert!(!verify_hmac_hex("not-jefe", RFC4231_DATA, RFC4231_MAC));
    }

    #[test]
    fn test_verify_rejects_tampered_message() {
        assert!(!verify_hmac_hex(RFC4231_KEY, "what do ya want for something?", RFC4231_MAC));
    }

    #[test]
    fn test_verify_rejects_undecodable_hex() {
        assert!(!verify_hmac_hex(RFC4231_KEY, RFC4231_DATA, "not-hex-at-all"));
    }

    #[test]
    fn test_determinism() {
        let a = compute_hmac_hex("G", "G|x-y");
        let b = compute_hmac_hex("G", "G|x-y");
        assert_eq!(a, b);
    }
}
