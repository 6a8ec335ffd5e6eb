//! Payment signature verification.
//!
//! Razorpay signs a completed checkout with HMAC-SHA256 over
//! `"<order_id>|<payment_id>"` keyed by the account's key secret. The
//! verifier recomputes the hex digest and compares it to the caller-supplied
//! value in constant time.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Verifier for payment signatures.
pub struct SignatureVerifier {
    /// The gateway key secret.
    secret: SecretString,
}

impl SignatureVerifier {
    /// Creates a new verifier with the given key secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: SecretString::new(secret.into()),
        }
    }

    /// Verifies a payment signature for an order/payment pair.
    ///
    /// Returns `true` only when `provided_signature` equals the hex-encoded
    /// HMAC-SHA256 digest of `"<order_id>|<payment_id>"`. The computed digest
    /// is never exposed to callers or logs.
    pub fn verify(&self, order_id: &str, payment_id: &str, provided_signature: &str) -> bool {
        let expected = self.compute(order_id, payment_id);
        constant_time_compare(expected.as_bytes(), provided_signature.as_bytes())
    }

    /// Computes the hex-encoded digest for an order/payment pair.
    fn compute(&self, order_id: &str, payment_id: &str) -> String {
        let payload = format!("{}|{}", order_id, payment_id);
        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC accepts any key size");
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

/// Performs constant-time comparison of two byte slices.
///
/// Length mismatch short-circuits; within equal lengths no byte position
/// terminates the comparison early.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Computes a signature for use in test fixtures.
#[cfg(test)]
pub fn compute_test_signature(secret: &str, order_id: &str, payment_id: &str) -> String {
    let payload = format!("{}|{}", order_id, payment_id);
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key size");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TEST_SECRET: &str = "s3cr3t";

    #[test]
    fn verify_valid_signature() {
        let verifier = SignatureVerifier::new(TEST_SECRET);
        let signature = compute_test_signature(TEST_SECRET, "order_abc", "pay_xyz");

        assert!(verifier.verify("order_abc", "pay_xyz", &signature));
    }

    #[test]
    fn verify_wrong_secret_fails() {
        let verifier = SignatureVerifier::new("wrong_secret");
        let signature = compute_test_signature(TEST_SECRET, "order_abc", "pay_xyz");

        assert!(!verifier.verify("order_abc", "pay_xyz", &signature));
    }

    #[test]
    fn verify_swapped_ids_fails() {
        let verifier = SignatureVerifier::new(TEST_SECRET);
        let signature = compute_test_signature(TEST_SECRET, "order_abc", "pay_xyz");

        assert!(!verifier.verify("pay_xyz", "order_abc", &signature));
    }

    #[test]
    fn verify_flipping_any_character_fails() {
        let verifier = SignatureVerifier::new(TEST_SECRET);
        let signature = compute_test_signature(TEST_SECRET, "order_abc", "pay_xyz");

        for i in 0..signature.len() {
            let mut tampered: Vec<char> = signature.chars().collect();
            tampered[i] = if tampered[i] == '0' { '1' } else { '0' };
            let tampered: String = tampered.into_iter().collect();

            assert!(
                !verifier.verify("order_abc", "pay_xyz", &tampered),
                "tampered signature accepted at position {}",
                i
            );
        }
    }

    #[test]
    fn verify_truncated_signature_fails() {
        let verifier = SignatureVerifier::new(TEST_SECRET);
        let signature = compute_test_signature(TEST_SECRET, "order_abc", "pay_xyz");

        assert!(!verifier.verify("order_abc", "pay_xyz", &signature[..signature.len() - 1]));
        assert!(!verifier.verify("order_abc", "pay_xyz", ""));
    }

    #[test]
    fn constant_time_compare_equal_values() {
        assert!(constant_time_compare(b"abcd", b"abcd"));
    }

    #[test]
    fn constant_time_compare_different_values() {
        assert!(!constant_time_compare(b"abcd", b"abce"));
    }

    #[test]
    fn constant_time_compare_different_lengths() {
        assert!(!constant_time_compare(b"abc", b"abcd"));
    }

    #[test]
    fn constant_time_compare_empty_slices() {
        assert!(constant_time_compare(b"", b""));
    }

    proptest! {
        #[test]
        fn round_trip_always_verifies(
            order_id in "[a-zA-Z0-9_]{1,32}",
            payment_id in "[a-zA-Z0-9_]{1,32}",
        ) {
            let verifier = SignatureVerifier::new(TEST_SECRET);
            let signature = compute_test_signature(TEST_SECRET, &order_id, &payment_id);
            prop_assert!(verifier.verify(&order_id, &payment_id, &signature));
        }

        #[test]
        fn foreign_signature_never_verifies(
            order_id in "[a-zA-Z0-9_]{1,32}",
            payment_id in "[a-zA-Z0-9_]{1,32}",
            other_payment in "[a-zA-Z0-9_]{1,32}",
        ) {
            prop_assume!(payment_id != other_payment);
            let verifier = SignatureVerifier::new(TEST_SECRET);
            let signature = compute_test_signature(TEST_SECRET, &order_id, &other_payment);
            prop_assert!(!verifier.verify(&order_id, &payment_id, &signature));
        }
    }
}
