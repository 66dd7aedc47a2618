//! Payment callback signature verification.
//!
//! The payment provider signs its confirmation callback with HMAC-SHA256
//! over `order_id|payment_id`, hex-encoded lowercase. Verification is a
//! pure function: no I/O, no clock.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Computes the provider signature for an (order, payment) pair.
///
/// Lowercase hex of `HMAC_SHA256(secret, order_id + "|" + payment_id)`.
/// Exposed so test fixtures can mint valid callbacks.
pub fn sign(order_id: &str, payment_id: &str, secret: &str) -> String {
    let payload = format!("{}|{}", order_id, payment_id);
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verifies a callback signature against the shared secret.
///
/// Comparison is constant-time to avoid leaking signature prefixes through
/// response timing.
pub fn verify(order_id: &str, payment_id: &str, signature: &str, secret: &str) -> bool {
    let expected = sign(order_id, payment_id, secret);
    constant_time_eq(expected.as_bytes(), signature.as_bytes())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
