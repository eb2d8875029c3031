//! Violation fingerprinting.
//!
//! The two delegated engines evaluate overlapping rule sets, so the same
//! underlying issue can surface twice. Each violation gets a deduplication
//! key derived from its rule, location, and message; the rule engine merges
//! violations sharing a key. The message is normalized first so cosmetic
//! wording differences (case, whitespace) don't defeat deduplication.

use sha2::{Digest, Sha256};

/// Length of the rendered fingerprint in hex characters.
const FINGERPRINT_LEN: usize = 16;

/// Compute the deduplication key for a violation.
pub fn fingerprint(rule: &str, location: &[String], message: &str) -> String {
    let normalized = normalize(message);

    let mut hasher = Sha256::new();
    hasher.update(rule.as_bytes());
    hasher.update([0u8]);
    hasher.update(location.join(".").as_bytes());
    hasher.update([0u8]);
    hasher.update(normalized.as_bytes());

    let mut digest = hex::encode(hasher.finalize());
    digest.truncate(FINGERPRINT_LEN);
    digest
}

/// Lowercase and collapse runs of whitespace to single spaces.
fn normalize(message: &str) -> String {
    message
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}
