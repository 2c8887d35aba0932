//! SHA-256 hashing.

use sha2::{Digest, Sha256};

/// Length of the hex digest returned by [`sha256_hash`].
pub const DIGEST_HEX_LEN: usize = 64;

/// Hashes UTF-8 text with SHA-256, returning lowercase hex.
///
/// Deterministic: the same input always produces the same digest.
#[must_use]
pub fn sha256_hash(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}
