//! Scheme selection and dispatch.
//!
//! One closed enum arm per supported scheme, so dispatch is
//! exhaustiveness-checked instead of matching on selector strings.

use crate::error::{CryptoError, CryptoResult};
use crate::rsa::RsaKeyPair;
use crate::{aes, caesar, hash, rsa};
use serde::{Deserialize, Serialize};

/// A scheme together with the key material it operates with.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum Scheme {
    /// Letter rotation by a fixed shift.
    Caesar { shift: i32 },
    /// AES-256-GCM under a Base64 key.
    Aes { key: String },
    /// RSA-OAEP under an exported key pair.
    Rsa { keys: RsaKeyPair },
    /// SHA-256 digest. One-way: only [`Direction::Encrypt`] is valid.
    Sha256,
}

/// Which half of a scheme's operation pair to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Runs one scheme operation over `input`.
///
/// Hashing is exposed as the encrypt direction; asking for the decrypt
/// direction of a hash fails with [`CryptoError::Unsupported`] before
/// any hashing happens.
pub fn transform(scheme: &Scheme, direction: Direction, input: &str) -> CryptoResult<String> {
    match (scheme, direction) {
        (Scheme::Caesar { shift }, dir) => Ok(caesar::caesar_cipher(
            input,
            *shift,
            dir == Direction::Decrypt,
        )),
        (Scheme::Aes { key }, Direction::Encrypt) => aes::encrypt_text(input, key),
        (Scheme::Aes { key }, Direction::Decrypt) => aes::decrypt_text(input, key),
        (Scheme::Rsa { keys }, Direction::Encrypt) => rsa::encrypt_text(input, &keys.public_key),
        (Scheme::Rsa { keys }, Direction::Decrypt) => rsa::decrypt_text(input, &keys.private_key),
        (Scheme::Sha256, Direction::Encrypt) => Ok(hash::sha256_hash(input)),
        (Scheme::Sha256, Direction::Decrypt) => Err(CryptoError::Unsupported(
            "SHA-256 is a one-way hash and cannot be decrypted".to_string(),
        )),
    }
}
