//! Error types for the crypto layer.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in encoding and cryptographic operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Text could not be encoded for transport.
    #[error("encoding failed: {0}")]
    Encoding(String),

    /// Malformed Base64 input, or decoded bytes that are not valid UTF-8.
    #[error("invalid Base64 input: {0}")]
    Decoding(String),

    /// Key material failed to import.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Key generation failed.
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    /// The encryption primitive rejected input.
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Decryption failed. The message never names the failing part
    /// (key, payload framing, or authentication tag); distinct causes
    /// are only visible at debug log level.
    #[error("decryption failed: invalid ciphertext or key")]
    Decryption,

    /// Plaintext exceeds what RSA-OAEP can fit under the key's modulus.
    #[error("plaintext too long for RSA-OAEP: limit is {limit} bytes")]
    MessageTooLong { limit: usize },

    /// The requested operation is not defined for the scheme.
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}
