//! AES-256-GCM encryption with Base64 transport framing.
//!
//! Payload layout is nonce ‖ ciphertext ‖ tag, Base64-encoded. A fresh
//! random nonce is generated for every encryption; the API has no way
//! to supply one from outside, so nonce reuse under a key cannot occur.

use crate::encoding;
use crate::error::{CryptoError, CryptoResult};
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of an AES-256 key in bytes.
pub const KEY_SIZE: usize = 32;

/// Size of the GCM nonce in bytes (96 bits).
pub const NONCE_SIZE: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_SIZE: usize = 16;

/// A 256-bit symmetric key with automatic zeroization on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AesKey {
    bytes: [u8; KEY_SIZE],
}

impl AesKey {
    /// Generates a fresh key from the OS random source.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Creates a key from raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }

    /// Encodes the key in its Base64 transport form.
    #[must_use]
    pub fn to_base64(&self) -> String {
        encoding::encode_bytes(&self.bytes)
    }

    /// Decodes a key from its Base64 transport form.
    pub fn from_base64(encoded: &str) -> CryptoResult<Self> {
        let bytes = encoding::decode_bytes(encoded)
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
        let bytes: [u8; KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidKey(format!("expected {KEY_SIZE} bytes")))?;
        Ok(Self { bytes })
    }
}

impl std::fmt::Debug for AesKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Encrypted payload with the framing needed for decryption.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EncryptedMessage {
    /// The nonce used for this encryption, unique per call.
    pub nonce: [u8; NONCE_SIZE],
    /// The ciphertext, auth tag included.
    pub ciphertext: Vec<u8>,
}

impl EncryptedMessage {
    /// Returns the total payload size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        NONCE_SIZE + self.ciphertext.len()
    }

    /// Returns true if there is no ciphertext at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ciphertext.is_empty()
    }

    /// Encodes as Base64 over nonce ‖ ciphertext ‖ tag.
    #[must_use]
    pub fn to_base64(&self) -> String {
        let mut bytes = Vec::with_capacity(self.len());
        bytes.extend_from_slice(&self.nonce);
        bytes.extend_from_slice(&self.ciphertext);
        encoding::encode_bytes(&bytes)
    }

    /// Decodes a Base64 payload, splitting off the leading nonce.
    pub fn from_base64(encoded: &str) -> CryptoResult<Self> {
        let bytes = encoding::decode_bytes(encoded)?;

        if bytes.len() < NONCE_SIZE + TAG_SIZE {
            return Err(CryptoError::Decoding("payload too short".to_string()));
        }

        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(&bytes[..NONCE_SIZE]);
        let ciphertext = bytes[NONCE_SIZE..].to_vec();

        Ok(Self { nonce, ciphertext })
    }
}

/// Encrypts plaintext under `key` with a fresh random nonce.
pub fn encrypt(key: &AesKey, plaintext: &[u8]) -> CryptoResult<EncryptedMessage> {
    let cipher = Aes256Gcm::new(key.as_bytes().into());

    // Generate random nonce
    let mut nonce_bytes = [0u8; NONCE_SIZE];
    rand::rngs::OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;

    Ok(EncryptedMessage {
        nonce: nonce_bytes,
        ciphertext,
    })
}

/// Decrypts and authenticates a payload under `key`.
pub fn decrypt(key: &AesKey, message: &EncryptedMessage) -> CryptoResult<Vec<u8>> {
    let cipher = Aes256Gcm::new(key.as_bytes().into());
    let nonce = Nonce::from_slice(&message.nonce);

    cipher
        .decrypt(nonce, message.ciphertext.as_ref())
        .map_err(|_| {
            debug!("AES-GCM authentication failed");
            CryptoError::Decryption
        })
}

/// Encrypts UTF-8 text, returning the Base64 payload.
///
/// The key is the Base64 form produced by [`AesKey::to_base64`]; a key
/// that fails to import reports [`CryptoError::InvalidKey`].
pub fn encrypt_text(plaintext: &str, key_base64: &str) -> CryptoResult<String> {
    let key = AesKey::from_base64(key_base64)?;
    let message = encrypt(&key, plaintext.as_bytes())?;
    Ok(message.to_base64())
}

/// Decrypts a Base64 payload back to UTF-8 text.
///
/// Every failure — malformed key, malformed payload, truncated framing,
/// failed authentication — maps to the same [`CryptoError::Decryption`]
/// value.
pub fn decrypt_text(payload_base64: &str, key_base64: &str) -> CryptoResult<String> {
    let key = AesKey::from_base64(key_base64).map_err(|e| {
        debug!("AES key import failed: {e}");
        CryptoError::Decryption
    })?;

    let message = EncryptedMessage::from_base64(payload_base64).map_err(|e| {
        debug!("AES payload framing invalid: {e}");
        CryptoError::Decryption
    })?;

    let plaintext = decrypt(&key, &message)?;

    String::from_utf8(plaintext).map_err(|_| {
        debug!("decrypted bytes are not valid UTF-8");
        CryptoError::Decryption
    })
}
