//! RSA-OAEP (SHA-256) encryption with DER key transport.
//!
//! Public keys travel as Base64-encoded SPKI DER, private keys as
//! Base64-encoded PKCS8 DER — the standard interchange forms, so key
//! material round-trips through any conforming tool.

use crate::encoding;
use crate::error::{CryptoError, CryptoResult};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use tracing::debug;

/// RSA modulus size in bits for generated key pairs.
pub const MODULUS_BITS: usize = 2048;

/// OAEP overhead in bytes: two SHA-256 digests plus two bytes.
const OAEP_OVERHEAD: usize = 2 * 32 + 2;

/// Maximum plaintext length in bytes under a 2048-bit modulus.
pub const MAX_PLAINTEXT_LEN: usize = MODULUS_BITS / 8 - OAEP_OVERHEAD;

/// An exported key pair in Base64 transport form.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsaKeyPair {
    /// SPKI DER, Base64-encoded.
    pub public_key: String,
    /// PKCS8 DER, Base64-encoded.
    pub private_key: String,
}

impl std::fmt::Debug for RsaKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaKeyPair")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

/// Generates a 2048-bit key pair and exports it in transport form.
pub fn generate_keys() -> CryptoResult<RsaKeyPair> {
    let mut rng = rand::rngs::OsRng;

    let private = RsaPrivateKey::new(&mut rng, MODULUS_BITS)
        .map_err(|e| CryptoError::KeyGeneration(e.to_string()))?;
    let public = RsaPublicKey::from(&private);

    let public_der = public
        .to_public_key_der()
        .map_err(|e| CryptoError::KeyGeneration(format!("public key export: {e}")))?;
    let private_der = private
        .to_pkcs8_der()
        .map_err(|e| CryptoError::KeyGeneration(format!("private key export: {e}")))?;

    Ok(RsaKeyPair {
        public_key: encoding::encode_bytes(public_der.as_bytes()),
        private_key: encoding::encode_bytes(private_der.as_bytes()),
    })
}

/// Encrypts text under an SPKI public key with OAEP/SHA-256.
///
/// OAEP bounds the plaintext by the modulus: [`MAX_PLAINTEXT_LEN`]
/// bytes for a 2048-bit key. Oversized input fails with
/// [`CryptoError::MessageTooLong`]; it is never truncated.
pub fn encrypt_text(plaintext: &str, public_key_base64: &str) -> CryptoResult<String> {
    let der = encoding::decode_bytes(public_key_base64)
        .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
    let public = RsaPublicKey::from_public_key_der(&der)
        .map_err(|e| CryptoError::InvalidKey(format!("not an SPKI public key: {e}")))?;

    let limit = public.size().saturating_sub(OAEP_OVERHEAD);
    if plaintext.len() > limit {
        return Err(CryptoError::MessageTooLong { limit });
    }

    let mut rng = rand::rngs::OsRng;
    let ciphertext = public
        .encrypt(&mut rng, Oaep::new::<Sha256>(), plaintext.as_bytes())
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;

    Ok(encoding::encode_bytes(&ciphertext))
}

/// Decrypts OAEP ciphertext under a PKCS8 private key.
///
/// A key that fails to parse reports [`CryptoError::InvalidKey`]; a
/// ciphertext/key mismatch reports [`CryptoError::Decryption`].
pub fn decrypt_text(ciphertext_base64: &str, private_key_base64: &str) -> CryptoResult<String> {
    let der = encoding::decode_bytes(private_key_base64)
        .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
    let private = RsaPrivateKey::from_pkcs8_der(&der)
        .map_err(|e| CryptoError::InvalidKey(format!("not a PKCS8 private key: {e}")))?;

    let ciphertext = encoding::decode_bytes(ciphertext_base64)?;

    let plaintext = private
        .decrypt(Oaep::new::<Sha256>(), &ciphertext)
        .map_err(|e| {
            debug!("RSA-OAEP decryption failed: {e}");
            CryptoError::Decryption
        })?;

    String::from_utf8(plaintext).map_err(|_| {
        debug!("decrypted bytes are not valid UTF-8");
        CryptoError::Decryption
    })
}
