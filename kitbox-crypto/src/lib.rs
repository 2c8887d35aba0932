//! Cipher, hash and key-material layer for kitbox.
//!
//! Every operation is a stateless function over text: keys and payloads
//! travel as Base64 strings, digests as lowercase hex. Schemes:
//!
//! - [`caesar_cipher`] — letter rotation, pure and total
//! - [`aes`] — AES-256-GCM with nonce ‖ ciphertext ‖ tag framing
//! - [`rsa`] — RSA-OAEP (SHA-256), 2048-bit, SPKI/PKCS8 key transport
//! - [`sha256_hash`] — SHA-256 digest
//! - [`password`] — policy-driven password and demo key generation
//!
//! [`transform`] dispatches over the closed [`Scheme`] enum so callers
//! holding UI state never match on selector strings.
//!
//! Nothing here retains state between calls: key material is passed in
//! on every call and never cached, so concurrent callers cannot
//! interfere with each other.

pub mod aes;
pub mod caesar;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod password;
pub mod rsa;
pub mod scheme;

pub use aes::{AesKey, EncryptedMessage};
pub use caesar::caesar_cipher;
pub use encoding::{decode_base64, encode_base64};
pub use error::{CryptoError, CryptoResult};
pub use hash::sha256_hash;
pub use password::{
    PasswordPolicy, PasswordStrength, estimate_strength, generate_password,
    generate_random_base64_key,
};
pub use self::rsa::RsaKeyPair;
pub use scheme::{Direction, Scheme, transform};
