//! Base64 transport encoding.
//!
//! Every scheme in this crate moves keys and payloads as Base64 text so
//! callers only ever handle strings. Standard alphabet, padded.

use crate::error::{CryptoError, CryptoResult};
use base64::{engine::general_purpose::STANDARD, Engine};

/// Encodes raw bytes to Base64.
#[must_use]
pub fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes Base64 to raw bytes.
pub fn decode_bytes(encoded: &str) -> CryptoResult<Vec<u8>> {
    STANDARD
        .decode(encoded)
        .map_err(|e| CryptoError::Decoding(e.to_string()))
}

/// Encodes UTF-8 text to Base64.
#[must_use]
pub fn encode_base64(text: &str) -> String {
    encode_bytes(text.as_bytes())
}

/// Decodes Base64 back to UTF-8 text.
///
/// Fails on a malformed alphabet or padding, and on decoded bytes that
/// are not valid UTF-8.
pub fn decode_base64(encoded: &str) -> CryptoResult<String> {
    let bytes = decode_bytes(encoded)?;
    String::from_utf8(bytes).map_err(|e| CryptoError::Decoding(format!("not valid UTF-8: {e}")))
}
