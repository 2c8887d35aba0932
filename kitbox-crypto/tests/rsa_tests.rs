use kitbox_crypto::RsaKeyPair;
use kitbox_crypto::error::CryptoError;
use kitbox_crypto::rsa::{self, MAX_PLAINTEXT_LEN};
use once_cell::sync::Lazy;

// 2048-bit key generation is expensive; every test shares one pair.
static KEYS: Lazy<RsaKeyPair> = Lazy::new(|| rsa::generate_keys().unwrap());

#[test]
fn encrypt_decrypt_roundtrip() {
    let ciphertext = rsa::encrypt_text("Hello, World!", &KEYS.public_key).unwrap();
    let plaintext = rsa::decrypt_text(&ciphertext, &KEYS.private_key).unwrap();
    assert_eq!(plaintext, "Hello, World!");
}

#[test]
fn roundtrip_empty() {
    let ciphertext = rsa::encrypt_text("", &KEYS.public_key).unwrap();
    assert_eq!(rsa::decrypt_text(&ciphertext, &KEYS.private_key).unwrap(), "");
}

#[test]
fn roundtrip_multibyte() {
    let text = "schlüssel 世界";
    let ciphertext = rsa::encrypt_text(text, &KEYS.public_key).unwrap();
    assert_eq!(rsa::decrypt_text(&ciphertext, &KEYS.private_key).unwrap(), text);
}

#[test]
fn same_plaintext_produces_different_ciphertext() {
    // OAEP is randomized
    let c1 = rsa::encrypt_text("same", &KEYS.public_key).unwrap();
    let c2 = rsa::encrypt_text("same", &KEYS.public_key).unwrap();
    assert_ne!(c1, c2);
}

#[test]
fn max_length_plaintext_fits() {
    let text = "a".repeat(MAX_PLAINTEXT_LEN);
    let ciphertext = rsa::encrypt_text(&text, &KEYS.public_key).unwrap();
    assert_eq!(rsa::decrypt_text(&ciphertext, &KEYS.private_key).unwrap(), text);
}

#[test]
fn oversized_plaintext_fails_not_truncates() {
    let text = "a".repeat(MAX_PLAINTEXT_LEN + 1);
    assert!(matches!(
        rsa::encrypt_text(&text, &KEYS.public_key),
        Err(CryptoError::MessageTooLong { limit: MAX_PLAINTEXT_LEN })
    ));
}

#[test]
fn tampered_ciphertext_fails() {
    let ciphertext = rsa::encrypt_text("secret", &KEYS.public_key).unwrap();
    let mut bytes = kitbox_crypto::encoding::decode_bytes(&ciphertext).unwrap();
    bytes[0] ^= 0xFF;
    let tampered = kitbox_crypto::encoding::encode_bytes(&bytes);
    assert!(matches!(
        rsa::decrypt_text(&tampered, &KEYS.private_key),
        Err(CryptoError::Decryption)
    ));
}

#[test]
fn invalid_public_key_fails() {
    assert!(matches!(
        rsa::encrypt_text("hi", "not-a-key"),
        Err(CryptoError::InvalidKey(_))
    ));

    // Valid Base64, but not SPKI DER
    let garbage = kitbox_crypto::encoding::encode_bytes(&[0u8; 64]);
    assert!(matches!(
        rsa::encrypt_text("hi", &garbage),
        Err(CryptoError::InvalidKey(_))
    ));
}

#[test]
fn invalid_private_key_fails() {
    let ciphertext = rsa::encrypt_text("hi", &KEYS.public_key).unwrap();
    assert!(matches!(
        rsa::decrypt_text(&ciphertext, "not-a-key"),
        Err(CryptoError::InvalidKey(_))
    ));
}

#[test]
fn public_key_cannot_decrypt() {
    let ciphertext = rsa::encrypt_text("hi", &KEYS.public_key).unwrap();
    // The SPKI blob is not a PKCS8 private key
    assert!(rsa::decrypt_text(&ciphertext, &KEYS.public_key).is_err());
}

#[test]
fn key_pair_serde_uses_camel_case() {
    let json = serde_json::to_value(&*KEYS).unwrap();
    assert!(json.get("publicKey").is_some());
    assert!(json.get("privateKey").is_some());
}

#[test]
fn key_pair_debug_redacts_private_key() {
    let debug = format!("{:?}", *KEYS);
    assert!(debug.contains("REDACTED"));
    assert!(!debug.contains(&KEYS.private_key));
}
