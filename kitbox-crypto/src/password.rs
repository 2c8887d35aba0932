//! Password and demo key-material generation.

use crate::encoding;
use rand::rngs::OsRng;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Which character classes a generated password draws from.
///
/// At least one class must be enabled for generation to produce
/// anything; with every class disabled the result is empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordPolicy {
    /// Number of characters to generate.
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: false,
        }
    }
}

impl PasswordPolicy {
    /// Concatenated character set for the enabled classes.
    fn charset(&self) -> Vec<u8> {
        let mut charset = Vec::new();
        if self.include_uppercase {
            charset.extend_from_slice(UPPERCASE);
        }
        if self.include_lowercase {
            charset.extend_from_slice(LOWERCASE);
        }
        if self.include_numbers {
            charset.extend_from_slice(NUMBERS);
        }
        if self.include_symbols {
            charset.extend_from_slice(SYMBOLS);
        }
        charset
    }

    fn enabled_classes(&self) -> u32 {
        [
            self.include_uppercase,
            self.include_lowercase,
            self.include_numbers,
            self.include_symbols,
        ]
        .iter()
        .filter(|enabled| **enabled)
        .count() as u32
    }
}

/// Rough strength classification for a policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

/// Generates a password drawing uniformly from the enabled classes.
///
/// Randomness comes from the OS source.
#[must_use]
pub fn generate_password(policy: &PasswordPolicy) -> String {
    let charset = policy.charset();
    if charset.is_empty() {
        return String::new();
    }

    let mut rng = OsRng;
    (0..policy.length)
        .map(|_| charset[rng.gen_range(0..charset.len())] as char)
        .collect()
}

/// Scores a policy: one point per enabled class, one more at length 12
/// and again at 16. Two points or fewer is weak, four or fewer medium.
#[must_use]
pub fn estimate_strength(policy: &PasswordPolicy) -> PasswordStrength {
    let mut score = policy.enabled_classes();
    if policy.length >= 12 {
        score += 1;
    }
    if policy.length >= 16 {
        score += 1;
    }

    match score {
        0..=2 => PasswordStrength::Weak,
        3..=4 => PasswordStrength::Medium,
        _ => PasswordStrength::Strong,
    }
}

/// Fills `length` bytes from the OS random source and Base64-encodes
/// them. Demo key material, unrelated to [`crate::AesKey::generate`].
#[must_use]
pub fn generate_random_base64_key(length: usize) -> String {
    let mut bytes = vec![0u8; length];
    OsRng.fill_bytes(&mut bytes);
    encoding::encode_bytes(&bytes)
}
