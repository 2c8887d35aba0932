//! Caesar cipher over ASCII letters.

/// Rotates each ASCII letter by `shift` positions, case-preserving.
///
/// Non-letter characters pass through unchanged. `decrypt` negates the
/// effective shift, so the same shift value round-trips. Total: every
/// `i32` shift is normalized into the alphabet, so the function never
/// fails.
#[must_use]
pub fn caesar_cipher(text: &str, shift: i32, decrypt: bool) -> String {
    let shift = if decrypt { -shift } else { shift };
    let shift = shift.rem_euclid(26) as u8;

    text.chars()
        .map(|c| match c {
            'A'..='Z' => rotate(c, b'A', shift),
            'a'..='z' => rotate(c, b'a', shift),
            _ => c,
        })
        .collect()
}

fn rotate(c: char, base: u8, shift: u8) -> char {
    (((c as u8 - base + shift) % 26) + base) as char
}
