//! Vigenère cipher transform

use crate::error::{AnalysisError, Result};

/// Direction of the Vigenère transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Shift forward by the key letter
    Encrypt,
    /// Shift backward by the key letter
    Decrypt,
}

/// Applies the Vigenère cipher to `text` with the given key.
///
/// Case is preserved on output. Non-alphabetic characters are copied
/// unchanged and do not consume a key position, so punctuation never
/// breaks key alignment.
///
/// # Arguments
///
/// * `text` - The input text to transform.
/// * `key` - The cipher key; must be non-empty and entirely alphabetic.
/// * `direction` - Whether to encrypt or decrypt.
///
/// # Returns
///
/// The transformed text, or `AnalysisError::InvalidKey` for an empty or
/// non-alphabetic key.
pub fn transform(text: &str, key: &str, direction: Direction) -> Result<String> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(AnalysisError::InvalidKey);
    }

    let key_bytes: &[u8] = key.as_bytes();
    let key_len: usize = key_bytes.len();
    let mut key_index: usize = 0;
    let mut result: String = String::with_capacity(text.len());

    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            // Determine base character ('A' or 'a') to preserve case
            let base: u8 = if c.is_ascii_lowercase() { b'a' } else { b'A' };

            // Get the key character and convert to shift value (0-25)
            let shift: u8 = key_bytes[key_index % key_len].to_ascii_lowercase() - b'a';

            let byte = c as u8;
            let transformed: u8 = match direction {
                // (plaintext + key) mod 26
                Direction::Encrypt => (byte - base + shift) % 26 + base,
                // (ciphertext - key + 26) mod 26
                Direction::Decrypt => (byte - base + 26 - shift) % 26 + base,
            };
            result.push(transformed as char);

            // Only advance key index for alphabetic characters
            key_index += 1;
        } else {
            // Non-alphabetic characters remain unchanged
            result.push(c);
        }
    }

    Ok(result)
}

/// Encrypts text using the Vigenère cipher.
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    transform(text, key, Direction::Encrypt)
}

/// Decrypts text using the Vigenère cipher.
pub fn decrypt(text: &str, key: &str) -> Result<String> {
    transform(text, key, Direction::Decrypt)
}
