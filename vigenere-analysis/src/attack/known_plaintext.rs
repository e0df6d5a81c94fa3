//! Known-plaintext attack: derive the key directly from an aligned pair

use crate::alphabet::{index_letter, letter_index, letters_only};
use crate::error::{AnalysisError, Result};

/// Key recovered from a ciphertext/plaintext pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecoveredKey {
    /// Minimal-period prefix of the derived key stream, or the full stream
    /// when no period was found
    pub key: String,
    /// Whether the stream reduced to a proper repeating period
    pub periodic: bool,
}

impl RecoveredKey {
    /// The key, or `KeyNotPeriodic` when the derived stream never
    /// repeated. That usually means the two texts were misaligned, not
    /// that the full stream is a valid key.
    pub fn periodic_key(&self) -> Result<&str> {
        if self.periodic {
            Ok(&self.key)
        } else {
            Err(AnalysisError::KeyNotPeriodic)
        }
    }
}

/// Derives the Vigenère key from a ciphertext and its known plaintext.
///
/// The two texts are aligned letter-by-letter, skipping non-alphabetic
/// positions in lockstep on both sides. Each aligned pair contributes one
/// key letter, `(cipher_pos - plain_pos) mod 26`; the resulting stream is
/// then reduced to its shortest repeating period.
///
/// # Returns
///
/// `EmptyInput` when the texts share no aligned letters. A stream that
/// never repeats comes back unreduced with `periodic == false`.
pub fn derive_key(cipher_text: &str, plain_text: &str) -> Result<RecoveredKey> {
    let cipher_letters = letters_only(cipher_text);
    let plain_letters = letters_only(plain_text);

    let stream: String = cipher_letters
        .chars()
        .zip(plain_letters.chars())
        .map(|(c, p)| {
            let shift = (letter_index(c) + 26 - letter_index(p)) % 26;
            index_letter(shift)
        })
        .collect();

    if stream.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    match minimal_period(&stream) {
        Some(period) => Ok(RecoveredKey {
            key: stream[..period].to_string(),
            periodic: true,
        }),
        None => Ok(RecoveredKey {
            key: stream,
            periodic: false,
        }),
    }
}

/// Shortest period that reconstructs `stream` exactly when repeated.
///
/// Only periods covered by at least two repetitions count; a "period"
/// longer than half the stream is indistinguishable from noise.
fn minimal_period(stream: &str) -> Option<usize> {
    let bytes = stream.as_bytes();
    (1..=bytes.len() / 2).find(|&period| (period..bytes.len()).all(|i| bytes[i] == bytes[i - period]))
}
