//! Attack layer: dictionary attack and known-plaintext key recovery

pub mod dictionary;
pub mod known_plaintext;

pub use dictionary::{dictionary_attack, Dictionary, DictionaryAttackOptions};
pub use known_plaintext::{derive_key, RecoveredKey};

use serde::Serialize;

/// A candidate decryption produced by an attack.
///
/// Plain data, independent of any serialization format; the boundary layer
/// decides how to present it. Result lists are ordered by descending
/// confidence.
#[derive(Clone, Debug, Serialize)]
pub struct CandidateResult {
    /// The candidate key
    pub key: String,
    /// The text decrypted with that key
    pub decrypted: String,
    /// Confidence score; meaning depends on the attack that produced it
    /// (valid-word percentage for the dictionary attack, chi-squared for
    /// the statistical attack)
    pub score: f64,
    /// Fraction of decrypted words found in the dictionary, when a
    /// dictionary attack produced this result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_word_ratio: Option<f64>,
}
