//! Orchestrator: tiered ciphertext-only attack

use crate::attack::{dictionary_attack, CandidateResult, Dictionary, DictionaryAttackOptions};
use crate::cipher;
use crate::error::Result;
use crate::frequency::LanguageModel;
use crate::kasiski::{candidate_key_lengths, find_repeats};
use crate::solver::solve_key;

/// Keys tried by the cheap high-precision first tier
const COMMON_KEYS: [&str; 6] = ["the", "key", "vigenere", "cipher", "password", "secret"];

/// How many ranked results the orchestrator returns
const MAX_RESULTS: usize = 3;

/// How many Kasiski key-length candidates the statistical tier tries
const MAX_KEY_LENGTHS: usize = 3;

/// Attempts to crack a Vigenère ciphertext without knowing the key.
///
/// Strategy, cheapest first:
/// 1. A short list of common keys, kept when the decryption's chi-squared
///    score clears the model's plausibility threshold.
/// 2. When a dictionary is supplied, the full dictionary attack.
/// 3. Kasiski examination for up to three candidate key lengths, each
///    solved column-by-column via frequency analysis.
///
/// The first tier producing any result wins. Statistical results carry the
/// chi-squared score (lower = more confident) and are returned ascending;
/// dictionary results carry the valid-word percentage, descending. At most
/// three results are returned either way.
///
/// # Returns
///
/// `EmptyInput` when the ciphertext contains no letters at all.
pub fn crack_cipher(
    cipher_text: &str,
    dictionary: Option<&Dictionary>,
    model: &LanguageModel,
) -> Result<Vec<CandidateResult>> {
    // Validates alphabetic content up front so every tier can assume it
    model.score_text(cipher_text)?;

    let mut results = common_key_tier(cipher_text, model);
    if !results.is_empty() {
        results.truncate(MAX_RESULTS);
        return Ok(results);
    }

    if let Some(dictionary) = dictionary {
        let mut results =
            dictionary_attack(cipher_text, dictionary, &DictionaryAttackOptions::default());
        if !results.is_empty() {
            results.truncate(MAX_RESULTS);
            return Ok(results);
        }
    }

    Ok(statistical_tier(cipher_text, model))
}

/// Tier 1: decrypt with each common key and keep plausible-looking results.
fn common_key_tier(cipher_text: &str, model: &LanguageModel) -> Vec<CandidateResult> {
    let mut results: Vec<CandidateResult> = Vec::new();

    for key in COMMON_KEYS {
        // Common keys are all alphabetic, so decryption cannot fail here
        let Ok(decrypted) = cipher::decrypt(cipher_text, key) else {
            continue;
        };
        let Ok(score) = model.score_text(&decrypted) else {
            continue;
        };

        if score < model.plausibility_threshold {
            results.push(CandidateResult {
                key: key.to_string(),
                decrypted,
                score,
                valid_word_ratio: None,
            });
        }
    }

    sort_ascending(&mut results);
    results
}

/// Tier 3: Kasiski key lengths, each solved by frequency analysis.
fn statistical_tier(cipher_text: &str, model: &LanguageModel) -> Vec<CandidateResult> {
    let repeats = find_repeats(cipher_text);
    let lengths = candidate_key_lengths(&repeats, MAX_KEY_LENGTHS);

    let mut results: Vec<CandidateResult> = Vec::new();
    for length in lengths {
        // A candidate length the text cannot support is skipped, not fatal
        let Ok(key) = solve_key(cipher_text, length, model) else {
            continue;
        };
        let Ok(decrypted) = cipher::decrypt(cipher_text, &key) else {
            continue;
        };
        let Ok(score) = model.score_text(&decrypted) else {
            continue;
        };

        results.push(CandidateResult {
            key,
            decrypted,
            score,
            valid_word_ratio: None,
        });
    }

    sort_ascending(&mut results);
    results.truncate(MAX_RESULTS);
    results
}

/// Ascending chi-squared order (lower = better), ties broken by key.
fn sort_ascending(results: &mut [CandidateResult]) {
    results.sort_by(|a, b| {
        a.score
            .partial_cmp(&b.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.key.cmp(&b.key))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    const SAMPLE: &str = "it was a bright cold day in april and the clocks were \
striking thirteen winston smith his chin nuzzled into his breast in an effort \
to escape the vile wind slipped quickly through the glass doors of victory \
mansions though not quickly enough to prevent a swirl of gritty dust from \
entering along with him";

    #[test]
    fn test_common_key_fast_path() {
        let model = LanguageModel::english();
        let encrypted = cipher::encrypt(SAMPLE, "secret").unwrap();

        let results = crack_cipher(&encrypted, None, &model).unwrap();
        assert_eq!(results[0].key, "secret");
        assert_eq!(results[0].decrypted, SAMPLE);
        // Only the true key clears the plausibility threshold
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_statistical_fallback_recovers_key() {
        let model = LanguageModel::english();
        // "lemon" is not in the common-key list, forcing the Kasiski tier
        let encrypted = cipher::encrypt(SAMPLE, "lemon").unwrap();

        let results = crack_cipher(&encrypted, None, &model).unwrap();
        assert!(!results.is_empty());
        assert_eq!(results[0].key, "lemon");
        assert_eq!(results[0].decrypted, SAMPLE);
        // Results ascend by chi-squared
        for pair in results.windows(2) {
            assert!(pair[0].score <= pair[1].score);
        }
    }

    #[test]
    fn test_dictionary_tier_between_fast_and_statistical() {
        let model = LanguageModel::english();
        let dictionary = Dictionary::from_words([
            "welcome", "to", "my", "secret", "text", "python",
        ]);

        let results =
            crack_cipher("lcejczt rh tm ftaklh gtvm.", Some(&dictionary), &model).unwrap();
        assert_eq!(results[0].key, "python");
        assert_eq!(results[0].valid_word_ratio, Some(1.0));
    }

    #[test]
    fn test_empty_ciphertext_rejected() {
        let model = LanguageModel::english();
        assert!(matches!(
            crack_cipher("12 34 .,", None, &model),
            Err(AnalysisError::EmptyInput)
        ));
    }

    #[test]
    fn test_at_most_three_results() {
        let model = LanguageModel::english();
        let encrypted = cipher::encrypt(SAMPLE, "lemon").unwrap();
        let results = crack_cipher(&encrypted, None, &model).unwrap();
        assert!(results.len() <= 3);
    }
}
