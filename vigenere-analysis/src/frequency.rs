//! Letter-frequency model and goodness-of-fit scoring

use crate::alphabet::ALPHABET_LEN;
use crate::error::{AnalysisError, Result};

/// English letter frequencies (relative, a-z)
const ENGLISH_FREQUENCIES: [f64; 26] = [
    0.08167, 0.01492, 0.02802, 0.04271, 0.12702, 0.02228, 0.02015, 0.06094,
    0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929,
    0.00095, 0.05987, 0.06327, 0.09056, 0.02758, 0.00978, 0.02360, 0.00150,
    0.01974, 0.00074,
];

/// Chi-squared score below which a decryption is considered plausible English.
/// Natural English lands around 0.05-0.35; text decrypted with a wrong key
/// flattens toward uniform and scores near 1.0.
const ENGLISH_PLAUSIBILITY_THRESHOLD: f64 = 0.5;

/// Floor for expected frequencies in the chi-squared denominator
const EXPECTED_FLOOR: f64 = 0.01;

/// Reference language model used as the expected distribution for
/// chi-squared comparisons.
///
/// Passed explicitly into every scoring function so an alternate corpus
/// (another language, a domain-specific text body) can be swapped in
/// without touching global state.
#[derive(Clone, Debug)]
pub struct LanguageModel {
    /// Relative frequency of each letter a-z; sums to ~1.0
    pub frequencies: [f64; 26],
    /// Chi-squared score under which text counts as plausible
    pub plausibility_threshold: f64,
}

impl LanguageModel {
    /// The default English model.
    pub fn english() -> Self {
        Self {
            frequencies: ENGLISH_FREQUENCIES,
            plausibility_threshold: ENGLISH_PLAUSIBILITY_THRESHOLD,
        }
    }

    /// Chi-squared distance between a text's letter distribution and this
    /// model. Lower is better.
    ///
    /// # Returns
    ///
    /// `AnalysisError::EmptyInput` when the text has no alphabetic content.
    pub fn score_text(&self, text: &str) -> Result<f64> {
        let observed = letter_frequencies(text)?;
        Ok(chi_squared(&observed, &self.frequencies))
    }
}

impl Default for LanguageModel {
    fn default() -> Self {
        Self::english()
    }
}

/// Counts the frequency of each letter in the given text.
///
/// # Arguments
///
/// * `text` - The input text to analyze.
///
/// # Returns
///
/// An array of 26 counts for letters a-z.
pub fn letter_counts(text: &str) -> [u32; 26] {
    let mut counts: [u32; 26] = [0; 26];

    for c in text.chars() {
        // Only process alphabetic characters
        if c.is_ascii_alphabetic() {
            let index: usize = (c.to_ascii_lowercase() as u8 - b'a') as usize;
            counts[index] += 1;
        }
    }

    counts
}

/// Relative letter frequencies of a text, a-z.
///
/// # Returns
///
/// `AnalysisError::EmptyInput` when the text has zero alphabetic
/// characters, since a frequency distribution is undefined there.
pub fn letter_frequencies(text: &str) -> Result<[f64; 26]> {
    let counts = letter_counts(text);
    let total: u32 = counts.iter().sum();

    if total == 0 {
        return Err(AnalysisError::EmptyInput);
    }

    let mut frequencies = [0.0; 26];
    for i in 0..ALPHABET_LEN {
        frequencies[i] = counts[i] as f64 / total as f64;
    }

    Ok(frequencies)
}

/// Chi-squared statistic between an observed and an expected distribution.
///
/// Expected frequencies are floored at 0.01 to avoid division blow-up for
/// letters with negligible expected frequency.
pub fn chi_squared(observed: &[f64; 26], expected: &[f64; 26]) -> f64 {
    let mut chi = 0.0;
    for i in 0..ALPHABET_LEN {
        let exp = expected[i].max(EXPECTED_FLOOR);
        let diff = observed[i] - expected[i];
        chi += diff * diff / exp;
    }
    chi
}

/// Calculates the Index of Coincidence (IC) for the given text.
///
/// Returns 0.0 if the text has fewer than 2 alphabetic characters.
pub fn index_of_coincidence(text: &str) -> f64 {
    let counts: [u32; 26] = letter_counts(text);
    let total: u32 = counts.iter().sum();

    if total < 2 {
        return 0.0;
    }

    let numerator: f64 = counts
        .iter()
        .map(|&freq| freq as f64 * freq.saturating_sub(1) as f64)
        .sum();
    let denominator = total as f64 * (total - 1) as f64;
    numerator / denominator
}
