//! Kasiski examination: repeated n-gram spacings reveal the key length

use std::collections::HashMap;

use crate::alphabet::letters_only;
use crate::error::{AnalysisError, Result};

/// Shortest n-gram considered by the repeat scan
const MIN_NGRAM: usize = 2;
/// Longest n-gram considered by the repeat scan
const MAX_NGRAM: usize = 4;
/// Candidate key lengths tested by the divisibility rule
const MIN_KEY_LENGTH: usize = 2;
const MAX_KEY_LENGTH: usize = 16;
/// Fraction of spacings that must be divisible for a length to qualify
const DIVISIBILITY_THRESHOLD: f64 = 0.80;
/// Largest factor considered by the factor-count ranking
const MAX_FACTOR: usize = 20;
/// Fallback lengths when the ciphertext shows too little structure
pub const FALLBACK_KEY_LENGTHS: [usize; 3] = [5, 6, 7];

/// Repeated n-grams of the letters-only ciphertext, mapped to the ordered
/// positions at which they occur.
pub type RepeatRecord = HashMap<String, Vec<usize>>;

/// Finds every n-gram (lengths 2-4) that occurs at least twice in the
/// letters-only, case-folded form of `text`.
///
/// # Returns
///
/// A map from n-gram to its ordered occurrence positions. Only n-grams
/// with two or more occurrences are kept.
pub fn find_repeats(text: &str) -> RepeatRecord {
    let clean = letters_only(text);
    let mut repeats: RepeatRecord = HashMap::new();

    for n in MIN_NGRAM..=MAX_NGRAM {
        if n > clean.len() {
            break;
        }
        for start in 0..=(clean.len() - n) {
            let ngram = &clean[start..start + n];
            repeats.entry(ngram.to_string()).or_default().push(start);
        }
    }

    repeats.retain(|_, positions| positions.len() > 1);
    repeats
}

/// Spacings between successive occurrences of each repeated n-gram.
pub fn spacings(repeats: &RepeatRecord) -> Vec<usize> {
    let mut all = Vec::new();
    for positions in repeats.values() {
        for pair in positions.windows(2) {
            all.push(pair[1] - pair[0]);
        }
    }
    all
}

/// For each candidate key length, the fraction of spacings it divides.
///
/// Returned in ascending length order so ties resolve deterministically.
pub fn key_length_scores(spacings: &[usize]) -> Vec<(usize, f64)> {
    let total = spacings.len() as f64;
    (MIN_KEY_LENGTH..=MAX_KEY_LENGTH)
        .map(|length| {
            let divisible = spacings.iter().filter(|&&s| s % length == 0).count();
            (length, divisible as f64 / total)
        })
        .collect()
}

/// Infers the most probable key length from repeat spacings.
///
/// Candidate lengths 2-16 are scored by the fraction of spacings they
/// divide; of those clearing 0.80 the largest wins, since every spacing a
/// key length divides is also divided by its factors.
///
/// # Returns
///
/// `NoRepeatsFound` when there are zero spacings, `NoKeyLengthCandidate`
/// when no length clears the threshold. Both are recoverable: fall back to
/// [`FALLBACK_KEY_LENGTHS`] or widen the search.
pub fn infer_key_length(repeats: &RepeatRecord) -> Result<usize> {
    let spacings = spacings(repeats);
    if spacings.is_empty() {
        return Err(AnalysisError::NoRepeatsFound);
    }

    key_length_scores(&spacings)
        .into_iter()
        .filter(|&(_, fraction)| fraction > DIVISIBILITY_THRESHOLD)
        .map(|(length, _)| length)
        .max()
        .ok_or(AnalysisError::NoKeyLengthCandidate)
}

/// Ranks candidate key lengths by how often they divide repeat spacings,
/// counting every factor of every spacing up to 20.
///
/// # Arguments
///
/// * `repeats` - Output of [`find_repeats`].
/// * `max_candidates` - How many top candidates to return.
///
/// # Returns
///
/// Up to `max_candidates` lengths, best first; [`FALLBACK_KEY_LENGTHS`]
/// when the ciphertext yields no usable spacings.
pub fn candidate_key_lengths(repeats: &RepeatRecord, max_candidates: usize) -> Vec<usize> {
    let spacings = spacings(repeats);

    let mut factor_counts: HashMap<usize, usize> = HashMap::new();
    for &spacing in &spacings {
        for factor in 2..=MAX_FACTOR.min(spacing) {
            if spacing % factor == 0 {
                *factor_counts.entry(factor).or_default() += 1;
            }
        }
    }

    let mut ranked: Vec<(usize, usize)> = factor_counts.into_iter().collect();
    // Highest count first; ties broken by the smaller length
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let candidates: Vec<usize> = ranked
        .into_iter()
        .take(max_candidates)
        .map(|(factor, _)| factor)
        .collect();

    if candidates.is_empty() {
        FALLBACK_KEY_LENGTHS[..max_candidates.min(FALLBACK_KEY_LENGTHS.len())].to_vec()
    } else {
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher;

    #[test]
    fn test_key_length_recovered_from_encrypted_english() {
        // 250 letters of English under a 5-letter key: 5 must rank among
        // the top candidate lengths
        let plaintext = "it was a bright cold day in april and the clocks were \
striking thirteen winston smith his chin nuzzled into his breast in an effort \
to escape the vile wind slipped quickly through the glass doors of victory \
mansions though not quickly enough to prevent a swirl of gritty dust from \
entering along with him";
        let encrypted = cipher::encrypt(plaintext, "lemon").unwrap();

        let repeats = find_repeats(&encrypted);
        let candidates = candidate_key_lengths(&repeats, 3);
        assert!(candidates.contains(&5));
    }

    #[test]
    fn test_find_repeats_records_positions() {
        // "abcxabc": "abc" at 0 and 4, "ab" at 0 and 4, "bc" at 1 and 5
        let repeats = find_repeats("abcxabc");
        assert_eq!(repeats.get("abc"), Some(&vec![0, 4]));
        assert_eq!(repeats.get("ab"), Some(&vec![0, 4]));
        assert_eq!(repeats.get("bc"), Some(&vec![1, 5]));
        assert!(!repeats.contains_key("cx"));
    }

    #[test]
    fn test_find_repeats_ignores_case_and_punctuation() {
        let plain = find_repeats("abcxabc");
        let noisy = find_repeats("AB!C x a-bc");
        assert_eq!(plain.get("abc"), noisy.get("abc"));
    }

    #[test]
    fn test_no_repeats_found() {
        let repeats = find_repeats("abcdefg");
        assert!(matches!(
            infer_key_length(&repeats),
            Err(AnalysisError::NoRepeatsFound)
        ));
    }

    #[test]
    fn test_infer_key_length_prefers_common_divisor() {
        // Spacings 10, 15, 25: only 5 divides them all
        let mut repeats = RepeatRecord::new();
        repeats.insert("abc".to_string(), vec![0, 10, 25, 50]);
        assert_eq!(infer_key_length(&repeats).unwrap(), 5);
    }

    #[test]
    fn test_infer_key_length_prefers_longer_when_ambiguous() {
        // Spacings all 12: 2, 3, 4, 6 and 12 qualify; the longest wins
        let mut repeats = RepeatRecord::new();
        repeats.insert("abcd".to_string(), vec![0, 12, 24]);
        assert_eq!(infer_key_length(&repeats).unwrap(), 12);
    }

    #[test]
    fn test_no_candidate_above_threshold() {
        // Coprime spacings: no length divides more than 80% of them
        let mut repeats = RepeatRecord::new();
        repeats.insert("ab".to_string(), vec![0, 7, 18, 31]);
        assert!(matches!(
            infer_key_length(&repeats),
            Err(AnalysisError::NoKeyLengthCandidate)
        ));
    }

    #[test]
    fn test_candidate_key_lengths_fallback() {
        let repeats = RepeatRecord::new();
        assert_eq!(candidate_key_lengths(&repeats, 3), vec![5, 6, 7]);
    }

    #[test]
    fn test_candidate_key_lengths_ranked_by_factor_count() {
        // Spacings 10, 15, 25: factor 5 divides all three, 2 and 3 one each
        let mut repeats = RepeatRecord::new();
        repeats.insert("abc".to_string(), vec![0, 10, 25, 50]);
        let candidates = candidate_key_lengths(&repeats, 3);
        assert_eq!(candidates[0], 5);
    }

    #[test]
    fn test_key_length_scores_fractions() {
        let scores = key_length_scores(&[10, 20, 30]);
        let five = scores.iter().find(|&&(l, _)| l == 5).unwrap();
        assert!((five.1 - 1.0).abs() < 1e-12);
        let three = scores.iter().find(|&&(l, _)| l == 3).unwrap();
        assert!((three.1 - 1.0 / 3.0).abs() < 1e-12);
    }
}
