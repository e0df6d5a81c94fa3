//! Dictionary attack: every wordlist entry tried as a candidate key

use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::alphabet::tokenize_words;
use crate::attack::CandidateResult;
use crate::cipher;
use crate::error::{AnalysisError, Result};

/// Keys tried even when the wordlist does not contain them
const COMMON_KEYS: [&str; 6] = ["hello", "key", "python", "secret", "password", "vigenere"];

/// Shortest word worth trying as a key
const MIN_KEY_WORD_LEN: usize = 2;

/// Case-insensitive word set used both as the key source and as the
/// membership oracle for scoring decryptions.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Builds a dictionary from an iterator of words, case-folding each.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Loads a wordlist file, one word per line.
    ///
    /// # Returns
    ///
    /// `AnalysisError::ResourceUnavailable` when the file cannot be read;
    /// callers typically degrade to the common-key list instead of
    /// aborting.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path)
            .map_err(|e| AnalysisError::ResourceUnavailable(e.to_string()))?;

        let mut words = HashSet::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| AnalysisError::ResourceUnavailable(e.to_string()))?;
            let word = line.trim().to_ascii_lowercase();
            if !word.is_empty() {
                words.insert(word);
            }
        }

        Ok(Self { words })
    }

    /// Membership test, case-folded.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Tuning parameters for [`dictionary_attack`].
#[derive(Clone, Copy, Debug)]
pub struct DictionaryAttackOptions {
    /// Minimum valid-word ratio (exclusive) for a candidate to be kept
    pub threshold: f64,
    /// Maximum number of results returned
    pub max_results: usize,
}

impl Default for DictionaryAttackOptions {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            max_results: 10,
        }
    }
}

/// Tries every dictionary word (plus the fixed common keys) as a Vigenère
/// key and ranks the resulting decryptions by the fraction of their words
/// found in the dictionary.
///
/// Words shorter than two letters are skipped, as are words that are not
/// purely alphabetic (they cannot be Vigenère keys). Candidates whose
/// decryption produces no words at all are discarded. Results are sorted
/// by descending ratio, ties broken lexicographically by key, and
/// truncated to `options.max_results`.
///
/// Raising `options.threshold` never adds results; it only filters.
pub fn dictionary_attack(
    cipher_text: &str,
    dictionary: &Dictionary,
    options: &DictionaryAttackOptions,
) -> Vec<CandidateResult> {
    // Deterministic trial order: sorted union of wordlist and common keys
    let mut candidate_keys: BTreeSet<&str> = dictionary.words.iter().map(String::as_str).collect();
    for key in COMMON_KEYS {
        candidate_keys.insert(key);
    }

    let mut results: Vec<CandidateResult> = Vec::new();

    for word in candidate_keys {
        if word.len() < MIN_KEY_WORD_LEN || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
            continue;
        }

        let decrypted = match cipher::decrypt(cipher_text, word) {
            Ok(text) => text,
            Err(_) => continue,
        };

        let tokens = tokenize_words(&decrypted);
        if tokens.is_empty() {
            continue;
        }

        let valid = tokens.iter().filter(|t| dictionary.contains(t)).count();
        let ratio = valid as f64 / tokens.len() as f64;

        if ratio > options.threshold {
            results.push(CandidateResult {
                key: word.to_string(),
                decrypted,
                score: ratio * 100.0,
                valid_word_ratio: Some(ratio),
            });
        }
    }

    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.key.cmp(&b.key))
    });
    results.truncate(options.max_results);
    results
}
