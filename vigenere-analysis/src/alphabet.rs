//! Alphabet primitives shared by the cipher and every attack

/// Number of letters in the cipher alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Returns the alphabet position (0-25) of a letter, folding case.
///
/// # Arguments
///
/// * `c` - An ASCII alphabetic character.
///
/// # Returns
///
/// The position of the letter in the alphabet (a=0, b=1, ..., z=25).
pub fn letter_index(c: char) -> usize {
    debug_assert!(c.is_ascii_alphabetic());
    (c.to_ascii_lowercase() as u8 - b'a') as usize
}

/// Returns the lowercase letter at the given alphabet position (0-25).
pub fn index_letter(index: usize) -> char {
    debug_assert!(index < ALPHABET_LEN);
    (b'a' + index as u8) as char
}

/// Cleans text by keeping only alphabetic characters and converting to lowercase.
pub fn letters_only(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Splits text into lowercase alphabetic words, discarding everything else.
///
/// Used by the dictionary attack to tokenize candidate decryptions.
pub fn tokenize_words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_ascii_lowercase())
        .collect()
}
