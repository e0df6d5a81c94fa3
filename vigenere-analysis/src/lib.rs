//! # Vigenère Analysis Library
//!
//! This library implements the Vigenère polyalphabetic substitution cipher
//! and a set of automated attacks that recover an unknown key (or the
//! plaintext) from ciphertext alone.
//!
//! ## Components
//!
//! - **Cipher** - the Vigenère transform itself, case-preserving
//! - **Frequency model** - reference letter frequencies and chi-squared scoring
//! - **Kasiski examination** - repeated n-gram spacings reveal the key length
//! - **Key-letter solver** - per-column Caesar recovery by frequency analysis
//! - **Dictionary attack** - wordlist entries tried as keys, ranked by how
//!   much of the decryption is real words
//! - **Known-plaintext attack** - direct key derivation from an aligned pair
//! - **Orchestrator** - composes the above into a tiered cracking strategy
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_analysis::{cipher, crack_cipher, LanguageModel};
//!
//! let encrypted =
//!     cipher::encrypt("meet me at the usual place at noon and bring the papers with you", "secret")?;
//! let results = crack_cipher(&encrypted, None, &LanguageModel::english())?;
//! assert_eq!(results[0].key, "secret");
//! # Ok::<(), vigenere_analysis::AnalysisError>(())
//! ```
//!
//! All operations are pure computations over in-memory strings; the only
//! external resource is an optional wordlist file for the dictionary
//! attack.

// Public modules
pub mod alphabet;
pub mod attack;
pub mod cipher;
pub mod crack;
pub mod error;
pub mod frequency;
pub mod kasiski;
pub mod solver;

// Re-exports for easy access
pub use attack::{
    derive_key, dictionary_attack, CandidateResult, Dictionary, DictionaryAttackOptions,
    RecoveredKey,
};
pub use cipher::Direction;
pub use crack::crack_cipher;
pub use error::{AnalysisError, Result};
pub use frequency::LanguageModel;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
