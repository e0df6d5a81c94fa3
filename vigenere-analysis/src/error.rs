//! Error types for cryptanalysis operations

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AnalysisError {
    #[error("Invalid key (must contain at least one letter)")]
    InvalidKey,

    #[error("No alphabetic content to analyze")]
    EmptyInput,

    #[error("No repeated sequences found; try a longer ciphertext")]
    NoRepeatsFound,

    #[error("No key length candidate cleared the spacing threshold")]
    NoKeyLengthCandidate,

    #[error("Derived key stream has no repeating period (texts misaligned?)")]
    KeyNotPeriodic,

    #[error("Wordlist unavailable: {0}")]
    ResourceUnavailable(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
