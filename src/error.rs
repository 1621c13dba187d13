use std::path::PathBuf;
use thiserror::Error;

/// Main error type for spellscore
#[derive(Error, Debug)]
pub enum SpellscoreError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file does not exist
    #[error("Input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A line that cannot be split into misspelling, correction and count
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON report serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenient Result type using SpellscoreError
pub type Result<T> = std::result::Result<T, SpellscoreError>;
