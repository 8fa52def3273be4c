//! Error types for vaani

use std::io;
use thiserror::Error;

/// Main error type for vaani
#[derive(Error, Debug)]
pub enum VaaniError {
    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for vaani operations
pub type Result<T> = std::result::Result<T, VaaniError>;

impl From<String> for VaaniError {
    fn from(s: String) -> Self {
        VaaniError::Other(s)
    }
}

impl From<&str> for VaaniError {
    fn from(s: &str) -> Self {
        VaaniError::Other(s.to_string())
    }
}
