//! Error types for the German G2P frontend.
//!
//! ```text
//! G2pError
//! ├── UnsupportedLanguage(String) -- abbreviation expansion / config for a non-German code
//! ├── Tokenizer(String)           -- external subword tokenizer failed
//! ├── Model(String)               -- external G2P model failed
//! ├── Dictionary(String)          -- pronunciation dictionary unreadable
//! ├── Cache(String)               -- dictionary cache unreadable / unwritable
//! ├── Config(String)              -- invalid configuration
//! ├── Io(std::io::Error)
//! └── Serialization(String)       -- JSON / bincode failures
//! ```
//!
//! Malformed dictionary lines are not errors: they are collected in
//! [`crate::dictionary::DictionaryLoad`] and the load continues.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum G2pError {
    /// Only `"de"` is supported
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    #[error("G2P model error: {0}")]
    Model(String),

    #[error("Dictionary error: {0}")]
    Dictionary(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for G2pError {
    fn from(err: serde_json::Error) -> Self {
        G2pError::Serialization(err.to_string())
    }
}

impl From<bincode::Error> for G2pError {
    fn from(err: bincode::Error) -> Self {
        G2pError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, G2pError>;
