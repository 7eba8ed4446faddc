//! Tokenizers
//!
//! [`Tokenizer`] is the seam for the subword tokenizer. Two implementations:
//! - [`BasicTokenizer`]: word / punctuation split by character class, no
//!   model files needed
//! - [`HfTokenizer`]: a pretrained WordPiece `tokenizer.json`
//!   (feature `hf-tokenizer`)

use crate::error::Result;
use crate::g2p::types::Token;

/// Subword tokenizer contract
pub trait Tokenizer: Send + Sync {
    /// Splits `text` into tokens; continuation pieces carry a `#` prefix
    fn tokenize(&self, text: &str) -> Result<Vec<Token>>;
}

/// Character class
#[derive(Debug, Clone, Copy, PartialEq)]
enum CharClass {
    /// Letters, digits, combining marks
    Word,
    Whitespace,
    /// Punctuation / symbols, one token per character
    Symbol,
}

/// Splits text into words and single punctuation characters
#[derive(Debug, Clone, Default)]
pub struct BasicTokenizer;

impl BasicTokenizer {
    pub fn new() -> Self {
        Self
    }

    fn split(text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current = String::new();

        for ch in text.chars() {
            match Self::classify_char(ch) {
                CharClass::Word => current.push(ch),
                CharClass::Whitespace => {
                    if !current.is_empty() {
                        tokens.push(Token::new(std::mem::take(&mut current)));
                    }
                }
                CharClass::Symbol => {
                    if !current.is_empty() {
                        tokens.push(Token::new(std::mem::take(&mut current)));
                    }
                    tokens.push(Token::new(ch.to_string()));
                }
            }
        }

        if !current.is_empty() {
            tokens.push(Token::new(current));
        }

        tokens
    }

    fn classify_char(ch: char) -> CharClass {
        if ch.is_alphanumeric() || Self::is_combining_mark(ch) {
            CharClass::Word
        } else if ch.is_whitespace() {
            CharClass::Whitespace
        } else {
            CharClass::Symbol
        }
    }

    /// Combining Diacritical Marks block
    fn is_combining_mark(ch: char) -> bool {
        (0x0300..=0x036F).contains(&(ch as u32))
    }
}

impl Tokenizer for BasicTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        Ok(Self::split(text))
    }
}

#[cfg(feature = "hf-tokenizer")]
pub use hf::HfTokenizer;

#[cfg(feature = "hf-tokenizer")]
mod hf {
    use std::path::Path;

    use crate::error::{G2pError, Result};
    use crate::g2p::types::Token;

    /// Pretrained HuggingFace tokenizer (e.g. a cased German BERT WordPiece)
    pub struct HfTokenizer {
        inner: tokenizers::Tokenizer,
    }

    impl HfTokenizer {
        /// Loads a `tokenizer.json`
        pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
            let inner = tokenizers::Tokenizer::from_file(path.as_ref()).map_err(|e| {
                G2pError::Tokenizer(format!(
                    "failed to load {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?;
            tracing::info!("loaded tokenizer from {}", path.as_ref().display());
            Ok(Self { inner })
        }
    }

    impl super::Tokenizer for HfTokenizer {
        fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
            let encoding = self
                .inner
                .encode(text, false)
                .map_err(|e| G2pError::Tokenizer(e.to_string()))?;
            Ok(encoding.get_tokens().iter().map(Token::new).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: Vec<Token>) -> Vec<String> {
        tokens.into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_words_and_punctuation() {
        let tokens = BasicTokenizer::new().tokenize("hallo, welt!").unwrap();
        assert_eq!(texts(tokens), vec!["hallo", ",", "welt", "!"]);
    }

    #[test]
    fn test_umlauts_stay_in_word() {
        let tokens = BasicTokenizer::new().tokenize("schöne grüße").unwrap();
        assert_eq!(texts(tokens), vec!["schöne", "grüße"]);
    }

    #[test]
    fn test_combining_mark_stays_in_word() {
        let tokens = BasicTokenizer::new().tokenize("gru\u{0308}n").unwrap();
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_no_continuation_tokens() {
        let tokens = BasicTokenizer::new().tokenize("ein langer satz").unwrap();
        assert!(tokens.iter().all(|t| !t.is_continuation()));
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(BasicTokenizer::new().tokenize("").unwrap().is_empty());
        assert!(BasicTokenizer::new().tokenize("  \n ").unwrap().is_empty());
    }
}
