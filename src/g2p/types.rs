//! G2P type definitions

use serde::{Deserialize, Serialize};

/// Marker prefix of a continuation token (`##en`)
pub const CONTINUATION_MARKER: char = '#';

/// Boundary symbol padded around a sentence
pub const BOUNDARY: &str = "_";

/// Subword token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form as emitted by the tokenizer, marker included
    pub text: String,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Whether this token attaches to the previous one without a space
    pub fn is_continuation(&self) -> bool {
        self.text.starts_with(CONTINUATION_MARKER)
    }

    /// Surface form with every continuation marker removed
    pub fn surface(&self) -> String {
        self.text.replace(CONTINUATION_MARKER, "")
    }
}

/// Consecutive tokens that make up one word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordGroup {
    pub tokens: Vec<Token>,
}

impl WordGroup {
    /// The reconstructed word (`Hall` + `##o` → `Hallo`)
    pub fn word(&self) -> String {
        self.tokens.iter().map(Token::surface).collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Groups tokens into words: every non-continuation token opens a group.
/// A leading continuation token opens a group of its own.
pub fn group_tokens(tokens: &[Token]) -> Vec<WordGroup> {
    let mut groups: Vec<WordGroup> = Vec::new();
    for token in tokens {
        if token.is_continuation() {
            if let Some(group) = groups.last_mut() {
                group.tokens.push(token.clone());
                continue;
            }
        }
        groups.push(WordGroup {
            tokens: vec![token.clone()],
        });
    }
    groups
}

/// Aligned G2P output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct G2pOutput {
    /// Phoneme symbols
    pub phonemes: Vec<String>,
    /// One tone per phoneme (0 = unmarked)
    pub tones: Vec<u8>,
    /// Phoneme count per token
    pub word2ph: Vec<usize>,
}

impl G2pOutput {
    /// `len(phonemes) == len(tones)` and `sum(word2ph) == len(phonemes)`
    pub fn is_aligned(&self) -> bool {
        self.phonemes.len() == self.tones.len()
            && self.word2ph.iter().sum::<usize>() == self.phonemes.len()
    }

    /// Adds one boundary symbol at each end, each counted as its own token
    pub fn pad_boundaries(&mut self) {
        self.phonemes.insert(0, BOUNDARY.to_string());
        self.phonemes.push(BOUNDARY.to_string());
        self.tones.insert(0, 0);
        self.tones.push(0);
        self.word2ph.insert(0, 1);
        self.word2ph.push(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(texts: &[&str]) -> Vec<Token> {
        texts.iter().map(|t| Token::new(*t)).collect()
    }

    #[test]
    fn test_group_tokens() {
        let groups = group_tokens(&tokens(&["Guten", "Mor", "##gen", ",", "Welt"]));
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[1].word(), "Morgen");
        assert_eq!(groups[1].len(), 2);
        assert_eq!(groups[2].word(), ",");
    }

    #[test]
    fn test_leading_continuation_opens_group() {
        let groups = group_tokens(&tokens(&["##en", "Haus"]));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].word(), "en");
    }

    #[test]
    fn test_pad_boundaries() {
        let mut output = G2pOutput {
            phonemes: vec!["a".to_string()],
            tones: vec![0],
            word2ph: vec![1],
        };
        output.pad_boundaries();
        assert_eq!(output.phonemes, vec!["_", "a", "_"]);
        assert_eq!(output.tones, vec![0, 0, 0]);
        assert_eq!(output.word2ph, vec![1, 1, 1]);
        assert!(output.is_aligned());
    }
}
