//! Grapheme-to-phoneme models
//!
//! [`PhonemeModel`] is the seam for the word-level G2P model. [`LexiconG2p`]
//! implements it from a pronunciation dictionary.

use std::path::Path;

use crate::dictionary::{self, PronunciationMap};
use crate::error::Result;

/// Word → phonetic symbols
pub trait PhonemeModel: Send + Sync {
    fn convert(&self, word: &str) -> Result<Vec<String>>;
}

/// Dictionary-backed G2P
///
/// Words are looked up uppercased and their syllables flattened. A word
/// without letters or digits (punctuation) comes back as a single symbol;
/// any other unknown word is spelled out letter by letter.
pub struct LexiconG2p {
    entries: PronunciationMap,
}

impl LexiconG2p {
    pub fn new(entries: PronunciationMap) -> Self {
        Self { entries }
    }

    /// Loads through the dictionary cache
    pub fn from_dictionary(dictionary_path: &Path, cache_path: &Path) -> Result<Self> {
        let load = dictionary::load_or_build(dictionary_path, cache_path)?;
        for skipped in &load.skipped {
            tracing::debug!(
                "dictionary line {} skipped ({}): {}",
                skipped.line_number,
                skipped.reason,
                skipped.line
            );
        }
        Ok(Self::new(load.entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup(&self, word: &str) -> Option<Vec<String>> {
        self.entries
            .get(&word.to_uppercase())
            .map(|syllables| syllables.iter().flatten().cloned().collect())
    }
}

impl PhonemeModel for LexiconG2p {
    fn convert(&self, word: &str) -> Result<Vec<String>> {
        if let Some(phones) = self.lookup(word) {
            return Ok(phones);
        }

        if !word.chars().any(char::is_alphanumeric) {
            return Ok(vec![word.to_string()]);
        }

        tracing::warn!("no pronunciation for {:?}, spelling letters", word);
        Ok(word
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .map(|c| c.to_string())
            .collect())
    }
}
