//! G2P driver
//!
//! Tokenizes, groups subword tokens into words, runs the G2P model per word
//! and aligns the phonemes back onto the tokens.

use std::sync::Arc;

use crate::error::Result;
use crate::g2p::align::distribute;
use crate::g2p::model::PhonemeModel;
use crate::g2p::symbols::{refine, PhonemeInventory, SymbolSubstitutions};
use crate::g2p::tokenizer::Tokenizer;
use crate::g2p::types::{group_tokens, G2pOutput, Token};

/// G2P engine (reusable; tokenizer and model are shared read-only)
pub struct G2pEngine {
    tokenizer: Arc<dyn Tokenizer>,
    model: Arc<dyn PhonemeModel>,
    inventory: PhonemeInventory,
    substitutions: SymbolSubstitutions,
}

impl G2pEngine {
    /// Creates a G2P engine
    ///
    /// # Arguments
    /// * `tokenizer` - subword tokenizer
    /// * `model` - word-level G2P model
    pub fn new(tokenizer: Arc<dyn Tokenizer>, model: Arc<dyn PhonemeModel>) -> Self {
        Self {
            tokenizer,
            model,
            inventory: PhonemeInventory::new(),
            substitutions: SymbolSubstitutions::new(),
        }
    }

    /// Converts `text` into aligned phonemes, tones and word2ph
    ///
    /// `pretokenized` skips the tokenizer. Tokenizer and model errors are
    /// returned unchanged; nothing is returned partially.
    pub fn g2p(
        &self,
        text: &str,
        pad_boundaries: bool,
        pretokenized: Option<&[Token]>,
    ) -> Result<G2pOutput> {
        let tokens = match pretokenized {
            Some(tokens) => tokens.to_vec(),
            None => self.tokenizer.tokenize(text)?,
        };

        let mut output = G2pOutput::default();

        for group in group_tokens(&tokens) {
            let word = group.word();
            let phone_list = self.model.convert(&word)?;

            for phone in &phone_list {
                if self.inventory.contains(phone) {
                    let (base, tone) = refine(phone);
                    output.phonemes.push(base);
                    output.tones.push(tone);
                } else {
                    output.phonemes.push(phone.clone());
                    output.tones.push(0);
                }
            }

            tracing::debug!(
                "word {:?}: {} token(s), {} phoneme(s)",
                word,
                group.len(),
                phone_list.len()
            );
            output
                .word2ph
                .extend(distribute(phone_list.len(), group.len()));
        }

        output.phonemes = output
            .phonemes
            .iter()
            .map(|ph| self.substitutions.substitute(ph))
            .collect();

        if pad_boundaries {
            output.pad_boundaries();
        }

        Ok(output)
    }
}
