//! Frontend: normalization followed by G2P

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::config::FrontendConfig;
use crate::error::{G2pError, Result};
use crate::g2p::{BasicTokenizer, G2pEngine, G2pOutput, LexiconG2p, PhonemeModel, Tokenizer};
use crate::normalize::TextNormalizer;

/// Result of one frontend call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendResult {
    /// Input text
    pub raw: String,
    /// Text after normalization
    pub normalized: String,
    /// Aligned phonemes / tones / word2ph
    #[serde(flatten)]
    pub output: G2pOutput,
    /// Processing time (microseconds)
    pub elapsed_us: u64,
}

/// Text → phonemes
pub struct Frontend {
    normalizer: TextNormalizer,
    engine: G2pEngine,
    pad_boundaries: bool,
}

impl Frontend {
    /// Creates a frontend from explicitly constructed collaborators
    pub fn new(
        tokenizer: Arc<dyn Tokenizer>,
        model: Arc<dyn PhonemeModel>,
        pad_boundaries: bool,
    ) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            engine: G2pEngine::new(tokenizer, model),
            pad_boundaries,
        }
    }

    /// Builds tokenizer and model from a configuration
    ///
    /// A dictionary is required: it backs the G2P model.
    pub fn from_config(config: &FrontendConfig) -> Result<Self> {
        config.validate()?;

        let tokenizer = Self::tokenizer_from_config(config)?;

        let dictionary_path = config
            .dictionary_path
            .as_ref()
            .ok_or_else(|| G2pError::Config("dictionary_path is required".to_string()))?;
        let cache_path = config.resolved_cache_path()?;
        let model: Arc<dyn PhonemeModel> =
            Arc::new(LexiconG2p::from_dictionary(dictionary_path, &cache_path)?);

        Ok(Self::new(tokenizer, model, config.pad_boundaries))
    }

    #[cfg(feature = "hf-tokenizer")]
    fn tokenizer_from_config(config: &FrontendConfig) -> Result<Arc<dyn Tokenizer>> {
        match &config.tokenizer_path {
            Some(path) => Ok(Arc::new(crate::g2p::HfTokenizer::from_file(path)?)),
            None => Ok(Arc::new(BasicTokenizer::new())),
        }
    }

    #[cfg(not(feature = "hf-tokenizer"))]
    fn tokenizer_from_config(config: &FrontendConfig) -> Result<Arc<dyn Tokenizer>> {
        if config.tokenizer_path.is_some() {
            return Err(G2pError::Config(
                "tokenizer_path requires the hf-tokenizer feature".to_string(),
            ));
        }
        Ok(Arc::new(BasicTokenizer::new()))
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub fn engine(&self) -> &G2pEngine {
        &self.engine
    }

    /// Normalizes `text` and converts it
    pub fn process(&self, text: &str) -> Result<FrontendResult> {
        let start = Instant::now();

        let normalized = self.normalizer.normalize(text);
        let output = self.engine.g2p(&normalized, self.pad_boundaries, None)?;

        let elapsed_us = start.elapsed().as_micros() as u64;
        tracing::debug!(
            "processed {} phoneme(s) in {}us",
            output.phonemes.len(),
            elapsed_us
        );

        Ok(FrontendResult {
            raw: text.to_string(),
            normalized,
            output,
            elapsed_us,
        })
    }
}
