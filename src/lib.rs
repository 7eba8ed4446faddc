//! German text frontend for speech synthesis
//!
//! Raw German text → normalized text → phonemes, tones and a word-to-phoneme
//! alignment that maps every subword token to its phoneme count.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use german_g2p::{BasicTokenizer, Frontend, LexiconG2p};
//!
//! let frontend = Frontend::new(Arc::new(BasicTokenizer::new()), Arc::new(lexicon), true);
//! let result = frontend.process("Um 14:30 kostet es €3,50.")?;
//! assert!(result.output.is_aligned());
//! ```

pub mod config;
pub mod dictionary;
pub mod error;
pub mod frontend;
pub mod g2p;
pub mod normalize;

pub use config::FrontendConfig;
pub use error::{G2pError, Result};
pub use frontend::{Frontend, FrontendResult};
pub use g2p::{
    BasicTokenizer, G2pEngine, G2pOutput, LexiconG2p, PhonemeModel, Token, Tokenizer,
};
pub use normalize::{expand_abbreviations, TextNormalizer};

/// Normalizes German text with the default normalizer
pub fn text_normalize(text: &str) -> String {
    TextNormalizer::new().normalize(text)
}
