//! Grapheme-to-phoneme conversion
//!
//! ## Flow
//! 1. tokenize (or take pretokenized input)
//! 2. group continuation tokens (`##…`) into words
//! 3. word → phonemes via the model
//! 4. split tones off inventory phonemes
//! 5. distribute each word's phoneme count over its tokens
//! 6. substitute punctuation symbols, optionally pad with `_`

mod align;
mod engine;
mod model;
mod symbols;
mod tokenizer;
mod types;

pub use align::distribute;
pub use engine::G2pEngine;
pub use model::{LexiconG2p, PhonemeModel};
pub use symbols::{refine, PhonemeInventory, SymbolSubstitutions, UNKNOWN};
#[cfg(feature = "hf-tokenizer")]
pub use tokenizer::HfTokenizer;
pub use tokenizer::{BasicTokenizer, Tokenizer};
pub use types::{group_tokens, G2pOutput, Token, WordGroup, BOUNDARY, CONTINUATION_MARKER};
