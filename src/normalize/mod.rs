//! Text normalization
//!
//! Turns raw German text into G2P-ready text.
//!
//! ## Pipeline
//! 1. Unicode NFC
//! 2. lower-casing
//! 3. clock times (`14:30`)
//! 4. numerals, currency, ordinals
//! 5. abbreviations (`z.B.`)
//!
//! Times must run before numerals so `14:30` is read as a time and not as
//! two bare numbers.

mod abbreviations;
mod numbers;
mod numerals;
mod time;

use unicode_normalization::UnicodeNormalization;

pub use abbreviations::{
    expand_abbreviations, Abbreviation, AbbreviationKind, ABBREVIATIONS_DE, GERMAN,
};
pub use numbers::{
    normalize_numbers, spell_amount, CurrencyForms, RewritePass, CURRENCIES, NUMBER_PASSES,
};
pub use numerals::GermanNumerals;
pub use time::{expand_time, spoken_time};

/// German text normalizer
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalizes `text`
    ///
    /// Never fails; text with nothing to rewrite comes back lower-cased.
    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let composed: String = text.nfc().collect();
        let lowered = composed.to_lowercase();
        let timed = expand_time(&lowered);
        let numbered = normalize_numbers(&timed);
        let expanded = abbreviations::expand_german(&numbered);

        tracing::debug!("normalized {:?} -> {:?}", text, expanded);
        expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_plain_text() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("Hallo Welt"), "hallo welt");
    }

    #[test]
    fn test_normalized_text_is_stable() {
        let normalizer = TextNormalizer::new();
        let once = normalizer.normalize("Guten Morgen, wie geht es dir?");
        assert_eq!(normalizer.normalize(&once), once);
    }

    #[test]
    fn test_time_before_numbers() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.normalize("Um 14:30 Uhr"),
            "um halb fünfzehn nachmittags uhr"
        );
    }

    #[test]
    fn test_combined_sentence() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.normalize("Dr. Meier zahlt €3,50 am 5. Mai, d.h. 10% mehr."),
            "Doktor meier zahlt drei Euro fünfzig Cent am fünfte mai, das heißt zehn Prozent mehr."
        );
    }

    #[test]
    fn test_currency_after_lowercasing() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("CHF2"), "zwei Schweizer Franken");
    }

    #[test]
    fn test_decomposed_umlaut_composed() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("Gru\u{0308}n"), "grün");
    }

    #[test]
    fn test_empty() {
        assert_eq!(TextNormalizer::new().normalize(""), "");
    }
}
