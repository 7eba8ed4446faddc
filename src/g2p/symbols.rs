//! Phoneme symbol policy
//!
//! The recognized phoneme inventory, tone-suffix splitting and the
//! punctuation substitution table.

use std::collections::{HashMap, HashSet};

/// Marker for an empty symbol
pub const UNKNOWN: &str = "UNK";

/// Recognized German phoneme inventory
pub struct PhonemeInventory {
    symbols: HashSet<&'static str>,
}

impl PhonemeInventory {
    pub fn new() -> Self {
        let symbols: HashSet<&'static str> = [
            // Consonants
            "p", "b", "t", "d", "k", "ɡ", "f", "v", "s", "z", "ʃ", "ʒ", "ç", "x", "h", "pf", "ts",
            "tʃ", "m", "n", "ŋ", "l", "ʁ", "j", "ʋ", "w",
            // Vowels
            "i", "iː", "y", "yː", "u", "uː", "e", "eː", "ø", "øː", "o", "oː", "ɛ", "ɛː", "œ", "ɔ",
            "a", "aː", "ə", "ɐ", "ɪ", "ʊ", "ʏ",
            // Diphthongs
            "aɪ", "aʊ", "ɔʏ",
            // Glottal stop, schwa-like
            "ʔ", "ɜ",
        ]
        .into_iter()
        .collect();

        Self { symbols }
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for PhonemeInventory {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits a trailing tone digit off a phoneme
///
/// `"a1"` → `("a", 2)`; without a trailing digit the tone is 0.
/// The base symbol is always lower-cased.
pub fn refine(phoneme: &str) -> (String, u8) {
    let mut chars = phoneme.chars();
    if let Some(last) = chars.next_back() {
        if let Some(digit) = last.to_digit(10) {
            return (chars.as_str().to_lowercase(), digit as u8 + 1);
        }
    }
    (phoneme.to_lowercase(), 0)
}

/// Punctuation substitution table
pub struct SymbolSubstitutions {
    map: HashMap<&'static str, &'static str>,
}

impl SymbolSubstitutions {
    pub fn new() -> Self {
        let map = HashMap::from([
            ("：", ","),
            ("；", ","),
            ("，", ","),
            ("。", "."),
            ("！", "!"),
            ("？", "?"),
            ("\n", "."),
            ("·", ","),
            ("、", ","),
            ("...", "…"),
            ("v", "V"),
            ("–", "-"),
        ]);
        Self { map }
    }

    /// Maps a symbol through the table. Unmapped symbols pass through,
    /// the empty symbol becomes [`UNKNOWN`].
    pub fn substitute(&self, symbol: &str) -> String {
        let mapped = self.map.get(symbol).copied().unwrap_or(symbol);
        if mapped.is_empty() {
            UNKNOWN.to_string()
        } else {
            mapped.to_string()
        }
    }
}

impl Default for SymbolSubstitutions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refine_with_tone() {
        assert_eq!(refine("a1"), ("a".to_string(), 2));
        assert_eq!(refine("AX0"), ("ax".to_string(), 1));
    }

    #[test]
    fn test_refine_without_tone() {
        assert_eq!(refine("aː"), ("aː".to_string(), 0));
        assert_eq!(refine("Pf"), ("pf".to_string(), 0));
        assert_eq!(refine(""), (String::new(), 0));
    }

    #[test]
    fn test_substitute() {
        let table = SymbolSubstitutions::new();
        assert_eq!(table.substitute("v"), "V");
        assert_eq!(table.substitute("。"), ".");
        assert_eq!(table.substitute("..."), "…");
        assert_eq!(table.substitute("–"), "-");
        assert_eq!(table.substitute("ʃ"), "ʃ");
        assert_eq!(table.substitute(""), "UNK");
    }

    #[test]
    fn test_inventory() {
        let inventory = PhonemeInventory::new();
        assert!(inventory.contains("aɪ"));
        assert!(inventory.contains("ʁ"));
        assert!(!inventory.contains(","));
        assert!(!inventory.contains("V"));
        assert_eq!(inventory.len(), 54);
    }
}
