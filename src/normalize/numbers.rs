//! Numeral expansion
//!
//! Five rewrite passes, applied in order. Each pass consumes every match
//! before the next one runs, so later passes only see what earlier ones left
//! behind:
//!
//! 1. grouping periods (`1.234` → `1234`)
//! 2. currency (`€3,50` → `drei Euro fünfzig Cent`)
//! 3. decimal comma (`2,5` → `2 Komma 5`)
//! 4. ordinals (`5.` → `fünfte`)
//! 5. remaining integers (`-12` → `minus zwölf`)

use regex::{Captures, Regex};

use crate::normalize::numerals::GermanNumerals;

/// One regex rewrite pass
pub struct RewritePass {
    pub name: &'static str,
    pub pattern: Regex,
    pub handler: fn(&Captures) -> String,
}

impl RewritePass {
    fn new(name: &'static str, pattern: &str, handler: fn(&Captures) -> String) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("numeral pattern is valid"),
            handler,
        }
    }

    /// Applies the pass to every match in `text`
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures| (self.handler)(caps))
            .into_owned()
    }
}

lazy_static::lazy_static! {
    /// Numeral passes in application order
    pub static ref NUMBER_PASSES: Vec<RewritePass> = vec![
        RewritePass::new("grouping", r"([0-9][0-9.]+[0-9])", remove_periods),
        RewritePass::new("currency", r"(?i)(€|chf|£)([0-9.]*[0-9]+(?:,[0-9]+)*)", expand_currency),
        RewritePass::new("decimal", r"([0-9]+,[0-9]+)", expand_decimal_point),
        RewritePass::new("ordinal", r"([0-9]+)\.", expand_ordinal),
        RewritePass::new("cardinal", r"-?[0-9]+", expand_number),
    ];
}

/// Runs all numeral passes over `text`
pub fn normalize_numbers(text: &str) -> String {
    let mut result = text.to_string();
    for pass in NUMBER_PASSES.iter() {
        let next = pass.apply(&result);
        if next != result {
            tracing::debug!("numeral pass '{}': {:?} -> {:?}", pass.name, result, next);
        }
        result = next;
    }
    result
}

// ============================================================================
// Currency
// ============================================================================

/// Unit nouns for one currency, keyed by the value buckets
/// 0.01 / 0.02 (minor unit) and 1 / 2 (major unit).
/// The `2` bucket doubles as the fallback for every other amount.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyForms {
    pub symbol: &'static str,
    pub minor_one: &'static str,
    pub minor_other: &'static str,
    pub major_one: &'static str,
    pub major_other: &'static str,
}

pub const CURRENCIES: [CurrencyForms; 3] = [
    CurrencyForms {
        symbol: "€",
        minor_one: "Cent",
        minor_other: "Cent",
        major_one: "Euro",
        major_other: "Euro",
    },
    CurrencyForms {
        symbol: "CHF",
        minor_one: "Rappen",
        minor_other: "Rappen",
        major_one: "Schweizer Franken",
        major_other: "Schweizer Franken",
    },
    CurrencyForms {
        symbol: "£",
        minor_one: "Penny",
        minor_other: "Pence",
        major_one: "Pfund",
        major_other: "Pfund",
    },
];

impl CurrencyForms {
    /// Looks up a currency by symbol, case-insensitive (`chf` matches `CHF`)
    pub fn lookup(symbol: &str) -> Option<&'static CurrencyForms> {
        CURRENCIES
            .iter()
            .find(|c| c.symbol.eq_ignore_ascii_case(symbol))
    }

    fn major(&self, amount: u64) -> &'static str {
        if amount == 1 {
            self.major_one
        } else {
            self.major_other
        }
    }

    fn minor(&self, hundredths: u64) -> &'static str {
        if hundredths == 1 {
            self.minor_one
        } else {
            self.minor_other
        }
    }
}

/// Spells a currency amount such as `3,50`. Grouping periods are ignored,
/// the fraction is read as hundredths (`3,5` is fifty cents, `3,505` too).
pub fn spell_amount(value: &str, currency: &CurrencyForms) -> String {
    let cleaned = value.replace('.', "");
    let parts: Vec<&str> = cleaned.split(',').collect();
    if parts.len() > 2 {
        tracing::debug!("malformed currency amount: {}", value);
        return format!("{} {}", value, currency.major_other);
    }

    let mut text = Vec::new();

    match parts[0].parse::<u64>() {
        Ok(0) => {}
        Ok(integer) => text.push(format!(
            "{} {}",
            GermanNumerals::to_words_unsigned(integer),
            currency.major(integer)
        )),
        // too wide for u64: read digit by digit like the cardinal pass
        Err(_) if !parts[0].is_empty() => text.push(format!(
            "{} {}",
            GermanNumerals::digits_to_words(parts[0]),
            currency.major_other
        )),
        Err(_) => {}
    }

    let fraction = parts.get(1).map(|f| hundredths(f)).unwrap_or(0);
    if fraction > 0 {
        text.push(format!(
            "{} {}",
            GermanNumerals::to_words_unsigned(fraction),
            currency.minor(fraction)
        ));
    }

    if text.is_empty() {
        return format!("null {}", currency.major_other);
    }
    text.join(" ")
}

/// First two fraction digits, right-padded (`"5"` → 50, `"059"` → 5)
fn hundredths(fraction: &str) -> u64 {
    let mut digits: String = fraction.chars().take(2).collect();
    while !digits.is_empty() && digits.len() < 2 {
        digits.push('0');
    }
    parse_or_zero(&digits)
}

fn parse_or_zero(digits: &str) -> u64 {
    if digits.is_empty() {
        0
    } else {
        digits.parse().unwrap_or(0)
    }
}

// ============================================================================
// Pass handlers
// ============================================================================

fn remove_periods(caps: &Captures) -> String {
    caps[1].replace('.', "")
}

fn expand_currency(caps: &Captures) -> String {
    match CurrencyForms::lookup(&caps[1]) {
        Some(currency) => spell_amount(&caps[2], currency),
        None => caps[0].to_string(),
    }
}

fn expand_decimal_point(caps: &Captures) -> String {
    caps[1].replace(',', " Komma ")
}

fn expand_ordinal(caps: &Captures) -> String {
    match caps[1].parse::<u64>() {
        Ok(n) => GermanNumerals::to_ordinal_words(n),
        Err(_) => format!("{}.", GermanNumerals::digits_to_words(&caps[1])),
    }
}

fn expand_number(caps: &Captures) -> String {
    let raw = &caps[0];
    match raw.parse::<i64>() {
        Ok(n) => GermanNumerals::to_words(n),
        // Longer than i64: read digit by digit
        Err(_) => {
            let digits = raw.trim_start_matches('-');
            let spelled = GermanNumerals::digits_to_words(digits);
            if raw.starts_with('-') {
                format!("minus {}", spelled)
            } else {
                spelled
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_periods_removed() {
        assert_eq!(normalize_numbers("1.234"), "eintausendzweihundertvierunddreißig");
        assert_eq!(
            normalize_numbers("1.000.000 leute"),
            "eine Million leute"
        );
    }

    #[test]
    fn test_currency_euro() {
        assert_eq!(normalize_numbers("€3,50"), "drei Euro fünfzig Cent");
        assert_eq!(normalize_numbers("€1"), "eins Euro");
        assert_eq!(normalize_numbers("€0,01"), "eins Cent");
    }

    #[test]
    fn test_currency_pound_inflection() {
        assert_eq!(normalize_numbers("£0,01"), "eins Penny");
        assert_eq!(normalize_numbers("£2,02"), "zwei Pfund zwei Pence");
    }

    #[test]
    fn test_currency_lowercase_chf() {
        assert_eq!(normalize_numbers("chf10"), "zehn Schweizer Franken");
    }

    #[test]
    fn test_currency_keeps_sentence_comma() {
        assert_eq!(normalize_numbers("€3, bitte"), "drei Euro, bitte");
    }

    #[test]
    fn test_currency_zero() {
        assert_eq!(normalize_numbers("€0,00"), "null Euro");
    }

    #[test]
    fn test_currency_fraction_truncated() {
        assert_eq!(spell_amount("3,5", &CURRENCIES[0]), "drei Euro fünfzig Cent");
        assert_eq!(spell_amount("3,509", &CURRENCIES[0]), "drei Euro fünfzig Cent");
    }

    #[test]
    fn test_currency_malformed_fallback() {
        assert_eq!(spell_amount("1,2,3", &CURRENCIES[0]), "1,2,3 Euro");
    }

    #[test]
    fn test_decimal_comma() {
        assert_eq!(normalize_numbers("2,5"), "zwei Komma fünf");
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(normalize_numbers("am 5. mai"), "am fünfte mai");
    }

    #[test]
    fn test_negative_number() {
        assert_eq!(normalize_numbers("-12 grad"), "minus zwölf grad");
    }

    #[test]
    fn test_huge_number_read_as_digits() {
        assert_eq!(
            normalize_numbers("99999999999999999999"),
            vec!["neun"; 20].join(" ")
        );
    }

    #[test]
    fn test_huge_currency_amount_read_as_digits() {
        let digits = vec!["neun"; 20].join(" ");
        assert_eq!(
            normalize_numbers("€99999999999999999999"),
            format!("{} Euro", digits)
        );
        assert_eq!(
            normalize_numbers("€99999999999999999999,50"),
            format!("{} Euro fünfzig Cent", digits)
        );
    }

    #[test]
    fn test_text_without_digits_unchanged() {
        assert_eq!(normalize_numbers("hallo welt."), "hallo welt.");
    }
}
