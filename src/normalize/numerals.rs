//! German number spelling
//!
//! Cardinals and ordinals written as one compound word below one million
//! (`einhundertvierunddreißig`), with the large scale words separated by
//! spaces (`zwei Millionen dreihundert`).

const ONES: [&str; 20] = [
    "null", "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun", "zehn",
    "elf", "zwölf", "dreizehn", "vierzehn", "fünfzehn", "sechzehn", "siebzehn", "achtzehn",
    "neunzehn",
];

const TENS: [&str; 10] = [
    "", "zehn", "zwanzig", "dreißig", "vierzig", "fünfzig", "sechzig", "siebzig", "achtzig",
    "neunzig",
];

/// (value, singular, plural)
const SCALES: [(u64, &str, &str); 5] = [
    (1_000_000_000_000_000_000, "Trillion", "Trillionen"),
    (1_000_000_000_000_000, "Billiarde", "Billiarden"),
    (1_000_000_000_000, "Billion", "Billionen"),
    (1_000_000_000, "Milliarde", "Milliarden"),
    (1_000_000, "Million", "Millionen"),
];

/// Spelling style for the scale words above one million
#[derive(Debug, Clone, Copy, PartialEq)]
enum Style {
    /// `eine Million zwei`
    Spaced,
    /// `einmillionzwei`, used as the stem of ordinals; scale words stay
    /// singular (`zweimillionste`)
    Compact,
}

/// German number speller
pub struct GermanNumerals;

impl GermanNumerals {
    /// Cardinal words for a signed integer (`-3` → `minus drei`)
    pub fn to_words(n: i64) -> String {
        if n < 0 {
            format!("minus {}", Self::spell(n.unsigned_abs(), Style::Spaced))
        } else {
            Self::spell(n as u64, Style::Spaced)
        }
    }

    /// Cardinal words for an unsigned integer
    pub fn to_words_unsigned(n: u64) -> String {
        Self::spell(n, Style::Spaced)
    }

    /// Ordinal words (`1` → `erste`, `5` → `fünfte`, `21` → `einundzwanzigste`)
    pub fn to_ordinal_words(n: u64) -> String {
        if n == 0 {
            return "nullte".to_string();
        }

        let last_two = n % 100;
        if (1..20).contains(&last_two) {
            let head = n - last_two;
            let stem = if head == 0 {
                String::new()
            } else {
                Self::spell(head, Style::Compact)
            };
            return format!("{}{}", stem, Self::small_ordinal(last_two));
        }

        format!("{}ste", Self::spell(n, Style::Compact))
    }

    /// Reads a digit string one digit at a time (`"0815"` → `null acht eins fünf`)
    pub fn digits_to_words(digits: &str) -> String {
        digits
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| ONES[d as usize])
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn small_ordinal(n: u64) -> String {
        match n {
            1 => "erste".to_string(),
            3 => "dritte".to_string(),
            7 => "siebte".to_string(),
            8 => "achte".to_string(),
            _ => format!("{}te", ONES[n as usize]),
        }
    }

    fn spell(n: u64, style: Style) -> String {
        if n == 0 {
            return ONES[0].to_string();
        }

        let mut parts: Vec<String> = Vec::new();
        let mut remaining = n;

        for (value, singular, plural) in SCALES {
            if remaining < value {
                continue;
            }
            let count = remaining / value;
            remaining %= value;

            let part = match (style, count) {
                (Style::Spaced, 1) => format!("eine {}", singular),
                (Style::Spaced, _) => format!("{} {}", Self::below_million(count, false), plural),
                (Style::Compact, 1) => format!("ein{}", singular.to_lowercase()),
                (Style::Compact, _) => format!(
                    "{}{}",
                    Self::below_million(count, true),
                    singular.to_lowercase()
                ),
            };
            parts.push(part);
        }

        if remaining > 0 {
            parts.push(Self::below_million(remaining, false));
        }

        match style {
            Style::Spaced => parts.join(" "),
            Style::Compact => parts.concat(),
        }
    }

    /// `as_prefix` spells a trailing one as `ein` (`einhundertein` + `tausend`)
    fn below_million(n: u64, as_prefix: bool) -> String {
        let thousands = n / 1000;
        let rest = n % 1000;
        let mut out = String::new();

        if thousands > 0 {
            out.push_str(&Self::below_thousand(thousands, true));
            out.push_str("tausend");
        }
        if rest > 0 {
            out.push_str(&Self::below_thousand(rest, as_prefix));
        }
        out
    }

    fn below_thousand(n: u64, as_prefix: bool) -> String {
        let hundreds = n / 100;
        let rest = n % 100;
        let mut out = String::new();

        if hundreds > 0 {
            out.push_str(if hundreds == 1 {
                "ein"
            } else {
                ONES[hundreds as usize]
            });
            out.push_str("hundert");
        }
        if rest > 0 {
            out.push_str(&Self::below_hundred(rest, as_prefix));
        }
        out
    }

    fn below_hundred(n: u64, as_prefix: bool) -> String {
        if n == 1 {
            return if as_prefix { "ein" } else { "eins" }.to_string();
        }
        if n < 20 {
            return ONES[n as usize].to_string();
        }

        let tens = TENS[(n / 10) as usize];
        match n % 10 {
            0 => tens.to_string(),
            1 => format!("einund{}", tens),
            unit => format!("{}und{}", ONES[unit as usize], tens),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_cardinals() {
        assert_eq!(GermanNumerals::to_words(0), "null");
        assert_eq!(GermanNumerals::to_words(1), "eins");
        assert_eq!(GermanNumerals::to_words(12), "zwölf");
        assert_eq!(GermanNumerals::to_words(21), "einundzwanzig");
        assert_eq!(GermanNumerals::to_words(30), "dreißig");
        assert_eq!(GermanNumerals::to_words(99), "neunundneunzig");
    }

    #[test]
    fn test_compound_cardinals() {
        assert_eq!(GermanNumerals::to_words(100), "einhundert");
        assert_eq!(GermanNumerals::to_words(101), "einhunderteins");
        assert_eq!(GermanNumerals::to_words(1000), "eintausend");
        assert_eq!(
            GermanNumerals::to_words(1234),
            "eintausendzweihundertvierunddreißig"
        );
        assert_eq!(GermanNumerals::to_words(101_000), "einhunderteintausend");
        assert_eq!(GermanNumerals::to_words(2024), "zweitausendvierundzwanzig");
    }

    #[test]
    fn test_large_cardinals() {
        assert_eq!(GermanNumerals::to_words(1_000_000), "eine Million");
        assert_eq!(GermanNumerals::to_words(2_000_003), "zwei Millionen drei");
        assert_eq!(
            GermanNumerals::to_words(3_000_000_000),
            "drei Milliarden"
        );
    }

    #[test]
    fn test_negative_cardinal() {
        assert_eq!(GermanNumerals::to_words(-5), "minus fünf");
        assert!(GermanNumerals::to_words(i64::MIN).starts_with("minus neun Trillionen"));
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(GermanNumerals::to_ordinal_words(1), "erste");
        assert_eq!(GermanNumerals::to_ordinal_words(3), "dritte");
        assert_eq!(GermanNumerals::to_ordinal_words(5), "fünfte");
        assert_eq!(GermanNumerals::to_ordinal_words(7), "siebte");
        assert_eq!(GermanNumerals::to_ordinal_words(19), "neunzehnte");
        assert_eq!(GermanNumerals::to_ordinal_words(20), "zwanzigste");
        assert_eq!(GermanNumerals::to_ordinal_words(21), "einundzwanzigste");
        assert_eq!(GermanNumerals::to_ordinal_words(100), "einhundertste");
        assert_eq!(GermanNumerals::to_ordinal_words(101), "einhunderterste");
        assert_eq!(GermanNumerals::to_ordinal_words(1_000_000), "einmillionste");
    }

    #[test]
    fn test_ordinal_scale_word_is_singular() {
        assert_eq!(GermanNumerals::to_ordinal_words(2_000_000), "zweimillionste");
        assert_eq!(
            GermanNumerals::to_ordinal_words(5_000_000_000_000),
            "fünfbillionste"
        );
    }

    #[test]
    fn test_digits_to_words() {
        assert_eq!(GermanNumerals::digits_to_words("0815"), "null acht eins fünf");
    }
}
