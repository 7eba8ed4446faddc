//! Clock time expansion
//!
//! `14:30` → `halb fünfzehn nachmittags`

use regex::{Captures, Regex};

use crate::normalize::numerals::GermanNumerals;

lazy_static::lazy_static! {
    static ref TIME_RE: Regex = Regex::new(
        r"(?x)
        \b
        ((0?[0-9])|(1[0-9])|(2[0-3]))   # hours
        :
        ([0-5][0-9])                    # minutes
        \b",
    )
    .expect("time pattern is valid");
}

/// Rewrites every `HH:MM` in `text` into spoken German
pub fn expand_time(text: &str) -> String {
    TIME_RE.replace_all(text, expand_match).into_owned()
}

fn expand_match(caps: &Captures) -> String {
    // Both groups are digit-only by construction
    let hour: u64 = caps[1].parse().unwrap_or(0);
    let minute: u64 = caps[5].parse().unwrap_or(0);
    spoken_time(hour, minute)
}

/// Spoken form of a clock time. The hour after `halb` / `Viertel vor` is
/// `hour + 1` without wrapping, so 23:30 reads `halb vierundzwanzig`.
pub fn spoken_time(hour: u64, minute: u64) -> String {
    let words = GermanNumerals::to_words_unsigned;

    let clause = match minute {
        0 => format!("{} Uhr", words(hour)),
        15 => format!("Viertel nach {}", words(hour)),
        30 => format!("halb {}", words(hour + 1)),
        45 => format!("Viertel vor {}", words(hour + 1)),
        _ => format!("{} Uhr {}", words(hour), words(minute)),
    };

    format!("{} {}", clause, period_of_day(hour))
}

fn period_of_day(hour: u64) -> &'static str {
    if hour < 12 {
        "vormittags"
    } else if hour < 18 {
        "nachmittags"
    } else {
        "abends"
    }
}
