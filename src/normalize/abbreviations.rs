//! Abbreviation expansion
//!
//! A fixed, ordered table of German abbreviations. Dotted abbreviations only
//! match at a word boundary and consume their trailing period
//! (`Dr.` → `Doktor`, `z.B.` → `zum Beispiel`). Symbol entries (`%`, `–`)
//! match wherever they occur.

use regex::Regex;

use crate::error::{G2pError, Result};

/// The only language the table covers
pub const GERMAN: &str = "de";

/// Matching rule for a table entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AbbreviationKind {
    /// `\b<abbrev>\.`, period appended unless the entry already ends in one
    Dotted,
    /// The symbol itself, anywhere
    Symbol,
}

/// One row of the abbreviation table
#[derive(Debug, Clone, Copy)]
pub struct Abbreviation {
    pub abbreviation: &'static str,
    pub expansion: &'static str,
    pub kind: AbbreviationKind,
}

const fn dotted(abbreviation: &'static str, expansion: &'static str) -> Abbreviation {
    Abbreviation {
        abbreviation,
        expansion,
        kind: AbbreviationKind::Dotted,
    }
}

const fn symbol(abbreviation: &'static str, expansion: &'static str) -> Abbreviation {
    Abbreviation {
        abbreviation,
        expansion,
        kind: AbbreviationKind::Symbol,
    }
}

/// Applied top to bottom; `Mrs` must stay ahead of `Mr`.
pub const ABBREVIATIONS_DE: &[Abbreviation] = &[
    dotted("Mrs", "Misess"),
    dotted("Mr", "Mister"),
    dotted("Dr", "Doktor"),
    dotted("Hr", "Herr"),
    dotted("Fr", "Frau"),
    symbol("%", " Prozent"),
    dotted("z.B.", "zum Beispiel"),
    dotted("u.a.", "unter anderem"),
    dotted("uvm.", "und vieles mehr"),
    dotted("usw.", "und so weiter"),
    dotted("z.Zt.", "zur Zeit"),
    dotted("d.h.", "das heißt"),
    dotted("bzw.", "beziehungsweise"),
    dotted("ca.", "circa"),
    dotted("etc.", "et cetera"),
    dotted("evtl.", "eventuell"),
    dotted("ggf.", "gegebenenfalls"),
    dotted("ggfs.", "gegebenenfalls"),
    dotted("i.d.R.", "in der Regel"),
    dotted("i.d.F.", "in der Fassung"),
    dotted("i.d.S.", "im Sinne"),
    dotted("i.d.Z.", "in der Zukunft"),
    dotted("i.d.V.", "im Voraus"),
    dotted("i.d.G.", "im Gegenteil"),
    dotted("i.d.B.", "im Besonderen"),
    dotted("i.d.A.", "im Allgemeinen"),
    dotted("i.d.H.", "im Hinblick"),
    dotted("i.d.T.", "im Tagesverlauf"),
    dotted("i.d.W.", "im Wesentlichen"),
    dotted("i.d.Ü.", "im Übrigen"),
    symbol("–", "-"),
    // decomposed u + combining diaeresis
    symbol("u\u{0308}", "ü"),
];

impl Abbreviation {
    /// Case-insensitive pattern for this entry
    pub fn pattern(&self) -> String {
        let escaped = regex::escape(self.abbreviation);
        match self.kind {
            AbbreviationKind::Dotted if self.abbreviation.ends_with('.') => {
                format!(r"(?i)\b{}", escaped)
            }
            AbbreviationKind::Dotted => format!(r"(?i)\b{}\.", escaped),
            AbbreviationKind::Symbol => format!("(?i){}", escaped),
        }
    }
}

lazy_static::lazy_static! {
    static ref COMPILED_DE: Vec<(Regex, &'static str)> = ABBREVIATIONS_DE
        .iter()
        .map(|a| {
            let regex = Regex::new(&a.pattern()).expect("abbreviation pattern is valid");
            (regex, a.expansion)
        })
        .collect();
}

/// Expands the abbreviation table for `lang`. Only `"de"` is supported.
pub fn expand_abbreviations(text: &str, lang: &str) -> Result<String> {
    if lang != GERMAN {
        return Err(G2pError::UnsupportedLanguage(lang.to_string()));
    }
    Ok(expand_german(text))
}

pub(crate) fn expand_german(text: &str) -> String {
    let mut result = text.to_string();
    for (regex, expansion) in COMPILED_DE.iter() {
        // NoExpand: the expansion is literal text, not a `$group` template
        result = regex
            .replace_all(&result, regex::NoExpand(*expansion))
            .into_owned();
    }
    result
}
