//! Typographic filters applied to imported translations, per locale.

use std::{fmt::Display, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

lazy_static! {
    /// French typography: narrow no-break space before `; ! ?`, no-break
    /// space before `:` and inside guillemets.
    static ref FRENCH_RULES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"([^ ]) ([;!?])").unwrap(), "${1}\u{202f}${2}"),
        (Regex::new(r"([^ ]) (:)").unwrap(), "${1}\u{a0}${2}"),
        (Regex::new(r"« ([^»]+) »").unwrap(), "«\u{a0}${1}\u{a0}»"),
    ];
}

/// A named text transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    FrenchPunctuation,
}

impl Filter {
    /// The name used in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            Filter::FrenchPunctuation => "frenchPunctuation",
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            Filter::FrenchPunctuation => french_punctuation(text),
        }
    }
}

impl FromStr for Filter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frenchPunctuation" | "french_punctuation" => Ok(Filter::FrenchPunctuation),
            _ => Err(Error::UnknownFilter(s.to_string())),
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Replaces regular spaces with no-break spaces where French typography
/// requires them.
pub fn french_punctuation(text: &str) -> String {
    let mut out = text.to_string();
    for (re, rep) in FRENCH_RULES.iter() {
        out = re.replace_all(&out, *rep).into_owned();
    }
    out
}

/// Applies `filters` in order.
pub fn apply_filters(text: &str, filters: &[Filter]) -> String {
    filters
        .iter()
        .fold(text.to_string(), |acc, filter| filter.apply(&acc))
}
