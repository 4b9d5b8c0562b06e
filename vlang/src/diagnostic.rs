//! Sentinel strings returned in place of a translation.
//!
//! Every sentinel starts and ends with `!!!` so that rendered output can be
//! scanned for broken translations.

use std::fmt::Display;

/// Prefix and suffix shared by every sentinel string.
pub const SENTINEL_MARKER: &str = "!!!";

/// Returned by the pluralizer when no range matches the count.
pub const NO_PLURAL_OPTION: &str = "!!! MISSING (no pluralized options) !!!";

/// Why a key could not be rendered as requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The key does not exist for the active locale.
    MissingKey { key: String },

    /// A count was supplied but the entry is a plain string.
    ExpectedPlural { key: String },

    /// No count was supplied but the entry is pluralized.
    ExpectedStatic { key: String },

    /// The entry is pluralized but none of its ranges matched.
    NoPluralOption,
}

impl Diagnostic {
    /// Renders the diagnostic, honouring the debug switch.
    ///
    /// With `debug` disabled a missing key renders as the key itself; every
    /// other diagnostic keeps its sentinel.
    pub fn render(&self, debug: bool) -> String {
        match self {
            Diagnostic::MissingKey { key } if !debug => key.clone(),
            other => other.to_string(),
        }
    }

    /// The key the diagnostic relates to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Diagnostic::MissingKey { key }
            | Diagnostic::ExpectedPlural { key }
            | Diagnostic::ExpectedStatic { key } => Some(key),
            Diagnostic::NoPluralOption => None,
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::MissingKey { key } => write!(f, "!!! MISSING KEY \"{}\" !!!", key),
            Diagnostic::ExpectedPlural { key } => write!(
                f,
                "!!! USING \"{}\" AS PLURALIZABLE STRING, BUT IT's NOT !!!",
                key
            ),
            Diagnostic::ExpectedStatic { key } => write!(
                f,
                "!!! USING \"{}\" AS REGULAR STRING, BUT IT'S PLURALIZABLE !!!",
                key
            ),
            Diagnostic::NoPluralOption => f.write_str(NO_PLURAL_OPTION),
        }
    }
}

/// Returns `true` when `text` looks like a sentinel string.
pub fn is_sentinel(text: &str) -> bool {
    text.starts_with(SENTINEL_MARKER) && text.ends_with(SENTINEL_MARKER)
}
