//! Locale selection.
//!
//! Two independent questions are answered here:
//!
//! - Which locale is active for a session, given the enabled locales and a
//!   set of prioritised suggestions ([`resolve_active_locale`]).
//! - Which of a table's locales best serves a requested locale
//!   ([`best_locale_match`]).

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Error;

/// A locale split into its language and country parts, lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleParts {
    pub lang: String,
    pub country: Option<String>,
}

/// Lowercases `locale` and splits it on `-` or `_`.
///
/// Only the first two subtags are kept: `zh-Hant-TW` becomes `zh` / `hant`.
pub fn split_locale(locale: &str) -> LocaleParts {
    let lower = locale.to_lowercase();
    let mut parts = lower.split(['-', '_']);
    let lang = parts.next().unwrap_or_default().to_string();
    let country = parts.next().map(str::to_string);
    LocaleParts { lang, country }
}

/// How well two locales match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchQuality {
    None = 0,
    Language = 1,
    Exact = 2,
}

impl MatchQuality {
    pub fn score(self) -> u8 {
        self as u8
    }
}

/// Compares two locales.
///
/// Absent (or empty) locales only match each other.
pub fn compare_locales(a: Option<&str>, b: Option<&str>) -> MatchQuality {
    let a = a.filter(|s| !s.is_empty());
    let b = b.filter(|s| !s.is_empty());

    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (split_locale(a), split_locale(b)),
        (None, None) => return MatchQuality::Exact,
        _ => return MatchQuality::None,
    };

    if a.lang != b.lang {
        MatchQuality::None
    } else if a.country == b.country {
        MatchQuality::Exact
    } else {
        MatchQuality::Language
    }
}

/// Picks the available locale that best matches `requested`.
///
/// Ties go to the earliest candidate, so when nothing matches at all the
/// first available locale is returned. `None` only when `available` is empty.
pub fn best_locale_match<'a, S: AsRef<str>>(
    available: &'a [S],
    requested: Option<&str>,
) -> Option<&'a str> {
    let mut best: Option<(&'a str, MatchQuality)> = None;

    for candidate in available {
        let candidate = candidate.as_ref();
        let quality = compare_locales(requested, Some(candidate));
        if best.is_none_or(|(_, q)| quality > q) {
            best = Some((candidate, quality));
        }
    }

    if let Some((locale, quality)) = best {
        debug!(requested = ?requested, locale, score = quality.score(), "best locale match");
    }
    best.map(|(locale, _)| locale)
}

/// What to do with a suggestion that is not an enabled locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownLocalePolicy {
    /// Drop it silently.
    #[default]
    Ignore,
    /// Drop it and emit a warning.
    Warn,
}

/// Locale suggestions, from highest to lowest priority.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct LocaleSuggestions {
    /// Explicit user selection during this session.
    #[serde(default)]
    pub chosen: Option<String>,

    /// Locale suggested by the server that rendered the page.
    #[serde(default)]
    pub server_suggested: Option<String>,

    /// Locale remembered from a previous session (cookie, storage, ...).
    #[serde(default)]
    pub persisted: Option<String>,
}

impl LocaleSuggestions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chosen(mut self, chosen: Option<String>) -> Self {
        self.chosen = chosen;
        self
    }

    pub fn with_server_suggested(mut self, server_suggested: Option<String>) -> Self {
        self.server_suggested = server_suggested;
        self
    }

    pub fn with_persisted(mut self, persisted: Option<String>) -> Self {
        self.persisted = persisted;
        self
    }
}

/// Keeps `candidate` only if it is one of `locales`.
pub fn sanitize_locale<'a, S: AsRef<str>>(
    locales: &[S],
    candidate: Option<&'a str>,
    policy: UnknownLocalePolicy,
) -> Option<&'a str> {
    let candidate = candidate?;
    if locales.iter().any(|l| l.as_ref() == candidate) {
        return Some(candidate);
    }
    if policy == UnknownLocalePolicy::Warn {
        warn!(locale = candidate, "ignoring locale suggestion that is not enabled");
    }
    None
}

/// Computes the active locale: chosen, then server-suggested, then persisted,
/// then the first enabled locale.
///
/// Unknown suggestions are dropped silently.
pub fn resolve_active_locale<S: AsRef<str>>(
    locales: &[S],
    suggestions: &LocaleSuggestions,
) -> Result<String, Error> {
    resolve_active_locale_with(locales, suggestions, UnknownLocalePolicy::Ignore)
}

/// Same as [`resolve_active_locale`] with an explicit policy for unknown
/// suggestions.
pub fn resolve_active_locale_with<S: AsRef<str>>(
    locales: &[S],
    suggestions: &LocaleSuggestions,
    policy: UnknownLocalePolicy,
) -> Result<String, Error> {
    let chosen = sanitize_locale(locales, suggestions.chosen.as_deref(), policy);
    let server = sanitize_locale(locales, suggestions.server_suggested.as_deref(), policy);
    let persisted = sanitize_locale(locales, suggestions.persisted.as_deref(), policy);

    chosen
        .or(server)
        .or(persisted)
        .or_else(|| locales.first().map(|l| l.as_ref()))
        .map(str::to_string)
        .ok_or_else(|| Error::configuration_error("no locale enabled and no valid suggestion"))
}
