//! Range-based pluralization.
//!
//! A pluralized message is an ordered list of range expressions, each with
//! its text. The first range containing the count wins and the count is
//! substituted for the `{}` placeholder.

use serde::{Deserialize, Serialize};

use crate::{
    diagnostic::Diagnostic,
    range::is_in_range,
    types::{Count, PluralForms},
};

/// The count placeholder inside pluralized text.
pub const PLACEHOLDER: &str = "{}";

/// How many `{}` placeholders receive the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Substitution {
    /// Only the first `{}` is replaced.
    #[default]
    First,
    /// Every `{}` is replaced.
    All,
}

/// Returns the first variant whose range contains `n`, if any.
pub fn select<'a>(forms: &'a PluralForms, n: Count) -> Option<&'a str> {
    forms
        .iter()
        .find(|(range, _)| is_in_range(range, n.value()))
        .map(|(_, text)| text.as_str())
}

/// Substitutes `n` into `text` according to `mode`.
pub fn substitute(text: &str, n: Count, mode: Substitution) -> String {
    let n = n.to_string();
    match mode {
        Substitution::First => text.replacen(PLACEHOLDER, &n, 1),
        Substitution::All => text.replace(PLACEHOLDER, &n),
    }
}

/// Picks the variant for `n` and substitutes the count.
///
/// Fails with [`Diagnostic::NoPluralOption`] when no range matches.
pub fn try_pluralize(
    forms: &PluralForms,
    n: Count,
    mode: Substitution,
) -> Result<String, Diagnostic> {
    select(forms, n)
        .map(|text| substitute(text, n, mode))
        .ok_or(Diagnostic::NoPluralOption)
}

/// Picks the variant for `n`, falling back to the "no pluralized options"
/// sentinel.
pub fn pluralize(forms: &PluralForms, n: Count) -> String {
    try_pluralize(forms, n, Substitution::First).unwrap_or_else(|d| d.to_string())
}
