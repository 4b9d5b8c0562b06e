//! Options controlling how keys are resolved and rendered.

use crate::{locale::UnknownLocalePolicy, plural::Substitution};

/// Rendering options for [`crate::Translator`] and [`crate::Vlang`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Render missing keys as a sentinel string; when disabled the key itself
    /// is returned.
    pub debug: bool,
    /// How many `{}` placeholders receive the count.
    pub substitution: Substitution,
    /// What to do with locale suggestions that are not enabled.
    pub unknown_locale: UnknownLocalePolicy,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        TranslateOptions {
            debug: true,
            substitution: Substitution::First,
            unknown_locale: UnknownLocalePolicy::Ignore,
        }
    }
}

impl TranslateOptions {
    /// Creates default options: debug on, first placeholder only, unknown
    /// suggestions ignored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables/disables debug sentinels for missing keys.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets the placeholder substitution mode.
    pub fn with_substitution(mut self, substitution: Substitution) -> Self {
        self.substitution = substitution;
        self
    }

    /// Sets the policy for unknown locale suggestions.
    pub fn with_unknown_locale(mut self, policy: UnknownLocalePolicy) -> Self {
        self.unknown_locale = policy;
        self
    }
}
