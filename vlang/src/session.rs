//! Per-session locale state.
//!
//! A [`LocaleSession`] owns the enabled locales and the three locale
//! suggestions of one user session. It must not be shared between sessions:
//! each request or user gets its own.

use std::fmt::Debug;

use tracing::debug;

use crate::{
    error::Error,
    locale::{LocaleSuggestions, UnknownLocalePolicy, resolve_active_locale_with},
};

/// Callback fired with the new locale whenever the active locale changes.
pub type LocaleListener = Box<dyn Fn(&str) + Send + Sync>;

pub struct LocaleSession {
    locales: Vec<String>,
    suggestions: LocaleSuggestions,
    policy: UnknownLocalePolicy,
    current: String,
    listeners: Vec<LocaleListener>,
}

impl LocaleSession {
    /// Creates a session, silently dropping unknown suggestions.
    ///
    /// Fails when `locales` is empty.
    pub fn new<S: Into<String>>(
        locales: impl IntoIterator<Item = S>,
        suggestions: LocaleSuggestions,
    ) -> Result<Self, Error> {
        Self::with_policy(locales, suggestions, UnknownLocalePolicy::Ignore)
    }

    /// Creates a session with an explicit policy for unknown suggestions.
    pub fn with_policy<S: Into<String>>(
        locales: impl IntoIterator<Item = S>,
        suggestions: LocaleSuggestions,
        policy: UnknownLocalePolicy,
    ) -> Result<Self, Error> {
        let locales: Vec<String> = locales.into_iter().map(Into::into).collect();
        let current = resolve_active_locale_with(&locales, &suggestions, policy)?;
        debug!(locale = %current, "locale session started");

        Ok(LocaleSession {
            locales,
            suggestions,
            policy,
            current,
            listeners: Vec::new(),
        })
    }

    /// The active locale.
    pub fn locale(&self) -> &str {
        &self.current
    }

    /// Enabled locales, in priority order.
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    /// The first enabled locale, used when no suggestion survives.
    pub fn default_locale(&self) -> &str {
        &self.locales[0]
    }

    pub fn suggestions(&self) -> &LocaleSuggestions {
        &self.suggestions
    }

    /// Registers a listener for locale changes.
    pub fn on_locale_change<F>(&mut self, listener: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Records the user's explicit choice. Returns `true` if the active
    /// locale changed.
    pub fn set_locale(&mut self, locale: impl Into<String>) -> bool {
        self.suggestions.chosen = Some(locale.into());
        self.refresh()
    }

    /// Forgets the user's explicit choice.
    pub fn clear_chosen(&mut self) -> bool {
        self.suggestions.chosen = None;
        self.refresh()
    }

    pub fn set_server_suggested(&mut self, locale: Option<String>) -> bool {
        self.suggestions.server_suggested = locale;
        self.refresh()
    }

    pub fn set_persisted(&mut self, locale: Option<String>) -> bool {
        self.suggestions.persisted = locale;
        self.refresh()
    }

    // Locales are never empty once constructed, so resolution cannot fail here.
    fn refresh(&mut self) -> bool {
        let Ok(next) = resolve_active_locale_with(&self.locales, &self.suggestions, self.policy)
        else {
            return false;
        };
        if next == self.current {
            return false;
        }

        debug!(from = %self.current, to = %next, "locale changed");
        self.current = next;
        for listener in &self.listeners {
            listener(&self.current);
        }
        true
    }
}

impl Debug for LocaleSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleSession")
            .field("locales", &self.locales)
            .field("suggestions", &self.suggestions)
            .field("policy", &self.policy)
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
