//! Project configuration, read from `vlang.yml` at the project root.
//!
//! ```yaml
//! locales: [en, fr]
//! source_locale: en
//! i18n_directory: i18n
//! filters:
//!   fr: [frenchPunctuation]
//! inputs:
//!   - type: google_sheets
//!     id: 1AbC...
//! ```

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::{
    error::Error,
    filters::Filter,
    locale::UnknownLocalePolicy,
    options::TranslateOptions,
    plural::Substitution,
    traits::Document,
};

/// Name of the configuration file inside a project root.
pub const CONFIG_FILE: &str = "vlang.yml";

/// Default cookie used to persist the chosen locale.
pub const DEFAULT_COOKIE_NAME: &str = "vlang";

/// An external translation source or sink.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct External {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Enabled locales; the first one is the default.
    pub locales: Vec<String>,

    /// Locale the source strings are authored in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_locale: Option<String>,

    /// Directory holding imported `.vlg` files, relative to the project root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n_directory: Option<String>,

    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    #[serde(default = "default_debug")]
    pub debug: bool,

    #[serde(default)]
    pub unknown_locale: UnknownLocalePolicy,

    #[serde(default)]
    pub placeholder: Substitution,

    /// Filter names applied to imported text, per locale.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub filters: BTreeMap<String, Vec<String>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<External>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<External>,
}

fn default_cookie_name() -> String {
    DEFAULT_COOKIE_NAME.to_string()
}

fn default_debug() -> bool {
    true
}

impl Config {
    /// Creates a configuration with the given locales and defaults elsewhere.
    pub fn new<S: Into<String>>(locales: impl IntoIterator<Item = S>) -> Self {
        Config {
            locales: locales.into_iter().map(Into::into).collect(),
            source_locale: None,
            i18n_directory: None,
            cookie_name: default_cookie_name(),
            debug: default_debug(),
            unknown_locale: UnknownLocalePolicy::default(),
            placeholder: Substitution::default(),
            filters: BTreeMap::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Loads `vlang.yml` from `root`.
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self, Error> {
        Self::read_from(root.as_ref().join(CONFIG_FILE))
    }

    /// Checks locales, the source locale and filter names.
    pub fn validate(&self) -> Result<(), Error> {
        if self.locales.is_empty() {
            return Err(Error::configuration_error("`locales` must not be empty"));
        }

        for locale in &self.locales {
            parse_locale(locale)?;
        }

        if let Some(source) = &self.source_locale {
            if !self.locales.contains(source) {
                return Err(Error::configuration_error(format!(
                    "source locale `{}` is not one of the enabled locales",
                    source
                )));
            }
        }

        self.filters_by_locale()?;
        Ok(())
    }

    /// Runtime options derived from this configuration.
    pub fn translate_options(&self) -> TranslateOptions {
        TranslateOptions::new()
            .with_debug(self.debug)
            .with_substitution(self.placeholder)
            .with_unknown_locale(self.unknown_locale)
    }

    /// Absolute path of the i18n directory for a project at `root`.
    pub fn i18n_root<P: AsRef<Path>>(&self, root: P) -> Result<PathBuf, Error> {
        self.i18n_directory
            .as_ref()
            .map(|dir| root.as_ref().join(dir))
            .ok_or_else(|| {
                Error::configuration_error("no `i18n_directory` found in configuration file")
            })
    }

    /// Parses the configured filter names.
    pub fn filters_by_locale(&self) -> Result<BTreeMap<String, Vec<Filter>>, Error> {
        self.filters
            .iter()
            .map(|(locale, names)| {
                let filters = names
                    .iter()
                    .map(|name| name.parse::<Filter>())
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((locale.clone(), filters))
            })
            .collect()
    }
}

/// Parses a locale as a BCP 47 identifier, accepting `_` as separator.
pub fn parse_locale(locale: &str) -> Result<LanguageIdentifier, Error> {
    locale
        .replace('_', "-")
        .parse::<LanguageIdentifier>()
        .map_err(|e| Error::configuration_error(format!("invalid locale `{}`: {}", locale, e)))
}
