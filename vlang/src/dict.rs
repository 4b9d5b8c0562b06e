//! The flat dictionary exchanged with external translation stores.
//!
//! Every row is addressed by a [`GlobalKey`] (locale, component, key) and
//! carries the source text next to its translation. Extracted blocks are
//! flattened into a [`Dictionary`]; translated dictionaries are sorted back
//! into one [`MessageTable`] per component `.vlg` file.

use std::{
    collections::BTreeMap,
    fmt::Display,
    path::{Path, PathBuf},
    str::FromStr,
};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use tracing::{debug, warn};

use crate::{
    config::Config,
    error::Error,
    extract::extract_path,
    filters::{Filter, apply_filters},
    traits::Document,
    types::{LocaleMessages, MessageEntry, MessageTable, PluralForms, RangeMap},
    validate::validate_table,
};

lazy_static! {
    static ref SOURCE_EXTENSION: Regex = Regex::new(r"(?i)\.(vue|js)$").unwrap();
}

/// Extension of imported translation files.
pub const VLG_EXTENSION: &str = "vlg";

/// Address of one dictionary row.
///
/// Renders as the JSON array `["lang","component","key"]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlobalKey {
    pub lang: String,
    pub component: String,
    pub key: String,
}

impl GlobalKey {
    pub fn new(
        lang: impl Into<String>,
        component: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        GlobalKey {
            lang: lang.into(),
            component: component.into(),
            key: key.into(),
        }
    }

    /// The same row in another language.
    pub fn with_lang(&self, lang: &str) -> GlobalKey {
        GlobalKey {
            lang: lang.to_string(),
            ..self.clone()
        }
    }
}

impl Display for GlobalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(&[&self.lang, &self.component, &self.key])
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&json)
    }
}

impl FromStr for GlobalKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lang, component, key): (String, String, String) = serde_json::from_str(s)?;
        Ok(GlobalKey {
            lang,
            component,
            key,
        })
    }
}

impl Serialize for GlobalKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GlobalKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Source text and its translation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Cell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
}

impl Cell {
    pub fn original(text: impl Into<String>) -> Self {
        Cell {
            original: Some(text.into()),
            translation: None,
        }
    }

    pub fn with_translation(mut self, text: impl Into<String>) -> Self {
        self.translation = Some(text.into());
        self
    }
}

/// One dictionary row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DictEntry {
    Static(Cell),
    Pluralized(RangeMap<Cell>),
}

pub type Dictionary = BTreeMap<GlobalKey, DictEntry>;

/// Flattens the blocks extracted from `component` into dictionary rows.
pub fn dict_from_blocks(component: &str, blocks: &[LocaleMessages]) -> Dictionary {
    let mut out = Dictionary::new();

    for block in blocks {
        for (key, message) in &block.messages {
            let entry = match message {
                MessageEntry::Static(text) => DictEntry::Static(Cell::original(text.as_str())),
                MessageEntry::Pluralized(forms) => DictEntry::Pluralized(
                    forms
                        .iter()
                        .map(|(range, text)| (range.to_string(), Cell::original(text.as_str())))
                        .collect(),
                ),
            };
            out.insert(GlobalKey::new(&block.locale, component, key), entry);
        }
    }

    out
}

/// Rows of `internal` missing from `external`, fanned out to `languages`.
///
/// Each source row is offered in its own language and in every configured
/// language, unless the external store already has that row.
pub fn new_lines_to_sync<S: AsRef<str>>(
    internal: &Dictionary,
    external: &Dictionary,
    languages: &[S],
) -> Dictionary {
    let mut out = Dictionary::new();

    for (key, message) in internal {
        if !external.contains_key(key) {
            out.insert(key.clone(), message.clone());
        }

        for lang in languages {
            let translated = key.with_lang(lang.as_ref());
            if !out.contains_key(&translated) && !external.contains_key(&translated) {
                out.insert(translated, message.clone());
            }
        }
    }

    out
}

/// Path of the `.vlg` file holding translations for `component`.
///
/// `components/Header.vue` becomes `<i18n_root>/components/Header.vlg`.
pub fn component_path<P: AsRef<Path>>(i18n_root: P, component: &str) -> PathBuf {
    let naked = SOURCE_EXTENSION.replace(component, "");
    i18n_root
        .as_ref()
        .join(format!("{}.{}", naked, VLG_EXTENSION))
}

/// Trims `text` and runs the filters configured for `lang`.
pub fn filter_message(
    text: Option<&str>,
    lang: &str,
    filters: &BTreeMap<String, Vec<Filter>>,
) -> String {
    let text = text.unwrap_or_default().trim();
    match filters.get(lang) {
        Some(filters) => apply_filters(text, filters),
        None => text.to_string(),
    }
}

/// Groups translated rows into one table per `.vlg` file.
///
/// Empty translations are dropped, so untouched rows keep the source text
/// from the component itself. Pluralized rows with no translated variant
/// are dropped entirely.
pub fn sort_dict_by_file<P: AsRef<Path>>(
    dict: &Dictionary,
    i18n_root: P,
    filters: &BTreeMap<String, Vec<Filter>>,
) -> BTreeMap<PathBuf, MessageTable> {
    let mut files: BTreeMap<PathBuf, MessageTable> = BTreeMap::new();

    for (gk, entry) in dict {
        let message = match entry {
            DictEntry::Static(cell) => {
                let text = filter_message(cell.translation.as_deref(), &gk.lang, filters);
                (!text.is_empty()).then(|| MessageEntry::Static(text))
            }
            DictEntry::Pluralized(cells) => {
                let mut forms = PluralForms::default();
                for (range, cell) in cells.iter() {
                    let text = filter_message(cell.translation.as_deref(), &gk.lang, filters);
                    if !text.is_empty() {
                        forms.insert(range, text);
                    }
                }
                (!forms.is_empty()).then(|| MessageEntry::Pluralized(forms))
            }
        };

        if let Some(message) = message {
            files
                .entry(component_path(&i18n_root, &gk.component))
                .or_default()
                .insert(&gk.lang, gk.key.as_str(), message);
        }
    }

    for table in files.values_mut() {
        table.sort_by_locale();
    }
    files
}

/// Validates and writes every table to its `.vlg` path.
pub fn save_files(files: &BTreeMap<PathBuf, MessageTable>) -> Result<(), Error> {
    for (path, table) in files {
        validate_table(table).map_err(|e| {
            Error::validation_error(format!(
                "cannot validate generated translation for \"{}\": {}",
                path.display(),
                e
            ))
        })?;
        table.write_to(path)?;
    }
    Ok(())
}

/// Reads the imported `.vlg` table of a component.
///
/// `component` is the source path; it must live under `root`. A component
/// outside `root`, a missing file or an unreadable file yields an empty
/// table.
pub fn load_external<P: AsRef<Path>, C: AsRef<Path>>(
    root: P,
    config: &Config,
    component: C,
) -> Result<MessageTable, Error> {
    let root = root.as_ref();
    let i18n_root = config.i18n_root(root)?;
    let relative = match component.as_ref().strip_prefix(root) {
        Ok(relative) => relative,
        Err(_) => {
            debug!(component = %component.as_ref().display(), "component is outside the project root");
            return Ok(MessageTable::new());
        }
    };
    let name = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    let path = component_path(&i18n_root, &name);

    if !path.is_file() {
        return Ok(MessageTable::new());
    }
    match MessageTable::read_from(&path) {
        Ok(table) => Ok(table),
        Err(e) => {
            warn!(file = %path.display(), error = %e, "ignoring unreadable translation file");
            Ok(MessageTable::new())
        }
    }
}

/// Loads the messages of one component.
///
/// The component's own block is merged with its imported `.vlg` file; the
/// imported translations win key by key.
pub fn load_component<P: AsRef<Path>, C: AsRef<Path>>(
    root: P,
    config: &Config,
    component: C,
) -> Result<MessageTable, Error> {
    let local = MessageTable::from_records(extract_path(component.as_ref())?);
    let external = load_external(root, config, component)?;
    Ok(MessageTable::merge([local, external]))
}
