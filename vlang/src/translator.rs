//! Key resolution against a message table.
//!
//! The [`Translator`] is stateless: it is given the locale (or a requested
//! locale to match) on every call. Session-bound translation lives in
//! [`crate::Vlang`].

use tracing::{debug, warn};

use crate::{
    diagnostic::Diagnostic,
    locale::best_locale_match,
    options::TranslateOptions,
    plural::try_pluralize,
    types::{Count, MessageEntry, MessageTable},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    options: TranslateOptions,
}

impl Translator {
    pub fn new(options: TranslateOptions) -> Self {
        Translator { options }
    }

    pub fn options(&self) -> &TranslateOptions {
        &self.options
    }

    /// Renders `entry` for `key`.
    ///
    /// A count asks for the pluralized form, no count for the static form;
    /// asking for the wrong form is a [`Diagnostic`].
    pub fn resolve_entry(
        &self,
        key: &str,
        entry: Option<&MessageEntry>,
        count: Option<Count>,
    ) -> Result<String, Diagnostic> {
        let Some(entry) = entry else {
            return Err(Diagnostic::MissingKey {
                key: key.to_string(),
            });
        };

        match (entry, count) {
            (MessageEntry::Static(text), None) => Ok(text.clone()),
            (MessageEntry::Static(_), Some(_)) => Err(Diagnostic::ExpectedPlural {
                key: key.to_string(),
            }),
            (MessageEntry::Pluralized(_), None) => Err(Diagnostic::ExpectedStatic {
                key: key.to_string(),
            }),
            (MessageEntry::Pluralized(forms), Some(n)) => {
                try_pluralize(forms, n, self.options.substitution)
            }
        }
    }

    /// Resolves `key` in the bucket of exactly `locale`.
    ///
    /// A locale without a bucket behaves like an empty bucket.
    pub fn resolve(
        &self,
        locale: &str,
        key: &str,
        count: Option<Count>,
        table: &MessageTable,
    ) -> Result<String, Diagnostic> {
        self.resolve_entry(key, table.lookup(locale, key), count)
    }

    /// Same as [`Translator::resolve`], rendering diagnostics as sentinels.
    pub fn translate(
        &self,
        locale: &str,
        key: &str,
        count: Option<Count>,
        table: &MessageTable,
    ) -> String {
        self.resolve(locale, key, count, table)
            .unwrap_or_else(|diagnostic| self.render(locale, diagnostic))
    }

    /// Resolves `key` in whichever of the table's locales best matches
    /// `requested`.
    pub fn resolve_best_match(
        &self,
        requested: Option<&str>,
        key: &str,
        count: Option<Count>,
        table: &MessageTable,
    ) -> Result<String, Diagnostic> {
        let locales = table.locales();
        match best_locale_match(&locales, requested) {
            Some(locale) => self.resolve(locale, key, count, table),
            None => self.resolve_entry(key, None, count),
        }
    }

    /// Same as [`Translator::resolve_best_match`], rendering diagnostics as
    /// sentinels.
    pub fn translate_best_match(
        &self,
        requested: Option<&str>,
        key: &str,
        count: Option<Count>,
        table: &MessageTable,
    ) -> String {
        self.resolve_best_match(requested, key, count, table)
            .unwrap_or_else(|diagnostic| self.render(requested.unwrap_or_default(), diagnostic))
    }

    fn render(&self, locale: &str, diagnostic: Diagnostic) -> String {
        match &diagnostic {
            Diagnostic::MissingKey { key } if !self.options.debug => {
                warn!(locale, key = %key, "missing translation key");
            }
            _ => debug!(locale, %diagnostic, "translation fell back to a diagnostic"),
        }
        diagnostic.render(self.options.debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        diagnostic::NO_PLURAL_OPTION,
        plural::Substitution,
        types::{LocaleMessages, PluralForms},
    };

    fn table() -> MessageTable {
        MessageTable::from_records(vec![
            LocaleMessages::new("en")
                .with("HELLO", "Hi")
                .with(
                    "ITEMS",
                    PluralForms::new([("0,1", "{} item"), ("2,", "{} items")]),
                )
                .with("PAIR", PluralForms::new([("0,", "{} and {}")])),
            LocaleMessages::new("fr").with("HELLO", "Salut"),
        ])
    }

    #[test]
    fn test_static_entry() {
        let t = Translator::default();
        assert_eq!(t.translate("en", "HELLO", None, &table()), "Hi");
        assert_eq!(t.translate("fr", "HELLO", None, &table()), "Salut");
    }

    #[test]
    fn test_missing_key() {
        let t = Translator::default();
        assert_eq!(
            t.translate("en", "MISSING", None, &table()),
            "!!! MISSING KEY \"MISSING\" !!!"
        );
    }

    #[test]
    fn test_missing_key_without_debug_returns_key() {
        let t = Translator::new(TranslateOptions::new().with_debug(false));
        assert_eq!(t.translate("en", "MISSING", None, &table()), "MISSING");
    }

    #[test]
    fn test_missing_bucket_is_empty() {
        let t = Translator::default();
        assert_eq!(
            t.resolve("de", "HELLO", None, &table()),
            Err(Diagnostic::MissingKey {
                key: "HELLO".to_string()
            })
        );
    }

    #[test]
    fn test_pluralized_entry() {
        let t = Translator::default();
        assert_eq!(t.translate("en", "ITEMS", Some(3.into()), &table()), "3 items");
        assert_eq!(t.translate("en", "ITEMS", Some(1.into()), &table()), "1 item");
    }

    #[test]
    fn test_pluralized_without_match() {
        let t = Translator::default();
        assert_eq!(
            t.translate("en", "ITEMS", Some((-1).into()), &table()),
            NO_PLURAL_OPTION
        );
    }

    #[test]
    fn test_pluralized_entry_used_as_static() {
        let t = Translator::default();
        let out = t.translate("en", "ITEMS", None, &table());
        assert_eq!(
            out,
            "!!! USING \"ITEMS\" AS REGULAR STRING, BUT IT'S PLURALIZABLE !!!"
        );
        assert_ne!(out, "{} item");
    }

    #[test]
    fn test_static_entry_used_as_pluralized() {
        let t = Translator::new(TranslateOptions::new().with_debug(false));
        assert_eq!(
            t.translate("en", "HELLO", Some(2.into()), &table()),
            "!!! USING \"HELLO\" AS PLURALIZABLE STRING, BUT IT's NOT !!!"
        );
    }

    #[test]
    fn test_numeric_string_count() {
        let t = Translator::default();
        assert_eq!(
            t.translate("en", "ITEMS", Count::parse("2"), &table()),
            "2 items"
        );
        // Not a number: treated as no count at all.
        assert_eq!(
            t.translate("en", "HELLO", Count::parse("lots"), &table()),
            "Hi"
        );
    }

    #[test]
    fn test_substitution_all() {
        let first = Translator::default();
        let all = Translator::new(TranslateOptions::new().with_substitution(Substitution::All));
        assert_eq!(first.translate("en", "PAIR", Some(2.into()), &table()), "2 and {}");
        assert_eq!(all.translate("en", "PAIR", Some(2.into()), &table()), "2 and 2");
    }

    #[test]
    fn test_best_match() {
        let t = Translator::default();
        assert_eq!(
            t.translate_best_match(Some("fr-CA"), "HELLO", None, &table()),
            "Salut"
        );
        assert_eq!(
            t.translate_best_match(Some("ja"), "HELLO", None, &table()),
            "Hi"
        );
        assert_eq!(
            t.translate_best_match(None, "HELLO", None, &table()),
            "Hi"
        );
    }

    #[test]
    fn test_best_match_on_empty_table() {
        let t = Translator::default();
        assert_eq!(
            t.translate_best_match(Some("en"), "HELLO", None, &MessageTable::new()),
            "!!! MISSING KEY \"HELLO\" !!!"
        );
    }

    #[test]
    fn test_empty_static_text_is_a_translation() {
        let table = MessageTable::from_records(vec![LocaleMessages::new("en").with("EMPTY", "")]);
        assert_eq!(Translator::default().translate("en", "EMPTY", None, &table), "");
    }

    #[test]
    fn test_translate_is_pure() {
        let t = Translator::default();
        let table = table();
        let a = t.translate("en", "ITEMS", Some(5.into()), &table);
        let b = t.translate("en", "ITEMS", Some(5.into()), &table);
        assert_eq!(a, b);
    }
}
