//! The runtime facade used by applications.

use crate::{
    config::Config,
    error::Error,
    locale::LocaleSuggestions,
    options::TranslateOptions,
    session::LocaleSession,
    translator::Translator,
    types::{Count, MessageTable},
};

/// A locale session paired with translation options.
///
/// One `Vlang` per user session; message tables are shared read-only and
/// passed in on every call.
///
/// # Example
///
/// ```rust
/// use vlang::{LocaleMessages, LocaleSuggestions, MessageTable, PluralForms, TranslateOptions, Vlang};
///
/// let table = MessageTable::from_records(vec![
///     LocaleMessages::new("en")
///         .with("HELLO", "Hello")
///         .with("ITEMS", PluralForms::new([("0,1", "{} item"), ("2,", "{} items")])),
/// ]);
///
/// let vlang = Vlang::new(["en", "fr"], LocaleSuggestions::new(), TranslateOptions::default())?;
/// let t = vlang.bind(&table);
/// assert_eq!(t.t("HELLO", None), "Hello");
/// assert_eq!(t.t_n("ITEMS", 3), "3 items");
/// # Ok::<(), vlang::Error>(())
/// ```
#[derive(Debug)]
pub struct Vlang {
    session: LocaleSession,
    translator: Translator,
}

impl Vlang {
    pub fn new<S: Into<String>>(
        locales: impl IntoIterator<Item = S>,
        suggestions: LocaleSuggestions,
        options: TranslateOptions,
    ) -> Result<Self, Error> {
        let session = LocaleSession::with_policy(locales, suggestions, options.unknown_locale)?;
        Ok(Self::with_session(session, options))
    }

    pub fn with_session(session: LocaleSession, options: TranslateOptions) -> Self {
        Vlang {
            session,
            translator: Translator::new(options),
        }
    }

    /// Builds a runtime from a project configuration.
    pub fn from_config(config: &Config, suggestions: LocaleSuggestions) -> Result<Self, Error> {
        Self::new(
            config.locales.iter().cloned(),
            suggestions,
            config.translate_options(),
        )
    }

    /// The active locale.
    pub fn locale(&self) -> &str {
        self.session.locale()
    }

    /// Records the user's choice; see [`LocaleSession::set_locale`].
    pub fn set_locale(&mut self, locale: impl Into<String>) -> bool {
        self.session.set_locale(locale)
    }

    pub fn session(&self) -> &LocaleSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut LocaleSession {
        &mut self.session
    }

    pub fn options(&self) -> &TranslateOptions {
        self.translator.options()
    }

    pub fn on_locale_change<F>(&mut self, listener: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.session.on_locale_change(listener);
    }

    /// Translates `key` in the active locale.
    pub fn translate(&self, key: &str, count: Option<Count>, table: &MessageTable) -> String {
        self.translator
            .translate(self.session.locale(), key, count, table)
    }

    /// Translates `key` in the table locale that best matches `requested`,
    /// ignoring the session.
    pub fn translate_best_match(
        &self,
        requested: Option<&str>,
        key: &str,
        count: Option<Count>,
        table: &MessageTable,
    ) -> String {
        self.translator
            .translate_best_match(requested, key, count, table)
    }

    /// Binds a table, giving a short-hand translation handle.
    pub fn bind<'a>(&'a self, table: &'a MessageTable) -> Bound<'a> {
        Bound { vlang: self, table }
    }
}

/// A [`Vlang`] bound to one message table.
#[derive(Debug, Clone, Copy)]
pub struct Bound<'a> {
    vlang: &'a Vlang,
    table: &'a MessageTable,
}

impl Bound<'_> {
    pub fn t(&self, key: &str, count: Option<Count>) -> String {
        self.vlang.translate(key, count, self.table)
    }

    /// Pluralized shorthand for [`Bound::t`].
    pub fn t_n(&self, key: &str, count: impl Into<Count>) -> String {
        self.t(key, Some(count.into()))
    }

    pub fn locale(&self) -> &str {
        self.vlang.locale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        locale::UnknownLocalePolicy,
        types::{LocaleMessages, PluralForms},
    };
    use std::{
        sync::{Arc, Mutex},
        thread,
    };

    fn table() -> MessageTable {
        MessageTable::from_records(vec![
            LocaleMessages::new("en")
                .with("HELLO", "Hello")
                .with("ITEMS", PluralForms::new([("0,1", "{} item"), ("2,", "{} items")])),
            LocaleMessages::new("fr")
                .with("HELLO", "Bonjour")
                .with("ITEMS", PluralForms::new([("0,1", "{} élément"), ("2,", "{} éléments")])),
        ])
    }

    fn vlang(suggestions: LocaleSuggestions) -> Vlang {
        Vlang::new(["en", "fr"], suggestions, TranslateOptions::default()).unwrap()
    }

    #[test]
    fn test_translate_in_active_locale() {
        let mut v = vlang(LocaleSuggestions::new());
        let table = table();
        assert_eq!(v.translate("HELLO", None, &table), "Hello");

        v.set_locale("fr");
        assert_eq!(v.translate("HELLO", None, &table), "Bonjour");
        assert_eq!(v.translate("ITEMS", Some(4.into()), &table), "4 éléments");
    }

    #[test]
    fn test_bound_handle() {
        let v = vlang(LocaleSuggestions::new().with_persisted(Some("fr".into())));
        let table = table();
        let t = v.bind(&table);
        assert_eq!(t.locale(), "fr");
        assert_eq!(t.t("HELLO", None), "Bonjour");
        assert_eq!(t.t_n("ITEMS", 1), "1 élément");
        assert_eq!(t.t("NOPE", None), "!!! MISSING KEY \"NOPE\" !!!");
    }

    #[test]
    fn test_translate_best_match_ignores_session() {
        let v = vlang(LocaleSuggestions::new());
        assert_eq!(
            v.translate_best_match(Some("fr_BE"), "HELLO", None, &table()),
            "Bonjour"
        );
        assert_eq!(v.locale(), "en");
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::new(["de", "en"]);
        config.debug = false;
        config.unknown_locale = UnknownLocalePolicy::Warn;
        let v = Vlang::from_config(&config, LocaleSuggestions::new().with_chosen(Some("xx".into())))
            .unwrap();
        assert_eq!(v.locale(), "de");
        assert!(!v.options().debug);
        assert_eq!(v.translate("MISSING", None, &table()), "MISSING");
    }

    #[test]
    fn test_empty_locales() {
        let err = Vlang::new(
            Vec::<String>::new(),
            LocaleSuggestions::new(),
            TranslateOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_listener_through_facade() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut v = vlang(LocaleSuggestions::new());
        let sink = Arc::clone(&seen);
        v.on_locale_change(move |l| sink.lock().unwrap().push(l.to_string()));
        v.set_locale("fr");
        v.session_mut().clear_chosen();
        assert_eq!(*seen.lock().unwrap(), vec!["fr".to_string(), "en".to_string()]);
    }

    #[test]
    fn test_sessions_share_a_table_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Vlang>();
        assert_send_sync::<MessageTable>();

        let table = Arc::new(table());
        let handles: Vec<_> = ["en", "fr"]
            .into_iter()
            .map(|locale| {
                let table = Arc::clone(&table);
                thread::spawn(move || {
                    let v = vlang(LocaleSuggestions::new().with_chosen(Some(locale.into())));
                    v.bind(&table).t_n("ITEMS", 2)
                })
            })
            .collect();

        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec!["2 items", "2 éléments"]);
    }
}
