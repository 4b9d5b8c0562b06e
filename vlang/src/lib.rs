#![forbid(unsafe_code)]
//! Runtime engine and toolchain helpers for per-component translations.
//!
//! Messages live next to the code that uses them, grouped by locale. A
//! message is either a static string or a set of pluralized variants keyed by
//! numeric range expressions such as `"0,1"`, `"2,"` or `"!0,!10"`.
//!
//! # Quick Start
//!
//! ```rust
//! use vlang::{LocaleSuggestions, MessageTable, TranslateOptions, Vlang, traits::Document};
//!
//! let table = MessageTable::parse_document(r#"
//! en:
//!   messages:
//!     HELLO: Hello
//!     APPLES: { "0": "No apples", "1": "One apple", "2,": "{} apples" }
//! fr:
//!   messages:
//!     HELLO: Bonjour
//! "#)?;
//!
//! let suggestions = LocaleSuggestions::new().with_server_suggested(Some("fr".into()));
//! let vlang = Vlang::new(["en", "fr"], suggestions, TranslateOptions::default())?;
//! let t = vlang.bind(&table);
//!
//! assert_eq!(t.t("HELLO", None), "Bonjour");
//! assert_eq!(t.t_n("APPLES", 5), "!!! MISSING KEY \"APPLES\" !!!");
//! assert_eq!(vlang.translate_best_match(Some("en-GB"), "APPLES", Some(5.into()), &table), "5 apples");
//! # Ok::<(), vlang::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`range`], [`plural`], [`locale`], [`translator`]: the runtime engine.
//! - [`session`], [`runtime`]: per-session locale state and the [`Vlang`] facade.
//! - [`extract`], [`dict`], [`filters`], [`validate`]: pure helpers used by
//!   the extraction and import toolchain.
//! - [`config`]: the `vlang.yml` project configuration.

pub mod config;
pub mod diagnostic;
pub mod dict;
pub mod error;
pub mod extract;
pub mod filters;
pub mod locale;
pub mod options;
pub mod plural;
pub mod range;
pub mod runtime;
pub mod session;
pub mod traits;
pub mod translator;
pub mod types;
pub mod validate;

// Re-export most used types for easy consumption
pub use crate::{
    config::Config,
    diagnostic::Diagnostic,
    dict::{Cell, DictEntry, Dictionary, GlobalKey, load_component, load_external},
    error::Error,
    extract::{FileKind, extract, extract_path},
    filters::Filter,
    locale::{
        LocaleSuggestions, UnknownLocalePolicy, best_locale_match, compare_locales,
        resolve_active_locale, sanitize_locale,
    },
    options::TranslateOptions,
    plural::{Substitution, pluralize},
    range::{RangeExpr, is_in_range},
    runtime::{Bound, Vlang},
    session::LocaleSession,
    translator::Translator,
    types::{Count, LocaleMessages, MessageEntry, MessageTable, PluralForms, RangeMap},
    validate::{TableIssue, validate_table},
};
