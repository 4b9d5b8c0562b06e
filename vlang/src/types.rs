//! Core message-table types.
//! Loaders and extractors produce these; the translator reads them.

use std::{collections::BTreeMap, fmt::Display, marker::PhantomData};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{
        self, MapAccess, SeqAccess, Visitor,
        value::{MapAccessDeserializer, SeqAccessDeserializer},
    },
    ser::SerializeMap,
};

/// A count used to select a pluralized variant.
///
/// Counts are plain numbers; numeric strings can be coerced with
/// [`Count::parse`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Count(f64);

impl Count {
    pub fn new(value: f64) -> Self {
        Count(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Coerces a numeric string. Anything that is not a number yields `None`,
    /// which callers treat as "no count".
    pub fn parse(s: &str) -> Option<Count> {
        s.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| !v.is_nan())
            .map(Count)
    }
}

macro_rules! count_from {
    ($($t:ty),*) => {
        $(impl From<$t> for Count {
            fn from(value: $t) -> Self {
                Count(value as f64)
            }
        })*
    };
}

count_from!(i32, u32, i64, u64, usize, f32, f64);

// Large magnitudes print in full decimal (`1e21` as `1000000000000000000000`).
impl Display for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 0.0 {
            // Also covers `-0.0`.
            return f.write_str("0");
        }
        write!(f, "{}", self.0)
    }
}

/// Range expression → value, in authoring order.
///
/// Order matters: the pluralizer returns the first matching range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeMap<V> {
    entries: Vec<(String, V)>,
}

/// The variants of a pluralized message.
pub type PluralForms = RangeMap<String>;

impl<V> Default for RangeMap<V> {
    fn default() -> Self {
        RangeMap {
            entries: Vec::new(),
        }
    }
}

impl<V> RangeMap<V> {
    pub fn new<R, T>(entries: impl IntoIterator<Item = (R, T)>) -> Self
    where
        R: Into<String>,
        T: Into<V>,
    {
        let mut out = RangeMap::default();
        for (range, value) in entries {
            out.insert(range, value);
        }
        out
    }

    /// Sets the value for `range`. An existing range keeps its position.
    pub fn insert(&mut self, range: impl Into<String>, value: impl Into<V>) {
        let range = range.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(r, _)| *r == range) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((range, value)),
        }
    }

    pub fn get(&self, range: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(r, _)| r == range)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(r, v)| (r.as_str(), v))
    }

    pub fn ranges(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(r, _)| r.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> FromIterator<(String, V)> for RangeMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        RangeMap::new(iter)
    }
}

impl<V: Serialize> Serialize for RangeMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (range, value) in &self.entries {
            map.serialize_entry(range, value)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for RangeMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ordered = Ordered::<V>::deserialize(deserializer)?;
        Ok(RangeMap::new(ordered.0))
    }
}

/// One translatable message.
///
/// Scalars that are not strings (`YEAR: 2020`, `OK: true`) are read as
/// static text, in entries and in plural variants alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MessageEntry {
    /// Text that does not depend on a count.
    Static(String),

    /// Text chosen by matching a count against range expressions.
    Pluralized(PluralForms),
}

impl MessageEntry {
    pub fn is_pluralized(&self) -> bool {
        matches!(self, MessageEntry::Pluralized(_))
    }

    pub fn as_static(&self) -> Option<&str> {
        match self {
            MessageEntry::Static(text) => Some(text),
            MessageEntry::Pluralized(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for MessageEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = MessageEntry;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a string or a map of range expressions to strings")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(MessageEntry::Static(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(MessageEntry::Static(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(MessageEntry::Static(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(MessageEntry::Static(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(MessageEntry::Static(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(MessageEntry::Static(v.to_string()))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                let forms = Ordered::<ScalarText>::deserialize(MapAccessDeserializer::new(map))?;
                Ok(MessageEntry::Pluralized(
                    forms.0.into_iter().map(|(range, text)| (range, text.0)).collect(),
                ))
            }
        }

        deserializer.deserialize_any(EntryVisitor)
    }
}

impl From<&str> for MessageEntry {
    fn from(value: &str) -> Self {
        MessageEntry::Static(value.to_string())
    }
}

impl From<String> for MessageEntry {
    fn from(value: String) -> Self {
        MessageEntry::Static(value)
    }
}

impl From<PluralForms> for MessageEntry {
    fn from(value: PluralForms) -> Self {
        MessageEntry::Pluralized(value)
    }
}

/// All messages of one locale (a "bucket").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocaleMessages {
    /// Locale identifier, e.g. `en`, `fr-CA`, `pt_BR`.
    #[serde(alias = "lang")]
    pub locale: String,

    #[serde(default)]
    pub messages: BTreeMap<String, MessageEntry>,
}

impl LocaleMessages {
    pub fn new(locale: impl Into<String>) -> Self {
        LocaleMessages {
            locale: locale.into(),
            messages: BTreeMap::new(),
        }
    }

    /// Adds a message, returning `self` for chaining.
    pub fn with(mut self, key: impl Into<String>, entry: impl Into<MessageEntry>) -> Self {
        self.messages.insert(key.into(), entry.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&MessageEntry> {
        self.messages.get(key)
    }
}

/// The translations available to one component or module.
///
/// Both historical shapes deserialize into this type:
///
/// ```yaml
/// # mapping form
/// en: { messages: { HELLO: Hi } }
/// ```
///
/// ```yaml
/// # record form
/// - locale: en
///   messages: { HELLO: Hi }
/// ```
///
/// Internally the table is always the ordered record form. It serializes as
/// records.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct MessageTable {
    records: Vec<LocaleMessages>,
}

impl MessageTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<LocaleMessages>) -> Self {
        MessageTable { records }
    }

    pub fn records(&self) -> &[LocaleMessages] {
        &self.records
    }

    pub fn into_records(self) -> Vec<LocaleMessages> {
        self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Locales in table order.
    pub fn locales(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.locale.as_str()).collect()
    }

    /// First bucket whose locale equals `locale`.
    pub fn bucket(&self, locale: &str) -> Option<&LocaleMessages> {
        self.records.iter().find(|r| r.locale == locale)
    }

    pub fn bucket_mut(&mut self, locale: &str) -> Option<&mut LocaleMessages> {
        self.records.iter_mut().find(|r| r.locale == locale)
    }

    /// Looks up `key` in the bucket of `locale`.
    pub fn lookup(&self, locale: &str, key: &str) -> Option<&MessageEntry> {
        self.bucket(locale).and_then(|b| b.get(key))
    }

    /// Inserts a message, creating the bucket when needed.
    pub fn insert(
        &mut self,
        locale: &str,
        key: impl Into<String>,
        entry: impl Into<MessageEntry>,
    ) {
        let idx = match self.records.iter().position(|r| r.locale == locale) {
            Some(idx) => idx,
            None => {
                self.records.push(LocaleMessages::new(locale));
                self.records.len() - 1
            }
        };
        self.records[idx].messages.insert(key.into(), entry.into());
    }

    /// Merges `other` into `self`.
    ///
    /// Buckets sharing a locale are merged key by key with `other` winning;
    /// unseen locales are appended.
    pub fn extend(&mut self, other: MessageTable) {
        for next in other.records {
            match self.bucket_mut(&next.locale) {
                Some(base) => base.messages.extend(next.messages),
                None => self.records.push(next),
            }
        }
    }

    /// Merges tables in order, later ones overriding earlier ones.
    pub fn merge(tables: impl IntoIterator<Item = MessageTable>) -> MessageTable {
        let mut out = MessageTable::new();
        for table in tables {
            out.extend(table);
        }
        out
    }

    /// Sorts buckets by locale, the order used for on-disk files.
    pub fn sort_by_locale(&mut self) {
        self.records.sort_by(|a, b| a.locale.cmp(&b.locale));
    }
}

impl From<Vec<LocaleMessages>> for MessageTable {
    fn from(records: Vec<LocaleMessages>) -> Self {
        MessageTable::from_records(records)
    }
}

impl FromIterator<LocaleMessages> for MessageTable {
    fn from_iter<I: IntoIterator<Item = LocaleMessages>>(iter: I) -> Self {
        MessageTable::from_records(iter.into_iter().collect())
    }
}

#[derive(Deserialize)]
struct Bucket {
    #[serde(default)]
    messages: BTreeMap<String, MessageEntry>,
}

impl<'de> Deserialize<'de> for MessageTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = MessageTable;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a list of locale records or a map of locales")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(MessageTable::new())
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(MessageTable::new())
            }

            fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
                let records = Vec::<LocaleMessages>::deserialize(SeqAccessDeserializer::new(seq))?;
                Ok(MessageTable { records })
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                let buckets = Ordered::<Bucket>::deserialize(MapAccessDeserializer::new(map))?;
                let records = buckets
                    .0
                    .into_iter()
                    .map(|(locale, bucket)| LocaleMessages {
                        locale,
                        messages: bucket.messages,
                    })
                    .collect();
                Ok(MessageTable { records })
            }
        }

        deserializer.deserialize_any(TableVisitor)
    }
}

/// A map read in document order.
///
/// Keys may be written as bare numbers in YAML (`1: "{} item"`), so numeric
/// keys are accepted and kept as their decimal text.
struct Ordered<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Ordered<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedVisitor<V> {
            type Value = Ordered<V>;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut out: Vec<(String, V)> = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<ScalarKey, V>()? {
                    match out.iter_mut().find(|(k, _)| *k == key.0) {
                        Some((_, existing)) => *existing = value,
                        None => out.push((key.0, value)),
                    }
                }
                Ok(Ordered(out))
            }
        }

        deserializer.deserialize_map(OrderedVisitor(PhantomData))
    }
}

struct ScalarKey(String);

impl<'de> Deserialize<'de> for ScalarKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = ScalarKey;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a string or integer key")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ScalarKey(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(ScalarKey(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(ScalarKey(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(ScalarKey(v.to_string()))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

/// Text written as any YAML scalar.
struct ScalarText(String);

impl<'de> Deserialize<'de> for ScalarText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TextVisitor;

        impl Visitor<'_> for TextVisitor {
            type Value = ScalarText;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a string, number or boolean")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ScalarText(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(ScalarText(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(ScalarText(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(ScalarText(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(ScalarText(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(ScalarText(v.to_string()))
            }
        }

        deserializer.deserialize_any(TextVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> PluralForms {
        PluralForms::new([("0,1", "{} item"), ("2,", "{} items")])
    }

    #[test]
    fn test_count_parse() {
        assert_eq!(Count::parse("3"), Some(Count::new(3.0)));
        assert_eq!(Count::parse(" 2.5 "), Some(Count::new(2.5)));
        assert_eq!(Count::parse("-1"), Some(Count::new(-1.0)));
        assert_eq!(Count::parse("three"), None);
        assert_eq!(Count::parse(""), None);
        assert_eq!(Count::parse("NaN"), None);
    }

    #[test]
    fn test_count_display() {
        assert_eq!(Count::from(3).to_string(), "3");
        assert_eq!(Count::from(2.5).to_string(), "2.5");
        assert_eq!(Count::from(-4i64).to_string(), "-4");
    }

    #[test]
    fn test_count_display_negative_zero() {
        assert_eq!(Count::from(-0.0).to_string(), "0");
        assert_eq!(Count::parse("-0").unwrap().to_string(), "0");
        assert_eq!(Count::from(1e21).to_string(), "1000000000000000000000");
    }

    #[test]
    fn test_non_string_scalars_are_static_text() {
        let table: MessageTable = serde_yaml::from_str(
            "en:\n  messages:\n    YEAR: 2020\n    OK: true\n    RATIO: 1.5\n    HELLO: Hi\n    ITEMS:\n      '0': 0\n      '1,': '{} items'\n",
        )
        .unwrap();
        fn text<'a>(table: &'a MessageTable, key: &str) -> Option<&'a str> {
            table.lookup("en", key).and_then(MessageEntry::as_static)
        }
        assert_eq!(text(&table, "YEAR"), Some("2020"));
        assert_eq!(text(&table, "OK"), Some("true"));
        assert_eq!(text(&table, "RATIO"), Some("1.5"));
        assert_eq!(text(&table, "HELLO"), Some("Hi"));
        match table.lookup("en", "ITEMS") {
            Some(MessageEntry::Pluralized(forms)) => {
                assert_eq!(forms.get("0").map(String::as_str), Some("0"));
            }
            other => panic!("unexpected entry: {:?}", other),
        }
    }

    #[test]
    fn test_bad_entry_error_names_the_expected_shape() {
        let err = serde_yaml::from_str::<MessageTable>("en:\n  messages:\n    HELLO: [a, b]\n")
            .unwrap_err()
            .to_string();
        assert!(!err.contains("untagged"), "{}", err);
        assert!(err.contains("a string or a map of range expressions"), "{}", err);
    }

    #[test]
    fn test_scalar_table_is_rejected() {
        let err = serde_yaml::from_str::<MessageTable>("not a table")
            .unwrap_err()
            .to_string();
        assert!(err.contains("a list of locale records or a map of locales"), "{}", err);
    }

    #[test]
    fn test_plural_forms_keep_order() {
        let forms = PluralForms::new([("5,", "many"), ("0", "none"), ("1,4", "few")]);
        let ranges: Vec<&str> = forms.ranges().collect();
        assert_eq!(ranges, vec!["5,", "0", "1,4"]);
    }

    #[test]
    fn test_plural_forms_insert_replaces_in_place() {
        let mut forms = items();
        forms.insert("0,1", "one {}");
        assert_eq!(forms.len(), 2);
        assert_eq!(forms.ranges().next(), Some("0,1"));
        assert_eq!(forms.get("0,1").map(String::as_str), Some("one {}"));
    }

    #[test]
    fn test_deserialize_mapping_form() {
        let json = r#"{
            "en": {"messages": {"HELLO": "Hi", "ITEMS": {"2,": "{} items", "0,1": "{} item"}}},
            "fr": {"messages": {"HELLO": "Salut"}}
        }"#;
        let table: MessageTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.locales(), vec!["en", "fr"]);
        assert_eq!(
            table.lookup("en", "HELLO"),
            Some(&MessageEntry::Static("Hi".to_string()))
        );
        match table.lookup("en", "ITEMS") {
            Some(MessageEntry::Pluralized(forms)) => {
                let ranges: Vec<&str> = forms.ranges().collect();
                assert_eq!(ranges, vec!["2,", "0,1"]);
            }
            other => panic!("unexpected entry: {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_record_form_with_lang_alias() {
        let yaml = "
- lang: en
  messages:
    HELLO: Hi
    ITEMS:
      1: one item
      '2,': '{} items'
- locale: fr
  messages:
    HELLO: Salut
";
        let table: MessageTable = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(table.locales(), vec!["en", "fr"]);
        match table.lookup("en", "ITEMS") {
            Some(MessageEntry::Pluralized(forms)) => {
                assert_eq!(forms.get("1").map(String::as_str), Some("one item"));
                assert_eq!(forms.get("2,").map(String::as_str), Some("{} items"));
            }
            other => panic!("unexpected entry: {:?}", other),
        }
    }

    #[test]
    fn test_both_forms_resolve_identically() {
        let map: MessageTable =
            serde_json::from_str(r#"{"en": {"messages": {"A": "a"}}}"#).unwrap();
        let list: MessageTable =
            serde_json::from_str(r#"[{"locale": "en", "messages": {"A": "a"}}]"#).unwrap();
        assert_eq!(map, list);
    }

    #[test]
    fn test_deserialize_bucket_without_messages() {
        let table: MessageTable = serde_json::from_str(r#"{"en": {}}"#).unwrap();
        assert!(table.bucket("en").unwrap().messages.is_empty());
    }

    #[test]
    fn test_deserialize_null_table() {
        let table: MessageTable = serde_yaml::from_str("~").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_serialize_as_records() {
        let table = MessageTable::from_records(vec![
            LocaleMessages::new("en").with("ITEMS", items()),
        ]);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json[0]["locale"], "en");
        assert_eq!(json[0]["messages"]["ITEMS"]["2,"], "{} items");
    }

    #[test]
    fn test_bucket_linear_search_first_wins() {
        let table = MessageTable::from_records(vec![
            LocaleMessages::new("en").with("A", "first"),
            LocaleMessages::new("en").with("A", "second"),
        ]);
        assert_eq!(
            table.lookup("en", "A").and_then(MessageEntry::as_static),
            Some("first")
        );
    }

    #[test]
    fn test_insert_creates_bucket() {
        let mut table = MessageTable::new();
        table.insert("de", "HELLO", "Hallo");
        table.insert("de", "BYE", "Tschüss");
        assert_eq!(table.records().len(), 1);
        assert_eq!(table.bucket("de").unwrap().messages.len(), 2);
    }

    #[test]
    fn test_merge_tables() {
        let local = MessageTable::from_records(vec![
            LocaleMessages::new("en")
                .with("HELLO", "Hello")
                .with("BYE", "Bye"),
        ]);
        let external = MessageTable::from_records(vec![
            LocaleMessages::new("en").with("HELLO", "Hi there"),
            LocaleMessages::new("fr").with("HELLO", "Bonjour"),
        ]);

        let merged = MessageTable::merge([local, external]);
        assert_eq!(merged.locales(), vec!["en", "fr"]);
        assert_eq!(
            merged.lookup("en", "HELLO").and_then(MessageEntry::as_static),
            Some("Hi there")
        );
        assert_eq!(
            merged.lookup("en", "BYE").and_then(MessageEntry::as_static),
            Some("Bye")
        );
        assert_eq!(
            merged.lookup("fr", "HELLO").and_then(MessageEntry::as_static),
            Some("Bonjour")
        );
    }

    #[test]
    fn test_sort_by_locale() {
        let mut table = MessageTable::from_records(vec![
            LocaleMessages::new("fr"),
            LocaleMessages::new("en"),
        ]);
        table.sort_by_locale();
        assert_eq!(table.locales(), vec!["en", "fr"]);
    }
}
