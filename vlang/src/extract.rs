//! Extraction of embedded message blocks from source files.
//!
//! Components carry their messages in a `<messages>` block; scripts carry
//! them in a `/* VLANG ... */` comment. Both bodies are YAML in either table
//! form.

use std::{borrow::Cow, fs, path::Path};

use lazy_static::lazy_static;
use quick_xml::escape::{resolve_html5_entity, unescape_with};
use regex::{Captures, NoExpand, Regex};

use crate::{
    error::Error,
    types::{LocaleMessages, MessageTable},
};

lazy_static! {
    static ref SCRIPT_BLOCK: Regex = Regex::new(r"/\*\s*VLANG((?:[^*]|\*[^/])*)\*/").unwrap();
    static ref COMPONENT_BLOCK: Regex =
        Regex::new(r"(?s)<messages(?:\s[^>]*)?>(.*?)</messages\s*>").unwrap();
    static ref ENTITY: Regex =
        Regex::new(r"&(?:#[0-9]+|#[xX][0-9a-fA-F]+|[A-Za-z][A-Za-z0-9]*);").unwrap();
}

/// Kind of source file a message block is embedded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Single-file component (`.vue`).
    Component,
    /// Plain script (`.js`).
    Script,
}

impl FileKind {
    /// Infers the kind from a file extension, case-insensitively.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<FileKind> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "vue" => Some(FileKind::Component),
            "js" => Some(FileKind::Script),
            _ => None,
        }
    }
}

/// Returns the raw YAML body of the first message block, if any.
pub fn find_block(content: &str, kind: FileKind) -> Option<String> {
    match kind {
        FileKind::Component => COMPONENT_BLOCK
            .captures(content)
            .map(|c| decode_entities(&c[1])),
        FileKind::Script => SCRIPT_BLOCK.captures(content).map(|c| c[1].to_string()),
    }
}

/// Extracts the messages embedded in `content`.
///
/// A file without a block yields an empty list.
pub fn extract(content: &str, kind: FileKind) -> Result<Vec<LocaleMessages>, Error> {
    let Some(body) = find_block(content, kind) else {
        return Ok(Vec::new());
    };
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let table: MessageTable = serde_yaml::from_str(&body)?;
    Ok(table.into_records())
}

/// Reads `path` and extracts its messages. Files of unknown kind yield an
/// empty list.
pub fn extract_path<P: AsRef<Path>>(path: P) -> Result<Vec<LocaleMessages>, Error> {
    let path = path.as_ref();
    let Some(kind) = FileKind::from_path(path) else {
        return Ok(Vec::new());
    };
    let content = fs::read_to_string(path)?;
    extract(&content, kind)
}

/// Replaces every VLANG comment of a script with the JSON form of `table`.
pub fn inject_script(content: &str, table: &MessageTable) -> Result<String, Error> {
    let json = serde_json::to_string(table)?;
    Ok(SCRIPT_BLOCK
        .replace_all(content, NoExpand(&json))
        .into_owned())
}

/// Decodes HTML entities and character references one at a time, so a
/// stray `&` or an unknown entity is left as written.
fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures| {
            let raw = &caps[0];
            unescape_with(raw, resolve_html5_entity)
                .map(Cow::into_owned)
                .unwrap_or_else(|_| raw.to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageEntry;
    use indoc::indoc;

    const COMPONENT: &str = indoc! {r#"
        <template>
            <p>{{ $t('HELLO') }}</p>
        </template>

        <messages>
        - locale: en
          messages:
            HELLO: Hello &amp; welcome
            ITEMS:
              "0,1": "{} item"
              "2,": "{} items"
        - locale: fr
          messages:
            HELLO: Bonjour
        </messages>
    "#};

    const SCRIPT: &str = indoc! {r#"
        import { vljs } from "vlang";

        const $t = vljs(/* VLANG
        - lang: en
          messages:
            ERROR: Something went wrong
        */);
    "#};

    #[test]
    fn test_file_kind_from_path() {
        assert_eq!(FileKind::from_path("a/B.vue"), Some(FileKind::Component));
        assert_eq!(FileKind::from_path("a/b.JS"), Some(FileKind::Script));
        assert_eq!(FileKind::from_path("a/b.ts"), None);
        assert_eq!(FileKind::from_path("Makefile"), None);
    }

    #[test]
    fn test_extract_component() {
        let blocks = extract(COMPONENT, FileKind::Component).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].locale, "en");
        assert_eq!(
            blocks[0].get("HELLO"),
            Some(&MessageEntry::Static("Hello & welcome".to_string()))
        );
        assert!(blocks[0].get("ITEMS").unwrap().is_pluralized());
        assert_eq!(blocks[1].locale, "fr");
    }

    #[test]
    fn test_extract_decodes_html_entities() {
        let content = "<messages>\nen:\n  messages:\n    A: \"caf&#233; &nbsp;ok &eacute; &#x263a;\"\n    B: \"Tom & Jerry &bogus; &amp;lt;\"\n</messages>";
        let blocks = extract(content, FileKind::Component).unwrap();
        assert_eq!(
            blocks[0].get("A").and_then(MessageEntry::as_static),
            Some("café \u{a0}ok é \u{263a}")
        );
        assert_eq!(
            blocks[0].get("B").and_then(MessageEntry::as_static),
            Some("Tom & Jerry &bogus; &lt;")
        );
    }

    #[test]
    fn test_extract_script() {
        let blocks = extract(SCRIPT, FileKind::Script).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].locale, "en");
        assert_eq!(
            blocks[0].get("ERROR").and_then(MessageEntry::as_static),
            Some("Something went wrong")
        );
    }

    #[test]
    fn test_extract_without_block() {
        assert!(extract("<template></template>", FileKind::Component).unwrap().is_empty());
        assert!(extract("const a = 1; /* note */", FileKind::Script).unwrap().is_empty());
        assert!(extract("/* VLANG */", FileKind::Script).unwrap().is_empty());
    }

    #[test]
    fn test_extract_invalid_yaml() {
        let err = extract("<messages>- locale: [en</messages>", FileKind::Component).unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn test_extract_path() {
        let dir = tempfile::tempdir().unwrap();
        let vue = dir.path().join("Hello.vue");
        let txt = dir.path().join("notes.txt");
        fs::write(&vue, COMPONENT).unwrap();
        fs::write(&txt, COMPONENT).unwrap();

        assert_eq!(extract_path(&vue).unwrap().len(), 2);
        assert!(extract_path(&txt).unwrap().is_empty());
    }

    #[test]
    fn test_inject_script() {
        let table = MessageTable::from_records(extract(SCRIPT, FileKind::Script).unwrap());
        let out = inject_script(SCRIPT, &table).unwrap();
        assert!(!out.contains("VLANG"));
        assert!(out.contains(r#"vljs([{"locale":"en","messages":{"ERROR":"Something went wrong"}}]);"#));
    }
}
