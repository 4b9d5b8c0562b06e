//! YAML-backed documents: `.vlg` translation files and `vlang.yml`.

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde::{Serialize, de::DeserializeOwned};

use crate::{config::Config, error::Error, types::MessageTable};

/// A value stored on disk as YAML.
///
/// JSON input is accepted too, since YAML is a superset of it.
///
/// # Example
///
/// ```rust,no_run
/// use vlang::{MessageTable, traits::Document};
/// let table = MessageTable::read_from("i18n/components/Header.vlg")?;
/// table.write_to("i18n/components/Header.copy.vlg")?;
/// Ok::<(), vlang::Error>(())
/// ```
pub trait Document: Sized + Serialize + DeserializeOwned {
    /// Parse from any reader.
    fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        serde_yaml::from_reader(reader).map_err(Error::Yaml)
    }

    /// Parse from a file path.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse from a string.
    fn parse_document(s: &str) -> Result<Self, Error> {
        serde_yaml::from_str(s).map_err(Error::Yaml)
    }

    /// Write to any writer.
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        serde_yaml::to_writer(writer, self).map_err(Error::Yaml)
    }

    /// Write to a file path, creating parent directories as needed.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Render as a YAML string.
    fn to_yaml_string(&self) -> Result<String, Error> {
        serde_yaml::to_string(self).map_err(Error::Yaml)
    }
}

impl Document for MessageTable {}

impl Document for Config {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LocaleMessages, MessageEntry};

    #[test]
    fn test_table_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/Header.vlg");

        let table = MessageTable::from_records(vec![
            LocaleMessages::new("en").with("TITLE", "Welcome"),
        ]);
        table.write_to(&path).unwrap();

        let read = MessageTable::read_from(&path).unwrap();
        assert_eq!(read, table);
    }

    #[test]
    fn test_parse_json_document() {
        let table =
            MessageTable::parse_document(r#"{"fr": {"messages": {"TITLE": "Bienvenue"}}}"#).unwrap();
        assert_eq!(
            table.lookup("fr", "TITLE"),
            Some(&MessageEntry::Static("Bienvenue".to_string()))
        );
    }

    #[test]
    fn test_yaml_output_is_record_form() {
        let table = MessageTable::from_records(vec![LocaleMessages::new("en").with("A", "a")]);
        let yaml = table.to_yaml_string().unwrap();
        assert!(yaml.contains("locale: en"));
        assert!(yaml.contains("A: a"));
    }

    #[test]
    fn test_read_missing_file() {
        let err = MessageTable::read_from("/definitely/not/here.vlg").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
