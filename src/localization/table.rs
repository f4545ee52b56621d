//! Key → localized value tables loaded from JSON files

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::localization::error::LocalizationError;

/// Localized strings for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
    entries: HashMap<String, String>,
}

impl StringTable {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Parse a flat JSON object of strings, e.g. `{"greeting": "Hello ${name}"}`.
    ///
    /// `origin` is only used in error messages.
    pub fn from_json_str(json: &str, origin: &Path) -> Result<Self, LocalizationError> {
        let value: Value = serde_json::from_str(json).map_err(|source| LocalizationError::Json {
            path: origin.to_path_buf(),
            source,
        })?;

        let Value::Object(object) = value else {
            return Err(LocalizationError::NotAnObject(origin.to_path_buf()));
        };

        let entries = object
            .into_iter()
            .map(|(key, value)| match value {
                Value::String(text) => Ok((key, text)),
                _ => Err(LocalizationError::NotAnObject(origin.to_path_buf())),
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Self { entries })
    }

    pub fn from_path(path: &Path) -> Result<Self, LocalizationError> {
        debug!("Loading string table from {:?}", path);

        let json = std::fs::read_to_string(path).map_err(|source| LocalizationError::Io {
            path: PathBuf::from(path),
            source,
        })?;

        Self::from_json_str(&json, path)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_str_reads_flat_object() {
        let table = StringTable::from_json_str(
            r#"{"greeting": "Hallo ${name}", "bye": "Tschüss"}"#,
            Path::new("de.json"),
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("greeting"), Some("Hallo ${name}"));
        assert_eq!(table.get("missing"), None);
    }

    #[test]
    fn from_json_str_rejects_nested_values() {
        let result = StringTable::from_json_str(r#"{"a": {"b": "c"}}"#, Path::new("x.json"));

        assert!(matches!(result, Err(LocalizationError::NotAnObject(_))));
    }

    #[test]
    fn from_json_str_rejects_arrays() {
        let result = StringTable::from_json_str(r#"["a"]"#, Path::new("x.json"));

        assert!(matches!(result, Err(LocalizationError::NotAnObject(_))));
    }

    #[test]
    fn from_json_str_reports_syntax_errors_with_origin() {
        let error = StringTable::from_json_str("{", Path::new("broken.json")).unwrap_err();

        assert!(matches!(error, LocalizationError::Json { .. }));
        assert!(error.to_string().contains("broken.json"));
    }

    #[test]
    fn from_path_reports_missing_file() {
        let result = StringTable::from_path(Path::new("/nonexistent/strings/de.json"));

        assert!(matches!(result, Err(LocalizationError::Io { .. })));
    }
}
