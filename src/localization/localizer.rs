//! Localized string lookup across several languages

use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::language::{MatchMode, best_matching_element_for_any};
use crate::localization::error::LocalizationError;
use crate::localization::table::StringTable;
use crate::util::text::substitute_variables;

/// String tables keyed by language identifier, with one of them active.
#[derive(Debug, Clone, Default)]
pub struct Localizer {
    tables: IndexMap<String, StringTable>,
    active: Option<usize>,
}

impl Localizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `<identifier>.json` file in `dir`, ordered by file name.
    pub fn load_dir(dir: &Path) -> Result<Self, LocalizationError> {
        info!("Loading string tables from {:?}", dir);

        let io_error = |source| LocalizationError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut localizer = Self::new();
        for path in paths {
            let Some(identifier) = path.file_stem().and_then(|stem| stem.to_str()) else {
                warn!("Skipping string table with non UTF-8 name: {:?}", path);
                continue;
            };
            localizer.insert(identifier, StringTable::from_path(&path)?);
        }

        debug!("Loaded {} string tables", localizer.tables.len());
        Ok(localizer)
    }

    /// Add or replace the table for `identifier`, keeping its original position.
    pub fn insert(&mut self, identifier: impl Into<String>, table: StringTable) {
        self.tables.insert(identifier.into(), table);
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Make the best match for `preferred` the active table.
    ///
    /// Returns the selected identifier; without a match the active table is cleared.
    pub fn select<I>(&mut self, preferred: I, mode: MatchMode) -> Option<&str>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let identifiers: Vec<&str> = self.languages().collect();
        let selected = best_matching_element_for_any(&identifiers, |id| *id, preferred, mode)
            .and_then(|id| self.tables.get_index_of(*id));

        match selected {
            Some(index) => info!("Selected language {}", identifiers[index]),
            None => warn!("No string table matches the preferred languages"),
        }

        self.active = selected;
        self.active_language()
    }

    pub fn active_language(&self) -> Option<&str> {
        self.active
            .and_then(|index| self.tables.get_index(index))
            .map(|(identifier, _)| identifier.as_str())
    }

    /// Look up `key` in the active table and substitute `${VAR}` references.
    ///
    /// Like platform string lookup, a missing table or key yields the key itself.
    pub fn localized(&self, key: &str, variables: &HashMap<String, String>) -> String {
        let text = self
            .active
            .and_then(|index| self.tables.get_index(index))
            .and_then(|(_, table)| table.get(key))
            .unwrap_or_else(|| {
                debug!("No localized string for {key}");
                key
            });

        if variables.is_empty() {
            text.to_string()
        } else {
            substitute_variables(text, variables)
        }
    }
}
