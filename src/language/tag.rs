//! Language tags derived from locale identifiers

use std::fmt;

/// A normalized (language, region) pair.
///
/// Both parts are lowercase; `region` is empty when the identifier has none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LanguageTag {
    pub language: String,
    pub region: String,
}

impl LanguageTag {
    pub fn new(language: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            language: language.into().to_lowercase(),
            region: region.into().to_lowercase(),
        }
    }

    /// Parse a locale identifier such as `de_CH`, `de-at`, `zh-Hant-TW` or `de_ch_POSIX`.
    ///
    /// - `-` and `_` both separate subtags, case is ignored
    /// - an `@keyword=value` suffix is dropped
    /// - a 4-letter script subtag after the language is skipped
    /// - a region is 2 letters or 3 digits; any other subtag in its place
    ///   (`POSIX`, `1996`, an empty one) means there is no region
    /// - anything after the region is a modifier and ignored
    pub fn parse(identifier: &str) -> Self {
        let identifier = identifier
            .split_once('@')
            .map_or(identifier, |(base, _)| base);

        let mut subtags = identifier.split(['-', '_']).map(str::trim);

        let language = subtags.next().unwrap_or_default();
        let mut candidate = subtags.next().unwrap_or_default();
        if is_script(candidate) {
            candidate = subtags.next().unwrap_or_default();
        }
        let region = if is_region(candidate) { candidate } else { "" };

        Self::new(language, region)
    }

    pub fn has_region(&self) -> bool {
        !self.region.is_empty()
    }
}

fn is_script(subtag: &str) -> bool {
    subtag.len() == 4 && subtag.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_region(subtag: &str) -> bool {
    (subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()))
        || (subtag.len() == 3 && subtag.chars().all(|c| c.is_ascii_digit()))
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_region() {
            write!(f, "{}_{}", self.language, self.region)
        } else {
            f.write_str(&self.language)
        }
    }
}
