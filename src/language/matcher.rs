//! Picking the best available language for a user's preferences
//!
//! Matching a single preferred identifier:
//! 1. an available tag with the same language and region wins
//! 2. in [`MatchMode::Exact`] nothing else is accepted
//! 3. in [`MatchMode::AllowPartiallyMatching`] a tag with the same language is
//!    accepted, preferring one without a region ("more general") over the first
//!    regional sibling
//!
//! Ties are always broken by the order of `available`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::language::tag::LanguageTag;

/// How strictly an available tag has to match the preferred one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchMode {
    /// Both language and region must match
    Exact,
    /// Fall back to a tag sharing only the language
    #[default]
    AllowPartiallyMatching,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown match mode: {0} (expected `exact` or `allowPartiallyMatching`)")]
pub struct ParseMatchModeError(String);

impl FromStr for MatchMode {
    type Err = ParseMatchModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(MatchMode::Exact),
            "allowPartiallyMatching" | "partial" => Ok(MatchMode::AllowPartiallyMatching),
            _ => Err(ParseMatchModeError(s.to_string())),
        }
    }
}

/// Find the element of `available` whose identifier best matches `preferred`.
///
/// `tag_of` extracts the language identifier from an element.
pub fn best_matching_element<'a, T, F>(
    available: &'a [T],
    tag_of: F,
    preferred: &str,
    mode: MatchMode,
) -> Option<&'a T>
where
    F: Fn(&T) -> &str,
{
    let tags: Vec<LanguageTag> = available
        .iter()
        .map(|element| LanguageTag::parse(tag_of(element)))
        .collect();

    best_match_index(&tags, &LanguageTag::parse(preferred), mode).map(|index| &available[index])
}

/// Try each of the `preferred` identifiers in priority order and return the first match.
///
/// The same `mode` applies to every preferred identifier: in [`MatchMode::Exact`] a
/// lower-priority identifier is never matched partially.
pub fn best_matching_element_for_any<'a, T, F, I>(
    available: &'a [T],
    tag_of: F,
    preferred: I,
    mode: MatchMode,
) -> Option<&'a T>
where
    F: Fn(&T) -> &str,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let tags: Vec<LanguageTag> = available
        .iter()
        .map(|element| LanguageTag::parse(tag_of(element)))
        .collect();

    preferred
        .into_iter()
        .find_map(|preferred| {
            best_match_index(&tags, &LanguageTag::parse(preferred.as_ref()), mode)
        })
        .map(|index| &available[index])
}

/// [`best_matching_element`] for a plain list of identifiers.
///
/// ```
/// use common_core::language::{MatchMode, best_matching_language};
///
/// let languages = ["de-AT", "de", "de_CH", "fr_FR"];
///
/// assert_eq!(
///     best_matching_language(&languages, "de_IT", MatchMode::AllowPartiallyMatching),
///     Some(&"de")
/// );
/// assert_eq!(best_matching_language(&languages, "de_DE", MatchMode::Exact), None);
/// ```
pub fn best_matching_language<'a, S: AsRef<str>>(
    available: &'a [S],
    preferred: &str,
    mode: MatchMode,
) -> Option<&'a S> {
    best_matching_element(available, |s| s.as_ref(), preferred, mode)
}

/// [`best_matching_element_for_any`] for a plain list of identifiers.
pub fn best_matching_language_for_any<'a, S, I>(
    available: &'a [S],
    preferred: I,
    mode: MatchMode,
) -> Option<&'a S>
where
    S: AsRef<str>,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    best_matching_element_for_any(available, |s| s.as_ref(), preferred, mode)
}

fn best_match_index(
    tags: &[LanguageTag],
    preferred: &LanguageTag,
    mode: MatchMode,
) -> Option<usize> {
    if let Some(index) = tags.iter().position(|tag| tag == preferred) {
        debug!("Exact language match for {preferred}: {}", tags[index]);
        return Some(index);
    }

    if mode == MatchMode::Exact {
        return None;
    }

    let same_language = |tag: &LanguageTag| tag.language == preferred.language;

    let index = tags
        .iter()
        .position(|tag| same_language(tag) && !tag.has_region())
        .or_else(|| tags.iter().position(same_language))?;

    debug!("Partial language match for {preferred}: {}", tags[index]);
    Some(index)
}
