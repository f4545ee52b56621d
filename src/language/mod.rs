//! Preferred-language matching
//!
//! - [`tag`]: [`LanguageTag`], a normalized (language, region) pair
//! - [`matcher`]: best-match selection with [`MatchMode`]

pub mod matcher;
pub mod tag;

pub use matcher::{
    MatchMode, ParseMatchModeError, best_matching_element, best_matching_element_for_any,
    best_matching_language, best_matching_language_for_any,
};
pub use tag::LanguageTag;
