//! Localized strings
//!
//! - [`table`]: [`StringTable`], one language's key → value map loaded from JSON
//! - [`localizer`]: [`Localizer`], picks a table with the language matcher and
//!   performs `${VAR}` substitution
//! - [`error`]: [`LocalizationError`]

pub mod error;
pub mod localizer;
pub mod table;

pub use error::LocalizationError;
pub use localizer::Localizer;
pub use table::StringTable;
