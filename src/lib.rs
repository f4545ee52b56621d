//! General-purpose helpers used across many apps
//!
//! - [`version`]: lenient `major.minor.patch` version values
//! - [`language`]: choosing the best available language for a user
//! - [`localization`]: localized string tables with `${VAR}` substitution
//! - [`time`]: real and mockable time sources
//! - [`util`]: list building, slice helpers, weak parents, text helpers
//! - [`config`]: configuration file and paths

pub mod config;
pub mod language;
pub mod localization;
pub mod time;
pub mod util;
pub mod version;
