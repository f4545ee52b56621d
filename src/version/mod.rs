//! Lenient `major.minor.patch` versions
//!
//! - [`semver`]: the [`SemVer`] value type, its parser and ordering

pub mod semver;

#[cfg(test)]
mod semver_proptest;

pub use self::semver::SemVer;
