use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A lenient `major.minor.patch` version, so two versions can be compared easily.
///
/// Ordering is lexicographic on (major, minor, patch).
///
/// ```
/// use common_core::version::SemVer;
///
/// let lower = SemVer::parse("1.5.2");
/// let higher = SemVer::new(1, 6, 0);
///
/// assert!(lower < higher);
/// assert_ne!(lower, higher);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemVer {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl SemVer {
    pub const ZERO: SemVer = SemVer::new(0, 0, 0);

    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string, never failing.
    ///
    /// `_` is accepted as a separator (`1_2_4` is `1.2.4`). Non-digit characters
    /// around each segment are dropped, so `0.9-dev.5` becomes `0.9.5`.
    /// Segments that still do not form a number are skipped, missing components
    /// are 0 and anything after the third number is ignored.
    ///
    /// Examples:
    /// - "1.2.3" -> 1.2.3
    /// - "0.1.200_abc" -> 0.1.200
    /// - "1.2.3.4.5" -> 1.2.3
    /// - "v2" -> 2.0.0
    pub fn parse(version: &str) -> Self {
        let normalized = version.replace('_', ".");
        let mut numbers = normalized
            .split('.')
            .filter_map(|segment| {
                segment
                    .trim_matches(|c: char| !c.is_ascii_digit())
                    .parse::<u64>()
                    .ok()
            });

        Self {
            major: numbers.next().unwrap_or(0),
            minor: numbers.next().unwrap_or(0),
            patch: numbers.next().unwrap_or(0),
        }
    }

    /// The canonical `major.minor.patch` form.
    pub fn version(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemVer {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Serialize for SemVer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SemVer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

impl From<SemVer> for semver::Version {
    fn from(value: SemVer) -> Self {
        semver::Version::new(value.major, value.minor, value.patch)
    }
}

/// Pre-release and build metadata are dropped.
impl From<&semver::Version> for SemVer {
    fn from(value: &semver::Version) -> Self {
        Self::new(value.major, value.minor, value.patch)
    }
}
