//! Property-based tests for SemVer parsing and ordering

use proptest::prelude::*;

use crate::version::SemVer;

fn any_version() -> impl Strategy<Value = SemVer> {
    (0u64..100_000, 0u64..100_000, 0u64..100_000)
        .prop_map(|(major, minor, patch)| SemVer::new(major, minor, patch))
}

proptest! {
    /// Property: rendering then parsing gives back the same version
    #[test]
    fn parse_inverts_display(version in any_version()) {
        prop_assert_eq!(SemVer::parse(&version.to_string()), version);
    }

    /// Property: a non-digit suffix on the last segment is ignored
    #[test]
    fn non_digit_suffix_is_ignored(version in any_version(), suffix in "[_-]?[a-zA-Z]{1,8}") {
        let plain = version.to_string();
        let decorated = format!("{plain}{suffix}");
        prop_assert_eq!(SemVer::parse(&decorated), SemVer::parse(&plain));
    }

    /// Property: ordering agrees with the (major, minor, patch) tuple
    #[test]
    fn ordering_matches_tuple_ordering(a in any_version(), b in any_version()) {
        let expected = (a.major, a.minor, a.patch).cmp(&(b.major, b.minor, b.patch));
        prop_assert_eq!(a.cmp(&b), expected);
        prop_assert_eq!(b.cmp(&a), expected.reverse());
    }

    /// Property: ordering is transitive
    #[test]
    fn ordering_is_transitive(a in any_version(), b in any_version(), c in any_version()) {
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
    }

    /// Property: parsing arbitrary text never panics
    #[test]
    fn parse_never_panics(input in ".*") {
        let _ = SemVer::parse(&input);
    }
}
