//! Version precedence
//!
//! Results are expressed from the point of view of the FIRST argument:
//! `compare(a, b)` is [`Precedence::Older`] (`-1`) when `b` is newer,
//! [`Precedence::Equal`] (`0`) when both rank the same, and
//! [`Precedence::Newer`] (`1`) when `b` is older. This is the `a` vs `b`
//! reading, not `b - a`; keep it that way when serializing.

use std::cmp::Ordering;
use std::fmt;

use super::version::Version;
use crate::error::InvalidVersionFormat;

/// Outcome of comparing a version against another one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precedence {
    /// First argument is older (`-1`)
    Older,
    /// Same precedence (`0`)
    Equal,
    /// First argument is newer (`1`)
    Newer,
}

impl Precedence {
    /// `-1`, `0` or `1`
    pub fn as_i8(self) -> i8 {
        match self {
            Precedence::Older => -1,
            Precedence::Equal => 0,
            Precedence::Newer => 1,
        }
    }

    /// The result with the arguments swapped
    pub fn reverse(self) -> Self {
        match self {
            Precedence::Older => Precedence::Newer,
            Precedence::Equal => Precedence::Equal,
            Precedence::Newer => Precedence::Older,
        }
    }
}

impl From<Ordering> for Precedence {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Precedence::Older,
            Ordering::Equal => Precedence::Equal,
            Ordering::Greater => Precedence::Newer,
        }
    }
}

impl From<Precedence> for Ordering {
    fn from(precedence: Precedence) -> Self {
        match precedence {
            Precedence::Older => Ordering::Less,
            Precedence::Equal => Ordering::Equal,
            Precedence::Newer => Ordering::Greater,
        }
    }
}

impl fmt::Display for Precedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}

/// Which precedence rules to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompareMode {
    /// Behaviour of the classic `semver compare` tool, see [`compare`]
    #[default]
    Compatible,
    /// semver.org §11 precedence, see [`compare_strict`]
    Strict,
}

fn cmp_release(a: &Version, b: &Version) -> Ordering {
    a.major()
        .cmp(b.major())
        .then_with(|| a.minor().cmp(b.minor()))
        .then_with(|| a.patch().cmp(b.patch()))
}

/// Compares two versions with the tool's compatible rules.
///
/// 1. `major`, `minor`, `patch` numerically, first difference decides.
/// 2. When only one side has a prerelease, that side ranks newer. This keeps
///    `compare 1.0.1-rc1.1.0+build.051 1.0.1` answering `1` as the tool
///    always has, even though semver.org ranks the release higher.
/// 3. Two prereleases compare as whole strings, byte by byte: `rc.10` ranks
///    below `rc.9`. [`compare_strict`] has the identifier-aware rules.
/// 4. Build metadata is ignored.
pub fn compare(a: &Version, b: &Version) -> Precedence {
    let ordering = cmp_release(a, b).then_with(|| match (a.prerelease(), b.prerelease()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => left.cmp_lexical(right),
    });
    ordering.into()
}

/// Compares two versions following semver.org precedence.
///
/// A release outranks any of its prereleases, and prereleases are compared
/// identifier by identifier. Build metadata is ignored.
pub fn compare_strict(a: &Version, b: &Version) -> Precedence {
    let ordering = cmp_release(a, b).then_with(|| match (a.prerelease(), b.prerelease()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(left), Some(right)) => left.cmp_precedence(right),
    });
    ordering.into()
}

pub fn compare_with(mode: CompareMode, a: &Version, b: &Version) -> Precedence {
    match mode {
        CompareMode::Compatible => compare(a, b),
        CompareMode::Strict => compare_strict(a, b),
    }
}

/// Parses both strings and compares them with [`compare`].
pub fn compare_str(a: &str, b: &str) -> Result<Precedence, InvalidVersionFormat> {
    Ok(compare(&Version::parse(a)?, &Version::parse(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmp(a: &str, b: &str) -> i8 {
        compare_str(a, b).unwrap().as_i8()
    }

    fn cmp_strict(a: &str, b: &str) -> i8 {
        compare_strict(&Version::parse(a).unwrap(), &Version::parse(b).unwrap()).as_i8()
    }

    #[test]
    fn test_compare_documented_scenarios() {
        assert_eq!(cmp("1.0.1-rc1.1.0+build.051", "1.0.1"), 1);
        assert_eq!(cmp("1.0.1-rc1.1.0+build.051", "1.0.1-rc1.1.0"), 0);
        assert_eq!(cmp("10.1.4-rc4", "10.4.2-rc1"), -1);
        assert_eq!(cmp("1.0.1-rc1.1.0+build.051", "1.0.1-rb1.1.0"), 1);
    }

    #[test]
    fn test_compare_numeric_fields_in_order() {
        assert_eq!(cmp("2.0.0", "1.9.9"), 1);
        assert_eq!(cmp("1.2.0", "1.10.0"), -1);
        assert_eq!(cmp("1.2.3", "1.2.4"), -1);
        assert_eq!(cmp("1.2.3", "1.2.3"), 0);
    }

    #[test]
    fn test_compare_numeric_beats_prerelease() {
        assert_eq!(cmp("1.0.0-zzz", "1.0.1"), -1);
        assert_eq!(cmp("1.0.1", "1.0.0-zzz"), 1);
    }

    #[test]
    fn test_compare_release_against_prerelease() {
        assert_eq!(cmp("1.0.1", "1.0.1-alpha"), -1);
    }

    #[test]
    fn test_compare_prerelease_is_lexical() {
        assert_eq!(cmp("1.0.0-rc.10", "1.0.0-rc.9"), -1);
        assert_eq!(cmp("1.0.0-B", "1.0.0-a"), -1);
    }

    #[test]
    fn test_compare_ignores_build() {
        assert_eq!(cmp("1.0.0+a", "1.0.0+b"), 0);
        assert_eq!(cmp("1.0.0", "1.0.0+b"), 0);
    }

    #[test]
    fn test_compare_huge_numbers() {
        assert_eq!(cmp("99999999999999999999.0.0", "100000000000000000000.0.0"), -1);
    }

    #[test]
    fn test_compare_is_antisymmetric() {
        let versions = [
            "0.0.0",
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0",
            "1.0.1-rc1.1.0+build.051",
            "1.0.1-rb1.1.0",
            "10.4.2-rc1",
        ];
        for a in versions {
            assert_eq!(cmp(a, a), 0);
            for b in versions {
                assert_eq!(
                    compare_str(a, b).unwrap(),
                    compare_str(b, a).unwrap().reverse(),
                    "{} vs {}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_compare_str_propagates_parse_error() {
        let err = compare_str("1.0.0", "1.0").unwrap_err();
        assert_eq!(err.input, "1.0");
        assert!(compare_str("x", "1.0.0").is_err());
    }

    #[test]
    fn test_strict_release_outranks_prerelease() {
        assert_eq!(cmp_strict("1.0.1-rc1.1.0+build.051", "1.0.1"), -1);
        assert_eq!(cmp_strict("1.0.0", "1.0.0-alpha"), 1);
    }

    #[test]
    fn test_strict_numeric_identifiers() {
        assert_eq!(cmp_strict("1.0.0-rc.10", "1.0.0-rc.9"), 1);
        assert_eq!(cmp_strict("1.0.0-alpha", "1.0.0-alpha.1"), -1);
    }

    #[test]
    fn test_compare_with_mode() {
        let a = Version::parse("1.0.0-rc.1").unwrap();
        let b = Version::parse("1.0.0").unwrap();
        assert_eq!(compare_with(CompareMode::Compatible, &a, &b), Precedence::Newer);
        assert_eq!(compare_with(CompareMode::Strict, &a, &b), Precedence::Older);
        assert_eq!(CompareMode::default(), CompareMode::Compatible);
    }

    #[test]
    fn test_precedence_display() {
        assert_eq!(Precedence::Older.to_string(), "-1");
        assert_eq!(Precedence::Equal.to_string(), "0");
        assert_eq!(Precedence::Newer.to_string(), "1");
    }

    #[test]
    fn test_precedence_ordering_round_trip() {
        for ordering in [Ordering::Less, Ordering::Equal, Ordering::Greater] {
            assert_eq!(Ordering::from(Precedence::from(ordering)), ordering);
        }
    }
}
