//! Pre-release suffix of a semantic version
//!
//! The suffix after `-`: one or more dot-separated identifiers made of
//! `[0-9A-Za-z-]`. Unlike build metadata it takes part in ordering.
//! See semver.org: https://semver.org/#spec-item-9

use std::cmp::Ordering;
use std::fmt;

/// Pre-release suffix, e.g. `rc1.1.0` in `1.0.1-rc1.1.0`.
///
/// Only created by the version parser, so the contents always match the
/// identifier grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prerelease(String);

/// A single dot-separated pre-release identifier, classified for strict
/// precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier<'a> {
    /// All digits
    Numeric(&'a str),
    /// Contains at least one letter or hyphen
    Alphanumeric(&'a str),
}

impl Prerelease {
    pub(crate) fn from_validated(s: &str) -> Self {
        Prerelease(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the dot-separated identifiers.
    pub fn identifiers(&self) -> impl Iterator<Item = Identifier<'_>> {
        self.0.split('.').map(Identifier::classify)
    }

    /// Whole-string byte-wise comparison. This is what `compare` uses.
    pub fn cmp_lexical(&self, other: &Prerelease) -> Ordering {
        self.0.as_bytes().cmp(other.0.as_bytes())
    }

    /// Identifier-by-identifier precedence as defined by semver.org §11.4.
    pub fn cmp_precedence(&self, other: &Prerelease) -> Ordering {
        let mut left = self.identifiers();
        let mut right = other.identifiers();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(a), Some(b)) => match a.cmp(&b) {
                    Ordering::Equal => continue,
                    decided => return decided,
                },
            }
        }
    }
}

impl<'a> Identifier<'a> {
    fn classify(s: &'a str) -> Self {
        if s.bytes().all(|b| b.is_ascii_digit()) {
            Identifier::Numeric(s)
        } else {
            Identifier::Alphanumeric(s)
        }
    }

    pub fn as_str(&self) -> &'a str {
        match self {
            Identifier::Numeric(s) | Identifier::Alphanumeric(s) => s,
        }
    }
}

impl Ord for Identifier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => {
                // Leading zeros are tolerated by the grammar, so compare the
                // significant digits.
                let a = a.trim_start_matches('0');
                let b = b.trim_start_matches('0');
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (Identifier::Numeric(_), Identifier::Alphanumeric(_)) => Ordering::Less,
            (Identifier::Alphanumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::Alphanumeric(a), Identifier::Alphanumeric(b)) => {
                a.as_bytes().cmp(b.as_bytes())
            }
        }
    }
}

impl PartialOrd for Identifier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Prerelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
