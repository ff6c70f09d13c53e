//! Hand-written scanner for `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
//!
//! The whole input must be consumed; any leftover byte is a failure. No
//! prefix (`v`) or surrounding whitespace is accepted here.

use super::build_metadata::BuildMetadata;
use super::number::VersionNumber;
use super::prerelease::Prerelease;
use super::version::Version;
use crate::error::InvalidVersionFormat;

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn at_end(&self) -> bool {
        self.pos == self.input.len()
    }

    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    /// `0` or a digit run not starting with `0`
    fn numeric(&mut self) -> Option<VersionNumber> {
        let digits = self.take_while(|b| b.is_ascii_digit());
        VersionNumber::from_canonical(digits)
    }

    /// One or more `[0-9A-Za-z-]+` identifiers joined by `.`
    fn identifiers(&mut self) -> Option<&'a str> {
        let start = self.pos;
        loop {
            if self.take_while(is_identifier_byte).is_empty() {
                return None;
            }
            if !self.eat(b'.') {
                return Some(&self.input[start..self.pos]);
            }
        }
    }
}

fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

/// Returns true when `s` is a valid prerelease or build suffix body.
pub fn is_valid_identifiers(s: &str) -> bool {
    let mut scanner = Scanner::new(s);
    scanner.identifiers().is_some() && scanner.at_end()
}

/// Parses a full version string into a [`Version`].
///
/// Fails with [`InvalidVersionFormat`] naming the input whenever any part
/// of the grammar is violated; there is no partial result.
pub fn parse_version(input: &str) -> Result<Version, InvalidVersionFormat> {
    scan(input).ok_or_else(|| InvalidVersionFormat::new(input))
}

fn scan(input: &str) -> Option<Version> {
    let mut scanner = Scanner::new(input);

    let major = scanner.numeric()?;
    scanner.eat(b'.').then_some(())?;
    let minor = scanner.numeric()?;
    scanner.eat(b'.').then_some(())?;
    let patch = scanner.numeric()?;

    let prerelease = if scanner.eat(b'-') {
        Some(Prerelease::from_validated(scanner.identifiers()?))
    } else {
        None
    };

    let build = if scanner.eat(b'+') {
        Some(BuildMetadata::from_validated(scanner.identifiers()?))
    } else {
        None
    };

    scanner
        .at_end()
        .then(|| Version::from_parts(major, minor, patch, prerelease, build))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let v = parse_version("1.2.3").unwrap();
        assert_eq!(v.major().as_str(), "1");
        assert_eq!(v.minor().as_str(), "2");
        assert_eq!(v.patch().as_str(), "3");
        assert!(v.prerelease().is_none());
        assert!(v.build().is_none());
    }

    #[test]
    fn test_parse_prerelease_and_build() {
        let v = parse_version("1.0.1-rc1.1.0+build.051").unwrap();
        assert_eq!(v.prerelease().map(|p| p.as_str()), Some("rc1.1.0"));
        assert_eq!(v.build().map(|b| b.as_str()), Some("build.051"));
    }

    #[test]
    fn test_parse_build_only() {
        let v = parse_version("0.0.0+exp.sha.5114f85").unwrap();
        assert!(v.prerelease().is_none());
        assert_eq!(v.build().map(|b| b.as_str()), Some("exp.sha.5114f85"));
    }

    #[test]
    fn test_parse_hyphens_inside_identifiers() {
        let v = parse_version("1.0.0-x-y-z.--+b-1").unwrap();
        assert_eq!(v.prerelease().map(|p| p.as_str()), Some("x-y-z.--"));
        assert_eq!(v.build().map(|b| b.as_str()), Some("b-1"));
    }

    #[test]
    fn test_parse_huge_components() {
        let input = "123456789012345678901234567890.0.1";
        let v = parse_version(input).unwrap();
        assert_eq!(v.major().as_str(), "123456789012345678901234567890");
        assert_eq!(v.to_string(), input);
    }

    #[test]
    fn test_parse_rejects_malformed_core() {
        for input in [
            "", "1", "1.2", "1.2.3.4", "1..3", ".1.2", "1.2.", "a.b.c", "v1.2.3", "V1.2.3",
            " 1.2.3", "1.2.3 ", "-1.2.3", "1.-2.3",
        ] {
            assert!(parse_version(input).is_err(), "{:?} should be rejected", input);
        }
    }

    #[test]
    fn test_parse_rejects_leading_zeros() {
        for input in ["01.2.3", "1.02.3", "1.2.03", "00.0.0"] {
            assert!(parse_version(input).is_err(), "{:?} should be rejected", input);
        }
    }

    #[test]
    fn test_parse_rejects_bad_suffixes() {
        for input in [
            "1.2.3-", "1.2.3+", "1.2.3-+b", "1.2.3-rc..1", "1.2.3-rc.", "1.2.3-.rc",
            "1.2.3+b..1", "1.2.3-rc_1", "1.2.3+b+c", "1.2.3-rc+", "1.2.3-ré",
        ] {
            assert!(parse_version(input).is_err(), "{:?} should be rejected", input);
        }
    }

    #[test]
    fn test_parse_error_names_input() {
        let err = parse_version("1.2.x").unwrap_err();
        assert_eq!(err.input, "1.2.x");
        assert_eq!(err.expected, crate::error::VERSION_GRAMMAR);
    }

    #[test]
    fn test_is_valid_identifiers() {
        assert!(is_valid_identifiers("rc1.1.0"));
        assert!(is_valid_identifiers("build.051"));
        assert!(!is_valid_identifiers(""));
        assert!(!is_valid_identifiers("a..b"));
        assert!(!is_valid_identifiers("a+b"));
    }

    #[test]
    fn test_round_trip_reproduces_input() {
        for input in [
            "0.0.0",
            "0.1.0",
            "10.20.30",
            "1.0.1-rc1.1.0",
            "1.0.1-rc1.1.0+build.051",
            "1.0.0+20130313144700",
            "2.0.0-0.3.7",
            "1.0.0-alpha-a.b-c-somethinglong+build.1-aef.1-its-okay",
        ] {
            assert_eq!(parse_version(input).unwrap().to_string(), input);
        }
    }
}
