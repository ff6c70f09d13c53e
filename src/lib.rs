//! Parse, compare and bump semantic versions.
//!
//! The three entry points below are pure; everything else in the crate
//! (configuration, the version marker file, git releases, terminal UI) is
//! the host around them.
//!
//! ```
//! use semver_bump::{bump, compare, parse, BumpDirective, Precedence};
//!
//! let current = parse("1.0.1").unwrap();
//! let next = bump(&current, &BumpDirective::Prerelease("rc1.1.0".into())).unwrap();
//! assert_eq!(next.to_string(), "1.0.1-rc1.1.0");
//! assert_eq!(compare("10.1.4-rc4", "10.4.2-rc1").unwrap(), Precedence::Older);
//! ```

pub mod changelog;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod release;
pub mod ui;
pub mod version_file;
pub mod warning;

pub use domain::{BumpDirective, CompareMode, Precedence, Version};
pub use error::{InvalidVersionFormat, Result, SemverBumpError};

/// Parses and validates a version string.
pub fn parse(input: &str) -> std::result::Result<Version, InvalidVersionFormat> {
    Version::parse(input)
}

/// Compares two version strings; see [`domain::compare`] for the rules.
pub fn compare(a: &str, b: &str) -> std::result::Result<Precedence, InvalidVersionFormat> {
    domain::compare_str(a, b)
}

/// Derives a new version from `current`.
pub fn bump(
    current: &Version,
    directive: &BumpDirective,
) -> std::result::Result<Version, InvalidVersionFormat> {
    current.bump(directive)
}
