use std::fmt;
use std::str::FromStr;

use super::build_metadata::BuildMetadata;
use super::number::VersionNumber;
use super::parser;
use super::prerelease::Prerelease;
use crate::error::InvalidVersionFormat;

/// Semantic version representation
///
/// Only obtainable through [`Version::parse`] (or a bump of an existing
/// value), so every instance satisfies the grammar. Immutable: bumping
/// returns a new value.
///
/// Equality is structural and includes build metadata; use
/// [`compare`](super::compare::compare) for precedence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: VersionNumber,
    minor: VersionNumber,
    patch: VersionNumber,
    prerelease: Option<Prerelease>,
    build: Option<BuildMetadata>,
}

impl Version {
    /// Parse a version string such as `1.0.1-rc1.1.0+build.051`
    pub fn parse(input: &str) -> Result<Self, InvalidVersionFormat> {
        parser::parse_version(input)
    }

    pub(crate) fn from_parts(
        major: VersionNumber,
        minor: VersionNumber,
        patch: VersionNumber,
        prerelease: Option<Prerelease>,
        build: Option<BuildMetadata>,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease,
            build,
        }
    }

    /// Release version with no prerelease or build suffix
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version::from_parts(major.into(), minor.into(), patch.into(), None, None)
    }

    pub fn major(&self) -> &VersionNumber {
        &self.major
    }

    pub fn minor(&self) -> &VersionNumber {
        &self.minor
    }

    pub fn patch(&self) -> &VersionNumber {
        &self.patch
    }

    pub fn prerelease(&self) -> Option<&Prerelease> {
        self.prerelease.as_ref()
    }

    pub fn build(&self) -> Option<&BuildMetadata> {
        self.build.as_ref()
    }

    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    /// `MAJOR.MINOR.PATCH` only, suffixes dropped
    pub fn release(&self) -> Version {
        Version::from_parts(
            self.major.clone(),
            self.minor.clone(),
            self.patch.clone(),
            None,
            None,
        )
    }
}

impl FromStr for Version {
    type Err = InvalidVersionFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(prerelease) = &self.prerelease {
            write!(f, "-{}", prerelease)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}
