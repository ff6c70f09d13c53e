use std::fmt;

use super::parser;
use super::version::Version;
use crate::error::InvalidVersionFormat;

/// How to derive the next version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpDirective {
    Major,
    Minor,
    Patch,
    /// Replace the prerelease suffix, dropping build metadata
    Prerelease(String),
    /// Replace the build metadata, keeping any prerelease
    Build(String),
}

impl fmt::Display for BumpDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpDirective::Major => write!(f, "major"),
            BumpDirective::Minor => write!(f, "minor"),
            BumpDirective::Patch => write!(f, "patch"),
            BumpDirective::Prerelease(label) => write!(f, "prerel {}", label),
            BumpDirective::Build(label) => write!(f, "build {}", label),
        }
    }
}

impl Version {
    /// Returns the version that follows `self` under `directive`.
    ///
    /// - **Major**: `(major+1).0.0`
    /// - **Minor**: `major.(minor+1).0`
    /// - **Patch**: `major.minor.(patch+1)`
    /// - **Prerelease**: `major.minor.patch-label`
    /// - **Build**: `major.minor.patch[-prerelease]+label`
    ///
    /// Numeric bumps always drop prerelease and build. Label bumps build the
    /// new version string and run it through the parser again, so a bad label
    /// fails with [`InvalidVersionFormat`] naming that string.
    pub fn bump(&self, directive: &BumpDirective) -> Result<Version, InvalidVersionFormat> {
        match directive {
            BumpDirective::Major => Ok(Version::from_parts(
                self.major().incremented(),
                0u64.into(),
                0u64.into(),
                None,
                None,
            )),
            BumpDirective::Minor => Ok(Version::from_parts(
                self.major().clone(),
                self.minor().incremented(),
                0u64.into(),
                None,
                None,
            )),
            BumpDirective::Patch => Ok(Version::from_parts(
                self.major().clone(),
                self.minor().clone(),
                self.patch().incremented(),
                None,
                None,
            )),
            BumpDirective::Prerelease(label) => {
                relabel(format!("{}-{}", self.release(), label), label)
            }
            BumpDirective::Build(label) => {
                let base = match self.prerelease() {
                    Some(prerelease) => format!("{}-{}", self.release(), prerelease),
                    None => self.release().to_string(),
                };
                relabel(format!("{}+{}", base, label), label)
            }
        }
    }
}

// The label alone must be a valid suffix, otherwise "rc+1" would sneak build
// metadata in through a prerelease bump.
fn relabel(candidate: String, label: &str) -> Result<Version, InvalidVersionFormat> {
    if !parser::is_valid_identifiers(label) {
        return Err(InvalidVersionFormat::new(candidate));
    }
    Version::parse(&candidate)
}

/// Parses `current` and applies `directive` to it.
pub fn bump_str(current: &str, directive: &BumpDirective) -> Result<Version, InvalidVersionFormat> {
    Version::parse(current)?.bump(directive)
}
