use regex::Regex;

use super::version::Version;
use crate::error::{Result, SemverBumpError};

const PLACEHOLDER: &str = "{version}";

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPattern {
    pub pattern: String,
}

impl TagPattern {
    /// Create a new tag pattern
    pub fn new(pattern: impl Into<String>) -> Self {
        TagPattern {
            pattern: pattern.into(),
        }
    }

    /// Check that the pattern carries exactly one `{version}` placeholder
    pub fn validate(&self) -> Result<()> {
        match self.pattern.matches(PLACEHOLDER).count() {
            1 => Ok(()),
            0 => Err(SemverBumpError::tag(format!(
                "Pattern '{}' must contain {} placeholder",
                self.pattern, PLACEHOLDER
            ))),
            _ => Err(SemverBumpError::tag(format!(
                "Pattern '{}' must contain {} only once",
                self.pattern, PLACEHOLDER
            ))),
        }
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version=1.2.3 -> "v1.2.3"
    pub fn format(&self, version: &Version) -> String {
        self.pattern.replace(PLACEHOLDER, &version.to_string())
    }

    /// Pull the version back out of a tag name.
    ///
    /// Returns `None` when the tag does not follow the pattern or the
    /// captured part is not a valid version.
    pub fn extract(&self, tag: &str) -> Option<Version> {
        let (prefix, suffix) = self.pattern.split_once(PLACEHOLDER)?;
        let re = Regex::new(&format!(
            "^{}(.+){}$",
            regex::escape(prefix),
            regex::escape(suffix)
        ))
        .ok()?;
        let captured = re.captures(tag)?.get(1)?.as_str();
        Version::parse(captured).ok()
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        TagPattern::new("v{version}")
    }
}
