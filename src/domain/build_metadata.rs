use std::fmt;

/// Build metadata suffix, e.g. `build.051` in `1.0.1+build.051`.
///
/// Informational only; never consulted when ordering versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildMetadata(String);

impl BuildMetadata {
    pub(crate) fn from_validated(s: &str) -> Self {
        BuildMetadata(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl fmt::Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
