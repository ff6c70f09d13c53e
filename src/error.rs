use thiserror::Error;

/// Grammar every version string must match in full.
pub const VERSION_GRAMMAR: &str = "MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]";

/// The only error the version core produces.
///
/// Raised whenever a string fails the full grammar match, including when a
/// bump synthesizes a version from a malformed prerelease or build label.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid version format: '{input}' - expected {expected}")]
pub struct InvalidVersionFormat {
    pub input: String,
    pub expected: &'static str,
}

impl InvalidVersionFormat {
    pub fn new(input: impl Into<String>) -> Self {
        InvalidVersionFormat {
            input: input.into(),
            expected: VERSION_GRAMMAR,
        }
    }
}

/// Unified error type for the host side of semver-bump
#[derive(Error, Debug)]
pub enum SemverBumpError {
    #[error(transparent)]
    Version(#[from] InvalidVersionFormat),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version file error: {0}")]
    VersionFile(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semver-bump
pub type Result<T> = std::result::Result<T, SemverBumpError>;

impl SemverBumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemverBumpError::Config(msg.into())
    }

    /// Create a version file error with context
    pub fn version_file(msg: impl Into<String>) -> Self {
        SemverBumpError::VersionFile(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        SemverBumpError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        SemverBumpError::Remote(msg.into())
    }
}
