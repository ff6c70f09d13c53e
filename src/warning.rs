use std::fmt;
use std::path::PathBuf;

/// Non-fatal situations reported to the user while bumping or releasing.
#[derive(Debug, Clone, PartialEq)]
pub enum BumpWarning {
    /// No version marker yet; the bump starts from a seed version
    NoVersionMarker { path: PathBuf, seed: String },
    /// The seed version was taken from an existing tag
    SeededFromTag { tag: String },
    /// Tracked files have changes that the release commit will not include
    UncommittedChanges,
    /// The bump does not produce a newer version
    NotNewer { previous: String, next: String },
}

impl fmt::Display for BumpWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpWarning::NoVersionMarker { path, seed } => write!(
                f,
                "No version found in '{}', starting from {}",
                path.display(),
                seed
            ),
            BumpWarning::SeededFromTag { tag } => {
                write!(f, "Using version from latest tag '{}'", tag)
            }
            BumpWarning::UncommittedChanges => {
                write!(f, "Working tree has uncommitted changes to tracked files")
            }
            BumpWarning::NotNewer { previous, next } => {
                write!(f, "New version {} is not newer than {}", next, previous)
            }
        }
    }
}
