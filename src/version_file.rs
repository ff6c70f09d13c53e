//! Persisted "current version" marker
//!
//! A single-line text file holding the last released version. Only the host
//! reads and writes it; the version core never touches the file system.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::Version;
use crate::error::{Result, SemverBumpError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFile {
    path: PathBuf,
}

impl VersionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        VersionFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw marker contents.
    ///
    /// # Returns
    /// * `Ok(None)` - No version yet: the file is missing or blank
    /// * `Ok(Some(s))` - First line, trimmed
    pub fn read(&self) -> Result<Option<String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(SemverBumpError::version_file(format!(
                    "cannot read '{}': {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let first_line = contents.lines().next().unwrap_or("").trim();
        if first_line.is_empty() {
            Ok(None)
        } else {
            Ok(Some(first_line.to_string()))
        }
    }

    /// Marker contents parsed as a version
    pub fn load(&self) -> Result<Option<Version>> {
        match self.read()? {
            Some(raw) => Ok(Some(Version::parse(&raw)?)),
            None => Ok(None),
        }
    }

    /// Replaces the marker with `version`, creating parent directories.
    pub fn write(&self, version: &Version) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, format!("{}\n", version)).map_err(|e| {
            SemverBumpError::version_file(format!(
                "cannot write '{}': {}",
                self.path.display(),
                e
            ))
        })
    }
}
