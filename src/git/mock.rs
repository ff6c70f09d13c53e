use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::TagPattern;
use crate::error::{Result, SemverBumpError};
use crate::git::ReleaseRepository;

/// A side effect requested through [ReleaseRepository]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Commit { paths: Vec<PathBuf>, message: String },
    Tag { name: String, message: String },
    Push { remote: String, tag: String },
}

/// Mock repository for testing without actual git operations
///
/// Tags are kept in creation order; "latest" means the last matching one.
#[derive(Default)]
pub struct MockRepository {
    tags: Vec<String>,
    commits: Vec<String>,
    dirty: bool,
    fail_commit: bool,
    fail_push: bool,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an existing tag (applies to all commits added so far)
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
        self.commits.clear();
    }

    /// Add a commit summary after the latest tag
    pub fn add_commit(&mut self, summary: impl Into<String>) {
        self.commits.push(summary.into());
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    /// Make every commit fail with a git error
    pub fn set_fail_commit(&mut self, fail: bool) {
        self.fail_commit = fail;
    }

    /// Make every push fail with a remote error
    pub fn set_fail_push(&mut self, fail: bool) {
        self.fail_push = fail;
    }

    /// Side effects requested so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock_calls().clone()
    }

    fn record(&self, call: RecordedCall) {
        self.lock_calls().push(call);
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<RecordedCall>> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ReleaseRepository for MockRepository {
    fn latest_tag(&self, pattern: &TagPattern) -> Result<Option<String>> {
        Ok(self
            .tags
            .iter()
            .rev()
            .find(|tag| pattern.extract(tag).is_some())
            .cloned())
    }

    fn commit_summaries_since(&self, _tag: Option<&str>) -> Result<Vec<String>> {
        Ok(self.commits.clone())
    }

    fn has_uncommitted_changes(&self) -> Result<bool> {
        Ok(self.dirty)
    }

    fn tag_exists(&self, tag: &str) -> Result<bool> {
        let created = self
            .lock_calls()
            .iter()
            .any(|call| matches!(call, RecordedCall::Tag { name, .. } if name == tag));
        Ok(created || self.tags.iter().any(|t| t == tag))
    }

    fn commit_paths(&self, paths: &[PathBuf], message: &str) -> Result<()> {
        if self.fail_commit {
            return Err(git2::Error::from_str("index is locked").into());
        }
        self.record(RecordedCall::Commit {
            paths: paths.to_vec(),
            message: message.to_string(),
        });
        Ok(())
    }

    fn create_annotated_tag(&self, tag: &str, message: &str) -> Result<()> {
        self.record(RecordedCall::Tag {
            name: tag.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }

    fn push(&self, remote: &str, tag: &str) -> Result<()> {
        if self.fail_push {
            return Err(SemverBumpError::remote(format!(
                "Network error during push to '{}'",
                remote
            )));
        }
        self.record(RecordedCall::Push {
            remote: remote.to_string(),
            tag: tag.to_string(),
        });
        Ok(())
    }
}
