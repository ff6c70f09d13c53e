//! Git operations abstraction layer
//!
//! The release flow talks to version control only through the
//! [ReleaseRepository] trait, so it can run against a real repository or an
//! in-memory one in tests.
//!
//! - [repository::Git2Repository]: real implementation using the `git2` crate
//! - [mock::MockRepository]: records every call, for testing
//!
//! ```rust,no_run
//! # use semver_bump::git::{Git2Repository, ReleaseRepository};
//! # use semver_bump::domain::TagPattern;
//! # fn example() -> semver_bump::Result<()> {
//! let repo = Git2Repository::discover(".")?;
//! let latest = repo.latest_tag(&TagPattern::default())?;
//! let notes = repo.commit_summaries_since(latest.as_deref())?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::path::PathBuf;

use crate::domain::TagPattern;
use crate::error::Result;

/// Version-control operations needed to publish a release.
///
/// Implementations map their own failures to [crate::error::SemverBumpError].
pub trait ReleaseRepository {
    /// Most recent tag reachable from HEAD whose name follows `pattern`.
    ///
    /// # Returns
    /// * `Ok(Some(tag))` - Closest matching tag walking back from HEAD
    /// * `Ok(None)` - No matching tag (or no commits at all)
    fn latest_tag(&self, pattern: &TagPattern) -> Result<Option<String>>;

    /// One-line summaries of the commits after `tag` up to HEAD, oldest first.
    ///
    /// With `None`, every commit reachable from HEAD is returned.
    fn commit_summaries_since(&self, tag: Option<&str>) -> Result<Vec<String>>;

    /// Whether tracked files have uncommitted modifications
    fn has_uncommitted_changes(&self) -> Result<bool>;

    fn tag_exists(&self, tag: &str) -> Result<bool>;

    /// Stages `paths` and commits them on top of HEAD.
    fn commit_paths(&self, paths: &[PathBuf], message: &str) -> Result<()>;

    /// Creates an annotated tag on HEAD.
    fn create_annotated_tag(&self, tag: &str, message: &str) -> Result<()>;

    /// Pushes the current branch and `tag` to `remote`.
    fn push(&self, remote: &str, tag: &str) -> Result<()>;
}
