//! Release workflow
//!
//! Turns a bumped version into the version-control side effects: changelog
//! update, release commit, annotated tag and push. The version core only
//! produces the new [Version]; this module runs after the user confirmed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::changelog;
use crate::config::Config;
use crate::domain::Version;
use crate::error::{Result, SemverBumpError};
use crate::git::ReleaseRepository;
use crate::version_file::VersionFile;

/// Everything needed to publish one release
#[derive(Debug, Clone, PartialEq)]
pub struct ReleasePlan {
    /// Tag of the previous release, used to collect notes
    pub previous_tag: Option<String>,

    pub version: Version,

    /// Name of the tag to create
    pub tag: String,

    pub tag_message: String,

    pub commit_message: String,

    /// Version marker to commit
    pub version_file: PathBuf,

    /// Changelog to update, if any
    pub changelog: Option<PathBuf>,

    /// Remote to push to; `None` keeps everything local
    pub remote: Option<String>,
}

/// Result of a successful release
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    /// The tag that was created
    pub tag: String,

    /// Files included in the release commit
    pub committed: Vec<PathBuf>,

    /// Whether branch and tag were pushed
    pub pushed: bool,
}

fn render_template(template: &str, tag: &str, version: &Version) -> String {
    template
        .replace("{tag}", tag)
        .replace("{version}", &version.to_string())
}

impl ReleasePlan {
    pub fn new(
        config: &Config,
        previous_tag: Option<String>,
        version: Version,
        version_file: &Path,
    ) -> Self {
        let tag = config.tag_pattern().format(&version);
        ReleasePlan {
            previous_tag,
            tag_message: render_template(&config.tag.message, &tag, &version),
            commit_message: render_template(&config.release.commit_message, &tag, &version),
            version_file: version_file.to_path_buf(),
            changelog: config
                .release
                .changelog
                .clone()
                .filter(|path| !path.as_os_str().is_empty()),
            remote: config
                .release
                .push
                .then(|| config.release.remote.clone()),
            tag,
            version,
        }
    }
}

/// Contents of a file before the release touched it; `None` if it was absent.
struct Snapshot {
    path: PathBuf,
    contents: Option<Vec<u8>>,
}

impl Snapshot {
    fn take(path: &Path) -> Result<Self> {
        let contents = match fs::read(path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };
        Ok(Snapshot {
            path: path.to_path_buf(),
            contents,
        })
    }

    fn restore(&self) {
        let result = match &self.contents {
            Some(contents) => fs::write(&self.path, contents),
            None => fs::remove_file(&self.path),
        };
        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), error = %e, "could not restore file");
        }
    }
}

/// Executes a release plan against `repo`.
///
/// Steps, stopping at the first failure:
/// 1. Refuse if the tag already exists
/// 2. Collect commit summaries since the previous tag
/// 3. Write the version marker and prepend notes to the changelog
/// 4. Commit both; on failure the files are put back as they were
/// 5. Create the annotated tag
/// 6. Push branch and tag (when a remote is set)
pub fn execute_release<R: ReleaseRepository + ?Sized>(
    repo: &R,
    plan: &ReleasePlan,
) -> Result<ReleaseOutcome> {
    if repo.tag_exists(&plan.tag)? {
        return Err(SemverBumpError::tag(format!(
            "Tag '{}' already exists",
            plan.tag
        )));
    }

    let notes = repo.commit_summaries_since(plan.previous_tag.as_deref())?;
    tracing::debug!(
        previous = plan.previous_tag.as_deref().unwrap_or("<none>"),
        commits = notes.len(),
        "collected release notes"
    );

    let mut committed = vec![plan.version_file.clone()];
    committed.extend(plan.changelog.iter().cloned());
    let snapshots = committed
        .iter()
        .map(|path| Snapshot::take(path))
        .collect::<Result<Vec<_>>>()?;

    let written = write_release_files(plan, &notes)
        .and_then(|()| repo.commit_paths(&committed, &plan.commit_message));
    if let Err(e) = written {
        snapshots.iter().for_each(Snapshot::restore);
        return Err(e);
    }
    repo.create_annotated_tag(&plan.tag, &plan.tag_message)?;
    tracing::info!(tag = %plan.tag, "created release tag");

    let pushed = match &plan.remote {
        Some(remote) => {
            repo.push(remote, &plan.tag)?;
            tracing::info!(tag = %plan.tag, remote = %remote, "pushed release");
            true
        }
        None => false,
    };

    Ok(ReleaseOutcome {
        tag: plan.tag.clone(),
        committed,
        pushed,
    })
}

fn write_release_files(plan: &ReleasePlan, notes: &[String]) -> Result<()> {
    VersionFile::new(&plan.version_file).write(&plan.version)?;
    if let Some(path) = &plan.changelog {
        changelog::prepend_entry(path, &plan.tag, notes)?;
    }
    Ok(())
}
