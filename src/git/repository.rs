use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use git2::{
    Cred, CredentialType, ErrorClass, ErrorCode, ObjectType, Oid, PushOptions, RemoteCallbacks,
    Repository, Sort, StatusOptions,
};

use super::ReleaseRepository;
use crate::domain::{compare_strict, Precedence, TagPattern};
use crate::error::{Result, SemverBumpError};

/// Wrapper around git2 Repository for release operations.
///
/// Provides the tagging, committing, pushing and history traversal used by
/// `bump --tag`.
pub struct Git2Repository {
    repo: Repository,
}

impl Git2Repository {
    /// Discovers the git repository containing `path` (or one of its parents).
    pub fn discover(path: impl AsRef<Path>) -> Result<Self> {
        let repo = Repository::discover(path.as_ref())?;
        Ok(Git2Repository { repo })
    }

    /// Opens the repository rooted exactly at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let repo = Repository::open(path.as_ref())?;
        Ok(Git2Repository { repo })
    }

    /// HEAD commit, or `None` on a branch with no commits yet
    fn head_oid(&self) -> Result<Option<Oid>> {
        match self.repo.head() {
            Ok(head) => Ok(Some(head.peel_to_commit()?.id())),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Maps each tagged commit to the tag names pointing at it.
    ///
    /// Annotated and lightweight tags are both peeled down to their commit.
    fn tags_by_commit(&self) -> Result<HashMap<Oid, Vec<String>>> {
        let mut tags: HashMap<Oid, Vec<String>> = HashMap::new();
        for name in self.repo.tag_names(None)?.iter().flatten() {
            let commit = self
                .repo
                .find_reference(&format!("refs/tags/{}", name))
                .and_then(|reference| reference.peel_to_commit());
            if let Ok(commit) = commit {
                tags.entry(commit.id()).or_default().push(name.to_string());
            }
        }
        Ok(tags)
    }

    fn tag_commit(&self, tag: &str) -> Result<Oid> {
        let reference = self
            .repo
            .find_reference(&format!("refs/tags/{}", tag))
            .map_err(|_| SemverBumpError::tag(format!("Tag '{}' not found", tag)))?;
        Ok(reference.peel_to_commit()?.id())
    }

    fn workdir_relative(&self, path: &Path) -> Result<PathBuf> {
        let workdir = self
            .repo
            .workdir()
            .ok_or_else(|| git2::Error::from_str("repository has no working directory"))?
            .canonicalize()?;
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            env::current_dir()?.join(path)
        };
        let absolute = absolute.canonicalize()?;
        absolute
            .strip_prefix(&workdir)
            .map(Path::to_path_buf)
            .map_err(|_| {
                SemverBumpError::from(git2::Error::from_str(&format!(
                    "'{}' is outside the repository working directory",
                    path.display()
                )))
            })
    }
}

fn credentials_callbacks<'a>() -> RemoteCallbacks<'a> {
    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(|_url, username_from_url, allowed_types| {
        let username = username_from_url.unwrap_or("git");
        if allowed_types.contains(CredentialType::SSH_KEY) {
            // Try different key types in order of preference
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                let key_path = Path::new(&home).join(".ssh").join(key);
                if key_path.exists() {
                    if let Ok(cred) = Cred::ssh_key(username, None, &key_path, None) {
                        return Ok(cred);
                    }
                }
            }

            if let Ok(cred) = Cred::ssh_key_from_agent(username) {
                return Ok(cred);
            }
        }
        Cred::default()
    });
    callbacks
}

impl ReleaseRepository for Git2Repository {
    fn latest_tag(&self, pattern: &TagPattern) -> Result<Option<String>> {
        let Some(head) = self.head_oid()? else {
            return Ok(None);
        };
        let tags = self.tags_by_commit()?;

        // Sorting must be set before pushing: changing it resets the walker.
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL)?;
        revwalk.push(head)?;

        for oid in revwalk {
            let Some(names) = tags.get(&oid?) else {
                continue;
            };
            // Several release tags on one commit: keep the highest version.
            let best = names
                .iter()
                .filter_map(|name| pattern.extract(name).map(|version| (name, version)))
                .reduce(|best, candidate| {
                    if compare_strict(&candidate.1, &best.1) == Precedence::Newer {
                        candidate
                    } else {
                        best
                    }
                });
            if let Some((name, _)) = best {
                return Ok(Some(name.clone()));
            }
        }

        Ok(None)
    }

    fn commit_summaries_since(&self, tag: Option<&str>) -> Result<Vec<String>> {
        let Some(head) = self.head_oid()? else {
            return Ok(Vec::new());
        };

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)?;
        revwalk.push(head)?;
        if let Some(tag) = tag {
            revwalk.hide(self.tag_commit(tag)?)?;
        }

        let mut summaries = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            summaries.push(commit.summary().unwrap_or_default().to_string());
        }
        Ok(summaries)
    }

    fn has_uncommitted_changes(&self) -> Result<bool> {
        let mut options = StatusOptions::new();
        options.include_untracked(false).include_ignored(false);
        let statuses = self.repo.statuses(Some(&mut options))?;
        Ok(!statuses.is_empty())
    }

    fn tag_exists(&self, tag: &str) -> Result<bool> {
        match self.repo.find_reference(&format!("refs/tags/{}", tag)) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn commit_paths(&self, paths: &[PathBuf], message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        for path in paths {
            index.add_path(&self.workdir_relative(path)?)?;
        }
        index.write()?;

        let tree = self.repo.find_tree(index.write_tree()?)?;
        let signature = self.repo.signature()?;
        let parent = match self.head_oid()? {
            Some(oid) => Some(self.repo.find_commit(oid)?),
            None => None,
        };
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        let oid = self
            .repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?;
        tracing::debug!(%oid, files = paths.len(), "created release commit");
        Ok(())
    }

    fn create_annotated_tag(&self, tag: &str, message: &str) -> Result<()> {
        let target = self.repo.head()?.peel(ObjectType::Commit)?;
        let signature = self.repo.signature()?;
        self.repo.tag(tag, &target, &signature, message, false)?;
        Ok(())
    }

    fn push(&self, remote_name: &str, tag: &str) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote_name)
            .map_err(|_| SemverBumpError::remote(format!("No remote named '{}' found", remote_name)))?;

        let mut refspecs = Vec::new();
        let head = self.repo.head()?;
        if head.is_branch() {
            if let Some(branch_ref) = head.name() {
                refspecs.push(format!("{0}:{0}", branch_ref));
            }
        }
        refspecs.push(format!("refs/tags/{0}:refs/tags/{0}", tag));
        let refspecs: Vec<&str> = refspecs.iter().map(String::as_str).collect();

        let mut callbacks = credentials_callbacks();
        callbacks.push_update_reference(|refname, status| match status {
            Some(status) => {
                tracing::warn!(refname, status, "remote rejected reference");
                Err(git2::Error::from_str(&format!(
                    "Push failed for {}: {}",
                    refname, status
                )))
            }
            None => Ok(()),
        });

        let mut push_options = PushOptions::new();
        push_options.remote_callbacks(callbacks);

        remote
            .push(&refspecs, Some(&mut push_options))
            .map_err(|e| match e.class() {
                ErrorClass::Net => {
                    SemverBumpError::remote(format!("Network error during push: {}", e))
                }
                ErrorClass::Reference => {
                    SemverBumpError::remote(format!("Reference error during push: {}", e))
                }
                _ => SemverBumpError::remote(format!("Failed to push tag '{}': {}", tag, e)),
            })
    }
}
