// tests/release_test.rs
use semver_bump::config::Config;
use semver_bump::domain::Version;
use semver_bump::git::mock::RecordedCall;
use semver_bump::git::{MockRepository, ReleaseRepository};
use semver_bump::release::{execute_release, ReleasePlan};
use semver_bump::SemverBumpError;
use std::fs;
use tempfile::TempDir;

fn plan_in(dir: &TempDir, config: &Config, previous: Option<&str>, next: &str) -> ReleasePlan {
    let mut config = config.clone();
    config.release.changelog = config
        .release
        .changelog
        .map(|path| dir.path().join(path));
    ReleasePlan::new(
        &config,
        previous.map(str::to_string),
        Version::parse(next).unwrap(),
        &dir.path().join(".version"),
    )
}

#[test]
fn test_release_commits_tags_and_pushes() {
    let dir = TempDir::new().unwrap();
    let mut repo = MockRepository::new();
    repo.add_tag("v0.1.0");
    repo.add_commit("feat: add compare command");
    repo.add_commit("fix: handle empty marker");

    let plan = plan_in(&dir, &Config::default(), Some("v0.1.0"), "0.2.0");
    let outcome = execute_release(&repo, &plan).unwrap();

    assert_eq!(outcome.tag, "v0.2.0");
    assert!(outcome.pushed);
    assert_eq!(
        outcome.committed,
        vec![dir.path().join(".version"), dir.path().join("CHANGELOG.md")]
    );
    assert_eq!(
        repo.calls(),
        vec![
            RecordedCall::Commit {
                paths: outcome.committed.clone(),
                message: "chore(release): v0.2.0".to_string(),
            },
            RecordedCall::Tag {
                name: "v0.2.0".to_string(),
                message: "Release v0.2.0".to_string(),
            },
            RecordedCall::Push {
                remote: "origin".to_string(),
                tag: "v0.2.0".to_string(),
            },
        ]
    );

    let changelog = fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap();
    assert_eq!(
        changelog,
        "## v0.2.0\n\n- feat: add compare command\n- fix: handle empty marker\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join(".version")).unwrap(),
        "0.2.0\n"
    );
}

#[test]
fn test_release_without_push_stays_local() {
    let dir = TempDir::new().unwrap();
    let repo = MockRepository::new();
    let mut config = Config::default();
    config.release.push = false;
    config.release.changelog = None;

    let plan = plan_in(&dir, &config, None, "1.0.0");
    let outcome = execute_release(&repo, &plan).unwrap();

    assert!(!outcome.pushed);
    assert_eq!(outcome.committed, vec![dir.path().join(".version")]);
    assert!(repo
        .calls()
        .iter()
        .all(|call| !matches!(call, RecordedCall::Push { .. })));
    assert!(!dir.path().join("CHANGELOG.md").exists());
}

#[test]
fn test_release_refuses_existing_tag() {
    let dir = TempDir::new().unwrap();
    let mut repo = MockRepository::new();
    repo.add_tag("v1.0.0");

    let plan = plan_in(&dir, &Config::default(), Some("v1.0.0"), "1.0.0");
    let err = execute_release(&repo, &plan).unwrap_err();

    assert!(matches!(err, SemverBumpError::Tag(_)));
    assert!(err.to_string().contains("already exists"));
    assert!(repo.calls().is_empty());
    assert!(!dir.path().join(".version").exists());
    assert!(!dir.path().join("CHANGELOG.md").exists());
}

#[test]
fn test_release_with_existing_tag_keeps_marker() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".version"), "0.0.0\n").unwrap();
    let mut repo = MockRepository::new();
    repo.add_tag("v0.0.1");

    let plan = plan_in(&dir, &Config::default(), Some("v0.0.1"), "0.0.1");
    assert!(execute_release(&repo, &plan).is_err());

    assert_eq!(
        fs::read_to_string(dir.path().join(".version")).unwrap(),
        "0.0.0\n"
    );
}

#[test]
fn test_release_restores_files_when_commit_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".version"), "1.2.3\n").unwrap();
    fs::write(dir.path().join("CHANGELOG.md"), "# Changelog\n\n## v1.2.3\n").unwrap();
    let mut repo = MockRepository::new();
    repo.add_tag("v1.2.3");
    repo.add_commit("fix: off by one");
    repo.set_fail_commit(true);

    let plan = plan_in(&dir, &Config::default(), Some("v1.2.3"), "1.2.4");
    let err = execute_release(&repo, &plan).unwrap_err();

    assert!(matches!(err, SemverBumpError::Git(_)));
    assert!(repo.calls().is_empty());
    assert_eq!(
        fs::read_to_string(dir.path().join(".version")).unwrap(),
        "1.2.3\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap(),
        "# Changelog\n\n## v1.2.3\n"
    );
}

#[test]
fn test_release_removes_new_files_when_commit_fails() {
    let dir = TempDir::new().unwrap();
    let mut repo = MockRepository::new();
    repo.set_fail_commit(true);

    let plan = plan_in(&dir, &Config::default(), None, "0.1.0");
    assert!(execute_release(&repo, &plan).is_err());

    assert!(!dir.path().join(".version").exists());
    assert!(!dir.path().join("CHANGELOG.md").exists());
}

#[test]
fn test_release_reports_push_failure_after_tagging() {
    let dir = TempDir::new().unwrap();
    let mut repo = MockRepository::new();
    repo.set_fail_push(true);

    let plan = plan_in(&dir, &Config::default(), None, "0.1.0");
    let err = execute_release(&repo, &plan).unwrap_err();

    assert!(matches!(err, SemverBumpError::Remote(_)));
    assert!(repo.tag_exists("v0.1.0").unwrap());
}

#[test]
fn test_release_with_custom_pattern_and_prerelease() {
    let dir = TempDir::new().unwrap();
    let repo = MockRepository::new();
    let mut config = Config::default();
    config.tag.pattern = "release-{version}".to_string();

    let plan = plan_in(&dir, &config, None, "2.0.0-rc.1");
    let outcome = execute_release(&repo, &plan).unwrap();

    assert_eq!(outcome.tag, "release-2.0.0-rc.1");
    let changelog = fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap();
    assert!(changelog.starts_with("## release-2.0.0-rc.1\n\n- No changes recorded.\n"));
}
