// tests/common/mod.rs
//
// Helpers for building throwaway git repositories.
#![allow(dead_code)]

use git2::{ObjectType, Oid, Repository};
use std::fs;
use std::path::Path;

pub fn init_repo(dir: &Path) -> Repository {
    let repo = Repository::init(dir).unwrap();
    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Release Bot").unwrap();
    config.set_str("user.email", "release@example.com").unwrap();
    repo
}

pub fn commit_file(repo: &Repository, name: &str, contents: &str, message: &str) -> Oid {
    let workdir = repo.workdir().unwrap().to_path_buf();
    fs::write(workdir.join(name), contents).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(name)).unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
    let signature = repo.signature().unwrap();
    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
    repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
        .unwrap()
}

pub fn lightweight_tag(repo: &Repository, name: &str) {
    let head = repo.head().unwrap().peel(ObjectType::Commit).unwrap();
    repo.tag_lightweight(name, &head, false).unwrap();
}

pub fn head_summary(repo: &Repository) -> String {
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    head.summary().unwrap_or("").to_string()
}

pub fn tag_names(repo: &Repository) -> Vec<String> {
    repo.tag_names(None)
        .unwrap()
        .iter()
        .flatten()
        .map(str::to_string)
        .collect()
}
