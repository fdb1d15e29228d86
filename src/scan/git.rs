//! Tracked-file listing from the git index

use anyhow::{Context, Result};
use git2::Repository;
use std::collections::BTreeSet;
use std::path::Path;

use crate::utils::normalize_path;

/// Open the git repository rooted at `root`.
pub fn open_repository(root: &Path) -> Result<Repository> {
    Repository::open(root)
        .with_context(|| format!("'{}' is not a git repository", root.display()))
}

/// List every path in the repository index, like `git ls-files`.
pub fn tracked_files(repo: &Repository) -> Result<BTreeSet<String>> {
    let index = repo.index().context("Failed to read git index")?;
    let files: BTreeSet<String> = index
        .iter()
        .map(|entry| normalize_path(&String::from_utf8_lossy(&entry.path)))
        .filter(|path| !path.is_empty())
        .collect();
    tracing::debug!(count = files.len(), "listed tracked files");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::{open_repository, tracked_files};
    use git2::Repository;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn lists_index_entries_only() {
        let dir = TempDir::new().expect("temp dir");
        let repo = Repository::init(dir.path()).expect("init");
        fs::create_dir_all(dir.path().join("src")).expect("mkdir");
        fs::write(dir.path().join("src/main.rs"), "fn main() {}\n").expect("write");
        fs::write(dir.path().join("README.md"), "# demo\n").expect("write");
        fs::write(dir.path().join("scratch.txt"), "untracked\n").expect("write");

        let mut index = repo.index().expect("index");
        index.add_path(Path::new("src/main.rs")).expect("add");
        index.add_path(Path::new("README.md")).expect("add");
        index.write().expect("write index");

        let files = tracked_files(&repo).expect("tracked");
        let files: Vec<&str> = files.iter().map(String::as_str).collect();
        assert_eq!(files, vec!["README.md", "src/main.rs"]);
    }

    #[test]
    fn plain_directory_is_not_a_repository() {
        let dir = TempDir::new().expect("temp dir");
        let Err(err) = open_repository(dir.path()) else {
            panic!("plain directory opened as a repository");
        };
        assert!(err.to_string().contains("is not a git repository"));
    }
}
