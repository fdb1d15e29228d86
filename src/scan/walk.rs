//! Worktree listing: every file on disk under the repository root

use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

use crate::utils::relative_path;

/// List all regular files under `root`, skipping the `.git` directory.
///
/// Untracked and gitignored files are included; this is the candidate set for
/// include patterns.
pub fn worktree_files(root: &Path) -> BTreeSet<String> {
    let mut files = BTreeSet::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && e.file_name() == ".git"));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable worktree entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(rel) = relative_path(root, entry.path()) {
            files.insert(rel);
        }
    }

    tracing::debug!(count = files.len(), "listed worktree files");
    files
}

#[cfg(test)]
mod tests {
    use super::worktree_files;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn walks_nested_files_and_skips_git_dir() {
        let dir = TempDir::new().expect("temp dir");
        let root = dir.path();
        fs::create_dir_all(root.join(".git/objects")).expect("mkdir");
        fs::create_dir_all(root.join("src/nested")).expect("mkdir");
        fs::write(root.join(".git/HEAD"), "ref: refs/heads/main\n").expect("write");
        fs::write(root.join(".env"), "KEY=1\n").expect("write");
        fs::write(root.join("src/nested/a.rs"), "").expect("write");
        fs::write(root.join(".gitignore"), ".env\n").expect("write");

        let files: Vec<String> = worktree_files(root).into_iter().collect();
        assert_eq!(files, vec![".env", ".gitignore", "src/nested/a.rs"]);
    }
}
