//! Shared helpers for subcommands

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Validate and canonicalize the repository path given on the command line.
pub fn resolve_repo_root(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        anyhow::bail!("'{}' is not a valid directory", path.display());
    }
    path.canonicalize().with_context(|| format!("Failed to resolve '{}'", path.display()))
}

pub fn repo_name_for_output(root_path: &Path) -> String {
    root_path.file_name().and_then(|n| n.to_str()).unwrap_or("repo").to_string()
}
