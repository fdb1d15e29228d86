//! Repository scanning: tracked files, override patterns, and the path tree

use anyhow::Result;
use std::collections::BTreeSet;
use std::path::Path;

use crate::config::load_filter_config;
use crate::domain::{FilterConfig, Resolution, CONFIG_FILENAME};

pub mod filter;
pub mod git;
pub mod pattern;
pub mod tree;
pub mod walk;

pub use filter::resolve;
pub use pattern::Pattern;
pub use tree::{build_tree, TreeNode};

/// Result of scanning a repository.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// The override configuration that was applied
    pub config: FilterConfig,

    /// The included files
    pub resolution: Resolution,
}

/// Resolve the included file set for the git repository at `root`.
///
/// The worktree is only walked when the override config has include patterns.
pub fn scan_repository(root: &Path) -> Result<ScanOutcome> {
    let repo = git::open_repository(root)?;
    let tracked = git::tracked_files(&repo)?;
    let config = load_filter_config(root)?;

    let worktree =
        if config.includes.is_empty() { BTreeSet::new() } else { walk::worktree_files(root) };

    let resolution = resolve(&tracked, &config, CONFIG_FILENAME, &worktree);
    Ok(ScanOutcome { config, resolution })
}
