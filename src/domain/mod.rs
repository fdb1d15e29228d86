//! Core domain types and models
//!
//! Defines the override configuration, the resolved file set and file content.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::scan::pattern::Pattern;

pub mod error;

pub use error::{ConfigError, StructureError};

/// Name of the override configuration file at the repository root.
pub const CONFIG_FILENAME: &str = ".repotomdrc";

/// Default output file for the export command.
pub const DEFAULT_OUTPUT_FILE: &str = "repo_contents.md";

/// Exclude/include overrides parsed from the configuration file.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Patterns removed from the tracked set
    pub excludes: Vec<Pattern>,

    /// Patterns added from the worktree, even if untracked or gitignored
    pub includes: Vec<Pattern>,
}

impl FilterConfig {
    pub fn is_empty(&self) -> bool {
        self.excludes.is_empty() && self.includes.is_empty()
    }
}

/// The final included file set, plus what the overrides changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Included repository-relative paths
    pub files: BTreeSet<String>,

    /// Tracked files removed by exclude patterns
    pub excluded: usize,

    /// Untracked or gitignored files added by include patterns
    pub included: usize,

    /// Excluded tracked files brought back by include patterns
    pub restored: usize,
}

/// Content of an included file as it will be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Binary,
}

impl FileContent {
    pub fn is_binary(&self) -> bool {
        matches!(self, FileContent::Binary)
    }
}
