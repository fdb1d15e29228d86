//! Typed errors for the override configuration and tree construction

use std::path::PathBuf;
use thiserror::Error;

/// A malformed or unreadable override configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: pattern '{pattern}' appears before any [exclude] or [include] section")]
    PatternOutsideSection { line: usize, pattern: String },

    #[error("line {line}: unknown section header '{header}' (expected [exclude] or [include])")]
    UnknownSection { line: usize, header: String },

    #[error("line {line}: invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        line: usize,
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

/// A path set that cannot be arranged as a directory tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("'{path}' is both a file and a directory")]
    Conflict { path: String },

    #[error("'{path}' contains an empty path segment")]
    EmptySegment { path: String },
}
