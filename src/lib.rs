//! repo2md: export a git repository as a single annotated Markdown document
//!
//! The pipeline resolves the included files from the git index and an optional
//! `.repotomdrc` override file, arranges them in a directory tree, and renders
//! a document with the tree, a table of contents with line ranges, and the
//! contents of every file.

pub mod cli;
pub mod config;
pub mod domain;
pub mod render;
pub mod scan;
pub mod utils;
