//! Markdown rendering of the resolved file set

pub mod markdown;
pub mod tree;

pub use markdown::{render_markdown, Document, RenderedFile, TocEntry};
pub use tree::render_tree_lines;
