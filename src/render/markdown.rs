//! Markdown document: header, directory tree, table of contents, file contents

use std::path::Path;

use super::tree::render_tree_lines;
use crate::domain::FileContent;
use crate::scan::TreeNode;

const BINARY_PLACEHOLDER: &str = "[Binary file - content not displayed]";

/// A file to render, with its content already read.
#[derive(Debug, Clone)]
pub struct RenderedFile {
    pub path: String,
    pub content: FileContent,
}

/// One row of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub path: String,

    /// First line of the file section (the `### path` heading), 1-indexed
    pub start_line: usize,

    /// Last line of the file section (the `---` separator), inclusive
    pub end_line: usize,

    pub binary: bool,
}

/// A rendered document, kept as individual lines so line ranges stay exact.
#[derive(Debug, Clone)]
pub struct Document {
    pub lines: Vec<String>,
    pub toc: Vec<TocEntry>,
}

impl Document {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn to_markdown(&self) -> String {
        self.lines.join("\n")
    }
}

/// Render the export document.
///
/// `files` are rendered in the order given; callers pass them sorted by path.
pub fn render_markdown(
    repo_name: &str,
    repo_path: &str,
    tree: &TreeNode,
    files: &[RenderedFile],
) -> Document {
    let mut lines: Vec<String> = vec![
        format!("# Repository: {repo_name}"),
        String::new(),
        format!("**Path:** `{repo_path}`"),
        String::new(),
        format!("**Total tracked files:** {}", files.len()),
        String::new(),
        "---".to_string(),
        String::new(),
    ];

    lines.extend(["## 📂 Directory Structure".to_string(), String::new(), "```".to_string()]);
    lines.push(format!("{repo_name}/"));
    lines.extend(render_tree_lines(tree));
    lines.extend(["```", "", "---", ""].map(String::from));

    lines.extend(
        ["## 📑 Table of Contents", "", "| File | Lines | Type |", "|------|-------|------|"]
            .map(String::from),
    );

    let sections: Vec<Vec<String>> = files.iter().map(file_section).collect();

    // TOC rows and the contents header come before the first section.
    let mut next_line = lines.len() + files.len() + CONTENTS_HEADER.len() + 1;
    let mut toc = Vec::with_capacity(files.len());
    for (file, section) in files.iter().zip(&sections) {
        let start_line = next_line;
        // the trailing blank line separates sections and is not part of the range
        let end_line = start_line + section.len() - 2;
        toc.push(TocEntry {
            path: file.path.clone(),
            start_line,
            end_line,
            binary: file.content.is_binary(),
        });
        next_line = start_line + section.len();
    }

    for entry in &toc {
        let (icon, kind) = if entry.binary { ("📦", "binary") } else { ("📄", "text") };
        lines.push(format!(
            "| {icon} [{path}](#{anchor}) | {start}-{end} | {kind} |",
            path = entry.path,
            anchor = anchor_for(&entry.path),
            start = entry.start_line,
            end = entry.end_line,
        ));
    }

    lines.extend(CONTENTS_HEADER.map(String::from));
    for section in sections {
        lines.extend(section);
    }

    Document { lines, toc }
}

const CONTENTS_HEADER: [&str; 5] = ["", "---", "", "## 📄 File Contents", ""];

fn file_section(file: &RenderedFile) -> Vec<String> {
    let mut section = vec![
        format!("### {}", file.path),
        String::new(),
        format!("**Path:** `{}`", file.path),
        String::new(),
    ];

    match &file.content {
        FileContent::Binary => {
            section.push("```".to_string());
            section.push(BINARY_PLACEHOLDER.to_string());
        }
        FileContent::Text(text) => {
            section.push(format!("```{}", fence_language(&file.path)));
            section.extend(text.trim_end_matches('\n').split('\n').map(String::from));
        }
    }

    section.extend(["```", "", "---", ""].map(String::from));
    section
}

/// Anchor slug for a path: `/`, `.` and `_` become `-`, lowercased.
pub fn anchor_for(path: &str) -> String {
    path.replace(|c: char| matches!(c, '/' | '.' | '_'), "-").to_lowercase()
}

/// Fence language: the file extension, or `txt` when there is none.
pub fn fence_language(path: &str) -> &str {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .unwrap_or("txt")
}
