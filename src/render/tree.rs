//! Box-drawing tree view of the repository

use crate::scan::TreeNode;

/// Render the children of `tree` as indented tree lines (the root itself is not printed).
pub fn render_tree_lines(tree: &TreeNode) -> Vec<String> {
    let mut lines = Vec::new();
    push_tree_lines(tree, "", &mut lines);
    lines
}

fn push_tree_lines(node: &TreeNode, prefix: &str, lines: &mut Vec<String>) {
    let count = node.children().count();
    for (idx, (name, child)) in node.children().enumerate() {
        let is_last = idx + 1 == count;
        let connector = if is_last { "└── " } else { "├── " };

        if child.is_directory() {
            lines.push(format!("{prefix}{connector}📁 {name}/"));
            let extension = if is_last { "    " } else { "│   " };
            push_tree_lines(child, &format!("{prefix}{extension}"), lines);
        } else {
            lines.push(format!("{prefix}{connector}📄 {name}"));
        }
    }
}
