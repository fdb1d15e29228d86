//! Files command: show the resolved file set

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use super::utils::resolve_repo_root;
use crate::domain::Resolution;
use crate::scan::{build_tree, scan_repository, TreeNode};

#[derive(Args)]
pub struct FilesArgs {
    /// Path to the git repository
    #[arg(value_name = "REPO", default_value = ".")]
    pub repo: PathBuf,

    /// Print the file set and directory tree as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON report: the root, the resolution fields and the directory tree.
#[derive(Serialize)]
struct FilesReport<'a> {
    root: String,

    #[serde(flatten)]
    resolution: &'a Resolution,

    tree: TreeNode,
}

pub fn run(args: FilesArgs) -> Result<()> {
    let root = resolve_repo_root(&args.repo)?;
    let outcome = scan_repository(&root)?;
    let resolution = &outcome.resolution;

    if args.json {
        let tree = build_tree(&resolution.files)?;
        let report = FilesReport { root: root.display().to_string(), resolution, tree };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for path in &resolution.files {
            println!("{path}");
        }
    }

    Ok(())
}
