//! Export command implementation

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use std::fs;
use std::path::PathBuf;

use super::utils::{repo_name_for_output, resolve_repo_root};
use crate::domain::{CONFIG_FILENAME, DEFAULT_OUTPUT_FILE};
use crate::render::{render_markdown, RenderedFile};
use crate::scan::{build_tree, scan_repository, ScanOutcome};
use crate::utils::read_file_safe;

#[derive(Args)]
pub struct ExportArgs {
    /// Path to the git repository
    #[arg(value_name = "REPO", default_value = ".")]
    pub repo: PathBuf,

    /// Markdown file to write
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT_FILE, env = "REPO2MD_OUTPUT")]
    pub output: PathBuf,
}

pub fn run(args: ExportArgs) -> Result<()> {
    let root_path = resolve_repo_root(&args.repo)?;
    let outcome = scan_repository(&root_path)?;
    print_override_summary(&outcome);

    let files = &outcome.resolution.files;
    if files.is_empty() {
        anyhow::bail!("No files to include in the output.");
    }
    println!("Including {} file(s) in output", files.len());

    let tree = build_tree(files)?;
    let rendered: Vec<RenderedFile> = files
        .iter()
        .map(|path| RenderedFile {
            path: path.clone(),
            content: read_file_safe(&root_path.join(path)),
        })
        .collect();

    let repo_name = repo_name_for_output(&root_path);
    let document =
        render_markdown(&repo_name, &root_path.display().to_string(), &tree, &rendered);

    fs::write(&args.output, document.to_markdown())
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("{} Successfully created: {}", style("✅").green(), args.output.display());
    println!("   - Total lines: {}", document.line_count());
    println!("   - Files documented: {}", files.len());
    Ok(())
}

fn print_override_summary(outcome: &ScanOutcome) {
    let config = &outcome.config;
    if config.is_empty() {
        return;
    }

    println!("Found {}:", style(CONFIG_FILENAME).bold());
    if !config.excludes.is_empty() {
        println!("  - {} exclude pattern(s)", config.excludes.len());
    }
    if !config.includes.is_empty() {
        println!("  - {} include pattern(s)", config.includes.len());
    }

    let resolution = &outcome.resolution;
    if resolution.excluded > 0 {
        println!("  - Excluded {} file(s)", resolution.excluded);
    }
    if resolution.included > 0 {
        println!("  - Including {} previously ignored file(s)", resolution.included);
    }
    if resolution.restored > 0 {
        println!(
            "  - Restoring {} excluded file(s) matched by include patterns",
            resolution.restored
        );
    }
}
