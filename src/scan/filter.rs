//! Resolve the included file set from tracked files and the override config

use std::collections::BTreeSet;

use crate::domain::{FilterConfig, Resolution};
use crate::scan::pattern::matches_any;

/// Apply the override configuration to the tracked file set.
///
/// 1. Start with `tracked`.
/// 2. Drop every path matching an exclude pattern.
/// 3. Add every worktree file matching an include pattern, tracked or not.
/// 4. Drop `config_file_name`.
///
/// Includes are applied after excludes, so a path matching both is included.
/// `worktree` is only consulted when the config has include patterns.
pub fn resolve(
    tracked: &BTreeSet<String>,
    config: &FilterConfig,
    config_file_name: &str,
    worktree: &BTreeSet<String>,
) -> Resolution {
    let mut files: BTreeSet<String> = if config.excludes.is_empty() {
        tracked.clone()
    } else {
        tracked.iter().filter(|path| !matches_any(&config.excludes, path)).cloned().collect()
    };
    let excluded = tracked.len() - files.len();

    let mut included = 0;
    let mut restored = 0;
    if !config.includes.is_empty() {
        for path in worktree {
            if path != config_file_name
                && matches_any(&config.includes, path)
                && files.insert(path.clone())
            {
                if tracked.contains(path) {
                    restored += 1;
                } else {
                    included += 1;
                }
            }
        }
    }

    files.remove(config_file_name);

    tracing::debug!(
        tracked = tracked.len(),
        excluded,
        included,
        restored,
        total = files.len(),
        "resolved file set"
    );

    Resolution { files, excluded, included, restored }
}
