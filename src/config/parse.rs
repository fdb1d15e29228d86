//! Parser for the `[exclude]` / `[include]` section format

use crate::domain::{ConfigError, FilterConfig};
use crate::scan::pattern::Pattern;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Exclude,
    Include,
}

/// Parse override configuration text.
///
/// Blank lines and `#` comments are skipped. Lines are trimmed. Any parse error
/// aborts the whole file; there is no best-effort recovery.
pub fn parse_filter_config(content: &str) -> Result<FilterConfig, ConfigError> {
    let mut config = FilterConfig::default();
    let mut section: Option<Section> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(name) = section_name(line) {
            section = match name {
                "exclude" => Some(Section::Exclude),
                "include" => Some(Section::Include),
                _ => {
                    return Err(ConfigError::UnknownSection {
                        line: line_no,
                        header: line.to_string(),
                    })
                }
            };
            continue;
        }

        let Some(current) = section else {
            return Err(ConfigError::PatternOutsideSection {
                line: line_no,
                pattern: line.to_string(),
            });
        };

        let pattern = Pattern::new(line).map_err(|source| ConfigError::InvalidPattern {
            line: line_no,
            pattern: line.to_string(),
            source,
        })?;
        match current {
            Section::Exclude => config.excludes.push(pattern),
            Section::Include => config.includes.push(pattern),
        }
    }

    Ok(config)
}

/// `[name]` where name is ASCII alphanumeric, `-` or `_`.
fn section_name(line: &str) -> Option<&str> {
    let name = line.strip_prefix('[')?.strip_suffix(']')?;
    let is_identifier = !name.is_empty()
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    is_identifier.then_some(name)
}
