//! Override configuration loading
//!
//! The `.repotomdrc` file at the repository root adjusts the tracked-file set
//! with an `[exclude]` and an `[include]` section of gitignore-style patterns.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::{ConfigError, FilterConfig, CONFIG_FILENAME};

pub mod parse;

pub use parse::parse_filter_config;

/// Load the override configuration from `root`.
///
/// A missing file yields an empty configuration.
pub fn load_filter_config(root: &Path) -> Result<FilterConfig, ConfigError> {
    let path = root.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no override config found");
            return Ok(FilterConfig::default());
        }
        Err(source) => return Err(ConfigError::Io { path, source }),
    };

    let config = parse_filter_config(&content)?;
    tracing::debug!(
        excludes = config.excludes.len(),
        includes = config.includes.len(),
        "loaded override config"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::load_filter_config;
    use crate::domain::{ConfigError, CONFIG_FILENAME};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_empty_config() {
        let dir = TempDir::new().expect("temp dir");
        let config = load_filter_config(dir.path()).expect("load");
        assert!(config.is_empty());
    }

    #[test]
    fn loads_patterns_from_repository_root() {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join(CONFIG_FILENAME), "[exclude]\n*.lock\n[include]\n.env\n")
            .expect("write config");

        let config = load_filter_config(dir.path()).expect("load");
        assert_eq!(config.excludes.len(), 1);
        assert_eq!(config.includes[0].as_str(), ".env");
    }

    #[test]
    fn unreadable_config_is_io_error() {
        let dir = TempDir::new().expect("temp dir");
        fs::create_dir(dir.path().join(CONFIG_FILENAME)).expect("mkdir");

        let err = load_filter_config(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
