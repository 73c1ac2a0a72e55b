//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::config::{CliConfig, CONFIG_FILE_NAMES, ENDPOINT_ENV};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Effective configuration, overrides applied.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load the config file, then apply `STOREFRONT_API_URL` and `--endpoint`.
    pub fn load(config_path: Option<&str>, endpoint: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(PathBuf::from(path)),
            None => find_config(&cwd),
        };
        let config = match &config_path {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let config = config.with_overrides(std::env::var(ENDPOINT_ENV).ok(), endpoint);

        tracing::debug!(
            config = ?config_path,
            endpoint = %config.search.endpoint,
            "configuration loaded"
        );

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }
}

/// Find a config file in `start` or any parent directory.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_config_walks_up() {
        let root = std::env::temp_dir().join(format!("storefront-cli-ctx-{}", std::process::id()));
        let nested = root.join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.join(".storefront.toml"), "").unwrap();

        let found = find_config(&nested).unwrap();
        assert_eq!(found, root.join(".storefront.toml"));

        fs::write(nested.join("storefront.toml"), "").unwrap();
        assert_eq!(find_config(&nested).unwrap(), nested.join("storefront.toml"));

        fs::remove_dir_all(&root).unwrap();
    }
}
