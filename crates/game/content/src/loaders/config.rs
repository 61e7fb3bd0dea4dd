//! Match configuration loader.

use std::path::Path;

use fight_core::MatchConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for match configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their `MatchConfig::default()` values.
    pub fn load(path: &Path) -> LoadResult<MatchConfig> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config TOML at {}: {}", path.display(), e)
        })
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<MatchConfig> {
        let config: MatchConfig = toml::from_str(content)?;

        anyhow::ensure!(
            config.stage.left < config.stage.right,
            "stage left wall {} must be left of right wall {}",
            config.stage.left,
            config.stage.right
        );
        anyhow::ensure!(
            config.guard_pushback_divisor > 0,
            "guard_pushback_divisor must be positive, got {}",
            config.guard_pushback_divisor
        );

        Ok(config)
    }
}
