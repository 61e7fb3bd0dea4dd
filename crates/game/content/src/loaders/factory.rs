//! Content factory for building the motion catalog from data files.

use std::path::{Path, PathBuf};

use fight_core::{MatchConfig, MotionCatalog, MotionDefinition};

use crate::loaders::{ConfigLoader, LoadResult, MotionLoader};

/// Content factory that loads all fight content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── characters/
///     ├── ZEN.ron
///     └── GARNET.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load match configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<MatchConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load one archetype's motion table from `characters/{archetype}.ron`.
    pub fn load_character(&self, archetype: &str) -> LoadResult<Vec<MotionDefinition>> {
        MotionLoader::load(&self.character_path(archetype))
    }

    /// Load and validate the motion tables of `archetypes` into one catalog.
    ///
    /// Repeated names are loaded once, so a mirror match costs a single table.
    pub fn load_catalog<S: AsRef<str>>(&self, archetypes: &[S]) -> LoadResult<MotionCatalog> {
        let mut builder = MotionCatalog::builder();
        let mut loaded: Vec<&str> = Vec::new();

        for archetype in archetypes.iter().map(AsRef::as_ref) {
            if loaded.contains(&archetype) {
                continue;
            }
            let motions = self.load_character(archetype)?;
            builder = builder
                .archetype(archetype, motions)
                .map_err(|e| anyhow::anyhow!("Invalid motion table for {}: {}", archetype, e))?;
            loaded.push(archetype);
        }

        Ok(builder.build())
    }

    /// Lists archetypes that have a motion table under `characters/`, sorted.
    pub fn available_characters(&self) -> LoadResult<Vec<String>> {
        let dir = self.data_dir.join("characters");
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to list {}: {}", dir.display(), e))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.extension().is_some_and(|ext| ext == "ron") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn character_path(&self, archetype: &str) -> PathBuf {
        self.data_dir
            .join("characters")
            .join(format!("{}.ron", archetype))
    }
}
