//! Built-in roster compiled into the binary.
//!
//! Lets the runtime and tests start a match without a data directory.

use fight_core::{MatchConfig, MotionCatalog};

use crate::loaders::{ConfigLoader, LoadResult, MotionLoader};

pub const ZEN_RON: &str = include_str!("../data/characters/ZEN.ron");
pub const CONFIG_TOML: &str = include_str!("../data/config.toml");

/// Archetype names with their embedded motion tables.
pub const ROSTER: &[(&str, &str)] = &[("ZEN", ZEN_RON)];

pub fn config() -> LoadResult<MatchConfig> {
    ConfigLoader::parse(CONFIG_TOML)
}

/// Catalog holding every built-in archetype.
pub fn catalog() -> LoadResult<MotionCatalog> {
    let mut builder = MotionCatalog::builder();
    for (archetype, table) in ROSTER {
        let motions = MotionLoader::parse(table)
            .map_err(|e| anyhow::anyhow!("Built-in table {} is malformed: {}", archetype, e))?;
        builder = builder.archetype(*archetype, motions)?;
    }
    Ok(builder.build())
}

pub fn names() -> impl Iterator<Item = &'static str> {
    ROSTER.iter().map(|(name, _)| *name)
}
