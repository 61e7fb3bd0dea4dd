//! Content loaders for reading fight data from files.
//!
//! Loaders deserialize `fight-core` types directly from RON/TOML and hand
//! them to the core builders, which enforce the data invariants.

pub mod config;
pub mod factory;
pub mod motions;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use motions::MotionLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
