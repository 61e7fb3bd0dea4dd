//! Data-driven fight content and loaders.
//!
//! This crate houses static fight content and provides loaders for RON/TOML data files:
//! - Character motion tables (data-driven via RON, one file per archetype)
//! - Match configuration (data-driven via TOML)
//! - A built-in roster embedded at compile time
//!
//! Content is consumed when the motion catalog is built and never appears in
//! match state. All loaders use fight-core types directly with serde.

#[cfg(feature = "loaders")]
pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, MotionLoader};
