//! Read-only motion data consumed by the simulation.
//!
//! The [`MotionOracle`] trait is the seam between the frame loop and whatever
//! holds the parsed motion tables. [`MotionCatalog`] is the standard
//! implementation: built once before the first frame, never mutated after,
//! and shared freely between simulations.
mod catalog;
mod error;

pub use catalog::{CharacterMotions, MotionCatalog, MotionCatalogBuilder};
pub use error::CatalogError;

use crate::motion::MotionDefinition;

/// Oracle providing motion definitions by archetype and action name.
pub trait MotionOracle: Send + Sync {
    /// Returns the definition of `action` for the `archetype`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownMotion` if the archetype has no such
    /// motion, or `CatalogError::UnknownArchetype` if the archetype is absent.
    fn lookup(&self, archetype: &str, action: &str) -> Result<&MotionDefinition, CatalogError>;

    /// Returns true if the archetype defines `action`.
    fn contains(&self, archetype: &str, action: &str) -> bool {
        self.lookup(archetype, action).is_ok()
    }
}
