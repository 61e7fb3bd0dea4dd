//! Immutable per-archetype motion tables.

use std::collections::HashMap;

use super::{CatalogError, MotionOracle};
use crate::motion::MotionDefinition;

/// One archetype's motion table, keyed by action name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterMotions {
    motions: HashMap<String, MotionDefinition>,
}

impl CharacterMotions {
    pub fn get(&self, action: &str) -> Option<&MotionDefinition> {
        self.motions.get(action)
    }

    /// Returns an iterator over the action names in unspecified order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.motions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.motions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motions.is_empty()
    }
}

/// Process-wide motion data for every archetype in a match.
///
/// There is no mutation API: reloading data means building a new catalog and
/// starting a fresh match with it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MotionCatalog {
    archetypes: HashMap<String, CharacterMotions>,
}

impl MotionCatalog {
    pub fn builder() -> MotionCatalogBuilder {
        MotionCatalogBuilder::default()
    }

    pub fn archetype(&self, archetype: &str) -> Option<&CharacterMotions> {
        self.archetypes.get(archetype)
    }

    /// Returns an iterator over the registered archetype names.
    pub fn archetypes(&self) -> impl Iterator<Item = &str> + '_ {
        self.archetypes.keys().map(String::as_str)
    }
}

impl MotionOracle for MotionCatalog {
    fn lookup(&self, archetype: &str, action: &str) -> Result<&MotionDefinition, CatalogError> {
        let motions = self
            .archetypes
            .get(archetype)
            .ok_or_else(|| CatalogError::UnknownArchetype(archetype.to_owned()))?;

        motions
            .get(action)
            .ok_or_else(|| CatalogError::UnknownMotion {
                archetype: archetype.to_owned(),
                action: action.to_owned(),
            })
    }
}

/// Builder that validates every row before the catalog is frozen.
#[derive(Debug, Default)]
pub struct MotionCatalogBuilder {
    archetypes: HashMap<String, CharacterMotions>,
}

impl MotionCatalogBuilder {
    /// Adds (or extends) the motion table of an archetype.
    ///
    /// # Errors
    ///
    /// Fails on the first row that violates its data invariants or repeats a
    /// name already registered for the archetype.
    pub fn archetype(
        mut self,
        archetype: impl Into<String>,
        motions: impl IntoIterator<Item = MotionDefinition>,
    ) -> Result<Self, CatalogError> {
        let archetype = archetype.into();
        let table = self.archetypes.entry(archetype.clone()).or_default();

        for motion in motions {
            motion
                .validate()
                .map_err(|source| CatalogError::InvalidMotion {
                    archetype: archetype.clone(),
                    source,
                })?;

            if table.motions.contains_key(&motion.name) {
                return Err(CatalogError::DuplicateMotion {
                    archetype,
                    action: motion.name,
                });
            }
            table.motions.insert(motion.name.clone(), motion);
        }

        Ok(self)
    }

    pub fn build(self) -> MotionCatalog {
        MotionCatalog {
            archetypes: self.archetypes,
        }
    }
}
