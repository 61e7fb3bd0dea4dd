//! Motion catalog errors.

use crate::error::{ErrorSeverity, GameError};
use crate::motion::MotionDataError;

/// Errors that occur when building or querying a motion catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    /// No motion table was registered for the archetype.
    #[error("character archetype '{0}' not found")]
    UnknownArchetype(String),

    /// The archetype has no motion with the given name.
    #[error("motion '{action}' not found for character '{archetype}'")]
    UnknownMotion { archetype: String, action: String },

    /// Two rows of one archetype share a name.
    #[error("motion '{action}' defined twice for character '{archetype}'")]
    DuplicateMotion { archetype: String, action: String },

    /// A row failed its load-time invariants.
    #[error("character '{archetype}': {source}")]
    InvalidMotion {
        archetype: String,
        #[source]
        source: MotionDataError,
    },
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use CatalogError::*;
        match self {
            UnknownArchetype(_) => "CATALOG_UNKNOWN_ARCHETYPE",
            UnknownMotion { .. } => "CATALOG_UNKNOWN_MOTION",
            DuplicateMotion { .. } => "CATALOG_DUPLICATE_MOTION",
            InvalidMotion { .. } => "CATALOG_INVALID_MOTION",
        }
    }
}
