//! Error types for the frame pipeline.

use crate::env::CatalogError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::PlayerId;

/// Errors that abort one character's advance for one frame.
///
/// The character's state is left exactly as it was before the call; the
/// opponent's frame is unaffected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdvanceError {
    /// A motion the simulation itself needed is missing from the catalog.
    #[error("{player}: {source}")]
    Catalog {
        player: PlayerId,
        #[source]
        source: CatalogError,
    },

    /// The caller requested an action the character's archetype does not define.
    #[error("{player}: requested action '{action}' is not in the catalog")]
    InvalidCancelRequest { player: PlayerId, action: String },
}

impl AdvanceError {
    pub fn catalog(player: PlayerId, source: CatalogError) -> Self {
        Self::Catalog { player, source }
    }

    pub fn player(&self) -> PlayerId {
        match self {
            Self::Catalog { player, .. } | Self::InvalidCancelRequest { player, .. } => *player,
        }
    }
}

impl GameError for AdvanceError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Catalog { .. } => ErrorSeverity::Internal,
            Self::InvalidCancelRequest { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Catalog { .. } => "ADVANCE_CATALOG",
            Self::InvalidCancelRequest { .. } => "ADVANCE_INVALID_CANCEL_REQUEST",
        }
    }
}

/// Errors surfaced by [`MatchEngine::step`](super::MatchEngine::step).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepError {
    #[error("round is already over")]
    RoundOver,
}

impl GameError for StepError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        "STEP_ROUND_OVER"
    }
}
