//! Load-time motion data errors.

use crate::error::{ErrorSeverity, GameError};
use crate::geometry::HitArea;

/// Invariant violations in authored motion data.
///
/// These are checked when a catalog is built, never during simulation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionDataError {
    #[error("motion name is empty")]
    EmptyName,

    #[error("motion '{motion}' has zero frames")]
    ZeroFrames { motion: String },

    #[error("motion '{motion}' hurt area {area:?} has inverted edges")]
    InvertedHurtArea { motion: String, area: HitArea },

    #[error("motion '{motion}' attack area {area:?} has inverted edges")]
    InvertedAttackArea { motion: String, area: HitArea },

    #[error("motion '{motion}' attack has an empty active window")]
    EmptyActiveWindow { motion: String },

    #[error("motion '{motion}' guard damage {guard} exceeds hit damage {hit}")]
    GuardExceedsHit { motion: String, guard: u32, hit: u32 },

    #[error("motion '{motion}' multi-hit interval must be positive")]
    ZeroHitInterval { motion: String },
}

impl GameError for MotionDataError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use MotionDataError::*;
        match self {
            EmptyName => "MOTION_EMPTY_NAME",
            ZeroFrames { .. } => "MOTION_ZERO_FRAMES",
            InvertedHurtArea { .. } => "MOTION_INVERTED_HURT_AREA",
            InvertedAttackArea { .. } => "MOTION_INVERTED_ATTACK_AREA",
            EmptyActiveWindow { .. } => "MOTION_EMPTY_ACTIVE_WINDOW",
            GuardExceedsHit { .. } => "MOTION_GUARD_EXCEEDS_HIT",
            ZeroHitInterval { .. } => "MOTION_ZERO_HIT_INTERVAL",
        }
    }
}
