//! Deterministic per-frame combat simulation for a two-player fighting game.
//!
//! `fight-core` defines the canonical rules (motions, attacks, collision and hit
//! resolution) and exposes pure APIs that can be reused by the runtime, offline
//! tools and test harnesses. All per-frame state mutation flows through
//! [`engine::MatchEngine`], which drives the [`engine::StateMachine`] for each
//! character and the [`combat::CollisionResolver`] for the frame's attacks.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod geometry;
pub mod motion;
pub mod state;

pub use combat::{
    CollisionResolver, HitOutcomes, Impulse, ResolvedHitOutcome, apply_outcome, guards_against,
};
pub use config::{MatchConfig, MotionNames, PLAYER_COUNT, StageBounds};
pub use engine::{
    AdvanceError, AdvanceReport, FrameInputs, FrameReport, MatchEngine, MotionTransition,
    StateMachine, StepError, TransitionCause,
};
pub use env::{CatalogError, CharacterMotions, MotionCatalog, MotionCatalogBuilder, MotionOracle};
pub use error::{ErrorSeverity, GameError};
pub use geometry::HitArea;
pub use motion::{
    AttackTemplate, AttackType, CharacterState, GuardStance, HitPolicy, MotionDataError,
    MotionDefinition, MotionDefinitionBuilder,
};
pub use state::{
    AttackId, AttackInstance, CharacterSimState, CharacterSnapshot, Facing, HitRegistry,
    MatchSnapshot, MatchState, PlayerId, PlayerMask, Position, RoundEnd, RoundResult,
    RoundStatus, Velocity,
};
