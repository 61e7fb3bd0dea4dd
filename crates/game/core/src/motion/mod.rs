//! Motion domain - per-character frame data.
//!
//! - `definition`: `MotionDefinition`, the immutable per-action row
//! - `attack`: `AttackTemplate` embedded in attacking motions
//! - `error`: load-time invariant violations

pub mod attack;
pub mod definition;
pub mod error;

pub use attack::{AttackTemplate, AttackType, HitPolicy};
pub use definition::{CharacterState, GuardStance, MotionDefinition, MotionDefinitionBuilder};
pub use error::MotionDataError;
