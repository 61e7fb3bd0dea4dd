pub mod attack;
pub mod character;
pub mod common;
pub mod round;

// Re-export attack bookkeeping
pub use attack::{AttackId, AttackInstance, HitRegistry, PlayerMask};

// Re-export character state
pub use character::{CharacterSimState, CharacterSnapshot, Projectiles};

// Re-export common types
pub use common::{Facing, PlayerId, Position, Velocity};

// Re-export round verdicts
pub use round::{RoundEnd, RoundResult, RoundStatus};
