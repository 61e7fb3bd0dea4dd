//! Immutable hit records produced by the resolver.

use crate::motion::AttackType;
use crate::state::{AttackId, PlayerId};

/// Velocity imposed on a defender by a hit, in world pixels per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Impulse {
    pub x: i32,
    pub y: i32,
}

impl Impulse {
    pub const NONE: Self = Self { x: 0, y: 0 };
}

/// Consequences of one attack instance striking one defender in one frame.
///
/// Created by [`CollisionResolver`](super::CollisionResolver), consumed by
/// [`apply_outcome`](super::apply_outcome) and by presentation layers, never
/// mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedHitOutcome {
    pub attacker: PlayerId,
    pub defender: PlayerId,
    /// Instance that landed the hit.
    pub attack: AttackId,
    pub attack_type: AttackType,
    pub guarded: bool,
    /// Health removed from the defender.
    pub damage: u32,
    /// Signed energy change of the attacker.
    pub attacker_energy: i32,
    /// Signed energy change of the defender.
    pub defender_energy: i32,
    pub knockback: Impulse,
    /// Guard-recovery frames imposed on the defender (zero when unguarded).
    pub guard_recovery: u32,
    pub knocked_down: bool,
    pub projectile: bool,
}

impl ResolvedHitOutcome {
    /// Returns true if the same pair also appears with roles swapped.
    pub fn is_clash_with(&self, other: &ResolvedHitOutcome) -> bool {
        self.attacker == other.defender && self.defender == other.attacker
    }
}
