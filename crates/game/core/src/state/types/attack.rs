//! Runtime attack instances and their hit bookkeeping.

use std::fmt;

use bitflags::bitflags;

use super::common::{Facing, PlayerId, Position, Velocity};
use crate::config::PLAYER_COUNT;
use crate::geometry::HitArea;
use crate::motion::{AttackTemplate, HitPolicy};

bitflags! {
    /// Set of players, one bit per player id.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct PlayerMask: u8 {
        const P1 = 1 << 0;
        const P2 = 1 << 1;
    }
}

impl PlayerMask {
    pub const fn of(player: PlayerId) -> Self {
        Self::from_bits_retain(1 << player.0)
    }

    pub const fn has(self, player: PlayerId) -> bool {
        self.contains(Self::of(player))
    }
}

/// Identifier of an attack instance, unique per owner for a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackId(pub u32);

impl fmt::Display for AttackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "atk#{}", self.0)
    }
}

/// Defenders already struck by one attack instance.
///
/// The struck set only ever grows. Under [`HitPolicy::Multi`] the age of the
/// latest hit per defender decides when that defender is admitted again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitRegistry {
    struck: PlayerMask,
    last_hit_age: [Option<u32>; PLAYER_COUNT],
}

impl HitRegistry {
    pub fn contains(&self, defender: PlayerId) -> bool {
        self.struck.has(defender)
    }

    pub fn struck(&self) -> PlayerMask {
        self.struck
    }

    /// Returns true if `defender` may be struck at instance age `age`.
    pub fn admits(&self, defender: PlayerId, age: u32, policy: HitPolicy) -> bool {
        match policy {
            HitPolicy::Single => !self.contains(defender),
            HitPolicy::Multi { interval } => match self.last_hit_age[defender.index()] {
                Some(last) => age.saturating_sub(last) >= interval,
                None => true,
            },
        }
    }

    pub fn record(&mut self, defender: PlayerId, age: u32) {
        self.struck |= PlayerMask::of(defender);
        self.last_hit_age[defender.index()] = Some(age);
    }
}

/// Live hit-box of one attack, owned by the character that spawned it.
///
/// The owner is referenced by id; the resolver looks characters up in the
/// match arena each frame.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackInstance {
    pub id: AttackId,
    pub owner: PlayerId,
    /// Motion that spawned the attack.
    pub motion: String,
    pub template: AttackTemplate,
    /// Facing at spawn (detached attacks) or the owner's current facing (tracking attacks).
    pub facing: Facing,
    pub hit_area: HitArea,
    /// Signed tracking speed.
    pub velocity: Velocity,
    /// Frames since creation.
    pub age: u32,
    pub hit_registry: HitRegistry,
}

impl AttackInstance {
    /// Creates the instance on the first frame of its active window.
    pub fn spawn(
        id: AttackId,
        owner: PlayerId,
        motion: &str,
        template: &AttackTemplate,
        origin: Position,
        facing: Facing,
    ) -> Self {
        Self {
            id,
            owner,
            motion: motion.to_owned(),
            template: template.clone(),
            facing,
            hit_area: template.area.placed(origin, facing),
            velocity: Velocity::new(template.speed_x * facing.sign(), template.speed_y),
            age: 0,
            hit_registry: HitRegistry::default(),
        }
    }

    /// Moves the hit-box one frame: tracking boxes follow the owner, others
    /// travel by their own speed.
    pub fn advance(&mut self, owner_origin: Position, owner_facing: Facing) {
        self.age += 1;
        if self.template.tracks_owner() {
            self.facing = owner_facing;
            self.hit_area = self.template.area.placed(owner_origin, owner_facing);
        } else {
            self.hit_area = self.hit_area.translate(self.velocity.x, self.velocity.y);
        }
    }

    pub fn admits(&self, defender: PlayerId) -> bool {
        self.hit_registry
            .admits(defender, self.age, self.template.hit_policy)
    }

    pub fn register_hit(&mut self, defender: PlayerId) {
        self.hit_registry.record(defender, self.age);
    }

    /// Returns true if the instance is destroyed by its first successful hit.
    pub fn consumed_by_hit(&self) -> bool {
        !self.template.projectile && self.template.hit_policy == HitPolicy::Single
    }

    /// Detached instances live for the template's active frame count.
    pub fn expired(&self) -> bool {
        self.age >= self.template.active
    }
}
