use arrayvec::ArrayVec;

use super::attack::{AttackId, AttackInstance};
use super::common::{Facing, PlayerId, Position, Velocity};
use crate::config::MatchConfig;
use crate::geometry::HitArea;
use crate::motion::{CharacterState, GuardStance, MotionDefinition};

/// Detached projectiles a character may have in flight.
pub type Projectiles = ArrayVec<AttackInstance, { MatchConfig::MAX_PROJECTILES }>;

/// Complete per-frame state of one character.
///
/// Mutated only by the state machine and by hit application; everything else
/// reads it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSimState {
    pub player: PlayerId,
    /// Catalog key of the character's motion table.
    pub archetype: String,

    /// Name of the current motion.
    pub motion: String,
    /// Frames elapsed since the current motion was entered.
    pub frame: u32,
    pub state: CharacterState,

    pub position: Position,
    pub velocity: Velocity,
    pub facing: Facing,

    /// World-space hurt box of the current motion.
    pub hurt_area: HitArea,
    /// Guard stance of the current motion, if it guards.
    pub guard: Option<GuardStance>,

    pub health: u32,
    pub energy: u32,
    /// Frames during which input is ignored after blocking a hit.
    pub guard_recovery: u32,

    /// Melee attack of the current motion; discarded on any transition.
    pub attack: Option<AttackInstance>,
    /// Detached attacks; they outlive the motion that spawned them.
    pub projectiles: Projectiles,

    /// Set when an airborne character touches the ground; consumed by the
    /// next advance.
    pub pending_landing: bool,
    next_attack_id: u32,
}

impl CharacterSimState {
    /// Creates a character at the first frame of `motion`.
    pub fn new(
        player: PlayerId,
        archetype: impl Into<String>,
        motion: &MotionDefinition,
        position: Position,
        facing: Facing,
        config: &MatchConfig,
    ) -> Self {
        Self {
            player,
            archetype: archetype.into(),
            motion: motion.name.clone(),
            frame: 0,
            state: motion.state,
            position,
            velocity: Velocity::ZERO,
            facing,
            hurt_area: motion.hurt_area.placed(position, facing),
            guard: motion.guard,
            health: config.starting_health,
            energy: 0,
            guard_recovery: 0,
            attack: None,
            projectiles: Projectiles::new(),
            pending_landing: false,
            next_attack_id: 0,
        }
    }

    /// Returns a fresh attack id, never reused within the round.
    pub fn allocate_attack_id(&mut self) -> AttackId {
        let id = AttackId(self.next_attack_id);
        self.next_attack_id = self.next_attack_id.wrapping_add(1);
        id
    }

    /// Every live attack instance owned by this character.
    pub fn attacks(&self) -> impl Iterator<Item = &AttackInstance> + '_ {
        self.attack.iter().chain(self.projectiles.iter())
    }

    pub fn attack_mut(&mut self, id: AttackId) -> Option<&mut AttackInstance> {
        self.attack
            .iter_mut()
            .chain(self.projectiles.iter_mut())
            .find(|attack| attack.id == id)
    }

    /// Destroys the attack instance with `id`.
    pub fn remove_attack(&mut self, id: AttackId) -> Option<AttackInstance> {
        if self.attack.as_ref().is_some_and(|attack| attack.id == id) {
            return self.attack.take();
        }
        let index = self.projectiles.iter().position(|p| p.id == id)?;
        Some(self.projectiles.remove(index))
    }

    /// Adds a signed amount of energy, clamped to `[0, max]`.
    pub fn add_energy(&mut self, delta: i32, max: u32) {
        let next = i64::from(self.energy) + i64::from(delta);
        self.energy = next.clamp(0, i64::from(max)) as u32;
    }

    pub fn take_damage(&mut self, damage: u32) {
        self.health = self.health.saturating_sub(damage);
    }

    pub fn is_guarding(&self) -> bool {
        self.guard.is_some()
    }

    pub fn is_airborne(&self) -> bool {
        self.state == CharacterState::Air
    }

    pub fn is_knocked_out(&self) -> bool {
        self.health == 0
    }

    pub fn snapshot(&self) -> CharacterSnapshot {
        CharacterSnapshot {
            player: self.player,
            motion: self.motion.clone(),
            frame: self.frame,
            state: self.state,
            position: self.position,
            facing: self.facing,
            health: self.health,
            energy: self.energy,
            guard_recovery: self.guard_recovery,
            live_attacks: self.attacks().count() as u32,
        }
    }
}

/// Read-only summary of a character for observers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSnapshot {
    pub player: PlayerId,
    pub motion: String,
    pub frame: u32,
    pub state: CharacterState,
    pub position: Position,
    pub facing: Facing,
    pub health: u32,
    pub energy: u32,
    pub guard_recovery: u32,
    pub live_attacks: u32,
}
