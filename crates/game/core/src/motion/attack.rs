//! Attack templates embedded in motion definitions.

use strum::{AsRefStr, Display, EnumIter};

use crate::geometry::HitArea;

/// Height class of an attack, which decides the guard stances that block it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackType {
    High,
    Mid,
    Low,
    /// Throws cannot be guarded.
    Throw,
}

/// How often one attack instance may strike the same defender.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitPolicy {
    /// At most one hit per defender over the instance's lifetime.
    #[default]
    Single,
    /// The same defender may be struck again once `interval` frames of the
    /// instance's age have passed since the previous hit.
    Multi { interval: u32 },
}

/// Static description of the attack a motion performs.
///
/// Geometry is authored in the owner's character-local frame, facing right.
/// Speeds and impacts are magnitudes for a right-facing owner; the simulation
/// signs them by facing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackTemplate {
    /// Attack box in the owner's local frame.
    pub area: HitArea,

    /// Horizontal tracking speed of the box; zero on both axes follows the owner.
    pub speed_x: i32,
    pub speed_y: i32,

    /// Frames before the box exists.
    pub start_up: u32,
    /// Frames during which the box can hit.
    pub active: u32,

    pub hit_damage: u32,
    pub guard_damage: u32,

    /// Energy added to the owner on entering the motion (negative = cost).
    pub start_add_energy: i32,
    /// Energy added to the owner when the attack lands unguarded.
    pub hit_add_energy: i32,
    /// Energy added to the owner when the attack is guarded.
    pub guard_add_energy: i32,
    /// Energy given to the defender on an unguarded hit.
    pub give_energy: i32,

    /// Knockback applied to an unguarded defender.
    pub impact_x: i32,
    pub impact_y: i32,

    /// Guard-recovery frames imposed on a guarding defender.
    pub give_guard_recov: u32,

    pub attack_type: AttackType,
    /// Unguarded hits knock the defender down.
    pub down_prop: bool,
    /// Projectiles detach from the owner and travel by their own speed.
    pub projectile: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    pub hit_policy: HitPolicy,
}

impl AttackTemplate {
    /// Creates a follow-the-owner mid attack with the given timing and damage.
    pub fn new(area: HitArea, start_up: u32, active: u32, hit_damage: u32) -> Self {
        Self {
            area,
            speed_x: 0,
            speed_y: 0,
            start_up,
            active,
            hit_damage,
            guard_damage: 0,
            start_add_energy: 0,
            hit_add_energy: 0,
            guard_add_energy: 0,
            give_energy: 0,
            impact_x: 0,
            impact_y: 0,
            give_guard_recov: 0,
            attack_type: AttackType::Mid,
            down_prop: false,
            projectile: false,
            hit_policy: HitPolicy::Single,
        }
    }

    /// Returns true if the box moves with its owner's hurt-box every frame.
    pub const fn tracks_owner(&self) -> bool {
        self.speed_x == 0 && self.speed_y == 0
    }

    /// Returns true if `frame` lies in `[start_up, start_up + active)`.
    pub const fn in_active_window(&self, frame: u32) -> bool {
        frame >= self.start_up && frame < self.start_up + self.active
    }

    /// First frame past the active window.
    pub const fn window_end(&self) -> u32 {
        self.start_up + self.active
    }

    pub fn with_guard_damage(mut self, guard_damage: u32) -> Self {
        self.guard_damage = guard_damage;
        self
    }

    pub fn with_speed(mut self, speed_x: i32, speed_y: i32) -> Self {
        self.speed_x = speed_x;
        self.speed_y = speed_y;
        self
    }

    pub fn with_energy(mut self, start: i32, hit: i32, guard: i32, give: i32) -> Self {
        self.start_add_energy = start;
        self.hit_add_energy = hit;
        self.guard_add_energy = guard;
        self.give_energy = give;
        self
    }

    pub fn with_impact(mut self, impact_x: i32, impact_y: i32) -> Self {
        self.impact_x = impact_x;
        self.impact_y = impact_y;
        self
    }

    pub fn with_guard_recovery(mut self, frames: u32) -> Self {
        self.give_guard_recov = frames;
        self
    }

    pub fn with_type(mut self, attack_type: AttackType) -> Self {
        self.attack_type = attack_type;
        self
    }

    pub fn knocking_down(mut self) -> Self {
        self.down_prop = true;
        self
    }

    pub fn as_projectile(mut self) -> Self {
        self.projectile = true;
        self
    }

    pub fn with_hit_policy(mut self, hit_policy: HitPolicy) -> Self {
        self.hit_policy = hit_policy;
        self
    }
}
