//! Motion definitions: one immutable row of a character's motion table.

use strum::{AsRefStr, Display, EnumIter};

use super::attack::{AttackTemplate, HitPolicy};
use super::error::MotionDataError;
use crate::geometry::HitArea;

/// Logical state a character is in while performing a motion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterState {
    #[default]
    Stand,
    Crouch,
    Air,
    Down,
}

/// Defensive stance held by a guard motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GuardStance {
    Stand,
    Crouch,
    Air,
}

/// Frame data for one named action of a character archetype.
///
/// Loaded once per archetype at startup and never mutated; every field is
/// stored as authored so a definition survives serialization unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionDefinition {
    pub name: String,

    /// Total frames before the motion completes naturally.
    pub frame_number: u32,

    /// Base horizontal speed while in this motion (signed by facing).
    pub speed_x: i32,
    /// Vertical impulse applied on entering this motion.
    pub speed_y: i32,

    /// Hurt-box in the character-local frame, facing right.
    pub hurt_area: HitArea,

    /// Logical state while performing the motion; also selects the neutral
    /// motion that follows natural completion.
    pub state: CharacterState,

    pub attack: Option<AttackTemplate>,

    /// First frame at which the motion may be canceled; `None` means never.
    pub cancel_able_frame: Option<u32>,
    /// Highest `motion_level` allowed to cancel this motion.
    pub cancel_able_motion_level: u32,
    pub motion_level: u32,

    /// Whether requested actions may interrupt this motion at all.
    pub control: bool,
    /// Whether the landing motion cancels this motion regardless of level.
    pub landing_flag: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    pub guard: Option<GuardStance>,
}

impl MotionDefinition {
    /// Create a builder for constructing motion definitions.
    pub fn builder(name: impl Into<String>, frame_number: u32) -> MotionDefinitionBuilder {
        MotionDefinitionBuilder::new(name, frame_number)
    }

    /// Returns true if the motion can be interrupted at `frame` by a motion of
    /// level `requested_level`.
    pub fn cancelable_by(&self, frame: u32, requested_level: u32) -> bool {
        match self.cancel_able_frame {
            Some(from) => frame >= from && requested_level <= self.cancel_able_motion_level,
            None => false,
        }
    }

    /// Energy needed to enter this motion (zero unless the attack has a cost).
    pub fn energy_cost(&self) -> u32 {
        self.attack
            .as_ref()
            .map(|attack| attack.start_add_energy.min(0).unsigned_abs())
            .unwrap_or(0)
    }

    /// Checks the data invariants that are enforced at load time only.
    pub fn validate(&self) -> Result<(), MotionDataError> {
        if self.name.is_empty() {
            return Err(MotionDataError::EmptyName);
        }
        if self.frame_number == 0 {
            return Err(MotionDataError::ZeroFrames {
                motion: self.name.clone(),
            });
        }
        if !self.hurt_area.is_well_formed() {
            return Err(MotionDataError::InvertedHurtArea {
                motion: self.name.clone(),
                area: self.hurt_area,
            });
        }

        if let Some(attack) = &self.attack {
            if !attack.area.is_well_formed() {
                return Err(MotionDataError::InvertedAttackArea {
                    motion: self.name.clone(),
                    area: attack.area,
                });
            }
            if attack.active == 0 {
                return Err(MotionDataError::EmptyActiveWindow {
                    motion: self.name.clone(),
                });
            }
            if attack.guard_damage > attack.hit_damage {
                return Err(MotionDataError::GuardExceedsHit {
                    motion: self.name.clone(),
                    guard: attack.guard_damage,
                    hit: attack.hit_damage,
                });
            }
            if let HitPolicy::Multi { interval: 0 } = attack.hit_policy {
                return Err(MotionDataError::ZeroHitInterval {
                    motion: self.name.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Builder for constructing motion definitions.
///
/// Defaults describe a controllable, always-cancelable standing motion with
/// no attack and an empty hurt-box.
pub struct MotionDefinitionBuilder {
    definition: MotionDefinition,
}

impl MotionDefinitionBuilder {
    fn new(name: impl Into<String>, frame_number: u32) -> Self {
        Self {
            definition: MotionDefinition {
                name: name.into(),
                frame_number,
                speed_x: 0,
                speed_y: 0,
                hurt_area: HitArea::EMPTY,
                state: CharacterState::Stand,
                attack: None,
                cancel_able_frame: Some(0),
                cancel_able_motion_level: u32::MAX,
                motion_level: 0,
                control: true,
                landing_flag: false,
                guard: None,
            },
        }
    }

    pub fn speed(mut self, speed_x: i32, speed_y: i32) -> Self {
        self.definition.speed_x = speed_x;
        self.definition.speed_y = speed_y;
        self
    }

    pub fn hurt_area(mut self, area: HitArea) -> Self {
        self.definition.hurt_area = area;
        self
    }

    pub fn state(mut self, state: CharacterState) -> Self {
        self.definition.state = state;
        self
    }

    pub fn attack(mut self, attack: AttackTemplate) -> Self {
        self.definition.attack = Some(attack);
        self
    }

    /// Sets the cancel window start and the maximum level that may cancel.
    pub fn cancelable(mut self, from_frame: u32, max_level: u32) -> Self {
        self.definition.cancel_able_frame = Some(from_frame);
        self.definition.cancel_able_motion_level = max_level;
        self
    }

    pub fn never_cancelable(mut self) -> Self {
        self.definition.cancel_able_frame = None;
        self
    }

    pub fn level(mut self, motion_level: u32) -> Self {
        self.definition.motion_level = motion_level;
        self
    }

    pub fn control(mut self, control: bool) -> Self {
        self.definition.control = control;
        self
    }

    pub fn landing_flag(mut self, landing_flag: bool) -> Self {
        self.definition.landing_flag = landing_flag;
        self
    }

    pub fn guard(mut self, stance: GuardStance) -> Self {
        self.definition.guard = Some(stance);
        self
    }

    pub fn build(self) -> MotionDefinition {
        self.definition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::AttackType;

    fn jab() -> MotionDefinition {
        MotionDefinition::builder("STAND_A", 20)
            .hurt_area(HitArea::new(-20, -100, 20, 0))
            .attack(
                AttackTemplate::new(HitArea::new(10, -80, 50, -60), 3, 5, 10)
                    .with_guard_damage(2)
                    .with_type(AttackType::High),
            )
            .cancelable(10, 4)
            .level(3)
            .build()
    }

    #[test]
    fn never_cancelable_ignores_level_and_frame() {
        let motion = MotionDefinition::builder("THROW_HIT", 30)
            .never_cancelable()
            .build();
        for frame in 0..40 {
            for level in [0, 1, 5, u32::MAX] {
                assert!(!motion.cancelable_by(frame, level));
            }
        }
    }

    #[test]
    fn cancel_window_respects_frame_and_level() {
        let motion = jab();
        assert!(!motion.cancelable_by(9, 0));
        assert!(motion.cancelable_by(10, 4));
        assert!(!motion.cancelable_by(10, 5));
        assert!(motion.cancelable_by(19, 1));
    }

    #[test]
    fn energy_cost_only_counts_negative_start_energy() {
        let mut motion = jab();
        assert_eq!(motion.energy_cost(), 0);

        if let Some(attack) = motion.attack.as_mut() {
            attack.start_add_energy = -30;
        }
        assert_eq!(motion.energy_cost(), 30);
    }

    #[test]
    fn validate_rejects_guard_above_hit() {
        let mut motion = jab();
        assert_eq!(motion.validate(), Ok(()));

        if let Some(attack) = motion.attack.as_mut() {
            attack.guard_damage = 11;
        }
        assert!(matches!(
            motion.validate(),
            Err(MotionDataError::GuardExceedsHit { guard: 11, hit: 10, .. })
        ));
    }

    #[test]
    fn validate_rejects_inverted_boxes() {
        let motion = MotionDefinition::builder("BROKEN", 5)
            .hurt_area(HitArea::new(10, 0, -10, 5))
            .build();
        assert!(matches!(
            motion.validate(),
            Err(MotionDataError::InvertedHurtArea { .. })
        ));
    }

    #[test]
    fn validate_rejects_zero_multi_hit_interval() {
        let motion = MotionDefinition::builder("DRILL", 30)
            .attack(
                AttackTemplate::new(HitArea::new(0, 0, 10, 10), 2, 10, 4)
                    .with_hit_policy(HitPolicy::Multi { interval: 0 }),
            )
            .build();
        assert!(matches!(
            motion.validate(),
            Err(MotionDataError::ZeroHitInterval { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn bincode_round_trip_preserves_timing_and_damage() {
        let motion = jab();
        let bytes = bincode::serialize(&motion).expect("serialize");
        let restored: MotionDefinition = bincode::deserialize(&bytes).expect("deserialize");

        assert_eq!(restored, motion);
        assert_eq!(bincode::serialize(&restored).expect("serialize"), bytes);
    }
}
