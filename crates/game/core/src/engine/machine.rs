//! Per-character motion state machine.

use strum::{AsRefStr, Display};

use super::errors::AdvanceError;
use super::physics;
use crate::config::MatchConfig;
use crate::env::{CatalogError, MotionOracle};
use crate::motion::{CharacterState, MotionDefinition};
use crate::state::{AttackId, AttackInstance, CharacterSimState, Facing, PlayerId, Position};

/// Why a character changed motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionCause {
    /// A requested action was accepted inside the cancel window.
    Cancel,
    /// The motion ran for its full frame count.
    Completion,
    /// An airborne character touched the floor.
    Landing,
    /// Imposed from outside the state machine (knockdown).
    Forced,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionTransition {
    pub player: PlayerId,
    pub from: String,
    pub to: String,
    pub cause: TransitionCause,
}

/// What one advance did besides moving the character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvanceReport {
    /// Set when the character entered a different motion (or re-entered the
    /// same one through a cancel).
    pub transition: Option<MotionTransition>,
    pub attack_spawned: Option<AttackId>,
    /// Melee instance that left its active window or was discarded by a transition.
    pub attack_ended: Option<AttackId>,
}

/// Advances characters one frame at a time against a motion catalog.
///
/// Every call to [`advance`](Self::advance) plans the whole frame before
/// touching the character, so a failed lookup leaves the state untouched.
pub struct StateMachine<'a, C: MotionOracle + ?Sized> {
    catalog: &'a C,
    config: &'a MatchConfig,
}

impl<'a, C> StateMachine<'a, C>
where
    C: MotionOracle + ?Sized,
{
    pub fn new(catalog: &'a C, config: &'a MatchConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &'a C {
        self.catalog
    }

    pub fn config(&self) -> &'a MatchConfig {
        self.config
    }

    /// Creates a character in its archetype's stand motion.
    pub fn spawn(
        &self,
        player: PlayerId,
        archetype: &str,
        position: Position,
        facing: Facing,
    ) -> Result<CharacterSimState, AdvanceError> {
        let stand = self.motion(player, archetype, &self.config.motions.stand)?;
        Ok(CharacterSimState::new(
            player,
            archetype,
            stand,
            position,
            facing,
            self.config,
        ))
    }

    /// Turns a grounded, controllable character toward `opponent_x`.
    ///
    /// Returns true if the facing changed.
    pub fn face_opponent(&self, ch: &mut CharacterSimState, opponent_x: i32) -> bool {
        if ch.is_airborne() || ch.guard_recovery > 0 {
            return false;
        }
        let controllable = self
            .lookup(&ch.archetype, &ch.motion)
            .is_ok_and(|motion| motion.control);
        if !controllable {
            return false;
        }

        match Facing::toward(ch.position.x, opponent_x) {
            Some(facing) if facing != ch.facing => {
                ch.facing = facing;
                true
            }
            _ => false,
        }
    }

    /// Simulates one frame of `ch`.
    ///
    /// # Order
    ///
    /// 1. Increment the motion frame counter.
    /// 2. Pick the next motion: a pending landing the current motion allows,
    ///    then an accepted request, then natural completion into the neutral
    ///    motion of the current state.
    /// 3. Apply base speed and stage physics.
    /// 4. Spawn, advance or clear attack instances for the motion frame.
    /// 5. Count guard recovery down.
    ///
    /// # Errors
    ///
    /// `InvalidCancelRequest` if `request` names an action the archetype does
    /// not define; `Catalog` if a motion the simulation needs is missing.
    /// Refused requests are not errors.
    pub fn advance(
        &self,
        ch: &mut CharacterSimState,
        request: Option<&str>,
    ) -> Result<AdvanceReport, AdvanceError> {
        let current = self.motion(ch.player, &ch.archetype, &ch.motion)?;
        let requested = request
            .map(|action| {
                self.lookup(&ch.archetype, action)
                    .map_err(|_| AdvanceError::InvalidCancelRequest {
                        player: ch.player,
                        action: action.to_owned(),
                    })
            })
            .transpose()?;

        let frame = ch.frame + 1;
        let next = self.select_next(ch, current, requested, frame)?;

        let mut report = AdvanceReport::default();
        let motion = match next {
            Some((motion, cause)) => {
                report.attack_ended = ch.attack.as_ref().map(|attack| attack.id);
                let from = self.enter(ch, motion);
                if cause != TransitionCause::Completion || from != motion.name {
                    report.transition = Some(MotionTransition {
                        player: ch.player,
                        from,
                        to: motion.name.clone(),
                        cause,
                    });
                }
                motion
            }
            None => {
                ch.frame = frame;
                current
            }
        };

        ch.pending_landing = false;
        physics::integrate(ch, motion, self.config);
        ch.hurt_area = motion.hurt_area.placed(ch.position, ch.facing);
        self.step_attacks(ch, motion, &mut report);
        ch.guard_recovery = ch.guard_recovery.saturating_sub(1);

        Ok(report)
    }

    /// Puts `ch` into `action` immediately, bypassing control, level and
    /// cancel windows.
    pub fn force_transition(
        &self,
        ch: &mut CharacterSimState,
        action: &str,
    ) -> Result<MotionTransition, AdvanceError> {
        let motion = self.motion(ch.player, &ch.archetype, action)?;
        let from = self.enter(ch, motion);
        ch.hurt_area = motion.hurt_area.placed(ch.position, ch.facing);

        Ok(MotionTransition {
            player: ch.player,
            from,
            to: motion.name.clone(),
            cause: TransitionCause::Forced,
        })
    }

    fn select_next(
        &self,
        ch: &CharacterSimState,
        current: &'a MotionDefinition,
        requested: Option<&'a MotionDefinition>,
        frame: u32,
    ) -> Result<Option<(&'a MotionDefinition, TransitionCause)>, AdvanceError> {
        let names = &self.config.motions;

        if ch.pending_landing && current.landing_flag {
            let landing = self.motion(ch.player, &ch.archetype, &names.landing)?;
            return Ok(Some((landing, TransitionCause::Landing)));
        }

        if let Some(requested) =
            requested.filter(|requested| self.accepts(ch, current, requested, frame))
        {
            return Ok(Some((requested, TransitionCause::Cancel)));
        }

        if frame >= current.frame_number {
            let neutral = match current.state {
                CharacterState::Stand => &names.stand,
                CharacterState::Crouch => &names.crouch,
                CharacterState::Air => &names.air,
                CharacterState::Down => &names.rise,
            };
            let neutral = self.motion(ch.player, &ch.archetype, neutral)?;
            return Ok(Some((neutral, TransitionCause::Completion)));
        }

        Ok(None)
    }

    fn accepts(
        &self,
        ch: &CharacterSimState,
        current: &MotionDefinition,
        requested: &MotionDefinition,
        frame: u32,
    ) -> bool {
        if !current.control || ch.guard_recovery > 0 {
            return false;
        }

        let in_window = current.cancelable_by(frame, requested.motion_level)
            || (current.landing_flag && requested.name == self.config.motions.landing);

        in_window && ch.energy >= requested.energy_cost()
    }

    /// Entry effects of a motion. Returns the name of the motion left.
    fn enter(&self, ch: &mut CharacterSimState, motion: &MotionDefinition) -> String {
        let from = std::mem::replace(&mut ch.motion, motion.name.clone());
        ch.frame = 0;
        ch.state = motion.state;
        ch.guard = motion.guard;
        ch.attack = None;

        if let Some(attack) = &motion.attack {
            ch.add_energy(attack.start_add_energy, self.config.max_energy);
        }
        if motion.speed_y != 0 {
            ch.velocity.y = motion.speed_y;
        }

        from
    }

    fn step_attacks(
        &self,
        ch: &mut CharacterSimState,
        motion: &MotionDefinition,
        report: &mut AdvanceReport,
    ) {
        let (origin, facing) = (ch.position, ch.facing);

        // Detached boxes first, so a projectile does not move on its spawn frame.
        for projectile in ch.projectiles.iter_mut() {
            projectile.advance(origin, facing);
        }
        ch.projectiles.retain(|projectile| !projectile.expired());

        match &motion.attack {
            Some(template) if template.in_active_window(ch.frame) => {
                if ch.frame == template.start_up {
                    let id = ch.allocate_attack_id();
                    let instance =
                        AttackInstance::spawn(id, ch.player, &motion.name, template, origin, facing);
                    if template.projectile {
                        if ch.projectiles.try_push(instance).is_ok() {
                            report.attack_spawned = Some(id);
                        }
                    } else {
                        ch.attack = Some(instance);
                        report.attack_spawned = Some(id);
                    }
                } else if let Some(attack) = ch.attack.as_mut() {
                    attack.advance(origin, facing);
                }
            }
            _ => {
                if let Some(attack) = ch.attack.take() {
                    report.attack_ended = Some(attack.id);
                }
            }
        }
    }

    fn motion(
        &self,
        player: PlayerId,
        archetype: &str,
        action: &str,
    ) -> Result<&'a MotionDefinition, AdvanceError> {
        self.lookup(archetype, action)
            .map_err(|source| AdvanceError::catalog(player, source))
    }

    fn lookup(&self, archetype: &str, action: &str) -> Result<&'a MotionDefinition, CatalogError> {
        let catalog: &'a C = self.catalog;
        catalog.lookup(archetype, action)
    }
}
