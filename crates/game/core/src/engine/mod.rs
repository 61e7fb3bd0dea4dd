//! Frame scheduling and the per-frame simulation pipeline.
//!
//! The [`MatchEngine`] is the authoritative reducer for [`MatchState`]. One
//! call to [`MatchEngine::step`] is one simulated frame:
//!
//! facing -> advance both characters -> resolve collisions -> apply outcomes
//! -> round-end check
//!
//! A character whose advance fails keeps its previous state for the frame;
//! the opponent is simulated normally.

mod errors;
mod machine;
mod physics;

pub use errors::{AdvanceError, StepError};
pub use machine::{AdvanceReport, MotionTransition, StateMachine, TransitionCause};

use crate::combat::{CollisionResolver, HitOutcomes, apply_outcome};
use crate::config::{MatchConfig, PLAYER_COUNT};
use crate::env::MotionOracle;
use crate::state::{
    AttackInstance, CharacterSimState, Facing, MatchState, PlayerId, Position, RoundEnd,
    RoundResult, RoundStatus,
};

/// Per-frame inputs delivered by collaborators.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameInputs {
    /// Requested next action per player, `None` for no request.
    pub requests: [Option<String>; PLAYER_COUNT],
    /// The external round timer expired on this frame.
    pub round_timer_expired: bool,
}

impl FrameInputs {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn with_request(mut self, player: PlayerId, action: impl Into<String>) -> Self {
        self.requests[player.index()] = Some(action.into());
        self
    }

    pub fn with_timer_expired(mut self) -> Self {
        self.round_timer_expired = true;
        self
    }

    pub fn request(&self, player: PlayerId) -> Option<&str> {
        self.requests[player.index()].as_deref()
    }
}

/// Everything that happened during one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameReport {
    pub frame: u64,
    /// Advance result per player, in arena order.
    pub advances: [Result<AdvanceReport, AdvanceError>; PLAYER_COUNT],
    /// Hit outcomes in resolution order.
    pub outcomes: HitOutcomes,
    pub knockdowns: Vec<MotionTransition>,
    pub knockdown_errors: Vec<AdvanceError>,
    pub round: RoundStatus,
}

impl FrameReport {
    /// Motion transitions of the frame, knockdowns included.
    pub fn transitions(&self) -> impl Iterator<Item = &MotionTransition> + '_ {
        self.advances
            .iter()
            .filter_map(|advance| advance.as_ref().ok())
            .filter_map(|report| report.transition.as_ref())
            .chain(self.knockdowns.iter())
    }

    /// Every isolated per-character failure of the frame.
    pub fn errors(&self) -> impl Iterator<Item = &AdvanceError> + '_ {
        self.advances
            .iter()
            .filter_map(|advance| advance.as_ref().err())
            .chain(self.knockdown_errors.iter())
    }

    pub fn round_ended(&self) -> Option<RoundResult> {
        self.round.result()
    }
}

/// Drives a two-player round frame by frame.
pub struct MatchEngine<'a, C: MotionOracle + ?Sized> {
    machine: StateMachine<'a, C>,
    resolver: CollisionResolver,
}

impl<'a, C> MatchEngine<'a, C>
where
    C: MotionOracle + ?Sized,
{
    pub fn new(catalog: &'a C, config: &'a MatchConfig) -> Self {
        Self {
            machine: StateMachine::new(catalog, config),
            resolver: CollisionResolver::from_config(config),
        }
    }

    pub fn machine(&self) -> &StateMachine<'a, C> {
        &self.machine
    }

    pub fn config(&self) -> &'a MatchConfig {
        self.machine.config()
    }

    /// Creates the state of a fresh round: both characters standing at their
    /// configured start positions, facing each other.
    pub fn start_round(
        &self,
        archetypes: [&str; PLAYER_COUNT],
    ) -> Result<MatchState, AdvanceError> {
        let config = self.config();
        let [p1_x, p2_x] = config.start_positions;
        let ground = config.stage.ground;

        let p1 = self.machine.spawn(
            PlayerId::P1,
            archetypes[0],
            Position::new(p1_x, ground),
            Facing::toward(p1_x, p2_x).unwrap_or(Facing::Right),
        )?;
        let p2 = self.machine.spawn(
            PlayerId::P2,
            archetypes[1],
            Position::new(p2_x, ground),
            Facing::toward(p2_x, p1_x).unwrap_or(Facing::Left),
        )?;

        Ok(MatchState::new([p1, p2]))
    }

    /// Simulates one frame.
    ///
    /// # Errors
    ///
    /// `RoundOver` if the round already finished; the state is not touched.
    /// Per-character failures are reported inside the [`FrameReport`].
    pub fn step(
        &self,
        state: &mut MatchState,
        inputs: &FrameInputs,
    ) -> Result<FrameReport, StepError> {
        if state.is_finished() {
            return Err(StepError::RoundOver);
        }
        let config = self.config();
        state.frame += 1;

        let positions = state.characters.each_ref().map(|ch| ch.position.x);
        let facings = state.characters.each_ref().map(|ch| ch.facing);
        for player in PlayerId::ALL {
            let opponent_x = positions[player.opponent().index()];
            self.machine
                .face_opponent(state.character_mut(player), opponent_x);
        }

        let advances = PlayerId::ALL.map(|player| {
            let ch = state.character_mut(player);
            let advance = self.machine.advance(ch, inputs.request(player));
            // A failed advance leaves the character as it entered the frame.
            if advance.is_err() {
                ch.facing = facings[player.index()];
            }
            advance
        });

        let attacks: Vec<AttackInstance> = state
            .characters
            .iter()
            .flat_map(|ch| ch.attacks().cloned())
            .collect();
        let outcomes = self.resolver.resolve(&attacks, &state.characters);

        let mut knockdowns = Vec::new();
        let mut knockdown_errors = Vec::new();
        for outcome in &outcomes {
            apply_outcome(state, outcome, config);
            if outcome.knocked_down {
                let defender = state.character_mut(outcome.defender);
                match self.machine.force_transition(defender, &config.motions.down) {
                    Ok(transition) => knockdowns.push(transition),
                    Err(err) => knockdown_errors.push(err),
                }
            }
        }

        if state.characters.iter().any(CharacterSimState::is_knocked_out) {
            state.round = RoundStatus::Finished(RoundResult::by_health(
                state.health(),
                RoundEnd::KnockOut,
            ));
        } else if inputs.round_timer_expired {
            state.round =
                RoundStatus::Finished(RoundResult::by_health(state.health(), RoundEnd::TimeUp));
        }

        Ok(FrameReport {
            frame: state.frame,
            advances,
            outcomes,
            knockdowns,
            knockdown_errors,
            round: state.round,
        })
    }
}
