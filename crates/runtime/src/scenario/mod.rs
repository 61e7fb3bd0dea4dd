//! Scripted inputs for headless rounds.
//!
//! An [`InputScript`] is a RON document listing which action each player
//! requests on which frames:
//!
//! ```ron
//! (
//!     name: "jab exchange",
//!     players: Some(("ZEN", "ZEN")),
//!     round_frames: Some(600),
//!     inputs: [
//!         (frame: 1, player: P1, action: "FORWARD_WALK", hold: 20),
//!         (frame: 21, player: P1, action: "STAND_A"),
//!         (frame: 18, player: P2, action: "STAND_GUARD", hold: 12),
//!     ],
//! )
//! ```
//!
//! Frames are 1-based and match [`fight_core::FrameReport::frame`]. A request
//! held for `hold` frames is repeated on each of them; when two entries cover
//! the same player and frame, the later entry wins.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use fight_core::{FrameInputs, MotionOracle, PLAYER_COUNT, PlayerId};

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read input script {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed input script")]
    Parse(#[from] ron::error::SpannedError),

    #[error("input #{index} is scheduled on frame 0; frames start at 1")]
    FrameZero { index: usize },

    #[error("input #{index} is held for 0 frames")]
    ZeroHold { index: usize },

    #[error("input #{index} is held past the last representable frame")]
    HoldOverflow { index: usize },

    #[error("input #{index}: {player} cannot perform '{action}' as {archetype}")]
    UnknownAction {
        index: usize,
        player: PlayerId,
        archetype: String,
        action: String,
    },
}

/// Player slot as written in scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    P1,
    P2,
}

impl From<Slot> for PlayerId {
    fn from(slot: Slot) -> Self {
        match slot {
            Slot::P1 => PlayerId::P1,
            Slot::P2 => PlayerId::P2,
        }
    }
}

fn one_frame() -> u64 {
    1
}

/// One scheduled request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedInput {
    pub frame: u64,
    pub player: Slot,
    pub action: String,
    #[serde(default = "one_frame")]
    pub hold: u64,
}

impl ScriptedInput {
    fn covers(&self, frame: u64) -> bool {
        frame >= self.frame && frame - self.frame < self.hold
    }

    /// `None` if the hold runs past `u64::MAX`.
    fn checked_last_frame(&self) -> Option<u64> {
        self.frame.checked_add(self.hold.saturating_sub(1))
    }
}

/// A round's worth of scheduled requests.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputScript {
    #[serde(default)]
    pub name: String,
    /// Archetypes for P1 and P2, if the script pins them.
    #[serde(default)]
    pub players: Option<(String, String)>,
    /// Round length in frames, if the script pins it.
    #[serde(default)]
    pub round_frames: Option<u64>,
    #[serde(default)]
    pub inputs: Vec<ScriptedInput>,
}

impl InputScript {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses a script and checks its frame schedule.
    pub fn parse(content: &str) -> Result<Self, ScriptError> {
        let script: InputScript = ron::from_str(content)?;
        script.check_schedule()?;
        Ok(script)
    }

    fn check_schedule(&self) -> Result<(), ScriptError> {
        for (index, input) in self.inputs.iter().enumerate() {
            if input.frame == 0 {
                return Err(ScriptError::FrameZero { index });
            }
            if input.hold == 0 {
                return Err(ScriptError::ZeroHold { index });
            }
            if input.checked_last_frame().is_none() {
                return Err(ScriptError::HoldOverflow { index });
            }
        }
        Ok(())
    }

    /// Checks every scheduled action against the archetypes that will play.
    pub fn validate<C>(
        &self,
        catalog: &C,
        archetypes: [&str; PLAYER_COUNT],
    ) -> Result<(), ScriptError>
    where
        C: MotionOracle + ?Sized,
    {
        for (index, input) in self.inputs.iter().enumerate() {
            let player = PlayerId::from(input.player);
            let archetype = archetypes[player.index()];
            if !catalog.contains(archetype, &input.action) {
                return Err(ScriptError::UnknownAction {
                    index,
                    player,
                    archetype: archetype.to_owned(),
                    action: input.action.clone(),
                });
            }
        }
        Ok(())
    }

    /// Last frame on which the script still requests something.
    pub fn last_frame(&self) -> u64 {
        self.inputs
            .iter()
            .map(|input| input.checked_last_frame().unwrap_or(u64::MAX))
            .max()
            .unwrap_or(0)
    }

    pub fn push(&mut self, frame: u64, player: Slot, action: impl Into<String>, hold: u64) {
        self.inputs.push(ScriptedInput {
            frame,
            player,
            action: action.into(),
            hold,
        });
    }
}

/// Supplies the requests for each frame of a round.
pub trait FrameInputSource {
    /// Inputs for the (1-based) `frame` about to be simulated.
    fn inputs_for(&mut self, frame: u64) -> FrameInputs;
}

impl FrameInputSource for InputScript {
    fn inputs_for(&mut self, frame: u64) -> FrameInputs {
        self.inputs
            .iter()
            .filter(|input| input.covers(frame))
            .fold(FrameInputs::idle(), |inputs, input| {
                inputs.with_request(input.player.into(), input.action.as_str())
            })
    }
}

/// Source that never requests anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Idle;

impl FrameInputSource for Idle {
    fn inputs_for(&mut self, _frame: u64) -> FrameInputs {
        FrameInputs::idle()
    }
}

impl<F> FrameInputSource for F
where
    F: FnMut(u64) -> FrameInputs,
{
    fn inputs_for(&mut self, frame: u64) -> FrameInputs {
        self(frame)
    }
}
