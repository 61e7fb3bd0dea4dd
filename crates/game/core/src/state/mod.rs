//! Authoritative match state representation.
//!
//! This module owns the per-character simulation state, attack instances and
//! round bookkeeping. Runtime layers clone or query this state but mutate it
//! exclusively through the engine.
pub mod types;

pub use types::{
    AttackId, AttackInstance, CharacterSimState, CharacterSnapshot, Facing, HitRegistry,
    PlayerId, PlayerMask, Position, Projectiles, RoundEnd, RoundResult, RoundStatus, Velocity,
};

use crate::config::PLAYER_COUNT;

/// Canonical state of one round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    /// Frames simulated so far in this round.
    pub frame: u64,
    /// Character arena, indexed by [`PlayerId::index`].
    pub characters: [CharacterSimState; PLAYER_COUNT],
    pub round: RoundStatus,
}

impl MatchState {
    pub fn new(characters: [CharacterSimState; PLAYER_COUNT]) -> Self {
        Self {
            frame: 0,
            characters,
            round: RoundStatus::InProgress,
        }
    }

    pub fn character(&self, player: PlayerId) -> &CharacterSimState {
        &self.characters[player.index()]
    }

    pub fn character_mut(&mut self, player: PlayerId) -> &mut CharacterSimState {
        &mut self.characters[player.index()]
    }

    /// Borrows `player` and its opponent mutably at the same time.
    pub fn pair_mut(
        &mut self,
        player: PlayerId,
    ) -> (&mut CharacterSimState, &mut CharacterSimState) {
        let [first, second] = &mut self.characters;
        if player == PlayerId::P1 {
            (first, second)
        } else {
            (second, first)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.round.is_finished()
    }

    pub fn health(&self) -> [u32; PLAYER_COUNT] {
        [self.characters[0].health, self.characters[1].health]
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            frame: self.frame,
            characters: [
                self.characters[0].snapshot(),
                self.characters[1].snapshot(),
            ],
            round: self.round,
        }
    }

    /// SHA-256 over the canonical bincode encoding of the state.
    ///
    /// Two simulations fed identical catalogs, configs and inputs produce the
    /// same digest on every frame.
    #[cfg(feature = "serde")]
    pub fn digest(&self) -> Result<[u8; 32], bincode::Error> {
        use sha2::{Digest, Sha256};

        let bytes = bincode::serialize(self)?;
        Ok(Sha256::digest(&bytes).into())
    }
}

/// Observer-facing summary of a round at one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSnapshot {
    pub frame: u64,
    pub characters: [CharacterSnapshot; PLAYER_COUNT],
    pub round: RoundStatus,
}
