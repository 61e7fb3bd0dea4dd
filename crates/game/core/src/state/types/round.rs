use strum::{AsRefStr, Display};

use super::common::PlayerId;

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundEnd {
    /// A character's health reached zero.
    KnockOut,
    /// The round timer expired.
    TimeUp,
}

/// Final verdict of a round. `winner` is `None` for a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    pub winner: Option<PlayerId>,
    pub end: RoundEnd,
}

impl RoundResult {
    /// Decides a round by remaining health; equal health is a draw.
    pub fn by_health(health: [u32; 2], end: RoundEnd) -> Self {
        let winner = match health[0].cmp(&health[1]) {
            std::cmp::Ordering::Greater => Some(PlayerId::P1),
            std::cmp::Ordering::Less => Some(PlayerId::P2),
            std::cmp::Ordering::Equal => None,
        };
        Self { winner, end }
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundStatus {
    #[default]
    InProgress,
    Finished(RoundResult),
}

impl RoundStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, RoundStatus::Finished(_))
    }

    pub fn result(&self) -> Option<RoundResult> {
        match self {
            RoundStatus::InProgress => None,
            RoundStatus::Finished(result) => Some(*result),
        }
    }
}
