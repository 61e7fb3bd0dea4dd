//! Events published by the match runner.

use serde::{Deserialize, Serialize};

use fight_core::{
    AdvanceError, AttackId, FrameReport, GameError, MatchSnapshot, MotionTransition,
    PLAYER_COUNT, PlayerId, ResolvedHitOutcome, RoundResult,
};

/// Topics for event routing.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Motion changes and attack spawns
    Motion,
    /// Resolved hits
    Combat,
    /// Round end and periodic snapshots
    Round,
    /// Isolated per-character failures
    Fault,
}

/// One observable fact about a simulated frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FrameEvent {
    Transition {
        frame: u64,
        transition: MotionTransition,
    },
    AttackSpawned {
        frame: u64,
        player: PlayerId,
        attack: AttackId,
        motion: String,
    },
    Hit {
        frame: u64,
        outcome: ResolvedHitOutcome,
    },
    AdvanceFailed {
        frame: u64,
        player: PlayerId,
        code: String,
        message: String,
    },
    RoundEnded {
        frame: u64,
        result: RoundResult,
    },
    Snapshot {
        snapshot: MatchSnapshot,
    },
}

impl FrameEvent {
    pub fn topic(&self) -> Topic {
        match self {
            FrameEvent::Transition { .. } | FrameEvent::AttackSpawned { .. } => Topic::Motion,
            FrameEvent::Hit { .. } => Topic::Combat,
            FrameEvent::RoundEnded { .. } | FrameEvent::Snapshot { .. } => Topic::Round,
            FrameEvent::AdvanceFailed { .. } => Topic::Fault,
        }
    }

    pub fn frame(&self) -> u64 {
        match self {
            FrameEvent::Transition { frame, .. }
            | FrameEvent::AttackSpawned { frame, .. }
            | FrameEvent::Hit { frame, .. }
            | FrameEvent::AdvanceFailed { frame, .. }
            | FrameEvent::RoundEnded { frame, .. } => *frame,
            FrameEvent::Snapshot { snapshot } => snapshot.frame,
        }
    }

    pub fn advance_failed(frame: u64, error: &AdvanceError) -> Self {
        FrameEvent::AdvanceFailed {
            frame,
            player: error.player(),
            code: error.error_code().to_owned(),
            message: error.to_string(),
        }
    }

    /// Extracts the events of one frame in publication order: transitions,
    /// spawns, hits, failures, then the round end.
    ///
    /// `previous` holds each player's motion before the frame; a spawn is
    /// labelled with the motion the advance ended in.
    pub fn from_report(report: &FrameReport, previous: [&str; PLAYER_COUNT]) -> Vec<FrameEvent> {
        let frame = report.frame;
        let mut events: Vec<FrameEvent> = report
            .transitions()
            .cloned()
            .map(|transition| FrameEvent::Transition { frame, transition })
            .collect();

        for (index, advance) in report.advances.iter().enumerate() {
            let Ok(advance) = advance else { continue };
            if let Some(attack) = advance.attack_spawned {
                let motion = advance
                    .transition
                    .as_ref()
                    .map_or(previous[index], |transition| transition.to.as_str());
                events.push(FrameEvent::AttackSpawned {
                    frame,
                    player: PlayerId::ALL[index],
                    attack,
                    motion: motion.to_owned(),
                });
            }
        }

        events.extend(
            report
                .outcomes
                .iter()
                .cloned()
                .map(|outcome| FrameEvent::Hit { frame, outcome }),
        );
        events.extend(report.errors().map(|error| Self::advance_failed(frame, error)));

        if let Some(result) = report.round_ended() {
            events.push(FrameEvent::RoundEnded { frame, result });
        }
        events
    }
}
