//! Per-round combat statistics.

use serde::{Deserialize, Serialize};

use fight_core::{FrameReport, PLAYER_COUNT, PlayerId, ResolvedHitOutcome};

/// Counters for one player over a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Attack instances this player spawned.
    pub attacks_started: u32,
    /// Hits that connected unguarded.
    pub hits_landed: u32,
    /// Hits the opponent guarded.
    pub hits_guarded: u32,
    /// Incoming hits this player guarded.
    pub guards: u32,
    pub damage_dealt: u32,
    pub damage_taken: u32,
    /// Times this player knocked the opponent down.
    pub knockdowns: u32,
    pub motion_changes: u32,
    /// Frames this player's advance failed.
    pub faults: u32,
}

/// Statistics for both players.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    pub players: [PlayerStats; PLAYER_COUNT],
    /// Frames on which both players struck each other.
    pub clashes: u32,
}

impl RoundStats {
    pub fn player(&self, player: PlayerId) -> &PlayerStats {
        &self.players[player.index()]
    }

    /// Folds one frame's report into the counters.
    pub fn record(&mut self, report: &FrameReport) {
        for (index, advance) in report.advances.iter().enumerate() {
            match advance {
                Ok(advance) => {
                    let stats = &mut self.players[index];
                    stats.attacks_started += u32::from(advance.attack_spawned.is_some());
                    stats.motion_changes += u32::from(advance.transition.is_some());
                }
                Err(_) => self.players[index].faults += 1,
            }
        }
        for knockdown in &report.knockdowns {
            self.players[knockdown.player.index()].motion_changes += 1;
        }
        for error in &report.knockdown_errors {
            self.players[error.player().index()].faults += 1;
        }

        for outcome in &report.outcomes {
            self.record_outcome(outcome);
        }
        let clashed = report
            .outcomes
            .iter()
            .enumerate()
            .any(|(i, a)| report.outcomes[i + 1..].iter().any(|b| a.is_clash_with(b)));
        self.clashes += u32::from(clashed);
    }

    fn record_outcome(&mut self, outcome: &ResolvedHitOutcome) {
        let attacker = &mut self.players[outcome.attacker.index()];
        attacker.damage_dealt += outcome.damage;
        if outcome.guarded {
            attacker.hits_guarded += 1;
        } else {
            attacker.hits_landed += 1;
        }
        attacker.knockdowns += u32::from(outcome.knocked_down);

        let defender = &mut self.players[outcome.defender.index()];
        defender.damage_taken += outcome.damage;
        defender.guards += u32::from(outcome.guarded);
    }
}
