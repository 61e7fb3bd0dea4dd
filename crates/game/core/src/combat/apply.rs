//! Feeding resolved outcomes back into character state.

use super::outcome::ResolvedHitOutcome;
use crate::config::MatchConfig;
use crate::state::MatchState;

/// Applies one outcome to the attacker and defender.
///
/// Defender: health (floored at zero), energy, velocity and guard recovery.
/// Attacker: energy, and the striking instance records the hit; a single-hit
/// melee instance is destroyed.
///
/// Knockdown is not handled here; the forced transition needs the motion
/// catalog and is performed by the engine.
pub fn apply_outcome(state: &mut MatchState, outcome: &ResolvedHitOutcome, config: &MatchConfig) {
    let (attacker, defender) = state.pair_mut(outcome.attacker);

    defender.take_damage(outcome.damage);
    defender.add_energy(outcome.defender_energy, config.max_energy);
    defender.velocity.x = outcome.knockback.x;
    if outcome.guarded {
        defender.guard_recovery = outcome.guard_recovery;
    } else {
        defender.velocity.y = outcome.knockback.y;
    }

    attacker.add_energy(outcome.attacker_energy, config.max_energy);
    let consumed = match attacker.attack_mut(outcome.attack) {
        Some(instance) => {
            instance.register_hit(outcome.defender);
            instance.consumed_by_hit()
        }
        None => false,
    };
    if consumed {
        attacker.remove_attack(outcome.attack);
    }
}
