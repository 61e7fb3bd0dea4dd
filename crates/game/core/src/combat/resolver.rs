//! Per-frame collision testing between attack boxes and hurt boxes.

use arrayvec::ArrayVec;

use super::guard::guards_against;
use super::outcome::{Impulse, ResolvedHitOutcome};
use crate::config::MatchConfig;
use crate::state::{AttackInstance, CharacterSimState};

/// Outcomes of one frame, bounded by the number of live attack instances.
pub type HitOutcomes = ArrayVec<ResolvedHitOutcome, { MatchConfig::MAX_OUTCOMES_PER_FRAME }>;

/// Tests every attack against every opposing hurt box and computes outcomes.
///
/// Resolution is pure over the post-advance snapshot it is given: outcomes
/// are computed independently for each (attack, defender) pair, so two
/// characters striking each other in the same frame both take full
/// consequences. Output order is attack order, then defender order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionResolver {
    guard_pushback_divisor: i32,
}

impl CollisionResolver {
    pub fn new(guard_pushback_divisor: i32) -> Self {
        Self {
            guard_pushback_divisor: guard_pushback_divisor.max(1),
        }
    }

    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(config.guard_pushback_divisor)
    }

    pub fn resolve(
        &self,
        attacks: &[AttackInstance],
        defenders: &[CharacterSimState],
    ) -> HitOutcomes {
        let mut outcomes = HitOutcomes::new();

        for attack in attacks {
            for defender in defenders {
                if attack.owner == defender.player || !attack.admits(defender.player) {
                    continue;
                }
                if !attack.hit_area.overlaps(&defender.hurt_area) {
                    continue;
                }
                if outcomes.try_push(self.outcome(attack, defender)).is_err() {
                    return outcomes;
                }
            }
        }

        outcomes
    }

    fn outcome(&self, attack: &AttackInstance, defender: &CharacterSimState) -> ResolvedHitOutcome {
        let template = &attack.template;
        let guarded = guards_against(defender.guard, template.attack_type);
        let direction = attack.facing.sign();

        let (damage, attacker_energy, defender_energy, knockback, guard_recovery) = if guarded {
            (
                template.guard_damage,
                template.guard_add_energy,
                0,
                Impulse {
                    x: direction * template.impact_x / self.guard_pushback_divisor,
                    y: 0,
                },
                template.give_guard_recov,
            )
        } else {
            (
                template.hit_damage,
                template.hit_add_energy,
                template.give_energy,
                Impulse {
                    x: direction * template.impact_x,
                    y: template.impact_y,
                },
                0,
            )
        };

        ResolvedHitOutcome {
            attacker: attack.owner,
            defender: defender.player,
            attack: attack.id,
            attack_type: template.attack_type,
            guarded,
            damage,
            attacker_energy,
            defender_energy,
            knockback,
            guard_recovery,
            knocked_down: !guarded && template.down_prop,
            projectile: template.projectile,
        }
    }
}

impl Default for CollisionResolver {
    fn default() -> Self {
        Self::new(MatchConfig::DEFAULT_GUARD_PUSHBACK_DIVISOR)
    }
}
