//! Stage physics applied once per advance.

use crate::config::MatchConfig;
use crate::motion::MotionDefinition;
use crate::state::CharacterSimState;

/// Applies the motion's base speed, gravity and friction, integrates the
/// position and resolves contact with the stage.
///
/// Horizontal base speed is sustained for the whole motion and signed by
/// facing; vertical base speed is an impulse applied on entry. Touching the
/// floor in the Air state raises `pending_landing`.
pub(crate) fn integrate(
    ch: &mut CharacterSimState,
    motion: &MotionDefinition,
    config: &MatchConfig,
) {
    let stage = &config.stage;
    let grounded = !ch.is_airborne() && ch.position.y >= stage.ground;

    if motion.speed_x != 0 {
        ch.velocity.x = ch.facing.sign() * motion.speed_x;
    } else if grounded {
        ch.velocity.x = approach_zero(ch.velocity.x, config.friction);
    }

    if ch.is_airborne() || ch.position.y < stage.ground {
        ch.velocity.y += config.gravity;
    }

    ch.position.x = (ch.position.x + ch.velocity.x).clamp(stage.left, stage.right);
    ch.position.y += ch.velocity.y;

    if ch.position.y >= stage.ground {
        ch.position.y = stage.ground;
        ch.velocity.y = ch.velocity.y.min(0);
        if ch.is_airborne() {
            ch.pending_landing = true;
        }
    }
}

fn approach_zero(value: i32, step: i32) -> i32 {
    if value > 0 {
        (value - step).max(0)
    } else {
        (value + step).min(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::HitArea;
    use crate::motion::CharacterState;
    use crate::state::{Facing, PlayerId, Position, Velocity};

    fn at(x: i32, y: i32, motion: &MotionDefinition) -> CharacterSimState {
        CharacterSimState::new(
            PlayerId::P1,
            "ZEN",
            motion,
            Position::new(x, y),
            Facing::Left,
            &MatchConfig::default(),
        )
    }

    fn stand() -> MotionDefinition {
        MotionDefinition::builder("STAND", 1)
            .hurt_area(HitArea::new(-20, -100, 20, 0))
            .build()
    }

    #[test]
    fn base_speed_is_signed_by_facing() {
        let walk = MotionDefinition::builder("FORWARD_WALK", 10).speed(4, 0).build();
        let mut ch = at(300, 640, &walk);
        integrate(&mut ch, &walk, &MatchConfig::default());
        assert_eq!(ch.velocity.x, -4);
        assert_eq!(ch.position, Position::new(296, 640));
    }

    #[test]
    fn friction_decays_grounded_slide() {
        let config = MatchConfig::default().with_physics(1, 2);
        let stand = stand();
        let mut ch = at(300, 640, &stand);
        ch.velocity = Velocity::new(5, 0);

        integrate(&mut ch, &stand, &config);
        assert_eq!(ch.velocity.x, 3);
        integrate(&mut ch, &stand, &config);
        integrate(&mut ch, &stand, &config);
        assert_eq!(ch.velocity.x, 0);
        assert_eq!(ch.position.x, 304);
    }

    #[test]
    fn airborne_character_falls_and_lands() {
        let config = MatchConfig::default();
        let air = MotionDefinition::builder("AIR", 1)
            .state(CharacterState::Air)
            .landing_flag(true)
            .build();
        let mut ch = at(300, 630, &air);

        for _ in 0..10 {
            integrate(&mut ch, &air, &config);
            if ch.pending_landing {
                break;
            }
        }
        assert!(ch.pending_landing);
        assert_eq!(ch.position.y, config.stage.ground);
        assert_eq!(ch.velocity.y, 0);
    }

    #[test]
    fn position_is_clamped_to_stage() {
        let config = MatchConfig::default();
        let stand = stand();
        let mut ch = at(config.stage.left + 2, 640, &stand);
        ch.velocity.x = -30;
        integrate(&mut ch, &stand, &config);
        assert_eq!(ch.position.x, config.stage.left);
    }
}
