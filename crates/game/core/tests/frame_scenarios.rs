use fight_core::{
    AdvanceError, AttackTemplate, AttackType, CharacterState, FrameInputs, FrameReport,
    GuardStance, HitArea, MatchConfig, MatchEngine, MatchState, MotionCatalog, MotionDefinition,
    PlayerId, RoundEnd, RoundStatus, StepError, TransitionCause, Velocity,
};

const P1: PlayerId = PlayerId::P1;
const P2: PlayerId = PlayerId::P2;

fn body() -> HitArea {
    HitArea::new(-20, -100, 20, 0)
}

fn jab() -> AttackTemplate {
    AttackTemplate::new(HitArea::new(10, -80, 60, -60), 3, 5, 10)
        .with_guard_damage(2)
        .with_energy(0, 5, 1, 2)
        .with_impact(10, -4)
        .with_guard_recovery(7)
}

/// Slow detached box: spawns on motion frame 2 and lives for 40 frames.
fn fireball() -> AttackTemplate {
    AttackTemplate::new(HitArea::new(0, -80, 30, -50), 2, 40, 10)
        .with_speed(4, 0)
        .as_projectile()
}

fn catalog() -> MotionCatalog {
    let neutral = |name: &str, state: CharacterState| {
        MotionDefinition::builder(name, 1)
            .state(state)
            .hurt_area(body())
            .build()
    };

    MotionCatalog::builder()
        .archetype(
            "ZEN",
            [
                neutral("STAND", CharacterState::Stand),
                neutral("CROUCH", CharacterState::Crouch),
                MotionDefinition::builder("AIR", 1)
                    .state(CharacterState::Air)
                    .landing_flag(true)
                    .hurt_area(body())
                    .build(),
                MotionDefinition::builder("LANDING", 4).hurt_area(body()).build(),
                MotionDefinition::builder("DOWN", 30)
                    .state(CharacterState::Down)
                    .control(false)
                    .never_cancelable()
                    .build(),
                MotionDefinition::builder("RISE", 10)
                    .control(false)
                    .never_cancelable()
                    .build(),
                MotionDefinition::builder("STAND_GUARD", 20)
                    .guard(GuardStance::Stand)
                    .hurt_area(body())
                    .build(),
                MotionDefinition::builder("CROUCH_GUARD", 20)
                    .state(CharacterState::Crouch)
                    .guard(GuardStance::Crouch)
                    .hurt_area(body())
                    .build(),
                MotionDefinition::builder("STAND_A", 16)
                    .level(1)
                    .control(false)
                    .never_cancelable()
                    .hurt_area(body())
                    .attack(jab())
                    .build(),
                MotionDefinition::builder("UPPER", 16)
                    .level(1)
                    .control(false)
                    .never_cancelable()
                    .hurt_area(body())
                    .attack(jab().with_impact(6, -10).knocking_down())
                    .build(),
                MotionDefinition::builder("POKE", 20)
                    .level(3)
                    .cancelable(0, 4)
                    .hurt_area(body())
                    .build(),
                MotionDefinition::builder("MEDIUM", 20)
                    .level(4)
                    .hurt_area(body())
                    .build(),
                MotionDefinition::builder("HEAVY", 20)
                    .level(5)
                    .hurt_area(body())
                    .build(),
                MotionDefinition::builder("FIREBALL", 20)
                    .level(1)
                    .hurt_area(body())
                    .attack(fireball())
                    .build(),
                MotionDefinition::builder("TAUNT", 20)
                    .never_cancelable()
                    .hurt_area(body())
                    .build(),
            ],
        )
        .expect("scenario catalog is valid")
        .build()
}

/// Fighters close enough that a jab reaches from either side.
fn config() -> MatchConfig {
    MatchConfig::default().with_start_positions(300, 340)
}

struct Scenario {
    catalog: MotionCatalog,
    config: MatchConfig,
}

impl Scenario {
    fn new(config: MatchConfig) -> Self {
        Self {
            catalog: catalog(),
            config,
        }
    }

    fn engine(&self) -> MatchEngine<'_, MotionCatalog> {
        MatchEngine::new(&self.catalog, &self.config)
    }

    fn start(&self) -> MatchState {
        self.engine()
            .start_round(["ZEN", "ZEN"])
            .expect("round starts")
    }
}

fn step(
    engine: &MatchEngine<'_, MotionCatalog>,
    state: &mut MatchState,
    inputs: FrameInputs,
) -> FrameReport {
    engine.step(state, &inputs).expect("round in progress")
}

/// Attacker jabs with startup 3 / active 5 into a stationary, unguarded
/// defender. The instance appears on motion frame 3, the defender loses exactly
/// the hit damage once, and the overlap on later frames changes nothing.
#[test]
fn unguarded_jab_hits_exactly_once() {
    let scenario = Scenario::new(config());
    let engine = scenario.engine();
    let mut state = scenario.start();
    let start_health = state.character(P2).health;

    step(&engine, &mut state, FrameInputs::idle().with_request(P1, "STAND_A"));
    assert_eq!(state.character(P1).motion, "STAND_A");

    let mut hit_frames = Vec::new();
    for _ in 0..12 {
        let report = step(&engine, &mut state, FrameInputs::idle());
        let attacker = state.character(P1);
        if attacker.frame < 3 {
            assert!(attacker.attack.is_none());
        }
        if !report.outcomes.is_empty() {
            hit_frames.push(attacker.frame);
        }
    }

    assert_eq!(hit_frames, vec![3]);
    assert_eq!(state.character(P2).health, start_health - 10);
    assert_eq!(state.character(P1).energy, 5);
    assert_eq!(state.character(P2).energy, 2);
}

/// Same setup, but the defender holds a standing guard before the jab lands.
#[test]
fn guarded_jab_applies_guard_values() {
    let scenario = Scenario::new(config());
    let engine = scenario.engine();
    let mut state = scenario.start();
    let start_health = state.character(P2).health;

    step(
        &engine,
        &mut state,
        FrameInputs::idle()
            .with_request(P1, "STAND_A")
            .with_request(P2, "STAND_GUARD"),
    );

    let mut outcome = None;
    for _ in 0..4 {
        let report = step(&engine, &mut state, FrameInputs::idle());
        if let Some(first) = report.outcomes.first() {
            outcome = Some(first.clone());
            break;
        }
    }

    let outcome = outcome.expect("jab connects");
    assert!(outcome.guarded);
    assert_eq!(outcome.damage, 2);

    let defender = state.character(P2);
    assert_eq!(defender.health, start_health - 2);
    assert_eq!(defender.guard_recovery, 7);
    assert_eq!(defender.velocity, Velocity::new(5, 0));
    assert_eq!(defender.energy, 0);
}

#[test]
fn low_attack_is_not_guarded_standing() {
    let mut config = config();
    config.starting_health = 100;
    let mut scenario = Scenario::new(config);
    scenario.catalog = MotionCatalog::builder()
        .archetype(
            "ZEN",
            [
                MotionDefinition::builder("STAND", 1).hurt_area(body()).build(),
                MotionDefinition::builder("STAND_GUARD", 20)
                    .guard(GuardStance::Stand)
                    .hurt_area(body())
                    .build(),
                MotionDefinition::builder("SWEEP", 16)
                    .control(false)
                    .hurt_area(body())
                    .attack(jab().with_type(AttackType::Low))
                    .build(),
            ],
        )
        .expect("valid")
        .build();
    let engine = scenario.engine();
    let mut state = scenario.start();

    step(
        &engine,
        &mut state,
        FrameInputs::idle()
            .with_request(P1, "SWEEP")
            .with_request(P2, "STAND_GUARD"),
    );
    for _ in 0..4 {
        step(&engine, &mut state, FrameInputs::idle());
    }
    assert_eq!(state.character(P2).health, 90);
}

/// Current motion has level 3 and accepts levels up to 4; a level-5 request
/// is refused and the motion keeps running.
#[test]
fn cancel_is_refused_above_cancelable_level() {
    let scenario = Scenario::new(config());
    let engine = scenario.engine();
    let mut state = scenario.start();

    step(&engine, &mut state, FrameInputs::idle().with_request(P1, "POKE"));
    let report = step(&engine, &mut state, FrameInputs::idle().with_request(P1, "HEAVY"));

    let advance = report.advances[0].as_ref().expect("refusal is not an error");
    assert!(advance.transition.is_none());
    assert_eq!(state.character(P1).motion, "POKE");
    assert_eq!(state.character(P1).frame, 1);

    let report = step(&engine, &mut state, FrameInputs::idle().with_request(P1, "MEDIUM"));
    let advance = report.advances[0].as_ref().expect("advance");
    assert_eq!(
        advance.transition.as_ref().map(|t| t.cause),
        Some(TransitionCause::Cancel)
    );
    assert_eq!(state.character(P1).motion, "MEDIUM");
}

#[test]
fn never_cancelable_motion_ignores_every_request() {
    let scenario = Scenario::new(config());
    let engine = scenario.engine();
    let mut state = scenario.start();

    step(&engine, &mut state, FrameInputs::idle().with_request(P1, "TAUNT"));
    for frame in 1..20 {
        step(&engine, &mut state, FrameInputs::idle().with_request(P1, "STAND"));
        assert_eq!(state.character(P1).motion, "TAUNT");
        assert_eq!(state.character(P1).frame, frame);
    }
    step(&engine, &mut state, FrameInputs::idle());
    assert_eq!(state.character(P1).motion, "STAND");
}

/// Both characters jab on the same frame and strike each other: each takes
/// the full consequences as if the other were the only attacker.
#[test]
fn clash_resolves_both_hits_independently() {
    let scenario = Scenario::new(config());
    let engine = scenario.engine();
    let mut state = scenario.start();
    let start_health = state.health();

    step(
        &engine,
        &mut state,
        FrameInputs::idle()
            .with_request(P1, "STAND_A")
            .with_request(P2, "STAND_A"),
    );

    let mut clash = None;
    for _ in 0..4 {
        let report = step(&engine, &mut state, FrameInputs::idle());
        if !report.outcomes.is_empty() {
            clash = Some(report);
            break;
        }
    }

    let report = clash.expect("jabs connect");
    assert_eq!(report.outcomes.len(), 2);
    assert!(report.outcomes[0].is_clash_with(&report.outcomes[1]));
    assert_eq!(state.health(), [start_health[0] - 10, start_health[1] - 10]);
    assert_eq!(state.character(P1).velocity.x, -10);
    assert_eq!(state.character(P2).velocity.x, 10);
}

#[test]
fn knockdown_forces_down_then_rise() {
    let scenario = Scenario::new(config());
    let engine = scenario.engine();
    let mut state = scenario.start();

    step(&engine, &mut state, FrameInputs::idle().with_request(P1, "UPPER"));
    let mut knocked = None;
    for _ in 0..4 {
        let report = step(&engine, &mut state, FrameInputs::idle());
        if let Some(transition) = report.knockdowns.first() {
            knocked = Some(transition.clone());
            break;
        }
    }

    let knocked = knocked.expect("uppercut knocks down");
    assert_eq!(knocked.player, P2);
    assert_eq!(knocked.cause, TransitionCause::Forced);
    assert_eq!(state.character(P2).state, CharacterState::Down);
    assert!(state.character(P2).velocity.y < 0);

    let mut rose = false;
    for _ in 0..40 {
        step(&engine, &mut state, FrameInputs::idle().with_request(P2, "STAND_A"));
        if state.character(P2).motion == "RISE" {
            rose = true;
            break;
        }
        assert_eq!(state.character(P2).motion, "DOWN");
    }
    assert!(rose);
    assert_eq!(state.character(P2).position.y, scenario.config.stage.ground);
}

#[test]
fn failed_advance_is_isolated_to_one_character() {
    let scenario = Scenario::new(config());
    let engine = scenario.engine();
    let mut state = scenario.start();
    let p1_before = state.character(P1).clone();

    let report = step(
        &engine,
        &mut state,
        FrameInputs::idle()
            .with_request(P1, "HADOKEN")
            .with_request(P2, "POKE"),
    );

    assert!(matches!(
        report.advances[0],
        Err(AdvanceError::InvalidCancelRequest { .. })
    ));
    assert_eq!(report.errors().count(), 1);
    assert_eq!(state.character(P1), &p1_before);
    assert_eq!(state.character(P2).motion, "POKE");
}

#[test]
fn failed_advance_keeps_facing_when_opponent_crosses_over() {
    let scenario = Scenario::new(config());
    let engine = scenario.engine();
    let mut state = scenario.start();
    state.character_mut(P2).position.x = 100;
    let p1_before = state.character(P1).clone();
    assert_eq!(p1_before.facing, fight_core::Facing::Right);

    let report = step(
        &engine,
        &mut state,
        FrameInputs::idle().with_request(P1, "HADOKEN"),
    );

    assert!(report.advances[0].is_err());
    assert_eq!(state.character(P1), &p1_before);
    assert_eq!(state.character(P2).facing, fight_core::Facing::Right);

    // The turn happens on the next frame that succeeds.
    step(&engine, &mut state, FrameInputs::idle());
    assert_eq!(state.character(P1).facing, fight_core::Facing::Left);
}

/// The projectile overlaps the defender for many frames while it travels
/// through, but lands once and keeps flying afterwards.
#[test]
fn projectile_hits_once_and_survives_the_hit() {
    let scenario = Scenario::new(config());
    let engine = scenario.engine();
    let mut state = scenario.start();
    let start_health = state.character(P2).health;

    let mut hits = Vec::new();
    for frame in 0..30 {
        let inputs = if frame == 0 {
            FrameInputs::idle().with_request(P1, "FIREBALL")
        } else {
            FrameInputs::idle()
        };
        let report = step(&engine, &mut state, inputs);
        hits.extend(report.outcomes.iter().map(|hit| (report.frame, hit.clone())));

        if report.frame == 3 {
            let projectile = &state.character(P1).projectiles[0];
            assert!(projectile.hit_area.overlaps(&state.character(P2).hurt_area));
        }
    }

    assert_eq!(hits.len(), 1, "{hits:?}");
    let (frame, hit) = &hits[0];
    assert_eq!(*frame, 3);
    assert!(hit.projectile);
    assert_eq!(state.character(P2).health, start_health - 10);

    let p1 = state.character(P1);
    assert_eq!(p1.motion, "STAND");
    assert!(p1.attack.is_none());
    assert_eq!(p1.projectiles.len(), 1);
    assert_eq!(p1.projectiles[0].id, hit.attack);
    assert!(p1.projectiles[0].hit_registry.contains(P2));
}

#[test]
fn projectile_past_capacity_is_not_spawned() {
    let scenario = Scenario::new(config().with_start_positions(100, 800));
    let engine = scenario.engine();
    let mut state = scenario.start();

    let mut spawned = Vec::new();
    for volley in 0..=MatchConfig::MAX_PROJECTILES {
        step(&engine, &mut state, FrameInputs::idle().with_request(P1, "FIREBALL"));
        step(&engine, &mut state, FrameInputs::idle());
        let report = step(&engine, &mut state, FrameInputs::idle());
        assert_eq!(state.character(P1).frame, 2, "volley {volley}");
        spawned.push(report.advances[0].as_ref().expect("advance").attack_spawned);
    }

    let (accepted, dropped) = spawned.split_at(MatchConfig::MAX_PROJECTILES);
    assert!(accepted.iter().all(Option::is_some));
    assert_eq!(dropped.len(), 1);
    assert!(dropped[0].is_none());
    assert_eq!(
        state.character(P1).projectiles.len(),
        MatchConfig::MAX_PROJECTILES
    );
    assert_eq!(state.character(P2).health, MatchConfig::DEFAULT_STARTING_HEALTH);
}

#[test]
fn knockout_ends_round_and_further_steps_fail() {
    let scenario = Scenario::new(config().with_starting_health(10));
    let engine = scenario.engine();
    let mut state = scenario.start();

    step(&engine, &mut state, FrameInputs::idle().with_request(P1, "STAND_A"));
    let mut result = None;
    for _ in 0..4 {
        let report = step(&engine, &mut state, FrameInputs::idle());
        if let Some(ended) = report.round_ended() {
            result = Some(ended);
            break;
        }
    }

    let result = result.expect("round ends by knockout");
    assert_eq!(result.end, RoundEnd::KnockOut);
    assert_eq!(result.winner, Some(P1));
    assert_eq!(
        engine.step(&mut state, &FrameInputs::idle()).unwrap_err(),
        StepError::RoundOver
    );
}

#[test]
fn timer_expiry_decides_by_health() {
    let scenario = Scenario::new(config());
    let engine = scenario.engine();
    let mut state = scenario.start();

    let report = step(&engine, &mut state, FrameInputs::idle().with_timer_expired());
    match report.round {
        RoundStatus::Finished(result) => {
            assert_eq!(result.end, RoundEnd::TimeUp);
            assert!(result.is_draw());
        }
        RoundStatus::InProgress => panic!("timer expiry must end the round"),
    }
    assert!(state.is_finished());
}

#[test]
fn characters_turn_to_face_each_other() {
    let scenario = Scenario::new(config().with_start_positions(500, 200));
    let engine = scenario.engine();
    let mut state = scenario.start();
    assert_eq!(state.character(P1).facing, fight_core::Facing::Left);

    state.character_mut(P2).position.x = 800;
    step(&engine, &mut state, FrameInputs::idle());
    assert_eq!(state.character(P1).facing, fight_core::Facing::Right);
    assert_eq!(state.character(P2).facing, fight_core::Facing::Left);
}

#[cfg(feature = "serde")]
#[test]
fn identical_runs_produce_identical_digests() {
    let script = |frame: u64| match frame % 24 {
        0 => FrameInputs::idle().with_request(P1, "STAND_A"),
        6 => FrameInputs::idle().with_request(P2, "STAND_GUARD"),
        12 => FrameInputs::idle().with_request(P2, "UPPER"),
        _ => FrameInputs::idle(),
    };

    let run = || {
        let scenario = Scenario::new(config());
        let engine = scenario.engine();
        let mut state = scenario.start();
        let mut digests = Vec::new();
        for frame in 0..120 {
            if engine.step(&mut state, &script(frame)).is_err() {
                break;
            }
            digests.push(state.digest().expect("state encodes"));
        }
        digests
    };

    let first = run();
    assert!(!first.is_empty());
    assert_eq!(first, run());
    assert_eq!(hex::encode(first[0]).len(), 64);
}
