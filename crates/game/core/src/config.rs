/// Number of players in a match.
pub const PLAYER_COUNT: usize = 2;

/// Well-known motion names the simulation transitions into on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionNames {
    /// Neutral motion after a Stand-state motion completes.
    pub stand: String,
    /// Neutral motion after a Crouch-state motion completes.
    pub crouch: String,
    /// Neutral motion after an Air-state motion completes.
    pub air: String,
    /// Motion that follows a completed Down-state motion.
    pub rise: String,
    /// Motion entered on touching the ground while in the Air state.
    pub landing: String,
    /// Motion forced on a defender by a knockdown hit.
    pub down: String,
}

impl Default for MotionNames {
    fn default() -> Self {
        Self {
            stand: "STAND".into(),
            crouch: "CROUCH".into(),
            air: "AIR".into(),
            rise: "RISE".into(),
            landing: "LANDING".into(),
            down: "DOWN".into(),
        }
    }
}

/// Horizontal walls and floor of the stage, in world pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageBounds {
    pub left: i32,
    pub right: i32,
    /// Floor line; y grows downward so airborne characters have `y < ground`.
    pub ground: i32,
}

impl Default for StageBounds {
    fn default() -> Self {
        Self {
            left: 0,
            right: 960,
            ground: 640,
        }
    }
}

/// Match configuration constants and tunable parameters.
///
/// Supplied at match setup and never renegotiated mid-match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatchConfig {
    pub starting_health: u32,
    /// Energy is clamped to `[0, max_energy]`.
    pub max_energy: u32,
    /// Downward acceleration per frame while in the Air state.
    pub gravity: i32,
    /// Horizontal deceleration per frame on the ground.
    pub friction: i32,
    pub stage: StageBounds,
    /// Starting x of each player, indexed by player id.
    pub start_positions: [i32; PLAYER_COUNT],
    /// Guarded knockback is `impact_x / guard_pushback_divisor`.
    pub guard_pushback_divisor: i32,
    pub motions: MotionNames,
}

impl MatchConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_PLAYERS: usize = PLAYER_COUNT;
    /// Detached projectiles alive per character.
    pub const MAX_PROJECTILES: usize = 4;
    /// Every attack instance can produce one outcome per opposing player.
    pub const MAX_OUTCOMES_PER_FRAME: usize =
        Self::MAX_PLAYERS * (1 + Self::MAX_PROJECTILES) * (Self::MAX_PLAYERS - 1);

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_HEALTH: u32 = 400;
    pub const DEFAULT_MAX_ENERGY: u32 = 300;
    pub const DEFAULT_GRAVITY: i32 = 1;
    pub const DEFAULT_FRICTION: i32 = 1;
    pub const DEFAULT_GUARD_PUSHBACK_DIVISOR: i32 = 2;

    pub fn new() -> Self {
        let stage = StageBounds::default();
        Self {
            starting_health: Self::DEFAULT_STARTING_HEALTH,
            max_energy: Self::DEFAULT_MAX_ENERGY,
            gravity: Self::DEFAULT_GRAVITY,
            friction: Self::DEFAULT_FRICTION,
            start_positions: [stage.left + 300, stage.right - 300],
            stage,
            guard_pushback_divisor: Self::DEFAULT_GUARD_PUSHBACK_DIVISOR,
            motions: MotionNames::default(),
        }
    }

    pub fn with_starting_health(mut self, starting_health: u32) -> Self {
        self.starting_health = starting_health;
        self
    }

    pub fn with_max_energy(mut self, max_energy: u32) -> Self {
        self.max_energy = max_energy;
        self
    }

    pub fn with_start_positions(mut self, p1: i32, p2: i32) -> Self {
        self.start_positions = [p1, p2];
        self
    }

    pub fn with_physics(mut self, gravity: i32, friction: i32) -> Self {
        self.gravity = gravity;
        self.friction = friction;
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new()
    }
}
