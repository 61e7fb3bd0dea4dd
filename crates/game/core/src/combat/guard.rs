//! Guard stance matching.

use crate::motion::{AttackType, GuardStance};

/// Returns true if a defender in `stance` blocks an attack of `attack_type`.
///
/// # Matching
///
/// ```text
/// High  <- Stand, Crouch, Air
/// Mid   <- Stand, Air
/// Low   <- Crouch
/// Throw <- never
/// ```
///
/// A defender whose motion declares no stance never guards.
pub const fn guards_against(stance: Option<GuardStance>, attack_type: AttackType) -> bool {
    let Some(stance) = stance else {
        return false;
    };

    match attack_type {
        AttackType::High => true,
        AttackType::Mid => matches!(stance, GuardStance::Stand | GuardStance::Air),
        AttackType::Low => matches!(stance, GuardStance::Crouch),
        AttackType::Throw => false,
    }
}
