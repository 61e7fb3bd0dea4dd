//! Character motion table loader.

use std::path::Path;

use fight_core::MotionDefinition;

use crate::loaders::{LoadResult, read_file};

/// Loader for one archetype's motion table from a RON file.
///
/// RON format: `Vec<MotionDefinition>`, one entry per action.
///
/// ```ron
/// [
///     (
///         name: "STAND",
///         frame_number: 1,
///         speed_x: 0,
///         speed_y: 0,
///         hurt_area: (left: -25, top: -190, right: 25, bottom: 0),
///         state: Stand,
///         attack: None,
///         cancel_able_frame: Some(0),
///         cancel_able_motion_level: 100,
///         motion_level: 0,
///         control: true,
///         landing_flag: false,
///     ),
/// ]
/// ```
///
/// Rows are only parsed here; invariants (box orientation, guard vs hit
/// damage, duplicate names) are checked when the rows go through
/// `MotionCatalogBuilder`.
pub struct MotionLoader;

impl MotionLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<MotionDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse motion table RON at {}: {}", path.display(), e)
        })
    }

    pub fn parse(content: &str) -> LoadResult<Vec<MotionDefinition>> {
        let motions: Vec<MotionDefinition> = ron::from_str(content)?;
        Ok(motions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fight_core::{AttackType, CharacterState, HitPolicy};

    const TABLE: &str = r#"[
        (
            name: "CROUCH_B",
            frame_number: 22,
            speed_x: 0,
            speed_y: 0,
            hurt_area: (left: -25, top: -120, right: 35, bottom: 0),
            state: Crouch,
            attack: Some((
                area: (left: 5, top: -40, right: 80, bottom: -5),
                speed_x: 0,
                speed_y: 0,
                start_up: 5,
                active: 3,
                hit_damage: 12,
                guard_damage: 3,
                start_add_energy: 0,
                hit_add_energy: 6,
                guard_add_energy: 2,
                give_energy: 2,
                impact_x: 6,
                impact_y: 0,
                give_guard_recov: 8,
                attack_type: Low,
                down_prop: false,
                projectile: false,
            )),
            cancel_able_frame: None,
            cancel_able_motion_level: 0,
            motion_level: 1,
            control: false,
            landing_flag: false,
        ),
    ]"#;

    #[test]
    fn parses_rows_with_optional_fields_defaulted() {
        let motions = MotionLoader::parse(TABLE).expect("valid ron");
        assert_eq!(motions.len(), 1);

        let sweep = &motions[0];
        assert_eq!(sweep.state, CharacterState::Crouch);
        assert_eq!(sweep.cancel_able_frame, None);
        assert_eq!(sweep.guard, None);

        let attack = sweep.attack.as_ref().expect("attack row");
        assert_eq!(attack.attack_type, AttackType::Low);
        assert_eq!(attack.hit_policy, HitPolicy::Single);
        assert_eq!((attack.start_up, attack.active), (5, 3));
    }

    #[test]
    fn malformed_table_names_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("BROKEN.ron");
        std::fs::write(&path, "[ (name: \"STAND\") ]").expect("write");

        let err = MotionLoader::load(&path).unwrap_err().to_string();
        assert!(err.contains("BROKEN.ron"), "{err}");
    }
}
