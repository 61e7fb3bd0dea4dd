//! Loads content and an input script, then plays one round.
use std::sync::Arc;

use anyhow::{Context, Result};
use fight_content::ContentFactory;
use fight_core::{MatchConfig, MotionCatalog};
use fight_runtime::{InputScript, JsonLinesSink, MatchRunner, RoundSummary, RoundTimer};

use crate::config::CliConfig;

pub fn play(config: &CliConfig) -> Result<RoundSummary> {
    let mut script = match &config.script {
        Some(path) => InputScript::load(path)
            .with_context(|| format!("Failed to load input script {}", path.display()))?,
        None => InputScript::default(),
    };

    let [p1, p2] = archetypes(config, &script);
    let (catalog, match_config) = load_content(config, [p1.as_str(), p2.as_str()])?;

    script
        .validate(&catalog, [p1.as_str(), p2.as_str()])
        .context("Input script does not fit the selected characters")?;

    let timer = config
        .round_frames
        .or(script.round_frames)
        .map(RoundTimer::new)
        .unwrap_or_default();

    tracing::info!(
        script = %script.name,
        inputs = script.inputs.len(),
        last_input = script.last_frame(),
        "input script ready"
    );

    let mut builder = MatchRunner::builder(Arc::new(catalog), Arc::new(match_config))
        .archetypes(p1, p2)
        .timer(timer);
    if let Some(path) = &config.events_out {
        let sink = JsonLinesSink::create(path)
            .with_context(|| format!("Failed to create event log {}", path.display()))?;
        tracing::info!(path = %path.display(), "writing frame events");
        builder = builder.sink(sink);
    }

    let mut runner = builder.build()?;
    let summary = runner.run(&mut script)?;
    Ok(summary)
}

/// Environment first, then the script, then the default archetype.
fn archetypes(config: &CliConfig, script: &InputScript) -> [String; 2] {
    let scripted = script.players.clone();
    let p1 = config
        .p1
        .clone()
        .or_else(|| scripted.as_ref().map(|(p1, _)| p1.clone()))
        .unwrap_or_else(|| CliConfig::DEFAULT_ARCHETYPE.to_owned());
    let p2 = config
        .p2
        .clone()
        .or_else(|| scripted.map(|(_, p2)| p2))
        .unwrap_or_else(|| CliConfig::DEFAULT_ARCHETYPE.to_owned());
    [p1, p2]
}

fn load_content(
    config: &CliConfig,
    archetypes: [&str; 2],
) -> Result<(MotionCatalog, MatchConfig)> {
    match &config.data_dir {
        Some(dir) => {
            let factory = ContentFactory::new(dir);
            tracing::info!(data_dir = %factory.data_dir().display(), "loading content");
            let match_config = factory.load_config()?;
            let catalog = factory.load_catalog(&archetypes)?;
            Ok((catalog, match_config))
        }
        None => {
            tracing::info!("using built-in roster");
            Ok((fight_content::builtin::catalog()?, fight_content::builtin::config()?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fight_core::{PlayerId, RoundEnd};

    const SCRIPT: &str = r#"(
        name: "walk",
        players: Some(("ZEN", "ZEN")),
        round_frames: Some(45),
        inputs: [
            (frame: 1, player: P1, action: "FORWARD_WALK", hold: 40),
        ],
    )"#;

    #[test]
    fn archetypes_prefer_environment_over_script() {
        let script = InputScript::parse(SCRIPT).unwrap();
        let config = CliConfig {
            p2: Some("GARNET".into()),
            ..CliConfig::default()
        };
        assert_eq!(archetypes(&config, &script), ["ZEN", "GARNET"]);
        assert_eq!(
            archetypes(&CliConfig::default(), &InputScript::default()),
            ["ZEN", "ZEN"]
        );
    }

    #[test]
    fn demo_script_fits_builtin_roster() {
        let script = InputScript::parse(include_str!("../scripts/demo.ron")).unwrap();
        let catalog = fight_content::builtin::catalog().unwrap();
        script.validate(&catalog, ["ZEN", "ZEN"]).unwrap();
        assert_eq!(script.round_frames, Some(600));
    }

    #[test]
    fn plays_a_scripted_round_and_writes_events() {
        let dir = tempfile::tempdir().unwrap();
        let script_path = dir.path().join("walk.ron");
        std::fs::write(&script_path, SCRIPT).unwrap();
        let events_out = dir.path().join("out").join("events.jsonl");

        let config = CliConfig {
            script: Some(script_path),
            events_out: Some(events_out.clone()),
            ..CliConfig::default()
        };
        let summary = play(&config).unwrap();

        assert_eq!(summary.frames, 45);
        let result = summary.result.unwrap();
        assert_eq!(result.end, RoundEnd::TimeUp);
        assert!(result.is_draw());
        assert!(summary.stats.player(PlayerId::P1).motion_changes > 0);

        let log = std::fs::read_to_string(events_out).unwrap();
        assert!(log.lines().last().unwrap().contains("round_ended"));
    }

    #[test]
    fn unknown_script_action_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let script_path = dir.path().join("bad.ron");
        std::fs::write(
            &script_path,
            r#"(inputs: [(frame: 1, player: P2, action: "TELEPORT")])"#,
        )
        .unwrap();

        let config = CliConfig {
            script: Some(script_path),
            ..CliConfig::default()
        };
        let err = play(&config).unwrap_err();
        assert!(format!("{err:#}").contains("TELEPORT"), "{err:#}");
    }
}
