//! CLI configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Settings for one headless round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub p1: Option<String>,
    pub p2: Option<String>,
    pub round_frames: Option<u64>,
    pub log_dir: Option<PathBuf>,
    pub events_out: Option<PathBuf>,
}

impl CliConfig {
    pub const DEFAULT_ARCHETYPE: &'static str = "ZEN";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `FIGHT_DATA_DIR` - Content directory (default: built-in roster)
    /// - `FIGHT_SCRIPT` - RON input script (default: both players idle)
    /// - `FIGHT_P1` / `FIGHT_P2` - Archetypes (default: script's, then ZEN)
    /// - `FIGHT_ROUND_FRAMES` - Round length in frames (default: script's, then 60 s)
    /// - `FIGHT_LOG_DIR` - Also write logs to `fight.log` in this directory
    /// - `FIGHT_EVENTS_OUT` - Write frame events as JSON lines to this file
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);
        let name = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            data_dir: path("FIGHT_DATA_DIR"),
            script: path("FIGHT_SCRIPT"),
            p1: name("FIGHT_P1"),
            p2: name("FIGHT_P2"),
            round_frames: lookup("FIGHT_ROUND_FRAMES").and_then(|v| v.parse().ok()),
            log_dir: path("FIGHT_LOG_DIR"),
            events_out: path("FIGHT_EVENTS_OUT"),
        }
    }
}
