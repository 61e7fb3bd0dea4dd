//! Synchronous round driver.
//!
//! [`MatchRunner`] owns a [`MatchState`] and everything around it that the
//! pure engine leaves to collaborators: the round timer, event publication,
//! statistics and logging. Each call to [`MatchRunner::step`] simulates one
//! frame through [`MatchEngine`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use fight_core::{
    FrameInputs, FrameReport, GameError, MatchConfig, MatchEngine, MatchState, MotionCatalog,
    MotionOracle, PLAYER_COUNT, PlayerId, RoundResult,
};

use crate::error::{Result, RuntimeError};
use crate::events::{EventSink, FrameEvent};
use crate::scenario::FrameInputSource;
use crate::stats::RoundStats;
use crate::timer::RoundTimer;

/// Settings of one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub archetypes: [String; PLAYER_COUNT],
    pub timer: RoundTimer,
    /// Publish a snapshot event every this many frames.
    pub snapshot_interval: Option<u64>,
}

impl RunnerConfig {
    pub fn new(p1: impl Into<String>, p2: impl Into<String>) -> Self {
        Self {
            archetypes: [p1.into(), p2.into()],
            timer: RoundTimer::default(),
            snapshot_interval: None,
        }
    }
}

/// Final account of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// `None` while the round is still running.
    pub result: Option<RoundResult>,
    pub frames: u64,
    pub health: [u32; PLAYER_COUNT],
    pub stats: RoundStats,
    /// Hex SHA-256 of the final match state.
    pub digest: String,
}

pub struct MatchRunner<C: MotionOracle + ?Sized = MotionCatalog> {
    catalog: Arc<C>,
    config: Arc<MatchConfig>,
    runner_config: RunnerConfig,
    state: MatchState,
    stats: RoundStats,
    sinks: Vec<Box<dyn EventSink>>,
}

impl<C> MatchRunner<C>
where
    C: MotionOracle + ?Sized,
{
    pub fn builder(catalog: Arc<C>, config: Arc<MatchConfig>) -> MatchRunnerBuilder<C> {
        MatchRunnerBuilder {
            catalog,
            config,
            runner_config: RunnerConfig::new("", ""),
            sinks: Vec::new(),
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn stats(&self) -> &RoundStats {
        &self.stats
    }

    pub fn runner_config(&self) -> &RunnerConfig {
        &self.runner_config
    }

    pub fn match_config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Simulates one frame, then publishes and logs what happened.
    ///
    /// The timer expiry is added to `inputs` on the round's last frame.
    pub fn step(&mut self, mut inputs: FrameInputs) -> Result<FrameReport> {
        let frame = self.state.frame + 1;
        if self.runner_config.timer.expired_at(frame) {
            inputs.round_timer_expired = true;
        }

        let previous = self.state.characters.each_ref().map(|ch| ch.motion.clone());
        let engine = MatchEngine::new(self.catalog.as_ref(), self.config.as_ref());
        let report = engine.step(&mut self.state, &inputs)?;

        self.stats.record(&report);
        log_report(&report);

        let events = FrameEvent::from_report(&report, previous.each_ref().map(String::as_str));
        for event in &events {
            self.publish(event)?;
        }
        let snapshot_due = self
            .runner_config
            .snapshot_interval
            .is_some_and(|interval| interval > 0 && report.frame % interval == 0);
        if snapshot_due {
            self.publish(&FrameEvent::Snapshot {
                snapshot: self.state.snapshot(),
            })?;
        }

        Ok(report)
    }

    /// Steps until the round ends, pulling each frame's inputs from `source`.
    pub fn run<S>(&mut self, source: &mut S) -> Result<RoundSummary>
    where
        S: FrameInputSource + ?Sized,
    {
        tracing::info!(
            p1 = %self.runner_config.archetypes[0],
            p2 = %self.runner_config.archetypes[1],
            frames = self.runner_config.timer.limit(),
            "round started"
        );

        while !self.state.is_finished() {
            let inputs = source.inputs_for(self.state.frame + 1);
            self.step(inputs)?;
        }
        self.flush()?;
        self.summary()
    }

    pub fn flush(&mut self) -> Result<()> {
        for sink in &mut self.sinks {
            sink.flush()?;
        }
        Ok(())
    }

    pub fn summary(&self) -> Result<RoundSummary> {
        let digest = self.state.digest().map_err(RuntimeError::Digest)?;
        Ok(RoundSummary {
            result: self.state.round.result(),
            frames: self.state.frame,
            health: self.state.health(),
            stats: self.stats,
            digest: hex::encode(digest),
        })
    }

    fn publish(&mut self, event: &FrameEvent) -> Result<()> {
        for sink in &mut self.sinks {
            sink.publish(event)?;
        }
        Ok(())
    }
}

fn log_report(report: &FrameReport) {
    let frame = report.frame;

    for transition in report.transitions() {
        tracing::debug!(
            frame,
            player = %transition.player,
            motion = %transition.to,
            from = %transition.from,
            cause = ?transition.cause,
            "motion transition"
        );
    }
    for (index, advance) in report.advances.iter().enumerate() {
        let spawned = advance.as_ref().ok().and_then(|advance| advance.attack_spawned);
        if let Some(attack) = spawned {
            tracing::debug!(frame, player = %PlayerId::ALL[index], %attack, "attack spawned");
        }
    }
    for outcome in &report.outcomes {
        tracing::info!(
            frame,
            attacker = %outcome.attacker,
            defender = %outcome.defender,
            attack = %outcome.attack,
            damage = outcome.damage,
            guarded = outcome.guarded,
            knocked_down = outcome.knocked_down,
            "hit resolved"
        );
    }
    for error in report.errors() {
        tracing::warn!(
            frame,
            player = %error.player(),
            code = error.error_code(),
            error = %error,
            "advance failed; character keeps its previous state"
        );
    }
    if let Some(result) = report.round_ended() {
        match result.winner {
            Some(winner) => tracing::info!(frame, %winner, end = ?result.end, "round over"),
            None => tracing::info!(frame, end = ?result.end, "round over: draw"),
        }
    }
}

pub struct MatchRunnerBuilder<C: MotionOracle + ?Sized = MotionCatalog> {
    catalog: Arc<C>,
    config: Arc<MatchConfig>,
    runner_config: RunnerConfig,
    sinks: Vec<Box<dyn EventSink>>,
}

impl<C> MatchRunnerBuilder<C>
where
    C: MotionOracle + ?Sized,
{
    /// Override the whole round configuration.
    pub fn runner_config(mut self, runner_config: RunnerConfig) -> Self {
        self.runner_config = runner_config;
        self
    }

    pub fn archetypes(mut self, p1: impl Into<String>, p2: impl Into<String>) -> Self {
        self.runner_config.archetypes = [p1.into(), p2.into()];
        self
    }

    pub fn timer(mut self, timer: RoundTimer) -> Self {
        self.runner_config.timer = timer;
        self
    }

    pub fn snapshot_every(mut self, frames: u64) -> Self {
        self.runner_config.snapshot_interval = Some(frames);
        self
    }

    pub fn sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Places both characters at their start positions.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::RoundStart`] if an archetype or its neutral
    /// stand motion is missing from the catalog.
    pub fn build(self) -> Result<MatchRunner<C>> {
        let state = {
            let engine = MatchEngine::new(self.catalog.as_ref(), self.config.as_ref());
            let [p1, p2] = &self.runner_config.archetypes;
            engine
                .start_round([p1.as_str(), p2.as_str()])
                .map_err(RuntimeError::RoundStart)?
        };

        Ok(MatchRunner {
            catalog: self.catalog,
            config: self.config,
            runner_config: self.runner_config,
            state,
            stats: RoundStats::default(),
            sinks: self.sinks,
        })
    }
}
