//! Runtime orchestration for the deterministic fight simulation.
//!
//! This crate wraps the pure frame pipeline of `fight-core` with what a
//! playable round needs around it. Consumers build a [`MatchRunner`] and feed
//! it inputs frame by frame, or hand it a [`FrameInputSource`] to play a whole
//! round.
//!
//! Modules are organized by responsibility:
//! - [`runner`] hosts the round driver and its builder
//! - [`events`] turns frame reports into events and publishes them to sinks
//! - [`scenario`] provides scripted RON inputs for headless rounds
//! - [`timer`] and [`stats`] track round time and combat counters
pub mod error;
pub mod events;
pub mod runner;
pub mod scenario;
pub mod stats;
pub mod timer;

pub use error::{Result, RuntimeError};
pub use events::{EventSink, FrameEvent, JsonLinesSink, MemorySink, Topic, read_json_lines};
pub use runner::{MatchRunner, MatchRunnerBuilder, RoundSummary, RunnerConfig};
pub use scenario::{FrameInputSource, Idle, InputScript, ScriptError, ScriptedInput, Slot};
pub use stats::{PlayerStats, RoundStats};
pub use timer::{FRAMES_PER_SECOND, RoundTimer};
