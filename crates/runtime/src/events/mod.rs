//! Frame events and the sinks they are published to.
//!
//! The runner turns every [`fight_core::FrameReport`] into a list of
//! [`FrameEvent`]s and hands each one to every registered [`EventSink`].

mod sink;
mod types;

pub use sink::{EventSink, JsonLinesSink, MemorySink, read_json_lines};
pub use types::{FrameEvent, Topic};
