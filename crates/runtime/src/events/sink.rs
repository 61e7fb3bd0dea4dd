//! Event sinks: where published frame events end up.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use super::types::{FrameEvent, Topic};
use crate::error::{Result, RuntimeError};

/// Consumer of frame events.
///
/// Sinks receive events in publication order. An error aborts the runner's
/// current step after the simulation already advanced; the match state stays
/// valid.
pub trait EventSink {
    fn publish(&mut self, event: &FrameEvent) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// In-memory sink with a shared buffer.
///
/// Clones share the same buffer, so a test can hand one clone to the runner
/// and read the events back through another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<FrameEvent>>>,
    topics: Option<Vec<Topic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only keeps events of the given topics.
    pub fn with_topics(topics: impl IntoIterator<Item = Topic>) -> Self {
        Self {
            events: Arc::default(),
            topics: Some(topics.into_iter().collect()),
        }
    }

    pub fn events(&self) -> Result<Vec<FrameEvent>> {
        let events = self.events.lock().map_err(|_| RuntimeError::LockPoisoned)?;
        Ok(events.clone())
    }

    /// Counts buffered events, including those kept under a poisoned lock.
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn accepts(&self, topic: Topic) -> bool {
        self.topics
            .as_ref()
            .is_none_or(|topics| topics.contains(&topic))
    }
}

impl EventSink for MemorySink {
    fn publish(&mut self, event: &FrameEvent) -> Result<()> {
        if !self.accepts(event.topic()) {
            return Ok(());
        }
        let mut events = self.events.lock().map_err(|_| RuntimeError::LockPoisoned)?;
        events.push(event.clone());
        Ok(())
    }
}

/// Writes one JSON document per event, newline separated.
pub struct JsonLinesSink<W: Write> {
    writer: W,
    written: u64,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of events written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonLinesSink<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`, creating parent directories.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventSink for JsonLinesSink<W> {
    fn publish(&mut self, event: &FrameEvent) -> Result<()> {
        serde_json::to_writer(&mut self.writer, event)?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Reads back a JSON-lines event log. Blank lines are skipped.
pub fn read_json_lines(reader: impl BufRead) -> Result<Vec<FrameEvent>> {
    let mut events = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        events.push(serde_json::from_str(&line)?);
    }
    Ok(events)
}
