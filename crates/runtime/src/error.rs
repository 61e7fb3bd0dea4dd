//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the frame pipeline, input scripts and event sinks so
//! the binary can bubble them up with consistent context.
use thiserror::Error;

use fight_core::{AdvanceError, ErrorSeverity, GameError, StepError};

use crate::scenario::ScriptError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Step(#[from] StepError),

    #[error("failed to start round")]
    RoundStart(#[source] AdvanceError),

    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error("event sink I/O error")]
    SinkIo(#[from] std::io::Error),

    #[error("event encoding failed")]
    EventEncoding(#[from] serde_json::Error),

    #[error("event sink lock was poisoned")]
    LockPoisoned,

    #[error("state digest failed")]
    Digest(#[source] bincode::Error),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Step(err) => err.severity(),
            Self::RoundStart(err) => err.severity(),
            Self::Script(_) => ErrorSeverity::Validation,
            Self::SinkIo(_) | Self::EventEncoding(_) | Self::LockPoisoned | Self::Digest(_) => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Step(err) => err.error_code(),
            Self::RoundStart(err) => err.error_code(),
            Self::Script(_) => "RUNTIME_SCRIPT",
            Self::SinkIo(_) => "RUNTIME_SINK_IO",
            Self::EventEncoding(_) => "RUNTIME_EVENT_ENCODING",
            Self::LockPoisoned => "RUNTIME_LOCK_POISONED",
            Self::Digest(_) => "RUNTIME_DIGEST",
        }
    }
}
