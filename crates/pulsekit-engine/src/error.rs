//! Engine error taxonomy
//!
//! One variant per failure mode at the engine boundary. Callers catch these
//! at the call site, log a diagnostic, and abandon the current operation;
//! none of them are fatal.

use pulsekit_pattern::PatternError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("haptic playback is not supported on this hardware")]
    Unsupported,

    #[error("engine creation failed: {0}")]
    Creation(String),

    #[error("engine start failed: {0}")]
    Start(String),

    #[error("engine stop failed: {0}")]
    Stop(String),

    #[error("audio clip `{name}` is not in the library")]
    MissingClip { name: String },

    #[error("audio resource registration failed for `{name}`: {reason}")]
    ResourceRegistration { name: String, reason: String },

    #[error("pattern player construction failed: {0}")]
    PlayerConstruction(String),

    #[error("pattern playback failed: {0}")]
    Playback(String),

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// A specialized `Result` type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
