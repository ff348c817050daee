//! Port traits for the engine boundary
//!
//! This module defines the contracts that separate the feedback domain from
//! the platform engine that renders it. The engine is an external
//! collaborator: these traits describe what is consumed, without coupling
//! to a specific implementation.

use crossbeam::channel::Receiver;
use pulsekit_pattern::{AudioResourceId, FeedbackPattern};

use crate::audio::AudioClip;
use crate::capabilities::EngineCapabilities;
use crate::error::EngineResult;
use crate::events::EngineEvent;

/// One scheduled playback of a constructed pattern
///
/// Players are short-lived and fire-and-forget: once started they render to
/// completion on their own, and dropping the handle does not cancel the
/// playback.
pub trait PatternPlayer: Send {
    /// Starts the playback at the given offset into the pattern, in seconds.
    fn start(&mut self, at_offset_s: f32) -> EngineResult<()>;
}

/// A running (or startable) feedback engine instance
pub trait FeedbackEngine: Send {
    /// Starts the engine. Safe to call on an already-running engine; the
    /// trigger relies on this for its defensive restart before playback.
    fn start(&mut self) -> EngineResult<()>;

    /// Stops the engine.
    fn stop(&mut self) -> EngineResult<()>;

    /// Registers an audio clip with the engine, returning the opaque
    /// identifier pattern events reference it by.
    fn register_audio_resource(&mut self, clip: &AudioClip) -> EngineResult<AudioResourceId>;

    /// Constructs a player bound to the given pattern.
    fn make_player(&mut self, pattern: &FeedbackPattern) -> EngineResult<Box<dyn PatternPlayer>>;

    /// Subscribes to engine lifecycle events (reset/stop notifications).
    ///
    /// The receiver is drained by the owner's event loop; the engine never
    /// calls back into its owner.
    fn subscribe(&mut self) -> Receiver<EngineEvent>;
}

/// Hardware capability query and engine construction
pub trait EnginePort: Send {
    /// Queries what the current hardware can render. Cheap; queried again
    /// before every playback.
    fn capabilities(&self) -> EngineCapabilities;

    /// Instantiates an engine.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::Creation`] when the platform refuses
    /// to construct an engine.
    fn open_engine(&self) -> EngineResult<Box<dyn FeedbackEngine>>;
}
