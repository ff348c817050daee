//! Feedback engine abstraction and trigger
//!
//! This crate defines the boundary between the feedback domain and the
//! platform engine that actually renders haptic and audio events:
//!
//! - [`ports`]: the `EnginePort`/`FeedbackEngine`/`PatternPlayer` contracts
//! - [`events`]: the engine lifecycle event channel (reset/stop reporting)
//! - [`audio`]: bundled audio clip resolution by logical name
//! - [`virtual_engine`]: a deterministic in-process engine for demos and tests
//! - [`trigger`]: `FeedbackTrigger`, which prepares an engine once and plays
//!   the fixed confirmation pattern on demand
//!
//! Every failure mode at this boundary degrades to a logged diagnostic and
//! an early return; nothing is fatal to the process and nothing is retried
//! automatically except the single reset-driven engine restart attempt.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod audio;
pub mod capabilities;
pub mod error;
pub mod events;
pub mod ports;
pub mod trigger;
pub mod virtual_engine;

pub use audio::{AudioClip, AudioLibrary, BUNDLED_CLIP_NAME};
pub use capabilities::EngineCapabilities;
pub use error::{EngineError, EngineResult};
pub use events::{EngineEvent, StopReason};
pub use ports::{EnginePort, FeedbackEngine, PatternPlayer};
pub use trigger::FeedbackTrigger;
pub use virtual_engine::{
    PlaybackRecord, RegisteredResource, VirtualEngine, VirtualEnginePort, VirtualEngineProbe,
};
