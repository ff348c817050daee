//! Haptic/audio feedback pattern model
//!
//! This crate provides the data model for short combined haptic+audio
//! feedback patterns: timed events with named scalar parameters, scheduled
//! dynamic parameter changes, and construction-time validation of the
//! resulting pattern.
//!
//! Patterns are transient values. They are rebuilt for every playback
//! request and handed to an engine; nothing here is persisted or cached.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod builder;
pub mod constants;
pub mod dynamics;
pub mod events;
pub mod pattern;

pub use builder::PatternBuilder;
pub use constants::*;
pub use dynamics::DynamicParameter;
pub use events::{AudioResourceId, EventKind, EventParameter, FeedbackEvent, ParameterId};
pub use pattern::{FeedbackPattern, PatternError};

/// A specialized `Result` type for pattern construction.
pub type PatternResult<T> = Result<T, PatternError>;
