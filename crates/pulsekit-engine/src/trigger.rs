//! Feedback trigger
//!
//! Owns an injected engine port, prepares an engine once, and plays the
//! fixed confirmation pattern on each activation. Every failure mode
//! degrades to a logged diagnostic and an early return; nothing is surfaced
//! to the activating surface.

use crossbeam::channel::Receiver;
use pulsekit_pattern::{ParameterId, PatternBuilder};
use tracing::{debug, info, warn};

use crate::audio::{AudioClip, AudioLibrary, BUNDLED_CLIP_NAME};
use crate::error::EngineResult;
use crate::events::EngineEvent;
use crate::ports::{EnginePort, FeedbackEngine};

/// Confirmation pulse duration in seconds
pub const PULSE_DURATION_S: f32 = 0.5;

/// Vibration intensity over the pulse
pub const PULSE_INTENSITY: f32 = 1.0;

/// Vibration sharpness at pulse onset
pub const PULSE_SHARPNESS: f32 = 0.2;

/// Offset at which the mid-pulse parameter ramp applies, in seconds
pub const PULSE_RAMP_OFFSET_S: f32 = 0.3;

/// Sharpness after the mid-pulse ramp
pub const PULSE_RAMP_SHARPNESS: f32 = 0.8;

/// Intensity after the mid-pulse ramp
pub const PULSE_RAMP_INTENSITY: f32 = 0.5;

/// Prepares a feedback engine and plays the confirmation pattern on demand
///
/// The engine is injected through an [`EnginePort`], so the trigger is
/// deterministic to test against a substitutable engine. Reset/stop
/// notifications arrive on an event channel drained by
/// [`FeedbackTrigger::pump_events`] rather than through callbacks.
///
/// Activations are not serialized here: the owning surface runs a
/// single-threaded event loop, and overlapping playback at the engine level
/// is accepted.
pub struct FeedbackTrigger<P: EnginePort> {
    port: P,
    engine: Option<Box<dyn FeedbackEngine>>,
    events: Option<Receiver<EngineEvent>>,
    library: AudioLibrary,
    clip_name: String,
}

impl<P: EnginePort> FeedbackTrigger<P> {
    /// Creates a trigger over the given port and clip library. The
    /// confirmation pattern references the bundled clip until
    /// [`FeedbackTrigger::set_clip_name`] overrides it.
    pub fn new(port: P, library: AudioLibrary) -> Self {
        Self {
            port,
            engine: None,
            events: None,
            library,
            clip_name: BUNDLED_CLIP_NAME.to_string(),
        }
    }

    /// Overrides the logical clip name the confirmation pattern references.
    pub fn with_clip_name(mut self, name: impl Into<String>) -> Self {
        self.clip_name = name.into();
        self
    }

    /// Overrides the logical clip name the confirmation pattern references.
    pub fn set_clip_name(&mut self, name: impl Into<String>) {
        self.clip_name = name.into();
    }

    /// The logical clip name the confirmation pattern references.
    pub fn clip_name(&self) -> &str {
        &self.clip_name
    }

    /// Whether an engine has been instantiated.
    pub fn is_prepared(&self) -> bool {
        self.engine.is_some()
    }

    /// One-time engine preparation.
    ///
    /// Checks hardware capabilities; when haptics are unsupported, logs the
    /// unavailability and returns. Otherwise instantiates the engine,
    /// subscribes to its event channel, and starts it. Creation failure
    /// leaves the handle empty; start failure leaves it present but
    /// unverified, so a later activation may still succeed through its
    /// defensive restart. No retry beyond the single attempt.
    pub fn prepare(&mut self) {
        if self.engine.is_some() {
            debug!("feedback engine already prepared");
            return;
        }
        if !self.port.capabilities().supports_haptics {
            warn!("haptic playback unavailable on this hardware");
            return;
        }
        match self.port.open_engine() {
            Ok(mut engine) => {
                self.events = Some(engine.subscribe());
                match engine.start() {
                    Ok(()) => info!("feedback engine prepared"),
                    Err(error) => warn!(%error, "feedback engine failed to start"),
                }
                self.engine = Some(engine);
            }
            Err(error) => warn!(%error, "feedback engine creation failed"),
        }
    }

    /// Plays the confirmation pattern.
    ///
    /// Requires a prepared engine and a positive capability re-check;
    /// otherwise this is a silent no-op. Resolves the configured clip,
    /// registers it, builds the fixed pattern, constructs a player,
    /// restarts the engine, and starts the player at offset zero. Failures
    /// along the chain are logged and abandon the call; no partial state
    /// outlives it.
    pub fn trigger(&mut self) {
        self.pump_events();
        if !self.port.capabilities().supports_haptics {
            debug!("activation ignored: haptics unsupported");
            return;
        }
        let Some(engine) = self.engine.as_mut() else {
            debug!("activation ignored: engine not prepared");
            return;
        };
        let Some(clip) = self.library.resolve(&self.clip_name) else {
            warn!(clip = %self.clip_name, "audio clip not found; playback abandoned");
            return;
        };
        if let Err(error) = play_confirmation(engine.as_mut(), clip) {
            warn!(%error, "feedback playback abandoned");
        }
    }

    /// Drains pending engine lifecycle events.
    ///
    /// A reported reset gets a single restart attempt on the same engine
    /// instance; a reported stop is logged with its reason.
    pub fn pump_events(&mut self) {
        let Some(events) = self.events.as_ref() else {
            return;
        };
        let pending: Vec<EngineEvent> = events.try_iter().collect();
        for event in pending {
            match event {
                EngineEvent::Reset => {
                    info!("feedback engine reset; attempting restart");
                    if let Some(engine) = self.engine.as_mut()
                        && let Err(error) = engine.start()
                    {
                        warn!(%error, "feedback engine restart failed");
                    }
                }
                EngineEvent::Stopped { reason } => {
                    info!(?reason, "feedback engine stopped");
                }
            }
        }
    }

    /// Stops and releases the engine so the surface can exit cleanly.
    pub fn shutdown(&mut self) {
        let Some(mut engine) = self.engine.take() else {
            return;
        };
        self.events = None;
        match engine.stop() {
            Ok(()) => info!("feedback engine shut down"),
            Err(error) => warn!(%error, "feedback engine stop failed"),
        }
    }
}

/// The fixed confirmation pattern: one continuous vibration spanning the
/// full pulse, the configured audio clip alongside it, and a mid-pulse ramp
/// that raises sharpness and halves intensity.
fn play_confirmation(engine: &mut dyn FeedbackEngine, clip: &AudioClip) -> EngineResult<()> {
    let resource = engine.register_audio_resource(clip)?;
    let pattern = PatternBuilder::new()
        .continuous(0.0, PULSE_DURATION_S, PULSE_INTENSITY, PULSE_SHARPNESS)
        .audio(resource, 0.0, PULSE_DURATION_S)
        .change(ParameterId::Sharpness, PULSE_RAMP_SHARPNESS, PULSE_RAMP_OFFSET_S)
        .change(ParameterId::Intensity, PULSE_RAMP_INTENSITY, PULSE_RAMP_OFFSET_S)
        .build()?;
    let mut player = engine.make_player(&pattern)?;
    // The engine may have stopped since preparation; restart before playback.
    engine.start()?;
    player.start(0.0)?;
    info!(duration_s = PULSE_DURATION_S, "confirmation pattern playing");
    Ok(())
}
