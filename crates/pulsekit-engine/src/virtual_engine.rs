//! Virtual engine implementation
//!
//! A deterministic in-process engine used by the demo binary and by tests.
//! Every interaction is recorded in shared state that a
//! [`VirtualEngineProbe`] can read back after the port has been handed to a
//! trigger, and platform reset/stop notifications can be injected through
//! the probe.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crossbeam::channel::{Receiver, Sender, unbounded};
use pulsekit_pattern::{AudioResourceId, FeedbackPattern};
use tracing::{debug, info};

use crate::audio::AudioClip;
use crate::capabilities::EngineCapabilities;
use crate::error::{EngineError, EngineResult};
use crate::events::{EngineEvent, StopReason};
use crate::ports::{EnginePort, FeedbackEngine, PatternPlayer};

/// One recorded playback: the pattern a player was bound to and the offset
/// it was started at
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackRecord {
    pub pattern: FeedbackPattern,
    pub start_offset_s: f32,
}

/// One recorded audio resource registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredResource {
    pub id: AudioResourceId,
    pub name: String,
    pub byte_len: usize,
}

#[derive(Debug, Default)]
struct VirtualEngineState {
    engines_opened: u32,
    starts: u32,
    stops: u32,
    players_made: u32,
    next_resource_id: u32,
    resources: Vec<RegisteredResource>,
    playbacks: Vec<PlaybackRecord>,
}

type SharedState = Arc<Mutex<VirtualEngineState>>;

// Nothing useful is left behind a lock once a writer panicked; recover the
// guard rather than poisoning every later assertion.
fn lock_state(state: &SharedState) -> MutexGuard<'_, VirtualEngineState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Builder-configurable port producing [`VirtualEngine`] instances
///
/// # Examples
///
/// ```
/// use pulsekit_engine::{EnginePort, VirtualEnginePort};
///
/// let port = VirtualEnginePort::new();
/// let probe = port.probe();
/// assert!(port.capabilities().supports_haptics);
/// assert_eq!(probe.engines_opened(), 0);
/// ```
#[derive(Debug)]
pub struct VirtualEnginePort {
    capabilities: EngineCapabilities,
    fail_open: bool,
    fail_start: bool,
    fail_registration: bool,
    fail_player: bool,
    fail_playback: bool,
    state: SharedState,
    events_tx: Sender<EngineEvent>,
    events_rx: Receiver<EngineEvent>,
}

impl Default for VirtualEnginePort {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualEnginePort {
    /// Creates a port with full capabilities and no injected failures.
    pub fn new() -> Self {
        let (events_tx, events_rx) = unbounded();
        Self {
            capabilities: EngineCapabilities::full(),
            fail_open: false,
            fail_start: false,
            fail_registration: false,
            fail_player: false,
            fail_playback: false,
            state: SharedState::default(),
            events_tx,
            events_rx,
        }
    }

    /// Overrides the reported hardware capabilities.
    pub fn with_capabilities(mut self, capabilities: EngineCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Makes every `open_engine` call fail.
    pub fn failing_open(mut self) -> Self {
        self.fail_open = true;
        self
    }

    /// Makes every engine `start` call fail.
    pub fn failing_start(mut self) -> Self {
        self.fail_start = true;
        self
    }

    /// Makes every audio resource registration fail.
    pub fn failing_registration(mut self) -> Self {
        self.fail_registration = true;
        self
    }

    /// Makes every player construction fail.
    pub fn failing_player(mut self) -> Self {
        self.fail_player = true;
        self
    }

    /// Makes every player start fail.
    pub fn failing_playback(mut self) -> Self {
        self.fail_playback = true;
        self
    }

    /// Read-side handle onto the recorded state and event injection,
    /// usable after the port has been moved into a trigger.
    pub fn probe(&self) -> VirtualEngineProbe {
        VirtualEngineProbe {
            state: Arc::clone(&self.state),
            events_tx: self.events_tx.clone(),
        }
    }
}

impl EnginePort for VirtualEnginePort {
    fn capabilities(&self) -> EngineCapabilities {
        self.capabilities
    }

    fn open_engine(&self) -> EngineResult<Box<dyn FeedbackEngine>> {
        if self.fail_open {
            return Err(EngineError::Creation(
                "virtual engine configured to fail creation".to_string(),
            ));
        }
        lock_state(&self.state).engines_opened += 1;
        debug!("virtual engine opened");
        Ok(Box::new(VirtualEngine {
            state: Arc::clone(&self.state),
            events_rx: self.events_rx.clone(),
            fail_start: self.fail_start,
            fail_registration: self.fail_registration,
            fail_player: self.fail_player,
            fail_playback: self.fail_playback,
        }))
    }
}

/// In-process engine that records every interaction
pub struct VirtualEngine {
    state: SharedState,
    events_rx: Receiver<EngineEvent>,
    fail_start: bool,
    fail_registration: bool,
    fail_player: bool,
    fail_playback: bool,
}

impl FeedbackEngine for VirtualEngine {
    fn start(&mut self) -> EngineResult<()> {
        if self.fail_start {
            return Err(EngineError::Start(
                "virtual engine configured to fail start".to_string(),
            ));
        }
        lock_state(&self.state).starts += 1;
        debug!("virtual engine started");
        Ok(())
    }

    fn stop(&mut self) -> EngineResult<()> {
        lock_state(&self.state).stops += 1;
        debug!("virtual engine stopped");
        Ok(())
    }

    fn register_audio_resource(&mut self, clip: &AudioClip) -> EngineResult<AudioResourceId> {
        if self.fail_registration {
            return Err(EngineError::ResourceRegistration {
                name: clip.name().to_string(),
                reason: "virtual engine configured to fail registration".to_string(),
            });
        }
        let mut state = lock_state(&self.state);
        let id = AudioResourceId::new(state.next_resource_id);
        state.next_resource_id += 1;
        state.resources.push(RegisteredResource {
            id,
            name: clip.name().to_string(),
            byte_len: clip.len(),
        });
        debug!(clip = clip.name(), resource = id.raw(), "audio resource registered");
        Ok(id)
    }

    fn make_player(&mut self, pattern: &FeedbackPattern) -> EngineResult<Box<dyn PatternPlayer>> {
        if self.fail_player {
            return Err(EngineError::PlayerConstruction(
                "virtual engine configured to fail player construction".to_string(),
            ));
        }
        lock_state(&self.state).players_made += 1;
        Ok(Box::new(VirtualPlayer {
            state: Arc::clone(&self.state),
            pattern: pattern.clone(),
            fail_playback: self.fail_playback,
        }))
    }

    fn subscribe(&mut self) -> Receiver<EngineEvent> {
        self.events_rx.clone()
    }
}

struct VirtualPlayer {
    state: SharedState,
    pattern: FeedbackPattern,
    fail_playback: bool,
}

impl PatternPlayer for VirtualPlayer {
    fn start(&mut self, at_offset_s: f32) -> EngineResult<()> {
        if self.fail_playback {
            return Err(EngineError::Playback(
                "virtual player configured to fail playback".to_string(),
            ));
        }
        info!(
            events = self.pattern.events().len(),
            dynamic_parameters = self.pattern.dynamic_parameters().len(),
            duration_s = self.pattern.total_duration_s(),
            at_offset_s,
            "virtual player started"
        );
        lock_state(&self.state).playbacks.push(PlaybackRecord {
            pattern: self.pattern.clone(),
            start_offset_s: at_offset_s,
        });
        Ok(())
    }
}

/// Read-only view onto virtual-engine state, plus event injection
#[derive(Debug, Clone)]
pub struct VirtualEngineProbe {
    state: SharedState,
    events_tx: Sender<EngineEvent>,
}

impl VirtualEngineProbe {
    /// How many engines the port has opened.
    pub fn engines_opened(&self) -> u32 {
        lock_state(&self.state).engines_opened
    }

    /// How many times any engine `start` succeeded.
    pub fn start_count(&self) -> u32 {
        lock_state(&self.state).starts
    }

    /// How many times any engine `stop` succeeded.
    pub fn stop_count(&self) -> u32 {
        lock_state(&self.state).stops
    }

    /// How many players were constructed.
    pub fn player_count(&self) -> u32 {
        lock_state(&self.state).players_made
    }

    /// The registered audio resources, in registration order.
    pub fn resources(&self) -> Vec<RegisteredResource> {
        lock_state(&self.state).resources.clone()
    }

    /// The recorded playbacks, in playback order.
    pub fn playbacks(&self) -> Vec<PlaybackRecord> {
        lock_state(&self.state).playbacks.clone()
    }

    /// Simulates the platform resetting the engine.
    pub fn inject_reset(&self) {
        if self.events_tx.send(EngineEvent::Reset).is_err() {
            debug!("engine event dropped: no live receiver");
        }
    }

    /// Simulates the platform stopping the engine.
    pub fn inject_stopped(&self, reason: StopReason) {
        if self
            .events_tx
            .send(EngineEvent::Stopped { reason })
            .is_err()
        {
            debug!("engine event dropped: no live receiver");
        }
    }
}
