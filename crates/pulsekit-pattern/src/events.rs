//! Feedback event types

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_PARAMETER_VALUE, MIN_PARAMETER_VALUE};

/// Identifies a controllable scalar parameter of a haptic event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterId {
    /// Perceived strength of the vibration
    Intensity,
    /// Perceived crispness of the vibration
    Sharpness,
}

/// Opaque identifier for an audio resource registered with an engine
///
/// The model stores the identifier; only the engine that issued it can
/// interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AudioResourceId(u32);

impl AudioResourceId {
    /// Wraps a raw engine-issued identifier.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    pub const fn raw(&self) -> u32 {
        self.0
    }
}

/// The kind of a feedback event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// Continuous vibration with controllable intensity/sharpness over its span
    HapticContinuous,
    /// Playback of a previously registered audio clip
    Audio(AudioResourceId),
}

/// A named scalar parameter attached to an event, always in `[0.0, 1.0]`
///
/// # Examples
///
/// ```
/// use pulsekit_pattern::{EventParameter, ParameterId};
///
/// // Values outside the unit interval are clamped on construction
/// let p = EventParameter::new(ParameterId::Intensity, 2.5);
/// assert!((p.value - 1.0).abs() < f32::EPSILON);
///
/// // Non-finite values sanitize to the lower bound
/// let p = EventParameter::new(ParameterId::Sharpness, f32::NAN);
/// assert!((p.value - 0.0).abs() < f32::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventParameter {
    /// Which parameter this value applies to
    pub id: ParameterId,
    /// The parameter value, sanitized into `[0.0, 1.0]`
    pub value: f32,
}

impl EventParameter {
    /// Creates a parameter, sanitizing the value into `[0.0, 1.0]`.
    pub fn new(id: ParameterId, value: f32) -> Self {
        Self {
            id,
            value: sanitize_parameter_value(value),
        }
    }
}

/// Maps non-finite input to the lower bound and clamps the rest into range.
pub(crate) fn sanitize_parameter_value(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(MIN_PARAMETER_VALUE, MAX_PARAMETER_VALUE)
    } else {
        MIN_PARAMETER_VALUE
    }
}

/// A single timed event within a feedback pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEvent {
    /// What this event renders
    pub kind: EventKind,
    /// Offset from pattern start, in seconds
    pub start_s: f32,
    /// How long the event lasts, in seconds
    pub duration_s: f32,
    /// Scalar parameters attached to the event
    pub parameters: Vec<EventParameter>,
}

impl FeedbackEvent {
    /// Creates a continuous-vibration event with the given intensity and
    /// sharpness.
    pub fn continuous(start_s: f32, duration_s: f32, intensity: f32, sharpness: f32) -> Self {
        Self {
            kind: EventKind::HapticContinuous,
            start_s,
            duration_s,
            parameters: vec![
                EventParameter::new(ParameterId::Intensity, intensity),
                EventParameter::new(ParameterId::Sharpness, sharpness),
            ],
        }
    }

    /// Creates an audio event referencing a registered clip.
    ///
    /// Audio events carry no haptic parameters.
    pub fn audio(resource: AudioResourceId, start_s: f32, duration_s: f32) -> Self {
        Self {
            kind: EventKind::Audio(resource),
            start_s,
            duration_s,
            parameters: Vec::new(),
        }
    }

    /// Offset at which this event ends, in seconds.
    pub fn end_s(&self) -> f32 {
        self.start_s + self.duration_s
    }

    /// Looks up the value of a parameter attached to this event.
    pub fn parameter(&self, id: ParameterId) -> Option<f32> {
        self.parameters.iter().find(|p| p.id == id).map(|p| p.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuous_event_carries_both_parameters() {
        let event = FeedbackEvent::continuous(0.0, 0.5, 1.0, 0.2);
        assert_eq!(event.kind, EventKind::HapticContinuous);
        assert_eq!(event.parameters.len(), 2);
        assert_eq!(event.parameter(ParameterId::Intensity), Some(1.0));
        assert_eq!(event.parameter(ParameterId::Sharpness), Some(0.2));
    }

    #[test]
    fn test_audio_event_has_no_parameters() {
        let event = FeedbackEvent::audio(AudioResourceId::new(7), 0.0, 0.5);
        assert_eq!(event.kind, EventKind::Audio(AudioResourceId::new(7)));
        assert!(event.parameters.is_empty());
        assert_eq!(event.parameter(ParameterId::Intensity), None);
    }

    #[test]
    fn test_event_end_offset() {
        let event = FeedbackEvent::continuous(0.25, 0.5, 1.0, 0.2);
        assert!((event.end_s() - 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parameter_clamps_above_range() {
        let p = EventParameter::new(ParameterId::Intensity, 3.0);
        assert!((p.value - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parameter_clamps_below_range() {
        let p = EventParameter::new(ParameterId::Sharpness, -0.5);
        assert!((p.value - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parameter_sanitizes_non_finite() {
        let nan = EventParameter::new(ParameterId::Intensity, f32::NAN);
        let inf = EventParameter::new(ParameterId::Intensity, f32::INFINITY);
        assert!((nan.value - 0.0).abs() < f32::EPSILON);
        assert!((inf.value - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_audio_resource_id_round_trip() {
        let id = AudioResourceId::new(42);
        assert_eq!(id.raw(), 42);
        assert_ne!(id, AudioResourceId::new(43));
    }
}
