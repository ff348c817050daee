//! Fluent pattern construction

use crate::dynamics::DynamicParameter;
use crate::events::{AudioResourceId, FeedbackEvent, ParameterId};
use crate::pattern::{FeedbackPattern, PatternError};

/// Builder for [`FeedbackPattern`]
///
/// Collects events and scheduled parameter changes in insertion order;
/// [`PatternBuilder::build`] runs the same validation as
/// [`FeedbackPattern::new`].
///
/// # Examples
///
/// ```
/// use pulsekit_pattern::{ParameterId, PatternBuilder};
///
/// # fn main() -> Result<(), pulsekit_pattern::PatternError> {
/// let pattern = PatternBuilder::new()
///     .continuous(0.0, 0.5, 1.0, 0.2)
///     .change(ParameterId::Sharpness, 0.8, 0.3)
///     .change(ParameterId::Intensity, 0.5, 0.3)
///     .build()?;
/// assert_eq!(pattern.events().len(), 1);
/// assert_eq!(pattern.dynamic_parameters().len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct PatternBuilder {
    events: Vec<FeedbackEvent>,
    dynamic_parameters: Vec<DynamicParameter>,
}

impl PatternBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a continuous-vibration event.
    pub fn continuous(mut self, start_s: f32, duration_s: f32, intensity: f32, sharpness: f32) -> Self {
        self.events
            .push(FeedbackEvent::continuous(start_s, duration_s, intensity, sharpness));
        self
    }

    /// Appends an audio event referencing a registered clip.
    pub fn audio(mut self, resource: AudioResourceId, start_s: f32, duration_s: f32) -> Self {
        self.events
            .push(FeedbackEvent::audio(resource, start_s, duration_s));
        self
    }

    /// Appends an already-constructed event.
    pub fn event(mut self, event: FeedbackEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Schedules a parameter change at the given offset.
    pub fn change(mut self, id: ParameterId, value: f32, offset_s: f32) -> Self {
        self.dynamic_parameters
            .push(DynamicParameter::new(id, value, offset_s));
        self
    }

    /// Validates and builds the pattern.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] describing the first constraint violated.
    pub fn build(self) -> Result<FeedbackPattern, PatternError> {
        FeedbackPattern::new(self.events, self.dynamic_parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;

    #[test]
    fn test_empty_builder_rejected() {
        assert_eq!(PatternBuilder::new().build(), Err(PatternError::Empty));
    }

    #[test]
    fn test_builder_preserves_insertion_order() -> Result<(), PatternError> {
        let pattern = PatternBuilder::new()
            .continuous(0.0, 0.5, 1.0, 0.2)
            .audio(AudioResourceId::new(3), 0.0, 0.5)
            .change(ParameterId::Sharpness, 0.8, 0.3)
            .change(ParameterId::Intensity, 0.5, 0.3)
            .build()?;

        let kinds: Vec<EventKind> = pattern.events().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::HapticContinuous,
                EventKind::Audio(AudioResourceId::new(3)),
            ]
        );

        let targets: Vec<ParameterId> =
            pattern.dynamic_parameters().iter().map(|c| c.id).collect();
        assert_eq!(targets, vec![ParameterId::Sharpness, ParameterId::Intensity]);
        Ok(())
    }

    #[test]
    fn test_builder_matches_direct_construction() -> Result<(), PatternError> {
        let built = PatternBuilder::new()
            .continuous(0.0, 0.5, 1.0, 0.2)
            .change(ParameterId::Sharpness, 0.8, 0.3)
            .build()?;
        let direct = FeedbackPattern::new(
            vec![FeedbackEvent::continuous(0.0, 0.5, 1.0, 0.2)],
            vec![DynamicParameter::new(ParameterId::Sharpness, 0.8, 0.3)],
        )?;
        assert_eq!(built, direct);
        Ok(())
    }

    #[test]
    fn test_builder_event_passthrough() -> Result<(), PatternError> {
        let event = FeedbackEvent::continuous(0.1, 0.2, 0.5, 0.5);
        let pattern = PatternBuilder::new().event(event.clone()).build()?;
        assert_eq!(pattern.events(), &[event]);
        Ok(())
    }
}
