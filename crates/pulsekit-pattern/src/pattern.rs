//! Feedback pattern construction and validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{MAX_DYNAMIC_PARAMETERS, MAX_EVENT_DURATION_S, MAX_PATTERN_EVENTS};
use crate::dynamics::DynamicParameter;
use crate::events::FeedbackEvent;

/// Validation failures reported at pattern construction time
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    #[error("pattern contains no events")]
    Empty,

    #[error("pattern contains {count} events (maximum {MAX_PATTERN_EVENTS})")]
    TooManyEvents { count: usize },

    #[error("event {index} has invalid start offset {start_s}")]
    InvalidStart { index: usize, start_s: f32 },

    #[error("event {index} has invalid duration {duration_s} (must be in (0, {MAX_EVENT_DURATION_S}])")]
    InvalidDuration { index: usize, duration_s: f32 },

    #[error("pattern contains {count} dynamic parameters (maximum {MAX_DYNAMIC_PARAMETERS})")]
    TooManyDynamicParameters { count: usize },

    #[error("dynamic parameter {index} offset {offset_s} falls outside the pattern duration {total_s}")]
    DynamicOffsetOutOfRange {
        index: usize,
        offset_s: f32,
        total_s: f32,
    },
}

/// An ordered event list plus an ordered list of scheduled parameter changes
///
/// Construction validates what a rendering engine would otherwise reject:
/// the event list must be non-empty, offsets must be finite and
/// non-negative, durations must be positive and bounded, and every dynamic
/// parameter change must fall within the pattern's total duration.
///
/// # Examples
///
/// ```
/// use pulsekit_pattern::{DynamicParameter, FeedbackEvent, FeedbackPattern, ParameterId};
///
/// # fn main() -> Result<(), pulsekit_pattern::PatternError> {
/// let pattern = FeedbackPattern::new(
///     vec![FeedbackEvent::continuous(0.0, 0.5, 1.0, 0.2)],
///     vec![DynamicParameter::new(ParameterId::Sharpness, 0.8, 0.3)],
/// )?;
/// assert!((pattern.total_duration_s() - 0.5).abs() < f32::EPSILON);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackPattern {
    events: Vec<FeedbackEvent>,
    dynamic_parameters: Vec<DynamicParameter>,
}

impl FeedbackPattern {
    /// Builds a pattern from an event list and a dynamic parameter list.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] describing the first constraint violated.
    pub fn new(
        events: Vec<FeedbackEvent>,
        dynamic_parameters: Vec<DynamicParameter>,
    ) -> Result<Self, PatternError> {
        if events.is_empty() {
            return Err(PatternError::Empty);
        }
        if events.len() > MAX_PATTERN_EVENTS {
            return Err(PatternError::TooManyEvents {
                count: events.len(),
            });
        }
        for (index, event) in events.iter().enumerate() {
            if !event.start_s.is_finite() || event.start_s < 0.0 {
                return Err(PatternError::InvalidStart {
                    index,
                    start_s: event.start_s,
                });
            }
            if !event.duration_s.is_finite()
                || event.duration_s <= 0.0
                || event.duration_s > MAX_EVENT_DURATION_S
            {
                return Err(PatternError::InvalidDuration {
                    index,
                    duration_s: event.duration_s,
                });
            }
        }
        if dynamic_parameters.len() > MAX_DYNAMIC_PARAMETERS {
            return Err(PatternError::TooManyDynamicParameters {
                count: dynamic_parameters.len(),
            });
        }

        let total_s = total_duration(&events);
        for (index, change) in dynamic_parameters.iter().enumerate() {
            if !change.offset_s.is_finite() || change.offset_s < 0.0 || change.offset_s > total_s {
                return Err(PatternError::DynamicOffsetOutOfRange {
                    index,
                    offset_s: change.offset_s,
                    total_s,
                });
            }
        }

        Ok(Self {
            events,
            dynamic_parameters,
        })
    }

    /// The ordered event list.
    pub fn events(&self) -> &[FeedbackEvent] {
        &self.events
    }

    /// The ordered list of scheduled parameter changes.
    pub fn dynamic_parameters(&self) -> &[DynamicParameter] {
        &self.dynamic_parameters
    }

    /// Total pattern duration: the latest event end offset, in seconds.
    pub fn total_duration_s(&self) -> f32 {
        total_duration(&self.events)
    }
}

fn total_duration(events: &[FeedbackEvent]) -> f32 {
    events.iter().fold(0.0_f32, |acc, e| acc.max(e.end_s()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{AudioResourceId, ParameterId};

    fn continuous_half_second() -> FeedbackEvent {
        FeedbackEvent::continuous(0.0, 0.5, 1.0, 0.2)
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let result = FeedbackPattern::new(Vec::new(), Vec::new());
        assert_eq!(result, Err(PatternError::Empty));
    }

    #[test]
    fn test_single_event_pattern_accepted() -> Result<(), PatternError> {
        let pattern = FeedbackPattern::new(vec![continuous_half_second()], Vec::new())?;
        assert_eq!(pattern.events().len(), 1);
        assert!(pattern.dynamic_parameters().is_empty());
        Ok(())
    }

    #[test]
    fn test_total_duration_is_latest_event_end() -> Result<(), PatternError> {
        let pattern = FeedbackPattern::new(
            vec![
                continuous_half_second(),
                FeedbackEvent::audio(AudioResourceId::new(1), 0.25, 0.5),
            ],
            Vec::new(),
        )?;
        assert!((pattern.total_duration_s() - 0.75).abs() < f32::EPSILON);
        Ok(())
    }

    #[test]
    fn test_negative_start_rejected() {
        let result = FeedbackPattern::new(
            vec![FeedbackEvent::continuous(-0.1, 0.5, 1.0, 0.2)],
            Vec::new(),
        );
        assert!(matches!(
            result,
            Err(PatternError::InvalidStart { index: 0, .. })
        ));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let result = FeedbackPattern::new(
            vec![FeedbackEvent::continuous(0.0, 0.0, 1.0, 0.2)],
            Vec::new(),
        );
        assert!(matches!(
            result,
            Err(PatternError::InvalidDuration { index: 0, .. })
        ));
    }

    #[test]
    fn test_overlong_duration_rejected() {
        let result = FeedbackPattern::new(
            vec![FeedbackEvent::continuous(0.0, MAX_EVENT_DURATION_S + 1.0, 1.0, 0.2)],
            Vec::new(),
        );
        assert!(matches!(result, Err(PatternError::InvalidDuration { .. })));
    }

    #[test]
    fn test_non_finite_start_rejected() {
        let result = FeedbackPattern::new(
            vec![FeedbackEvent::continuous(f32::NAN, 0.5, 1.0, 0.2)],
            Vec::new(),
        );
        assert!(matches!(result, Err(PatternError::InvalidStart { .. })));
    }

    #[test]
    fn test_dynamic_offset_inside_duration_accepted() -> Result<(), PatternError> {
        let pattern = FeedbackPattern::new(
            vec![continuous_half_second()],
            vec![DynamicParameter::new(ParameterId::Sharpness, 0.8, 0.3)],
        )?;
        assert_eq!(pattern.dynamic_parameters().len(), 1);
        Ok(())
    }

    #[test]
    fn test_dynamic_offset_at_duration_boundary_accepted() -> Result<(), PatternError> {
        let pattern = FeedbackPattern::new(
            vec![continuous_half_second()],
            vec![DynamicParameter::new(ParameterId::Intensity, 0.5, 0.5)],
        )?;
        assert_eq!(pattern.dynamic_parameters().len(), 1);
        Ok(())
    }

    #[test]
    fn test_dynamic_offset_beyond_duration_rejected() {
        let result = FeedbackPattern::new(
            vec![continuous_half_second()],
            vec![DynamicParameter::new(ParameterId::Sharpness, 0.8, 0.6)],
        );
        assert!(matches!(
            result,
            Err(PatternError::DynamicOffsetOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn test_too_many_events_rejected() {
        let events = vec![continuous_half_second(); MAX_PATTERN_EVENTS + 1];
        let result = FeedbackPattern::new(events, Vec::new());
        assert!(matches!(result, Err(PatternError::TooManyEvents { .. })));
    }

    #[test]
    fn test_too_many_dynamic_parameters_rejected() {
        let changes =
            vec![DynamicParameter::new(ParameterId::Intensity, 0.5, 0.1); MAX_DYNAMIC_PARAMETERS + 1];
        let result = FeedbackPattern::new(vec![continuous_half_second()], changes);
        assert!(matches!(
            result,
            Err(PatternError::TooManyDynamicParameters { .. })
        ));
    }

    #[test]
    fn test_pattern_serde_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let pattern = FeedbackPattern::new(
            vec![continuous_half_second()],
            vec![DynamicParameter::new(ParameterId::Sharpness, 0.8, 0.3)],
        )?;
        let json = serde_json::to_string(&pattern)?;
        let decoded: FeedbackPattern = serde_json::from_str(&json)?;
        assert_eq!(decoded, pattern);
        Ok(())
    }
}
