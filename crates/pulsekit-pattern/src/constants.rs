//! Pattern model constants and limits

/// Lower bound for event and dynamic parameter values
pub const MIN_PARAMETER_VALUE: f32 = 0.0;

/// Upper bound for event and dynamic parameter values
pub const MAX_PARAMETER_VALUE: f32 = 1.0;

/// Maximum duration of a single event in seconds
pub const MAX_EVENT_DURATION_S: f32 = 30.0;

/// Maximum number of events in a single pattern
pub const MAX_PATTERN_EVENTS: usize = 16;

/// Maximum number of dynamic parameter changes in a single pattern
pub const MAX_DYNAMIC_PARAMETERS: usize = 16;
