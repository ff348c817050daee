//! Scheduled parameter changes

use serde::{Deserialize, Serialize};

use crate::events::{ParameterId, sanitize_parameter_value};

/// A scheduled mutation of an in-flight event parameter
///
/// The change applies to every event in the pattern that exposes the target
/// parameter, from `offset_s` onward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DynamicParameter {
    /// The parameter to change
    pub id: ParameterId,
    /// The new value, sanitized into `[0.0, 1.0]`
    pub value: f32,
    /// Offset from pattern start at which the change takes effect, in seconds
    pub offset_s: f32,
}

impl DynamicParameter {
    /// Creates a scheduled change, sanitizing the value into `[0.0, 1.0]`.
    pub fn new(id: ParameterId, value: f32, offset_s: f32) -> Self {
        Self {
            id,
            value: sanitize_parameter_value(value),
            offset_s,
        }
    }
}
