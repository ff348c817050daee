//! Engine lifecycle events
//!
//! The platform engine reports resets and stops asynchronously. Instead of
//! hidden callbacks mutating the engine handle, those notifications arrive
//! on an explicit channel the owner drains from its own event loop.

/// Why an engine reported that it stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The audio session was interrupted (e.g. by another output client)
    AudioSessionInterrupt,
    /// The owning application was suspended
    ApplicationSuspended,
    /// The engine idled out with no pending events
    IdleTimeout,
    /// A system-level error stopped the engine
    SystemError,
    /// The engine gave no usable reason
    Unknown,
}

/// A lifecycle notification from a feedback engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// The engine reset and must be restarted before further playback
    Reset,
    /// The engine stopped for the given reason
    Stopped { reason: StopReason },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_compare() {
        assert_eq!(EngineEvent::Reset, EngineEvent::Reset);
        assert_ne!(
            EngineEvent::Reset,
            EngineEvent::Stopped {
                reason: StopReason::Unknown
            }
        );
    }

    #[test]
    fn test_stop_reasons_distinct() {
        assert_ne!(StopReason::AudioSessionInterrupt, StopReason::IdleTimeout);
        assert_ne!(StopReason::SystemError, StopReason::Unknown);
    }
}
