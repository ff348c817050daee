//! Engine capability flags

use serde::{Deserialize, Serialize};

/// What a feedback engine can render on the current hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineCapabilities {
    pub supports_haptics: bool,
    pub supports_audio: bool,
}

impl Default for EngineCapabilities {
    fn default() -> Self {
        Self::full()
    }
}

impl EngineCapabilities {
    /// Haptics and audio both available.
    pub fn full() -> Self {
        Self {
            supports_haptics: true,
            supports_audio: true,
        }
    }

    /// Haptics only; audio events are dropped by the engine.
    pub fn haptics_only() -> Self {
        Self {
            supports_haptics: true,
            supports_audio: false,
        }
    }

    /// Nothing available; feedback is unavailable on this hardware.
    pub fn none() -> Self {
        Self {
            supports_haptics: false,
            supports_audio: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_capabilities() {
        let caps = EngineCapabilities::full();
        assert!(caps.supports_haptics);
        assert!(caps.supports_audio);
    }

    #[test]
    fn test_haptics_only_capabilities() {
        let caps = EngineCapabilities::haptics_only();
        assert!(caps.supports_haptics);
        assert!(!caps.supports_audio);
    }

    #[test]
    fn test_none_capabilities() {
        let caps = EngineCapabilities::none();
        assert!(!caps.supports_haptics);
        assert!(!caps.supports_audio);
    }

    #[test]
    fn test_default_is_full() {
        assert_eq!(EngineCapabilities::default(), EngineCapabilities::full());
    }

    #[test]
    fn test_capabilities_serde_round_trip() -> Result<(), serde_json::Error> {
        let caps = EngineCapabilities::haptics_only();
        let json = serde_json::to_string(&caps)?;
        let decoded: EngineCapabilities = serde_json::from_str(&json)?;
        assert_eq!(decoded, caps);
        Ok(())
    }
}
