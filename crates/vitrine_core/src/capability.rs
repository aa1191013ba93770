//! Pointer capability environment query
//!
//! Touch-only targets have no meaningful hover state, so hover-driven
//! bindings substitute click activation there. The capability is sampled
//! once when a binding is created and cached for its lifetime; re-querying
//! mid-interaction on hybrid devices would let the activation gesture
//! change under the user's finger.

use crate::events::{event_types, EventType};

/// What kind of pointer the host environment provides
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerCapability {
    /// A pointer that can hover without pressing (mouse, trackpad)
    Hover,
    /// Touch-only input; hover is not observable
    TouchOnly,
}

impl PointerCapability {
    /// Whether hover enter/leave events are meaningful on this device
    pub fn supports_hover(&self) -> bool {
        matches!(self, PointerCapability::Hover)
    }

    /// The event type that activates a hover-style interaction here
    ///
    /// Hover-capable devices activate on pointer enter; touch-only devices
    /// fall back to tap (pointer up).
    pub fn activation_event(&self) -> EventType {
        match self {
            PointerCapability::Hover => event_types::POINTER_ENTER,
            PointerCapability::TouchOnly => event_types::POINTER_UP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_event() {
        assert_eq!(
            PointerCapability::Hover.activation_event(),
            event_types::POINTER_ENTER
        );
        assert_eq!(
            PointerCapability::TouchOnly.activation_event(),
            event_types::POINTER_UP
        );
    }
}
