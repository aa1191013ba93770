//! Event-type constants and the base event record
//!
//! Event types are plain `u32` constants so they can key hash maps and
//! state tables without allocation. The stage layer wraps these in richer
//! per-dispatch contexts; this module only defines the shared vocabulary.

/// Identifier for an event kind
pub type EventType = u32;

/// Well-known event types
pub mod event_types {
    use super::EventType;

    /// Pointer entered an element's bounds
    pub const POINTER_ENTER: EventType = 1;
    /// Pointer left an element's bounds
    pub const POINTER_LEAVE: EventType = 2;
    /// Pointer button pressed
    pub const POINTER_DOWN: EventType = 3;
    /// Pointer button released (a press + release pair is a click)
    pub const POINTER_UP: EventType = 4;
    /// The document scrolled
    pub const SCROLL: EventType = 5;
    /// Element was added to the live view
    pub const MOUNT: EventType = 6;
    /// Element was removed from the live view
    pub const UNMOUNT: EventType = 7;
    /// The viewport was resized
    pub const RESIZE: EventType = 8;
}

/// A raw event as delivered by the host platform
///
/// `target` is the raw id of the element the event was routed to, or 0 for
/// document-level events such as scroll and resize.
#[derive(Clone, Copy, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub target: u64,
    /// Milliseconds since an arbitrary host epoch
    pub timestamp: u64,
    pub propagation_stopped: bool,
}

impl Event {
    pub fn new(event_type: EventType, target: u64) -> Self {
        Self {
            event_type,
            target,
            timestamp: 0,
            propagation_stopped: false,
        }
    }

    /// Stop this event from propagating to ancestor handlers
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}
