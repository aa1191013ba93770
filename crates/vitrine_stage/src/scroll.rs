//! Smooth-scroll hand-off
//!
//! Navigation requests (menu item to section) are delegated to an external
//! smooth-scroll provider. The stage never scrolls anything itself; it
//! hands over the target element and an animate flag and is done.

use std::sync::Mutex;

use crate::stage::ElementId;

/// Collaborator that brings an element into view
pub trait ScrollIntoView: Send + Sync {
    /// Scroll so `target` is visible; `animate` requests a smooth glide
    /// instead of a jump
    fn scroll_to(&self, target: ElementId, animate: bool);
}

/// A recorded scroll request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: ElementId,
    pub animate: bool,
}

/// Test double that records every request
#[derive(Default)]
pub struct RecordingScroller {
    requests: Mutex<Vec<ScrollRequest>>,
}

impl RecordingScroller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the recorded requests
    pub fn take_requests(&self) -> Vec<ScrollRequest> {
        std::mem::take(&mut *self.requests.lock().unwrap())
    }
}

impl ScrollIntoView for RecordingScroller {
    fn scroll_to(&self, target: ElementId, animate: bool) {
        self.requests
            .lock()
            .unwrap()
            .push(ScrollRequest { target, animate });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::Stage;
    use vitrine_core::VisualStyle;

    #[test]
    fn test_recording_scroller() {
        let stage = Stage::new();
        let section = stage.insert(VisualStyle::default());

        let scroller = RecordingScroller::new();
        scroller.scroll_to(section, true);

        let requests = scroller.take_requests();
        assert_eq!(
            requests,
            vec![ScrollRequest {
                target: section,
                animate: true
            }]
        );
        assert!(scroller.take_requests().is_empty());
    }
}
