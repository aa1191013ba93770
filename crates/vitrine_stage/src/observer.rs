//! Viewport-intersection observation
//!
//! Detects when the top edge of an element crosses a configured fraction
//! of the viewport height. Crossings are edge-triggered: a crossing is
//! reported exactly once per direction change, so rapid back-and-forth
//! scrolling within a single frame cannot double-fire either transition.

/// The visible viewport: height plus the current scroll offset
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Viewport height in pixels
    pub height: f32,
    /// Document y currently aligned with the top of the viewport
    pub scroll_y: f32,
}

impl Viewport {
    pub const fn new(height: f32, scroll_y: f32) -> Self {
        Self { height, scroll_y }
    }

    /// Document y of the horizontal line at `ratio` of the viewport height
    pub fn threshold_line(&self, ratio: f32) -> f32 {
        self.scroll_y + self.height * ratio
    }
}

/// A threshold crossing reported by an observer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossing {
    /// The element's top rose above the threshold line (scrolled into view)
    Entered,
    /// The element's top fell back below the threshold line (scrolled back
    /// out, upward exit)
    ExitedUpward,
}

/// Edge-triggered intersection state for one element
///
/// The observer is fed the element's document-space top edge on every
/// scroll update and reports the transition, if any.
#[derive(Clone, Copy, Debug)]
pub struct IntersectionObserver {
    /// Fraction of the viewport height forming the enter threshold
    /// (0.8 means "top of target crosses 80% of viewport height")
    enter_ratio: f32,
    entered: bool,
}

impl IntersectionObserver {
    pub fn new(enter_ratio: f32) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&enter_ratio),
            "enter_ratio must be a viewport fraction"
        );
        Self {
            enter_ratio,
            entered: false,
        }
    }

    pub fn enter_ratio(&self) -> f32 {
        self.enter_ratio
    }

    /// Whether the element is currently past the enter threshold
    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Evaluate against a new scroll position
    ///
    /// Returns a crossing only on a state change.
    pub fn update(&mut self, element_top: f32, viewport: &Viewport) -> Option<Crossing> {
        let inside = element_top <= viewport.threshold_line(self.enter_ratio);

        match (self.entered, inside) {
            (false, true) => {
                self.entered = true;
                Some(Crossing::Entered)
            }
            (true, false) => {
                self.entered = false;
                Some(Crossing::ExitedUpward)
            }
            _ => None,
        }
    }
}
