//! Timeline construction and playback
//!
//! A timeline is an ordered sequence of steps, each interpolating one or
//! more style properties on a set of target elements over a duration with
//! an easing curve. Step positions may be absolute or relative to the
//! previous step's start or end; negative relative offsets begin a step
//! before the previous one finishes, which is used deliberately for
//! anticipation effects (a container fade overlapping the content reveal
//! that follows it).
//!
//! # Example
//!
//! ```ignore
//! use vitrine_animation::{Easing, Step, StepPosition, Timeline};
//! use vitrine_core::{StyleProperty, StyleValue};
//!
//! let mut tl = Timeline::with_sink(stage.sink());
//! tl.push(
//!     Step::new(600.0)
//!         .target(fill_line)
//!         .track(StyleProperty::FillWidth, 0.0.into(), 1.0.into())
//!         .easing(Easing::QuartOut),
//! );
//! tl.push(
//!     Step::new(400.0)
//!         .target(title)
//!         .track(StyleProperty::TextColor, rest.into(), accent.into())
//!         .position(StepPosition::AfterPrevious(-300.0)),
//! );
//! tl.start();
//! ```
//!
//! Playback is driven by `tick(dt_ms)` from the scheduler. Reversing or
//! stopping mid-flight freezes at the current interpolated value and never
//! fires the completion callback for the cancelled direction.

use std::sync::Arc;

use smallvec::SmallVec;
use vitrine_core::{Interpolate, RawElementId, StyleProperty, StyleValue, StyleWrite};

use crate::easing::Easing;

/// Callback invoked when a timeline finishes playing forward
pub type CompletionCallback = Arc<dyn Fn() + Send + Sync>;

/// Where a step begins relative to the sequence built so far
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepPosition {
    /// Absolute start time in milliseconds
    At(f32),
    /// Offset from the previous step's end; negative overlaps it
    AfterPrevious(f32),
    /// Offset from the previous step's start
    WithPrevious(f32),
}

impl Default for StepPosition {
    fn default() -> Self {
        StepPosition::AfterPrevious(0.0)
    }
}

/// Playback direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayDirection {
    Forward,
    Reverse,
}

/// A single property interpolation within a step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertyTrack {
    pub property: StyleProperty,
    pub from: StyleValue,
    pub to: StyleValue,
}

impl PropertyTrack {
    pub fn new(property: StyleProperty, from: StyleValue, to: StyleValue) -> Self {
        Self { property, from, to }
    }
}

/// One step of a timeline: targets, tracks, duration, easing, position
#[derive(Clone, Debug)]
pub struct Step {
    pub targets: SmallVec<[RawElementId; 4]>,
    pub tracks: Vec<PropertyTrack>,
    pub duration_ms: f32,
    pub easing: Easing,
    pub position: StepPosition,
    /// Write the `from` values as soon as the timeline starts (or is
    /// primed), even though the step itself begins later. Entrance steps
    /// use this to hide content before their reveal reaches it.
    pub immediate_render: bool,
}

impl Step {
    /// Create a step with the given duration and default position
    /// (immediately after the previous step)
    pub fn new(duration_ms: f32) -> Self {
        Self {
            targets: SmallVec::new(),
            tracks: Vec::new(),
            duration_ms,
            easing: Easing::Linear,
            position: StepPosition::default(),
            immediate_render: false,
        }
    }

    /// Add a target element
    pub fn target(mut self, target: RawElementId) -> Self {
        self.targets.push(target);
        self
    }

    /// Add several target elements
    pub fn targets(mut self, targets: impl IntoIterator<Item = RawElementId>) -> Self {
        self.targets.extend(targets);
        self
    }

    /// Add a property track
    pub fn track(mut self, property: StyleProperty, from: StyleValue, to: StyleValue) -> Self {
        self.tracks.push(PropertyTrack::new(property, from, to));
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn position(mut self, position: StepPosition) -> Self {
        self.position = position;
        self
    }

    /// Establish this step's `from` values at timeline start
    pub fn immediate_render(mut self) -> Self {
        self.immediate_render = true;
        self
    }
}

// ============================================================================
// Stagger
// ============================================================================

/// Order in which staggered targets begin
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StaggerDirection {
    /// Animate first to last
    #[default]
    Forward,
    /// Animate last to first
    Reverse,
    /// Animate from center outward
    FromCenter,
}

/// Configuration for staggered steps over a target list
#[derive(Clone, Copy, Debug)]
pub struct StaggerConfig {
    /// Delay between each target's start (ms)
    pub delay_ms: f32,
    /// Order of starts
    pub direction: StaggerDirection,
    /// Optional: cap the delay multiplier at the first N items
    pub limit: Option<usize>,
}

impl StaggerConfig {
    pub fn new(delay_ms: f32) -> Self {
        Self {
            delay_ms,
            direction: StaggerDirection::Forward,
            limit: None,
        }
    }

    /// Stagger from last to first
    pub fn reverse(mut self) -> Self {
        self.direction = StaggerDirection::Reverse;
        self
    }

    /// Stagger from center outward
    pub fn from_center(mut self) -> Self {
        self.direction = StaggerDirection::FromCenter;
        self
    }

    /// Cap the stagger at the first N items
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Calculate the extra delay for a specific target index
    pub fn delay_for_index(&self, index: usize, total: usize) -> f32 {
        let effective_index = match self.direction {
            StaggerDirection::Forward => index,
            StaggerDirection::Reverse => total.saturating_sub(1).saturating_sub(index),
            StaggerDirection::FromCenter => {
                let center = total / 2;
                if index <= center {
                    center - index
                } else {
                    index - center
                }
            }
        };

        let capped_index = if let Some(limit) = self.limit {
            effective_index.min(limit)
        } else {
            effective_index
        };

        self.delay_ms * capped_index as f32
    }
}

// ============================================================================
// Timeline
// ============================================================================

/// An ordered, time-addressable sequence of property interpolations
///
/// Steps are resolved to absolute start times as they are pushed; every
/// resolved start is clamped to be non-negative, and steps may overlap.
/// During playback, a step before its start holds its `from` values and a
/// finished step holds its `to` values; overlapping writers to the same
/// property apply in declared order, so the later step wins.
pub struct Timeline {
    steps: Vec<Step>,
    /// Resolved absolute start per step, parallel to `steps`
    starts: Vec<f32>,
    /// Whether the playhead has reached each step this run; a step ahead
    /// of the playhead renders nothing until first reached, but once
    /// reached it un-renders to progress 0 when the playhead moves back
    /// below it
    activated: Vec<bool>,
    duration_ms: f32,
    prev_start: f32,
    prev_end: f32,
    time_ms: f32,
    direction: PlayDirection,
    playing: bool,
    sink: Option<Arc<dyn StyleWrite>>,
    on_complete: Option<CompletionCallback>,
    pending_completion: bool,
}

impl Timeline {
    /// Create an empty timeline with no style sink
    ///
    /// A sink-less timeline still tracks time and completion; only the
    /// style writes are skipped. Attach a sink with `set_sink`.
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            starts: Vec::new(),
            activated: Vec::new(),
            duration_ms: 0.0,
            prev_start: 0.0,
            prev_end: 0.0,
            time_ms: 0.0,
            direction: PlayDirection::Forward,
            playing: false,
            sink: None,
            on_complete: None,
            pending_completion: false,
        }
    }

    /// Create an empty timeline writing through the given sink
    pub fn with_sink(sink: Arc<dyn StyleWrite>) -> Self {
        let mut timeline = Self::new();
        timeline.sink = Some(sink);
        timeline
    }

    /// Attach or replace the style sink
    pub fn set_sink(&mut self, sink: Arc<dyn StyleWrite>) {
        self.sink = Some(sink);
    }

    /// Set the callback fired when forward playback reaches the end
    ///
    /// Fired from the scheduler tick that completes the timeline; a
    /// reversal or stop before the end never fires it.
    pub fn set_on_complete(&mut self, callback: CompletionCallback) {
        self.on_complete = Some(callback);
    }

    /// Append a step, resolving its position to an absolute start
    ///
    /// Returns the step's index.
    pub fn push(&mut self, step: Step) -> usize {
        let start = self.resolve_position(step.position);
        let end = start + step.duration_ms.max(0.0);

        self.prev_start = start;
        self.prev_end = end;
        self.duration_ms = self.duration_ms.max(end);

        self.starts.push(start);
        self.activated.push(false);
        self.steps.push(step);
        self.steps.len() - 1
    }

    /// Append one step per target, offsetting each start by the stagger
    ///
    /// The template's own targets are ignored; each pushed step animates a
    /// single element. Later relative positions treat the whole group as
    /// one step spanning from the group's base to its last end.
    pub fn push_staggered(
        &mut self,
        template: Step,
        targets: impl IntoIterator<Item = RawElementId>,
        stagger: StaggerConfig,
    ) {
        let targets: Vec<RawElementId> = targets.into_iter().collect();
        let total = targets.len();
        if total == 0 {
            return;
        }

        let base = self.resolve_position(template.position);
        let mut group_end = base;

        for (index, target) in targets.into_iter().enumerate() {
            let start = base + stagger.delay_for_index(index, total);
            let end = start + template.duration_ms.max(0.0);
            group_end = group_end.max(end);

            let mut step = template.clone();
            step.targets = SmallVec::new();
            step.targets.push(target);
            step.position = StepPosition::At(start);

            self.starts.push(start);
            self.activated.push(false);
            self.steps.push(step);
        }

        self.prev_start = base;
        self.prev_end = group_end;
        self.duration_ms = self.duration_ms.max(group_end);
    }

    fn resolve_position(&self, position: StepPosition) -> f32 {
        let start = match position {
            StepPosition::At(ms) => ms,
            StepPosition::AfterPrevious(delta) => self.prev_end + delta,
            StepPosition::WithPrevious(delta) => self.prev_start + delta,
        };
        start.max(0.0)
    }

    // ========================================================================
    // Playback control
    // ========================================================================

    /// Rewind to time 0 and play forward
    ///
    /// Primes immediate-render steps and applies time 0 so entrance
    /// states are established before the first frame.
    pub fn start(&mut self) {
        self.time_ms = 0.0;
        self.direction = PlayDirection::Forward;
        self.playing = true;
        self.activated.fill(false);
        self.prime();
        self.apply(self.time_ms);
    }

    /// Write the `from` values of every immediate-render step
    ///
    /// Called by `start`, and by trigger binding so scroll-revealed
    /// content is hidden before its entrance ever plays.
    pub fn prime(&self) {
        let Some(sink) = &self.sink else {
            return;
        };
        if !sink.is_alive() {
            return;
        }

        for step in &self.steps {
            if !step.immediate_render || step.targets.is_empty() {
                continue;
            }
            for track in &step.tracks {
                for target in &step.targets {
                    sink.write(*target, track.property, track.from);
                }
            }
        }
    }

    /// Play forward from the current position
    ///
    /// A timeline already at its end stays completed; use `start` to
    /// replay from the beginning.
    pub fn play(&mut self) {
        self.direction = PlayDirection::Forward;
        self.playing = self.time_ms < self.duration_ms;
    }

    /// Play backward from the current position
    ///
    /// Flips direction in place: the current interpolated values are the
    /// starting point, with no jump.
    pub fn reverse(&mut self) {
        self.direction = PlayDirection::Reverse;
        self.playing = self.time_ms > 0.0;
    }

    /// Freeze at the current interpolated values
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Continue in the current direction
    pub fn resume(&mut self) {
        let at_terminal = match self.direction {
            PlayDirection::Forward => self.time_ms >= self.duration_ms,
            PlayDirection::Reverse => self.time_ms <= 0.0,
        };
        self.playing = !at_terminal;
    }

    /// Halt playback without firing any completion
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Jump to a time position and apply its values
    ///
    /// Does not change the play state and never fires completion.
    pub fn seek(&mut self, time_ms: f32) {
        self.time_ms = time_ms.clamp(0.0, self.duration_ms);
        self.apply(self.time_ms);
    }

    /// Advance playback by a frame delta
    ///
    /// Returns true while the timeline still needs ticking. Forward
    /// completion arms the completion callback, drained by the scheduler
    /// via `take_completion`.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.playing {
            return false;
        }

        match self.direction {
            PlayDirection::Forward => {
                self.time_ms += dt_ms;
                if self.time_ms >= self.duration_ms {
                    self.time_ms = self.duration_ms;
                    self.playing = false;
                    self.pending_completion = true;
                }
            }
            PlayDirection::Reverse => {
                self.time_ms -= dt_ms;
                if self.time_ms <= 0.0 {
                    self.time_ms = 0.0;
                    self.playing = false;
                }
            }
        }

        self.apply(self.time_ms);
        self.playing
    }

    /// Take the armed completion callback, if forward playback just ended
    pub fn take_completion(&mut self) -> Option<CompletionCallback> {
        if self.pending_completion {
            self.pending_completion = false;
            self.on_complete.clone()
        } else {
            None
        }
    }

    fn apply(&mut self, time_ms: f32) {
        let Some(sink) = &self.sink else {
            return;
        };
        if !sink.is_alive() {
            return;
        }

        for ((step, start), activated) in self
            .steps
            .iter()
            .zip(&self.starts)
            .zip(self.activated.iter_mut())
        {
            // Conditionally rendered elements may leave a step targetless
            if step.targets.is_empty() {
                continue;
            }
            // A step ahead of the playhead renders nothing until first
            // reached; whatever an earlier step (or prime) wrote stays in
            // place. Once reached, it un-renders to progress 0 when the
            // playhead moves back below it.
            if time_ms < *start && !*activated {
                continue;
            }
            if time_ms >= *start {
                *activated = true;
            }

            let progress = if step.duration_ms <= 0.0 {
                if time_ms >= *start {
                    1.0
                } else {
                    0.0
                }
            } else {
                ((time_ms - start) / step.duration_ms).clamp(0.0, 1.0)
            };
            let eased = step.easing.apply(progress);

            for track in &step.tracks {
                let value = track.from.lerp(&track.to, eased);
                for target in &step.targets {
                    sink.write(*target, track.property, value);
                }
            }
        }
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn direction(&self) -> PlayDirection {
        self.direction
    }

    /// Current time position in milliseconds
    pub fn time_ms(&self) -> f32 {
        self.time_ms
    }

    /// Total duration (the latest step end)
    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    /// Overall progress, 0.0 to 1.0
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.time_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Resolved absolute start of the step at `index`
    pub fn resolved_start(&self, index: usize) -> Option<f32> {
        self.starts.get(index).copied()
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Records every write so tests can assert on applied values
    #[derive(Default)]
    struct RecordingSink {
        values: Mutex<HashMap<(RawElementId, StyleProperty), StyleValue>>,
        write_count: Mutex<usize>,
    }

    impl RecordingSink {
        fn value(&self, target: RawElementId, property: StyleProperty) -> Option<StyleValue> {
            self.values.lock().unwrap().get(&(target, property)).copied()
        }

        fn float(&self, target: RawElementId, property: StyleProperty) -> f32 {
            self.value(target, property)
                .and_then(|v| v.as_float())
                .unwrap()
        }

        fn writes(&self) -> usize {
            *self.write_count.lock().unwrap()
        }
    }

    impl StyleWrite for RecordingSink {
        fn write(&self, target: RawElementId, property: StyleProperty, value: StyleValue) {
            self.values
                .lock()
                .unwrap()
                .insert((target, property), value);
            *self.write_count.lock().unwrap() += 1;
        }
    }

    fn opacity_step(target: RawElementId, duration_ms: f32) -> Step {
        Step::new(duration_ms)
            .target(target)
            .track(StyleProperty::Opacity, 0.0.into(), 1.0.into())
    }

    #[test]
    fn test_overlap_resolution() {
        let mut tl = Timeline::new();
        tl.push(opacity_step(1, 10.0).position(StepPosition::At(0.0)));
        tl.push(
            Step::new(10.0)
                .target(2)
                .track(StyleProperty::TranslateY, 50.0.into(), 0.0.into())
                .position(StepPosition::AfterPrevious(-5.0)),
        );

        assert_eq!(tl.resolved_start(0), Some(0.0));
        assert_eq!(tl.resolved_start(1), Some(5.0));
        assert_eq!(tl.duration_ms(), 15.0);
    }

    #[test]
    fn test_both_steps_in_flight_during_overlap() {
        let sink = Arc::new(RecordingSink::default());
        let mut tl = Timeline::with_sink(sink.clone());
        tl.push(opacity_step(1, 10.0).position(StepPosition::At(0.0)));
        tl.push(opacity_step(2, 10.0).position(StepPosition::AfterPrevious(-5.0)));

        tl.start();
        tl.tick(7.0);

        let a = sink.float(1, StyleProperty::Opacity);
        let b = sink.float(2, StyleProperty::Opacity);
        assert!(a > 0.0 && a < 1.0, "first step mid-flight, got {a}");
        assert!(b > 0.0 && b < 1.0, "second step mid-flight, got {b}");
    }

    #[test]
    fn test_resolved_start_clamps_non_negative() {
        let mut tl = Timeline::new();
        tl.push(opacity_step(1, 10.0).position(StepPosition::AfterPrevious(-500.0)));
        assert_eq!(tl.resolved_start(0), Some(0.0));
    }

    #[test]
    fn test_with_previous_offset() {
        let mut tl = Timeline::new();
        tl.push(opacity_step(1, 10.0));
        tl.push(opacity_step(2, 10.0).position(StepPosition::WithPrevious(2.0)));
        assert_eq!(tl.resolved_start(1), Some(2.0));
    }

    #[test]
    fn test_completion_fires_once_forward() {
        let sink = Arc::new(RecordingSink::default());
        let fired = Arc::new(Mutex::new(0u32));

        let mut tl = Timeline::with_sink(sink);
        tl.push(opacity_step(1, 100.0));
        let fired_inner = fired.clone();
        tl.set_on_complete(Arc::new(move || {
            *fired_inner.lock().unwrap() += 1;
        }));

        tl.start();
        tl.tick(60.0);
        assert!(tl.take_completion().is_none());

        tl.tick(60.0);
        let callback = tl.take_completion().expect("completion armed");
        callback();
        assert_eq!(*fired.lock().unwrap(), 1);

        // Already completed; further ticks and play() do not re-arm
        tl.tick(16.0);
        tl.play();
        tl.tick(16.0);
        assert!(tl.take_completion().is_none());
    }

    #[test]
    fn test_reverse_freezes_at_current_value_without_completion() {
        let sink = Arc::new(RecordingSink::default());
        let mut tl = Timeline::with_sink(sink.clone());
        tl.push(
            Step::new(10.0)
                .target(1)
                .track(StyleProperty::TranslateX, 0.0.into(), 100.0.into()),
        );

        tl.start();
        tl.tick(5.0);
        let mid = sink.float(1, StyleProperty::TranslateX);
        assert!((mid - 50.0).abs() < 1e-3);

        // Flip mid-flight: values walk back from the current point
        tl.reverse();
        tl.tick(2.0);
        let walked_back = sink.float(1, StyleProperty::TranslateX);
        assert!((walked_back - 30.0).abs() < 1e-3);

        // Running out the reverse direction never arms the forward callback
        tl.tick(10.0);
        assert!(!tl.is_playing());
        assert_eq!(sink.float(1, StyleProperty::TranslateX), 0.0);
        assert!(tl.take_completion().is_none());
    }

    #[test]
    fn test_pause_freezes_values() {
        let sink = Arc::new(RecordingSink::default());
        let mut tl = Timeline::with_sink(sink.clone());
        tl.push(opacity_step(1, 10.0));

        tl.start();
        tl.tick(4.0);
        tl.pause();
        let frozen = sink.float(1, StyleProperty::Opacity);

        tl.tick(100.0);
        assert_eq!(sink.float(1, StyleProperty::Opacity), frozen);

        tl.resume();
        tl.tick(1.0);
        assert!(sink.float(1, StyleProperty::Opacity) > frozen);
    }

    #[test]
    fn test_seek_applies_values() {
        let sink = Arc::new(RecordingSink::default());
        let mut tl = Timeline::with_sink(sink.clone());
        tl.push(
            Step::new(100.0)
                .target(1)
                .track(StyleProperty::FillWidth, 0.0.into(), 1.0.into()),
        );

        tl.seek(50.0);
        assert!((sink.float(1, StyleProperty::FillWidth) - 0.5).abs() < 1e-3);
        assert!(!tl.is_playing());
        assert!(tl.take_completion().is_none());
    }

    #[test]
    fn test_empty_target_step_is_noop() {
        let sink = Arc::new(RecordingSink::default());
        let mut tl = Timeline::with_sink(sink.clone());
        tl.push(
            Step::new(10.0).track(StyleProperty::Opacity, 0.0.into(), 1.0.into()),
        );

        tl.start();
        tl.tick(5.0);
        tl.tick(10.0);
        assert_eq!(sink.writes(), 0);
    }

    #[test]
    fn test_stagger_starts() {
        let mut tl = Timeline::new();
        tl.push_staggered(
            opacity_step(0, 800.0),
            [10, 11, 12],
            StaggerConfig::new(100.0),
        );

        assert_eq!(tl.resolved_start(0), Some(0.0));
        assert_eq!(tl.resolved_start(1), Some(100.0));
        assert_eq!(tl.resolved_start(2), Some(200.0));
        assert_eq!(tl.duration_ms(), 1000.0);
    }

    #[test]
    fn test_stagger_reverse_direction() {
        let mut tl = Timeline::new();
        tl.push_staggered(
            opacity_step(0, 100.0),
            [10, 11, 12],
            StaggerConfig::new(50.0).reverse(),
        );

        assert_eq!(tl.resolved_start(0), Some(100.0));
        assert_eq!(tl.resolved_start(1), Some(50.0));
        assert_eq!(tl.resolved_start(2), Some(0.0));
    }

    #[test]
    fn test_step_after_stagger_group_is_relative_to_group_end() {
        let mut tl = Timeline::new();
        tl.push_staggered(
            opacity_step(0, 100.0),
            [10, 11],
            StaggerConfig::new(50.0),
        );
        // Group spans 0..150
        tl.push(opacity_step(3, 10.0));
        assert_eq!(tl.resolved_start(2), Some(150.0));
    }

    #[test]
    fn test_step_ahead_of_playhead_does_not_render() {
        let sink = Arc::new(RecordingSink::default());
        let mut tl = Timeline::with_sink(sink.clone());
        // Reveal then scatter the same element's opacity
        tl.push(
            Step::new(10.0)
                .target(1)
                .track(StyleProperty::Opacity, 0.0.into(), 1.0.into())
                .position(StepPosition::At(0.0)),
        );
        tl.push(
            Step::new(10.0)
                .target(1)
                .track(StyleProperty::Opacity, 1.0.into(), 0.0.into())
                .position(StepPosition::At(20.0)),
        );

        tl.start();
        tl.tick(5.0);
        // Only the reveal has rendered; the scatter is still ahead
        assert!((sink.float(1, StyleProperty::Opacity) - 0.5).abs() < 1e-3);

        tl.tick(20.0);
        // Playhead at 25: scatter owns the property now
        assert!((sink.float(1, StyleProperty::Opacity) - 0.5).abs() < 1e-3);

        // Reversing below the scatter's start un-renders it; the reveal's
        // end value shows again
        tl.reverse();
        tl.tick(10.0);
        assert_eq!(sink.float(1, StyleProperty::Opacity), 1.0);
    }

    #[test]
    fn test_prime_establishes_from_states() {
        let sink = Arc::new(RecordingSink::default());
        let mut tl = Timeline::with_sink(sink.clone());
        tl.push(
            Step::new(10.0)
                .target(1)
                .track(StyleProperty::Opacity, 0.0.into(), 1.0.into())
                .position(StepPosition::At(300.0))
                .immediate_render(),
        );

        // Not started yet, but the entrance state is already hidden
        tl.prime();
        assert_eq!(sink.float(1, StyleProperty::Opacity), 0.0);
    }

    #[test]
    fn test_lazy_step_does_not_prime() {
        let sink = Arc::new(RecordingSink::default());
        let mut tl = Timeline::with_sink(sink.clone());
        tl.push(
            Step::new(10.0)
                .target(1)
                .track(StyleProperty::Opacity, 1.0.into(), 0.0.into())
                .position(StepPosition::At(300.0)),
        );

        tl.prime();
        tl.start();
        assert_eq!(sink.writes(), 0);
    }

    #[test]
    fn test_zero_duration_step_snaps() {
        let sink = Arc::new(RecordingSink::default());
        let mut tl = Timeline::with_sink(sink.clone());
        tl.push(
            Step::new(0.0)
                .target(1)
                .track(StyleProperty::Opacity, 1.0.into(), 0.0.into()),
        );
        tl.push(opacity_step(2, 10.0));

        tl.start();
        assert_eq!(sink.float(1, StyleProperty::Opacity), 0.0);
    }
}
