//! Animation scheduler
//!
//! Manages all registered timelines and advances them each frame. The host
//! event loop drives the scheduler from its display-refresh callback:
//! starting a timeline is fire-and-forget, and `tick(dt_ms)` reports
//! whether any animation still needs frames.
//!
//! Timelines are registered through wrapper types:
//! - `ScenePlayer` - a registered timeline with playback control that
//!   deregisters itself when dropped
//!
//! Completion callbacks are collected during the tick and invoked after
//! the scheduler lock is released, so a callback may freely start, stop,
//! or register timelines.

use std::sync::{Arc, Mutex, Weak};

use slotmap::{new_key_type, SlotMap};

use crate::timeline::{CompletionCallback, PlayDirection, Timeline};

new_key_type! {
    /// Handle to a registered timeline
    pub struct TimelineId;
}

/// Internal state of the animation scheduler
struct SchedulerInner {
    timelines: SlotMap<TimelineId, Timeline>,
}

/// The animation scheduler that ticks all registered timelines
///
/// Typically held by the application context and shared via
/// `SchedulerHandle`. There is no background thread: the single UI thread
/// calls `tick` once per frame.
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                timelines: SlotMap::with_key(),
            })),
        }
    }

    /// Get a handle to this scheduler for passing to components
    ///
    /// The handle holds a weak reference; operations through it become
    /// no-ops once the scheduler is dropped.
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Tick all timelines by a frame delta
    ///
    /// Returns true if any timeline is still playing (needs another tick).
    /// Completion callbacks armed during this tick are invoked after the
    /// internal lock is released.
    pub fn tick(&self, dt_ms: f32) -> bool {
        let mut completions: Vec<CompletionCallback> = Vec::new();

        let any_active = {
            let mut inner = self.inner.lock().unwrap();
            let mut any_active = false;

            for (_, timeline) in inner.timelines.iter_mut() {
                if timeline.tick(dt_ms) {
                    any_active = true;
                }
                if let Some(callback) = timeline.take_completion() {
                    completions.push(callback);
                }
            }

            // Timelines are only removed when their owning wrapper drops,
            // so a completed timeline can be restarted later.
            any_active
        };

        for callback in completions {
            callback();
        }

        any_active
    }

    /// Check if any timelines are still playing
    pub fn has_active_animations(&self) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.timelines.iter().any(|(_, t)| t.is_playing())
    }

    /// Get the number of registered timelines
    pub fn timeline_count(&self) -> usize {
        self.inner.lock().unwrap().timelines.len()
    }

    // =========================================================================
    // Direct Timeline Access (for advanced use cases)
    // =========================================================================

    pub fn add_timeline(&self, timeline: Timeline) -> TimelineId {
        self.inner.lock().unwrap().timelines.insert(timeline)
    }

    pub fn remove_timeline(&self, id: TimelineId) -> Option<Timeline> {
        self.inner.lock().unwrap().timelines.remove(id)
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the animation scheduler
///
/// This is passed to components that need to register timelines. It won't
/// prevent the scheduler from being dropped; operations through a dead
/// handle are no-ops.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Register a timeline and return its ID
    pub fn register_timeline(&self, timeline: Timeline) -> Option<TimelineId> {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().unwrap().timelines.insert(timeline))
    }

    /// Remove a timeline
    pub fn remove_timeline(&self, id: TimelineId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().timelines.remove(id);
        }
    }

    /// Check if a timeline is playing
    pub fn is_timeline_playing(&self, id: TimelineId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| {
                inner
                    .lock()
                    .unwrap()
                    .timelines
                    .get(id)
                    .map(|t| t.is_playing())
            })
            .unwrap_or(false)
    }

    /// Access a timeline to modify or inspect it
    ///
    /// Returns None if the scheduler is dropped or the timeline doesn't
    /// exist.
    pub fn with_timeline<F, R>(&self, id: TimelineId, f: F) -> Option<R>
    where
        F: FnOnce(&mut Timeline) -> R,
    {
        self.inner.upgrade().and_then(|inner| {
            inner
                .lock()
                .unwrap()
                .timelines
                .get_mut(id)
                .map(|timeline| f(timeline))
        })
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

// ============================================================================
// Scene Player
// ============================================================================

/// A registered timeline with playback control
///
/// Wraps a `TimelineId` and the scheduler handle; the timeline is removed
/// from the scheduler when the player is dropped, which is the lifecycle
/// guarantee scenes rely on for teardown.
///
/// # Example
///
/// ```ignore
/// let mut timeline = Timeline::with_sink(stage.sink());
/// timeline.push(step);
///
/// let player = ScenePlayer::new(scheduler.handle(), timeline);
/// player.start();
/// // ... scheduler.tick(dt) drives it ...
/// ```
pub struct ScenePlayer {
    handle: SchedulerHandle,
    timeline_id: Option<TimelineId>,
}

impl ScenePlayer {
    /// Register a timeline and wrap its id
    pub fn new(handle: SchedulerHandle, timeline: Timeline) -> Self {
        let timeline_id = handle.register_timeline(timeline);
        if timeline_id.is_none() {
            tracing::debug!("scheduler dropped before timeline registration; player is inert");
        }
        Self {
            handle,
            timeline_id,
        }
    }

    /// Rewind to the beginning and play forward
    pub fn start(&self) {
        self.with(|t| t.start());
    }

    /// Establish the `from` values of immediate-render steps without
    /// playing
    pub fn prime(&self) {
        self.with(|t| t.prime());
    }

    /// Play forward from the current position
    pub fn play(&self) {
        self.with(|t| t.play());
    }

    /// Play backward from the current position
    pub fn reverse(&self) {
        self.with(|t| t.reverse());
    }

    /// Freeze at the current interpolated values
    pub fn pause(&self) {
        self.with(|t| t.pause());
    }

    /// Continue in the current direction
    pub fn resume(&self) {
        self.with(|t| t.resume());
    }

    /// Halt without firing completion
    pub fn stop(&self) {
        self.with(|t| t.stop());
    }

    /// Jump to a time position and apply its values
    pub fn seek(&self, time_ms: f32) {
        self.with(|t| t.seek(time_ms));
    }

    /// Set the forward-completion callback
    pub fn set_on_complete(&self, callback: CompletionCallback) {
        self.with(|t| t.set_on_complete(callback));
    }

    pub fn is_playing(&self) -> bool {
        self.timeline_id
            .map(|id| self.handle.is_timeline_playing(id))
            .unwrap_or(false)
    }

    pub fn direction(&self) -> Option<PlayDirection> {
        self.timeline_id
            .and_then(|id| self.handle.with_timeline(id, |t| t.direction()))
    }

    /// Overall progress, 0.0 to 1.0
    pub fn progress(&self) -> f32 {
        self.timeline_id
            .and_then(|id| self.handle.with_timeline(id, |t| t.progress()))
            .unwrap_or(0.0)
    }

    /// The registered timeline id, if the scheduler was alive at creation
    pub fn timeline_id(&self) -> Option<TimelineId> {
        self.timeline_id
    }

    fn with(&self, f: impl FnOnce(&mut Timeline)) {
        if let Some(id) = self.timeline_id {
            self.handle.with_timeline(id, f);
        }
    }
}

impl Drop for ScenePlayer {
    fn drop(&mut self) {
        if let Some(id) = self.timeline_id {
            self.handle.remove_timeline(id);
        }
    }
}
