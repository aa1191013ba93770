//! Vitrine Animation System
//!
//! Timeline choreography over the style model in `vitrine_core`.
//!
//! # Features
//!
//! - **Easing Presets**: the standard power, bounce, and elastic curves
//! - **Timelines**: ordered step sequences with absolute and relative
//!   offsets, deliberate overlap, and stagger support
//! - **Playback Control**: play, reverse, pause, resume, seek, with a
//!   completion callback for the forward direction
//! - **Scheduler**: host-driven frame ticking of every registered timeline
//! - **Interruptible**: reversing or stopping mid-flight freezes at the
//!   current interpolated value
//!
//! Timelines write through the `StyleWrite` seam, so a step whose target
//! set is empty, or whose element has been removed, is silently skipped.

pub mod easing;
pub mod scheduler;
pub mod timeline;

pub use easing::Easing;
pub use scheduler::{
    AnimationScheduler, ScenePlayer, SchedulerHandle, TimelineId,
};
pub use timeline::{
    CompletionCallback, PlayDirection, PropertyTrack, StaggerConfig, StaggerDirection, Step,
    StepPosition, Timeline,
};
