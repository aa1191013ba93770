//! Vitrine Stage
//!
//! The element stage and everything that connects timelines to a live
//! view:
//!
//! - **Stage**: registry of animatable elements, their visual styles, and
//!   reported layout bounds; the `StyleWrite` sink timelines target
//! - **Triggers**: bind timelines to viewport intersection, hover, click,
//!   or mount conditions, with replay policies and capability fallback
//! - **Exclusivity**: at most one active card per list, with highlight
//!   play/reverse and sibling dimming
//! - **Lifecycle**: scene scopes that release every observer, listener,
//!   and timeline on teardown and revoke pending callbacks first
//! - **Events**: per-element handler registry dispatched in registration
//!   order
//! - **Scroll**: the smooth-scroll hand-off collaborator
//!
//! # Example
//!
//! ```ignore
//! use vitrine_stage::prelude::*;
//!
//! let stage = Stage::new();
//! let scheduler = AnimationScheduler::new();
//! let scope = SceneScope::new();
//!
//! let mut triggers = Triggers::new(stage.handle(), PointerCapability::Hover);
//! triggers.bind(
//!     TriggerBinding::new(section, condition, policy, player),
//!     &scope,
//! );
//!
//! // Host loop: report bounds, feed events, tick frames
//! triggers.update_scroll(viewport);
//! scheduler.tick(dt_ms);
//! ```

pub mod error;
pub mod events;
pub mod exclusivity;
pub mod lifecycle;
pub mod observer;
pub mod scroll;
pub mod stage;
pub mod trigger;

pub use error::StageError;
pub use events::{EventCallback, EventContext, EventHandlers, HandlerRegistry};
pub use exclusivity::{CardHandles, DimStyle, ExclusiveGroup};
pub use lifecycle::{Disposable, RevocationToken, SceneScope};
pub use observer::{Crossing, IntersectionObserver, Viewport};
pub use scroll::{RecordingScroller, ScrollIntoView, ScrollRequest};
pub use stage::{ElementId, Stage, StageHandle};
pub use trigger::{BindingId, ReplayPolicy, TriggerBinding, TriggerCondition, Triggers};

/// Convenience re-exports for downstream scenes
pub mod prelude {
    pub use crate::error::StageError;
    pub use crate::events::{EventContext, EventHandlers, HandlerRegistry};
    pub use crate::exclusivity::{CardHandles, DimStyle, ExclusiveGroup};
    pub use crate::lifecycle::{Disposable, SceneScope};
    pub use crate::observer::{Crossing, IntersectionObserver, Viewport};
    pub use crate::scroll::{ScrollIntoView, ScrollRequest};
    pub use crate::stage::{ElementId, Stage, StageHandle};
    pub use crate::trigger::{ReplayPolicy, TriggerBinding, TriggerCondition, Triggers};
    pub use vitrine_animation::{
        AnimationScheduler, Easing, ScenePlayer, SchedulerHandle, StaggerConfig, Step,
        StepPosition, Timeline,
    };
    pub use vitrine_core::{
        event_types, Color, Event, PointerCapability, Rect, StyleProperty, StyleValue, VisualStyle,
    };
}
