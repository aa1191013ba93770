//! Trigger binding
//!
//! Attaches a playable timeline to an activation condition: viewport
//! intersection, pointer hover, pointer click, or mount. Each binding
//! registers exactly one observer or listener, records its release with
//! the owning `SceneScope`, and fires in registration order when several
//! bindings watch overlapping elements.
//!
//! Hover capability is sampled once when the binding is created: on a
//! touch-only device a hover condition is substituted with click before
//! the binding is stored.
//!
//! # Example
//!
//! ```ignore
//! let mut triggers = Triggers::new(stage.handle(), PointerCapability::Hover);
//! triggers.set_viewport(Viewport::new(1000.0, 0.0));
//!
//! triggers.bind(
//!     TriggerBinding::new(
//!         section,
//!         TriggerCondition::ScrollIntersect { enter_ratio: 0.8 },
//!         ReplayPolicy::PlayReverseOnLeave,
//!         entrance_player,
//!     ),
//!     &scope,
//! );
//!
//! // From the host event loop:
//! triggers.update_scroll(Viewport::new(1000.0, scroll_y));
//! triggers.dispatch(&event);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use indexmap::IndexMap;
use vitrine_animation::ScenePlayer;
use vitrine_core::{event_types, Event, PointerCapability};

use crate::events::{EventContext, HandlerRegistry};
use crate::lifecycle::{Disposable, SceneScope};
use crate::observer::{Crossing, IntersectionObserver, Viewport};
use crate::stage::{ElementId, StageHandle};

/// The condition that activates a bound timeline
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriggerCondition {
    /// Top of the target crosses `enter_ratio` of the viewport height
    ScrollIntersect { enter_ratio: f32 },
    /// Pointer enters/leaves the target (substituted with click on
    /// touch-only devices)
    PointerHover,
    /// Pointer click on the target
    PointerClick,
    /// Fires exactly once when the binding is created
    Mount,
}

/// What happens when the condition re-fires or un-fires
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplayPolicy {
    /// Play on the first activation, ignore everything after
    PlayOnce,
    /// Play on activation, reverse when the condition un-fires
    PlayReverseOnLeave,
    /// Alternate play/reverse on each activation
    Toggle,
}

/// A timeline attached to an activation condition
pub struct TriggerBinding {
    pub target: ElementId,
    pub condition: TriggerCondition,
    pub policy: ReplayPolicy,
    pub player: Arc<ScenePlayer>,
}

impl TriggerBinding {
    pub fn new(
        target: ElementId,
        condition: TriggerCondition,
        policy: ReplayPolicy,
        player: Arc<ScenePlayer>,
    ) -> Self {
        Self {
            target,
            condition,
            policy,
            player,
        }
    }
}

/// Identifier of a registered binding
pub type BindingId = u64;

struct BindingEntry {
    target: ElementId,
    condition: TriggerCondition,
    policy: ReplayPolicy,
    player: Arc<ScenePlayer>,
    observer: Option<IntersectionObserver>,
    played: bool,
    toggled_on: bool,
    released: Arc<AtomicBool>,
}

impl BindingEntry {
    fn is_released(&self) -> bool {
        self.released.load(Ordering::Acquire)
    }
}

/// The set of live trigger bindings for one stage
///
/// The host feeds pointer events through `dispatch` and scroll updates
/// through `update_scroll`; both walk bindings in registration order.
/// Custom per-element handlers registered on `handlers_mut()` receive the
/// event after the bindings have run.
pub struct Triggers {
    stage: StageHandle,
    capability: PointerCapability,
    viewport: Viewport,
    bindings: IndexMap<BindingId, BindingEntry>,
    handlers: HandlerRegistry,
    next_id: BindingId,
}

impl Triggers {
    pub fn new(stage: StageHandle, capability: PointerCapability) -> Self {
        Self {
            stage,
            capability,
            viewport: Viewport::default(),
            bindings: IndexMap::new(),
            handlers: HandlerRegistry::new(),
            next_id: 1,
        }
    }

    /// The capability sampled at construction
    pub fn capability(&self) -> PointerCapability {
        self.capability
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Update the viewport without re-evaluating intersections
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Custom per-element event handlers, dispatched after bindings
    pub fn handlers_mut(&mut self) -> &mut HandlerRegistry {
        &mut self.handlers
    }

    /// Register a binding and record its release with the scope
    ///
    /// A `Mount` binding plays immediately and never again. Hover bindings
    /// on touch-only devices are stored as click bindings.
    pub fn bind(&mut self, binding: TriggerBinding, scope: &SceneScope) -> BindingId {
        let condition = match binding.condition {
            TriggerCondition::PointerHover if !self.capability.supports_hover() => {
                tracing::debug!(element = ?binding.target, "hover unsupported; binding click instead");
                TriggerCondition::PointerClick
            }
            other => other,
        };

        let observer = match condition {
            TriggerCondition::ScrollIntersect { enter_ratio } => {
                Some(IntersectionObserver::new(enter_ratio))
            }
            _ => None,
        };

        let released = Arc::new(AtomicBool::new(false));
        let mut entry = BindingEntry {
            target: binding.target,
            condition,
            policy: binding.policy,
            player: binding.player,
            observer,
            played: false,
            toggled_on: false,
            released: Arc::clone(&released),
        };

        if condition == TriggerCondition::Mount {
            entry.player.start();
            entry.played = true;
        } else {
            // Hidden-until-triggered content needs its entrance state now
            entry.player.prime();
        }

        let id = self.next_id;
        self.next_id += 1;
        let player = Arc::clone(&entry.player);
        self.bindings.insert(id, entry);

        // Stop the timeline when the scope tears down so no later frame
        // can write into the view
        scope.add(Disposable::new(move || {
            released.store(true, Ordering::Release);
            player.stop();
        }));

        id
    }

    /// Number of bindings that have not been released
    pub fn live_binding_count(&self) -> usize {
        self.bindings.values().filter(|b| !b.is_released()).count()
    }

    /// Route a pointer event to matching bindings, then custom handlers
    pub fn dispatch(&mut self, event: &Event) {
        let element = ElementId::from_raw(event.target);

        for entry in self.bindings.values_mut() {
            if entry.is_released() || entry.target != element {
                continue;
            }
            match (entry.condition, event.event_type) {
                (TriggerCondition::PointerHover, event_types::POINTER_ENTER) => {
                    if entry.policy != ReplayPolicy::PlayOnce || !entry.played {
                        entry.player.play();
                        entry.played = true;
                    }
                }
                (TriggerCondition::PointerHover, event_types::POINTER_LEAVE) => {
                    match entry.policy {
                        ReplayPolicy::PlayOnce => {}
                        ReplayPolicy::PlayReverseOnLeave | ReplayPolicy::Toggle => {
                            entry.player.reverse();
                        }
                    }
                }
                (TriggerCondition::PointerClick, event_types::POINTER_UP) => match entry.policy {
                    ReplayPolicy::PlayOnce => {
                        if !entry.played {
                            entry.player.play();
                            entry.played = true;
                        }
                    }
                    // Without a leave edge, clicks alternate the direction
                    ReplayPolicy::PlayReverseOnLeave | ReplayPolicy::Toggle => {
                        if entry.toggled_on {
                            entry.player.reverse();
                        } else {
                            entry.player.play();
                            entry.played = true;
                        }
                        entry.toggled_on = !entry.toggled_on;
                    }
                },
                _ => {}
            }
        }

        self.prune_released();
        self.handlers
            .dispatch(&EventContext::new(event.event_type, element));
    }

    /// Re-evaluate every intersection binding against a new scroll position
    ///
    /// Elements without reported bounds are skipped silently; they may not
    /// be laid out yet.
    pub fn update_scroll(&mut self, viewport: Viewport) {
        self.viewport = viewport;

        for entry in self.bindings.values_mut() {
            if entry.is_released() {
                continue;
            }
            let Some(observer) = entry.observer.as_mut() else {
                continue;
            };
            let Some(bounds) = self.stage.bounds(entry.target) else {
                continue;
            };

            match observer.update(bounds.top(), &viewport) {
                Some(Crossing::Entered) => match entry.policy {
                    ReplayPolicy::PlayOnce => {
                        if !entry.played {
                            entry.player.play();
                            entry.played = true;
                        }
                    }
                    ReplayPolicy::PlayReverseOnLeave | ReplayPolicy::Toggle => {
                        entry.player.play();
                        entry.played = true;
                    }
                },
                Some(Crossing::ExitedUpward) => match entry.policy {
                    ReplayPolicy::PlayOnce => {}
                    ReplayPolicy::PlayReverseOnLeave | ReplayPolicy::Toggle => {
                        if entry.played {
                            entry.player.reverse();
                        }
                    }
                },
                None => {}
            }
        }

        self.prune_released();
    }

    fn prune_released(&mut self) {
        self.bindings.retain(|_, entry| !entry.is_released());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use vitrine_animation::{
        AnimationScheduler, Easing, PlayDirection, Step, StepPosition, Timeline,
    };
    use vitrine_core::{Rect, StyleProperty, VisualStyle};
    use crate::stage::Stage;

    struct Fixture {
        stage: Stage,
        scheduler: AnimationScheduler,
        scope: SceneScope,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                stage: Stage::new(),
                scheduler: AnimationScheduler::new(),
                scope: SceneScope::new(),
            }
        }

        fn fade_player(&self, target: ElementId) -> Arc<ScenePlayer> {
            let mut tl = Timeline::with_sink(self.stage.sink());
            tl.push(
                Step::new(800.0)
                    .target(target.to_raw())
                    .track(StyleProperty::Opacity, 0.0.into(), 1.0.into())
                    .easing(Easing::QuintOut)
                    .position(StepPosition::At(0.0)),
            );
            Arc::new(ScenePlayer::new(self.scheduler.handle(), tl))
        }
    }

    #[test]
    fn test_scroll_entrance_plays_once_then_reverses_once() {
        let fx = Fixture::new();
        let section = fx.stage.insert(VisualStyle::default());
        fx.stage.set_bounds(section, Rect::new(0.0, 1200.0, 800.0, 600.0));

        let player = fx.fade_player(section);
        let mut triggers = Triggers::new(fx.stage.handle(), PointerCapability::Hover);
        triggers.bind(
            TriggerBinding::new(
                section,
                TriggerCondition::ScrollIntersect { enter_ratio: 0.8 },
                ReplayPolicy::PlayReverseOnLeave,
                Arc::clone(&player),
            ),
            &fx.scope,
        );

        // Above the threshold: nothing plays
        triggers.update_scroll(Viewport::new(1000.0, 0.0));
        assert!(!player.is_playing());

        // Crossing downward plays forward, exactly once
        triggers.update_scroll(Viewport::new(1000.0, 500.0));
        assert!(player.is_playing());
        assert_eq!(player.direction(), Some(PlayDirection::Forward));

        triggers.update_scroll(Viewport::new(1000.0, 520.0));
        fx.scheduler.tick(400.0);
        let mid = fx.stage.style(section).unwrap().opacity;
        assert!(mid > 0.0 && mid <= 1.0);

        // Crossing back upward reverses, exactly once
        triggers.update_scroll(Viewport::new(1000.0, 0.0));
        assert_eq!(player.direction(), Some(PlayDirection::Reverse));
        triggers.update_scroll(Viewport::new(1000.0, 10.0));
        assert_eq!(player.direction(), Some(PlayDirection::Reverse));
    }

    #[test]
    fn test_play_once_never_reverses() {
        let fx = Fixture::new();
        let section = fx.stage.insert(VisualStyle::default());
        fx.stage.set_bounds(section, Rect::new(0.0, 1200.0, 800.0, 600.0));

        let player = fx.fade_player(section);
        let mut triggers = Triggers::new(fx.stage.handle(), PointerCapability::Hover);
        triggers.bind(
            TriggerBinding::new(
                section,
                TriggerCondition::ScrollIntersect { enter_ratio: 0.9 },
                ReplayPolicy::PlayOnce,
                Arc::clone(&player),
            ),
            &fx.scope,
        );

        triggers.update_scroll(Viewport::new(1000.0, 500.0));
        fx.scheduler.tick(1000.0);
        assert_eq!(fx.stage.style(section).unwrap().opacity, 1.0);

        triggers.update_scroll(Viewport::new(1000.0, 0.0));
        assert!(!player.is_playing());
        assert_eq!(fx.stage.style(section).unwrap().opacity, 1.0);
    }

    #[test]
    fn test_touch_only_substitutes_click_for_hover() {
        let fx = Fixture::new();
        let card = fx.stage.insert(VisualStyle::default());

        let player = fx.fade_player(card);
        let mut triggers = Triggers::new(fx.stage.handle(), PointerCapability::TouchOnly);
        triggers.bind(
            TriggerBinding::new(
                card,
                TriggerCondition::PointerHover,
                ReplayPolicy::PlayReverseOnLeave,
                Arc::clone(&player),
            ),
            &fx.scope,
        );

        // A synthetic hover (pointer move without a press) does nothing
        triggers.dispatch(&Event::new(event_types::POINTER_ENTER, card.to_raw()));
        assert!(!player.is_playing());

        // A tap activates
        triggers.dispatch(&Event::new(event_types::POINTER_UP, card.to_raw()));
        assert!(player.is_playing());
        assert_eq!(player.direction(), Some(PlayDirection::Forward));

        // A second tap toggles back
        triggers.dispatch(&Event::new(event_types::POINTER_UP, card.to_raw()));
        assert_eq!(player.direction(), Some(PlayDirection::Reverse));
    }

    #[test]
    fn test_hover_plays_and_reverses() {
        let fx = Fixture::new();
        let card = fx.stage.insert(VisualStyle::default());

        let player = fx.fade_player(card);
        let mut triggers = Triggers::new(fx.stage.handle(), PointerCapability::Hover);
        triggers.bind(
            TriggerBinding::new(
                card,
                TriggerCondition::PointerHover,
                ReplayPolicy::PlayReverseOnLeave,
                Arc::clone(&player),
            ),
            &fx.scope,
        );

        triggers.dispatch(&Event::new(event_types::POINTER_ENTER, card.to_raw()));
        assert_eq!(player.direction(), Some(PlayDirection::Forward));

        triggers.dispatch(&Event::new(event_types::POINTER_LEAVE, card.to_raw()));
        assert_eq!(player.direction(), Some(PlayDirection::Reverse));
    }

    #[test]
    fn test_mount_plays_once_and_signals_completion() {
        let fx = Fixture::new();
        let splash = fx.stage.insert(VisualStyle::default());

        let completed = Arc::new(Mutex::new(false));
        let player = fx.fade_player(splash);
        let inner = Arc::clone(&completed);
        player.set_on_complete(fx.scope.guard(move || {
            *inner.lock().unwrap() = true;
        }));

        let mut triggers = Triggers::new(fx.stage.handle(), PointerCapability::Hover);
        triggers.bind(
            TriggerBinding::new(
                splash,
                TriggerCondition::Mount,
                ReplayPolicy::PlayOnce,
                Arc::clone(&player),
            ),
            &fx.scope,
        );

        // Plays immediately on bind
        assert!(player.is_playing());
        fx.scheduler.tick(1000.0);
        assert!(*completed.lock().unwrap());
        assert!(!player.is_playing());
    }

    #[test]
    fn test_disposed_scope_releases_bindings() {
        let fx = Fixture::new();
        let section = fx.stage.insert(VisualStyle::default());
        fx.stage.set_bounds(section, Rect::new(0.0, 1200.0, 800.0, 600.0));

        let player = fx.fade_player(section);
        let mut triggers = Triggers::new(fx.stage.handle(), PointerCapability::Hover);
        triggers.bind(
            TriggerBinding::new(
                section,
                TriggerCondition::ScrollIntersect { enter_ratio: 0.8 },
                ReplayPolicy::PlayReverseOnLeave,
                Arc::clone(&player),
            ),
            &fx.scope,
        );
        assert_eq!(triggers.live_binding_count(), 1);

        fx.scope.dispose();
        assert_eq!(triggers.live_binding_count(), 0);

        // A released binding no longer responds
        triggers.update_scroll(Viewport::new(1000.0, 500.0));
        assert!(!player.is_playing());
    }
}
