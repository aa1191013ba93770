//! Event handler storage and dispatch for staged elements
//!
//! Handlers are registered per element and keyed by event type; the host
//! routes platform events here. Dispatch across elements follows
//! registration order, and handlers for one element run in the order they
//! were added. Callbacks use `Rc` since all dispatch happens on the UI
//! thread.
//!
//! # Example
//!
//! ```ignore
//! let mut handlers = EventHandlers::new();
//! handlers.on_hover_enter(|ctx| {
//!     println!("hovered {:?}", ctx.element);
//! });
//! registry.register(card_root, handlers);
//! ```

use std::rc::Rc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use vitrine_core::{event_types, EventType};

use crate::stage::ElementId;

/// Callback for handling events
pub type EventCallback = Rc<dyn Fn(&EventContext)>;

/// Context passed to event handlers
#[derive(Clone, Copy, Debug)]
pub struct EventContext {
    /// The type of event that occurred
    pub event_type: EventType,
    /// The element that received the event
    pub element: ElementId,
}

impl EventContext {
    pub fn new(event_type: EventType, element: ElementId) -> Self {
        Self {
            event_type,
            element,
        }
    }
}

/// Storage for event handlers on an element
#[derive(Default, Clone)]
pub struct EventHandlers {
    handlers: FxHashMap<EventType, Vec<EventCallback>>,
}

impl EventHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn has_handler(&self, event_type: EventType) -> bool {
        self.handlers.contains_key(&event_type)
    }

    /// Register a handler for an event type
    pub fn on<F>(&mut self, event_type: EventType, handler: F)
    where
        F: Fn(&EventContext) + 'static,
    {
        self.handlers
            .entry(event_type)
            .or_default()
            .push(Rc::new(handler));
    }

    /// Dispatch an event to all registered handlers for that type
    pub fn dispatch(&self, ctx: &EventContext) {
        if let Some(handlers) = self.handlers.get(&ctx.event_type) {
            for handler in handlers {
                handler(ctx);
            }
        }
    }

    /// Merge another set of handlers into this one
    pub fn merge(&mut self, other: EventHandlers) {
        for (event_type, handlers) in other.handlers {
            self.handlers
                .entry(event_type)
                .or_default()
                .extend(handlers);
        }
    }

    // =========================================================================
    // Convenience registration methods
    // =========================================================================

    /// Register a click handler (fires on pointer release)
    pub fn on_click<F>(&mut self, handler: F)
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(event_types::POINTER_UP, handler);
    }

    /// Register a hover enter handler
    pub fn on_hover_enter<F>(&mut self, handler: F)
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(event_types::POINTER_ENTER, handler);
    }

    /// Register a hover leave handler
    pub fn on_hover_leave<F>(&mut self, handler: F)
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(event_types::POINTER_LEAVE, handler);
    }

    /// Register a mount handler (element added to the live view)
    pub fn on_mount<F>(&mut self, handler: F)
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(event_types::MOUNT, handler);
    }

    /// Register an unmount handler (element removed from the live view)
    pub fn on_unmount<F>(&mut self, handler: F)
    where
        F: Fn(&EventContext) + 'static,
    {
        self.on(event_types::UNMOUNT, handler);
    }
}

/// Handler registry for the whole stage
///
/// Stores handlers indexed by element in registration order, so overlapping
/// bindings fire in the order they were registered.
#[derive(Default)]
pub struct HandlerRegistry {
    elements: IndexMap<ElementId, EventHandlers>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register handlers for an element
    ///
    /// Handlers registered for the same element merge with existing ones.
    pub fn register(&mut self, element: ElementId, handlers: EventHandlers) {
        if handlers.is_empty() {
            return;
        }
        self.elements
            .entry(element)
            .or_default()
            .merge(handlers);
    }

    pub fn get(&self, element: ElementId) -> Option<&EventHandlers> {
        self.elements.get(&element)
    }

    /// Dispatch an event to the target element's handlers
    pub fn dispatch(&self, ctx: &EventContext) {
        if let Some(handlers) = self.elements.get(&ctx.element) {
            handlers.dispatch(ctx);
        }
    }

    pub fn has_handler(&self, element: ElementId, event_type: EventType) -> bool {
        self.elements
            .get(&element)
            .map(|h| h.has_handler(event_type))
            .unwrap_or(false)
    }

    /// Remove handlers for an element
    pub fn remove(&mut self, element: ElementId) {
        self.elements.shift_remove(&element);
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }
}
