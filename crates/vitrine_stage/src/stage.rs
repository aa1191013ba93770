//! Element stage
//!
//! The stage is the registry of animatable elements: each entry carries the
//! `VisualStyle` that timelines mutate and the layout bounds the embedding
//! view layer reports. The animator owns nothing else about an element; the
//! surrounding view creates, styles, and positions it.
//!
//! Elements are addressed three ways:
//! - `ElementId` - the slotmap key, handed out at registration
//! - raw u64 - the ffi-style form timelines carry across the crate seam
//! - string id - optional stable names for navigation and debugging
//!
//! `StageHandle` is a weak handle implementing `StyleWrite`; every
//! operation through it is a silent no-op once the stage is dropped, which
//! is what keeps late animation frames harmless.

use std::sync::{Arc, Mutex, Weak};

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, Key, SlotMap};
use vitrine_core::{Rect, RawElementId, StyleProperty, StyleValue, StyleWrite, VisualStyle};

use crate::error::StageError;

new_key_type! {
    /// Handle to a staged element
    pub struct ElementId;
}

impl ElementId {
    /// Convert to raw u64 for carrying through the animation crate
    pub fn to_raw(self) -> RawElementId {
        self.data().as_ffi()
    }

    /// Reconstruct from raw u64
    ///
    /// The raw value must have been created by `to_raw()` on a valid
    /// `ElementId`; anything else resolves to no element.
    pub fn from_raw(raw: RawElementId) -> Self {
        ElementId::from(slotmap::KeyData::from_ffi(raw))
    }
}

struct ElementEntry {
    style: VisualStyle,
    bounds: Option<Rect>,
    string_id: Option<String>,
}

struct StageInner {
    elements: SlotMap<ElementId, ElementEntry>,
    ids: FxHashMap<String, ElementId>,
}

/// Registry of animatable elements and their visual styles
pub struct Stage {
    inner: Arc<Mutex<StageInner>>,
}

impl Stage {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StageInner {
                elements: SlotMap::with_key(),
                ids: FxHashMap::default(),
            })),
        }
    }

    /// Register an element with its initial style
    pub fn insert(&self, style: VisualStyle) -> ElementId {
        self.inner.lock().unwrap().elements.insert(ElementEntry {
            style,
            bounds: None,
            string_id: None,
        })
    }

    /// Register an element under a stable string id
    ///
    /// If the id already exists, the old mapping is replaced (last-wins).
    /// In debug builds, a warning is logged for duplicate ids.
    pub fn insert_with_id(&self, id: impl Into<String>, style: VisualStyle) -> ElementId {
        let id = id.into();
        let mut inner = self.inner.lock().unwrap();

        #[cfg(debug_assertions)]
        if inner.ids.contains_key(&id) {
            tracing::warn!("duplicate element id registered: {}", id);
        }

        let element = inner.elements.insert(ElementEntry {
            style,
            bounds: None,
            string_id: Some(id.clone()),
        });
        inner.ids.insert(id, element);
        element
    }

    /// Remove an element; pending animation writes to it become no-ops
    pub fn remove(&self, element: ElementId) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(entry) = inner.elements.remove(element) {
            if let Some(id) = entry.string_id {
                inner.ids.remove(&id);
            }
        }
    }

    /// Look up an element by string id
    pub fn lookup(&self, id: &str) -> Option<ElementId> {
        self.inner.lock().unwrap().ids.get(id).copied()
    }

    /// Look up an element by string id, erroring when absent
    pub fn require(&self, id: &str) -> Result<ElementId, StageError> {
        self.lookup(id)
            .ok_or_else(|| StageError::UnknownElement(id.to_string()))
    }

    /// Current style of an element
    pub fn style(&self, element: ElementId) -> Option<VisualStyle> {
        self.inner
            .lock()
            .unwrap()
            .elements
            .get(element)
            .map(|e| e.style)
    }

    /// Report layout bounds for an element (document coordinates)
    pub fn set_bounds(&self, element: ElementId, bounds: Rect) {
        if let Some(entry) = self.inner.lock().unwrap().elements.get_mut(element) {
            entry.bounds = Some(bounds);
        }
    }

    /// Layout bounds previously reported for an element
    pub fn bounds(&self, element: ElementId) -> Option<Rect> {
        self.inner
            .lock()
            .unwrap()
            .elements
            .get(element)
            .and_then(|e| e.bounds)
    }

    pub fn contains(&self, element: ElementId) -> bool {
        self.inner.lock().unwrap().elements.contains_key(element)
    }

    pub fn element_count(&self) -> usize {
        self.inner.lock().unwrap().elements.len()
    }

    /// Get a weak handle for style reads/writes
    pub fn handle(&self) -> StageHandle {
        StageHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Get the style sink timelines write through
    pub fn sink(&self) -> Arc<dyn StyleWrite> {
        Arc::new(self.handle())
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the stage
///
/// Implements `StyleWrite` so timelines can target staged elements by raw
/// id. All operations no-op once the stage is dropped.
#[derive(Clone)]
pub struct StageHandle {
    inner: Weak<Mutex<StageInner>>,
}

impl StageHandle {
    /// Current style of an element
    pub fn style(&self, element: ElementId) -> Option<VisualStyle> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().elements.get(element).map(|e| e.style))
    }

    /// Layout bounds previously reported for an element
    pub fn bounds(&self, element: ElementId) -> Option<Rect> {
        self.inner.upgrade().and_then(|inner| {
            inner
                .lock()
                .unwrap()
                .elements
                .get(element)
                .and_then(|e| e.bounds)
        })
    }

    /// Write a single property on an element
    pub fn write_style(&self, element: ElementId, property: StyleProperty, value: StyleValue) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(entry) = inner.lock().unwrap().elements.get_mut(element) {
                entry.style.set(property, value);
            }
        }
    }

    /// Whether the stage is still alive
    pub fn is_stage_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// This handle as a boxed style sink
    pub fn as_sink(&self) -> Arc<dyn StyleWrite> {
        Arc::new(self.clone())
    }
}

impl StyleWrite for StageHandle {
    fn write(&self, target: RawElementId, property: StyleProperty, value: StyleValue) {
        // Removed or never-registered targets are skipped silently
        self.write_style(ElementId::from_raw(target), property, value);
    }

    fn is_alive(&self) -> bool {
        self.is_stage_alive()
    }
}
