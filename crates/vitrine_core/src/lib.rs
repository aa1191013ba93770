//! Vitrine Core
//!
//! This crate provides the foundational primitives for the Vitrine scene
//! animator:
//!
//! - **Style Model**: the visual properties an animation may mutate
//!   (opacity, transform, color, fill width) and linear interpolation
//!   over them
//! - **Events**: unified event-type constants for pointer, scroll, and
//!   mount/unmount notifications
//! - **Capability**: hover-capability environment query used to pick
//!   between hover and click activation
//! - **Page Chrome**: single-assignment, process-wide chrome configuration
//!   (scrollbar styling, accent palette) installed once at startup
//!
//! # Example
//!
//! ```rust
//! use vitrine_core::{Interpolate, StyleProperty, StyleValue, VisualStyle};
//!
//! let mut style = VisualStyle::default();
//! style.set(StyleProperty::Opacity, StyleValue::Float(0.5));
//! assert_eq!(style.opacity, 0.5);
//!
//! // Property values interpolate linearly
//! let mid = StyleValue::Float(0.0).lerp(&StyleValue::Float(10.0), 0.5);
//! assert_eq!(mid, StyleValue::Float(5.0));
//! ```

pub mod capability;
pub mod chrome;
pub mod color;
pub mod events;
pub mod geometry;
pub mod style;

pub use capability::PointerCapability;
pub use chrome::{install_page_chrome, page_chrome, try_page_chrome, PageChrome, ScrollbarStyle};
pub use color::Color;
pub use events::{event_types, Event, EventType};
pub use geometry::{Point, Rect, Size};
pub use style::{Interpolate, RawElementId, StyleProperty, StyleValue, StyleWrite, VisualStyle};
