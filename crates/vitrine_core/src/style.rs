//! Animatable style model
//!
//! A `VisualStyle` is the full set of visual properties the animator may
//! mutate on an element: opacity, 2D transform, rotation, colors, and the
//! fill-indicator width. Animations never touch text content, structure,
//! or navigation state; this record is the entire write surface.
//!
//! The `StyleWrite` trait is the seam between the animation crate and the
//! element stage: timelines hold a `StyleWrite` sink and raw element ids,
//! so the animation engine never needs to know the stage's key type.

use crate::color::Color;

/// Raw element identifier as carried across crate boundaries
///
/// The stage converts between its slotmap keys and this ffi-style u64,
/// mirroring how animation ids travel between scheduler and render layers.
pub type RawElementId = u64;

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal (for settling detection)
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

impl Interpolate for Color {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Color::lerp(self, other, t)
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
    }
}

/// The visual properties a timeline step may animate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    /// Element opacity, 0.0 to 1.0
    Opacity,
    /// Horizontal translation in pixels
    TranslateX,
    /// Vertical translation in pixels
    TranslateY,
    /// Uniform scale factor
    Scale,
    /// Rotation around the horizontal axis, in degrees
    RotationX,
    /// Foreground (text) color
    TextColor,
    /// Background fill color
    Backdrop,
    /// Width of the fill indicator as a fraction of its track, 0.0 to 1.0
    FillWidth,
}

/// A property value: either a scalar or a color
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleValue {
    Float(f32),
    Color(Color),
}

impl StyleValue {
    pub fn as_float(&self) -> Option<f32> {
        match self {
            StyleValue::Float(v) => Some(*v),
            StyleValue::Color(_) => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            StyleValue::Color(c) => Some(*c),
            StyleValue::Float(_) => None,
        }
    }
}

impl Interpolate for StyleValue {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        match (self, other) {
            (StyleValue::Float(a), StyleValue::Float(b)) => StyleValue::Float(a.lerp(b, t)),
            (StyleValue::Color(a), StyleValue::Color(b)) => StyleValue::Color(a.lerp(b, t)),
            // Mismatched kinds cannot blend; snap at the end of the step
            _ => {
                if t < 1.0 {
                    *self
                } else {
                    *other
                }
            }
        }
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        match (self, other) {
            (StyleValue::Float(a), StyleValue::Float(b)) => a.approx_eq(b, epsilon),
            (StyleValue::Color(a), StyleValue::Color(b)) => a.approx_eq(b, epsilon),
            _ => false,
        }
    }
}

impl From<f32> for StyleValue {
    fn from(v: f32) -> Self {
        StyleValue::Float(v)
    }
}

impl From<Color> for StyleValue {
    fn from(c: Color) -> Self {
        StyleValue::Color(c)
    }
}

/// The mutable style record carried by every staged element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualStyle {
    pub opacity: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
    pub rotation_x: f32,
    pub text_color: Color,
    pub backdrop: Color,
    pub fill_width: f32,
}

impl Default for VisualStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            rotation_x: 0.0,
            text_color: Color::WHITE,
            backdrop: Color::TRANSPARENT,
            fill_width: 0.0,
        }
    }
}

impl VisualStyle {
    /// Read a property as a `StyleValue`
    pub fn get(&self, property: StyleProperty) -> StyleValue {
        match property {
            StyleProperty::Opacity => StyleValue::Float(self.opacity),
            StyleProperty::TranslateX => StyleValue::Float(self.translate_x),
            StyleProperty::TranslateY => StyleValue::Float(self.translate_y),
            StyleProperty::Scale => StyleValue::Float(self.scale),
            StyleProperty::RotationX => StyleValue::Float(self.rotation_x),
            StyleProperty::TextColor => StyleValue::Color(self.text_color),
            StyleProperty::Backdrop => StyleValue::Color(self.backdrop),
            StyleProperty::FillWidth => StyleValue::Float(self.fill_width),
        }
    }

    /// Write a property from a `StyleValue`
    ///
    /// A value of the wrong kind for the property is ignored with a debug
    /// log rather than panicking; a bad write is cosmetic, never fatal.
    pub fn set(&mut self, property: StyleProperty, value: StyleValue) {
        match (property, value) {
            (StyleProperty::Opacity, StyleValue::Float(v)) => self.opacity = v,
            (StyleProperty::TranslateX, StyleValue::Float(v)) => self.translate_x = v,
            (StyleProperty::TranslateY, StyleValue::Float(v)) => self.translate_y = v,
            (StyleProperty::Scale, StyleValue::Float(v)) => self.scale = v,
            (StyleProperty::RotationX, StyleValue::Float(v)) => self.rotation_x = v,
            (StyleProperty::TextColor, StyleValue::Color(c)) => self.text_color = c,
            (StyleProperty::Backdrop, StyleValue::Color(c)) => self.backdrop = c,
            (StyleProperty::FillWidth, StyleValue::Float(v)) => self.fill_width = v,
            (property, value) => {
                tracing::debug!(?property, ?value, "ignoring style write of mismatched kind");
            }
        }
    }
}

/// Sink for style writes produced by running timelines
///
/// Implemented by the element stage. Writes to unknown or removed elements
/// must be silent no-ops: elements can be conditionally present, and an
/// animation glitch is never allowed to become an error.
pub trait StyleWrite: Send + Sync {
    /// Apply a property value to the element with the given raw id
    fn write(&self, target: RawElementId, property: StyleProperty, value: StyleValue);

    /// Whether the underlying element store is still alive
    fn is_alive(&self) -> bool {
        true
    }
}
