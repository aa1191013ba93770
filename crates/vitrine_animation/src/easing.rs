//! Easing functions
//!
//! Named interpolation curves applied to a normalized progress value in
//! the 0.0 to 1.0 range. The power family follows the usual polynomial
//! forms; bounce and elastic use the standard Penner formulas.

use std::f32::consts::PI;

/// A named easing curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// Quadratic ease-in
    QuadIn,
    /// Quadratic ease-out
    QuadOut,
    /// Quadratic ease-in-out
    QuadInOut,
    /// Cubic ease-in
    CubicIn,
    /// Cubic ease-out
    CubicOut,
    /// Cubic ease-in-out
    CubicInOut,
    /// Quartic ease-out
    QuartOut,
    /// Quintic ease-out
    QuintOut,
    /// Bounce at the end of the curve
    BounceOut,
    /// Overshoot and oscillate into place
    ///
    /// `amplitude` scales the overshoot (1.0 reaches exactly one unit past
    /// the target), `period` sets the oscillation wavelength as a fraction
    /// of the duration.
    ElasticOut { amplitude: f32, period: f32 },
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Linear
    }
}

impl Easing {
    /// The elastic curve used by entrance splashes: full amplitude, half
    /// period
    pub fn elastic_out(amplitude: f32, period: f32) -> Self {
        Easing::ElasticOut { amplitude, period }
    }

    /// Apply the curve to a progress value, clamped to 0.0 ..= 1.0
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::QuartOut => 1.0 - (1.0 - t).powi(4),
            Easing::QuintOut => 1.0 - (1.0 - t).powi(5),
            Easing::BounceOut => bounce_out(t),
            Easing::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
        }
    }
}

fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

fn elastic_out(t: f32, amplitude: f32, period: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    // Amplitudes below 1.0 cannot reach the target; clamp up
    let amplitude = amplitude.max(1.0);
    let period = if period > 0.0 { period } else { 0.3 };
    let s = period / (2.0 * PI) * (1.0 / amplitude).asin();
    amplitude * 2.0_f32.powf(-10.0 * t) * ((t - s) * (2.0 * PI) / period).sin() + 1.0
}
