//! Element representations and the intensity projection
//!
//! A strip holds either on/off switches or full colors. Effects are written
//! once against [`Element`] and the two implementations decide how an
//! intensity lands on a concrete element: switches threshold it, colors
//! scale by it.

use crate::color::{BLACK, Rgb, scale_color};

/// Intensity above which a switch element is considered on
const SWITCH_THRESHOLD: f32 = 0.5;

/// State of a single element, as read from or written to a strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementState {
    /// On/off element
    Switch(bool),
    /// Full color element
    Color(Rgb),
}

impl From<bool> for ElementState {
    fn from(value: bool) -> Self {
        Self::Switch(value)
    }
}

impl From<Rgb> for ElementState {
    fn from(value: Rgb) -> Self {
        Self::Color(value)
    }
}

/// Projection of effect output onto one element representation
pub trait Element: Copy {
    /// Whether the element can show partial intensity
    const GRADED: bool;

    /// Dark element
    fn off() -> Self;

    /// Element fully lit with `color`
    fn lit(color: Rgb) -> Self;

    /// Project a brightness envelope value (0.0 - 1.0)
    fn level(color: Rgb, intensity: f32) -> Self;

    /// Project a pixel that belongs to a drawn shape
    ///
    /// Shapes such as a meteor tail or a snake body stay fully visible on
    /// switches and fade along their length on colors.
    fn shade(color: Rgb, intensity: f32) -> Self;

    /// Element after one frame of decay by `factor`
    #[must_use]
    fn decay(self, factor: f32) -> Self;
}

impl Element for bool {
    const GRADED: bool = false;

    fn off() -> Self {
        false
    }

    fn lit(_color: Rgb) -> Self {
        true
    }

    fn level(_color: Rgb, intensity: f32) -> Self {
        intensity > SWITCH_THRESHOLD
    }

    fn shade(_color: Rgb, _intensity: f32) -> Self {
        true
    }

    fn decay(self, _factor: f32) -> Self {
        false
    }
}

impl Element for Rgb {
    const GRADED: bool = true;

    fn off() -> Self {
        BLACK
    }

    fn lit(color: Rgb) -> Self {
        color
    }

    fn level(color: Rgb, intensity: f32) -> Self {
        scale_color(color, intensity)
    }

    fn shade(color: Rgb, intensity: f32) -> Self {
        scale_color(color, intensity)
    }

    fn decay(self, factor: f32) -> Self {
        scale_color(self, factor)
    }
}
