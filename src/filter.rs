//! Output filters applied while a frame is handed to the display sink
//!
//! Filters never touch the element buffer, so effects that decay the
//! previous frame always read unfiltered values.

use crate::color::Rgb;
use crate::element::ElementState;
use crate::math8::scale8;

/// Scales color elements by the effect brightness
///
/// Switch elements have no intensity and pass through unchanged.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BrightnessFilter {
    level: u8,
}

impl BrightnessFilter {
    pub(crate) const fn new(level: u8) -> Self {
        Self { level }
    }

    /// Check if the filter changes anything
    pub(crate) const fn is_active(self) -> bool {
        self.level != 255
    }

    pub(crate) fn apply(self, state: ElementState) -> ElementState {
        match state {
            ElementState::Color(color) if self.is_active() => ElementState::Color(Rgb {
                r: scale8(color.r, self.level),
                g: scale8(color.g, self.level),
                b: scale8(color.b, self.level),
            }),
            other => other,
        }
    }
}
