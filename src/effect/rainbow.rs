//! Rainbow cycling effect
//!
//! Color strips spread the full hue wheel across the group and rotate it by
//! one hue step per frame. Binary strips fall back to the travelling wave.

use super::RenderContext;
use super::wave::wave_sample;
use crate::buffer::Frame;
use crate::color::hue_wheel;

/// Number of positions on the hue wheel
const HUE_STEPS: usize = 256;

#[allow(clippy::cast_possible_truncation)]
pub(super) fn rainbow(ctx: &mut RenderContext<'_>) {
    let step = ctx.step;
    match &mut ctx.frame {
        Frame::Color(colors) => {
            let len = colors.len();
            for (index, color) in colors.iter_mut().enumerate() {
                let hue = (index * 255 / len + usize::from(step)) % HUE_STEPS;
                *color = hue_wheel(hue as u8);
            }
        }
        Frame::Binary(states) => {
            for (index, state) in states.iter_mut().enumerate() {
                *state = wave_sample(step, index) > 0.0;
            }
        }
    }
}
