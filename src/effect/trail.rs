//! Effects that build on the previous frame

use super::RenderContext;
use crate::color::Rgb;
use crate::element::Element;

/// Longest meteor head in elements
const MAX_METEOR_LEN: usize = 4;
/// Per-frame decay of the meteor trail
const METEOR_DECAY: f32 = 0.7;
/// Chance in percent that a new drop enters the waterfall
const DROP_CHANCE: u32 = 20;

/// Meteor sweeping through the group, its trail decaying each frame
///
/// The head enters from before the first element, so the cycle is
/// `len + meteor_len` steps long.
pub(super) fn meteor(ctx: &mut RenderContext<'_>) {
    let color = ctx.params.color1;
    let len = ctx.frame.len();
    let meteor_len = (len / 4).min(MAX_METEOR_LEN);
    let offset = usize::from(ctx.step) % (len + meteor_len);
    with_elements!(&mut ctx.frame, |leds| meteor_frame(leds, color, offset, meteor_len));
}

/// Shift the group by one element and feed a random drop at the start
pub(super) fn waterfall(ctx: &mut RenderContext<'_>) {
    let color = ctx.params.color1;
    let drop = ctx.random.random_below(100) < DROP_CHANCE;
    with_elements!(&mut ctx.frame, |leds| waterfall_frame(leds, color, drop));
}

#[allow(clippy::cast_precision_loss)]
fn meteor_frame<E: Element>(leds: &mut [E], color: Rgb, offset: usize, meteor_len: usize) {
    for led in leds.iter_mut() {
        *led = led.decay(METEOR_DECAY);
    }

    for segment in 0..meteor_len {
        // `offset` counts from `meteor_len` elements before the group start
        let Some(index) = (offset + segment).checked_sub(meteor_len) else {
            continue;
        };
        if let Some(led) = leds.get_mut(index) {
            let intensity = (meteor_len - segment) as f32 / meteor_len as f32;
            *led = E::shade(color, intensity);
        }
    }
}

fn waterfall_frame<E: Element>(leds: &mut [E], color: Rgb, drop: bool) {
    let last = leds.len() - 1;
    leds.copy_within(..last, 1);
    leds[0] = if drop { E::lit(color) } else { E::off() };
}
