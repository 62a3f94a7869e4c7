//! Effects that move a dot or a short shape across the group

use core::f32::consts::PI;

use super::{RenderContext, bounce_position, solid::clear};
use crate::color::Rgb;
use crate::element::Element;

/// Number of trailing elements on each side of the knight rider dot
const TRAIL_LEN: usize = 2;
/// Length of the bounce cycle in steps
const BOUNCE_CYCLE: u16 = 100;
/// Distance between lit elements of the marquee
const MARQUEE_SPACING: usize = 3;

/// Dot bouncing between both ends with a short fading trail on colors
pub(super) fn knight_rider(ctx: &mut RenderContext<'_>) {
    let color = ctx.params.color1;
    let position = bounce_position(ctx.step, ctx.frame.len());
    with_elements!(&mut ctx.frame, |leds| knight_rider_frame(leds, color, position));
}

/// Bouncing dot that leaves the previous frame decaying behind it
pub(super) fn cylon(ctx: &mut RenderContext<'_>) {
    let color = ctx.params.color1;
    let position = bounce_position(ctx.step, ctx.frame.len());
    with_elements!(&mut ctx.frame, |leds| cylon_frame(leds, color, position));
}

pub(super) fn chase(ctx: &mut RenderContext<'_>) {
    let color = ctx.params.color1;
    let position = usize::from(ctx.step) % ctx.frame.len();
    with_elements!(&mut ctx.frame, |leds| single_dot(leds, color, position));
}

/// Dot eased along a half sine, slowing down near both ends
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub(super) fn bounce(ctx: &mut RenderContext<'_>) {
    let color = ctx.params.color1;
    let last = ctx.frame.len() - 1;
    let normalized = f32::from(ctx.step % BOUNCE_CYCLE) / f32::from(BOUNCE_CYCLE);
    let position = libm::roundf(libm::sinf(normalized * PI) * last as f32) as usize;
    let position = position.min(last);
    with_elements!(&mut ctx.frame, |leds| single_dot(leds, color, position));
}

/// Every third element lit, shifting by one each step
pub(super) fn marquee(ctx: &mut RenderContext<'_>) {
    let color = ctx.params.color1;
    let step = usize::from(ctx.step);
    with_elements!(&mut ctx.frame, |leds| marquee_frame(leds, color, step));
}

/// Quarter-length snake crawling around the group, head brightest
pub(super) fn snake(ctx: &mut RenderContext<'_>) {
    let color = ctx.params.color1;
    let step = usize::from(ctx.step);
    with_elements!(&mut ctx.frame, |leds| snake_frame(leds, color, step));
}

#[allow(clippy::cast_precision_loss)]
fn knight_rider_frame<E: Element>(leds: &mut [E], color: Rgb, position: usize) {
    let falloff = (TRAIL_LEN + 1) as f32;
    for (index, led) in leds.iter_mut().enumerate() {
        let distance = index.abs_diff(position);
        *led = if distance == 0 {
            E::lit(color)
        } else if E::GRADED && distance <= TRAIL_LEN {
            E::shade(color, (TRAIL_LEN + 1 - distance) as f32 / falloff)
        } else {
            E::off()
        };
    }
}

fn cylon_frame<E: Element>(leds: &mut [E], color: Rgb, position: usize) {
    for led in leds.iter_mut() {
        *led = led.decay(0.8);
    }
    leds[position] = E::lit(color);
}

fn single_dot<E: Element>(leds: &mut [E], color: Rgb, position: usize) {
    for (index, led) in leds.iter_mut().enumerate() {
        *led = if index == position {
            E::lit(color)
        } else {
            E::off()
        };
    }
}

fn marquee_frame<E: Element>(leds: &mut [E], color: Rgb, step: usize) {
    for (index, led) in leds.iter_mut().enumerate() {
        *led = if (index + step).is_multiple_of(MARQUEE_SPACING) {
            E::lit(color)
        } else {
            E::off()
        };
    }
}

#[allow(clippy::cast_precision_loss)]
fn snake_frame<E: Element>(leds: &mut [E], color: Rgb, step: usize) {
    let len = leds.len();
    let body = (len / 4).max(1);
    clear(leds);
    for segment in 0..body {
        let position = (step + segment) % len;
        let intensity = 1.0 - segment as f32 / body as f32;
        leds[position] = E::shade(color, intensity);
    }
}
