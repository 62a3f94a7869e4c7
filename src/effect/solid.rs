//! Flat fills: off, static color and blink

use super::RenderContext;
use crate::color::Rgb;
use crate::element::Element;

/// Turn the whole group off
pub(super) fn none(ctx: &mut RenderContext<'_>) {
    with_elements!(&mut ctx.frame, |leds| clear(leds));
}

/// Fill the group with the primary color
pub(super) fn fixed(ctx: &mut RenderContext<'_>) {
    let color = ctx.params.color1;
    with_elements!(&mut ctx.frame, |leds| fill(leds, color, true));
}

/// Whole group on for even steps, off for odd steps
pub(super) fn blink(ctx: &mut RenderContext<'_>) {
    let color = ctx.params.color1;
    let on = ctx.step.is_multiple_of(2);
    with_elements!(&mut ctx.frame, |leds| fill(leds, color, on));
}

pub(super) fn clear<E: Element>(leds: &mut [E]) {
    leds.fill(E::off());
}

fn fill<E: Element>(leds: &mut [E], color: Rgb, on: bool) {
    let state = if on { E::lit(color) } else { E::off() };
    leds.fill(state);
}
