//! Two-phase fill effects over a `2 * len` step cycle

use super::RenderContext;
use crate::color::Rgb;
use crate::element::Element;

/// Fill from the start of the group, then drain back the same way
pub(super) fn stack(ctx: &mut RenderContext<'_>) {
    let color = ctx.params.color1;
    let len = ctx.frame.len();
    let cycle = len * 2;
    let offset = usize::from(ctx.step) % cycle;
    let top = if offset < len { offset } else { cycle - offset };
    with_elements!(&mut ctx.frame, |leds| light_where(leds, color, |index| index <= top));
}

/// Wipe the color in from the start, then wipe it out from the start
pub(super) fn color_wipe(ctx: &mut RenderContext<'_>) {
    let color = ctx.params.color1;
    let len = ctx.frame.len();
    let offset = usize::from(ctx.step) % (len * 2);
    if offset < len {
        with_elements!(&mut ctx.frame, |leds| light_where(leds, color, |index| index <= offset));
    } else {
        let wiped = offset - len;
        with_elements!(&mut ctx.frame, |leds| light_where(leds, color, |index| index > wiped));
    }
}

fn light_where<E: Element>(leds: &mut [E], color: Rgb, lit: impl Fn(usize) -> bool) {
    for (index, led) in leds.iter_mut().enumerate() {
        *led = if lit(index) { E::lit(color) } else { E::off() };
    }
}
