//! Effects driven by a brightness envelope
//!
//! The envelope is computed once per frame and projected onto the elements,
//! which threshold it (switches) or scale `color1` by it (colors).

use super::{EffectId, RenderContext};
use crate::color::Rgb;
use crate::element::Element;

/// Length of the breathe and pulse cycles in steps
const CYCLE: u16 = 100;
/// Steps of the pulse cycle spent ramping up
const PULSE_RISE: u16 = 20;
/// Steps a fade takes to complete
const FADE_STEPS: f32 = 100.0;

pub(super) fn breathe(ctx: &mut RenderContext<'_>) {
    let phase = f32::from(ctx.step % CYCLE) / 15.0;
    let intensity = f32::midpoint(libm::sinf(phase), 1.0);
    fill_level(ctx, intensity);
}

/// Quick ramp up over the first 20% of the cycle, slow ramp down after
pub(super) fn pulse(ctx: &mut RenderContext<'_>) {
    let offset = ctx.step % CYCLE;
    let intensity = if offset < PULSE_RISE {
        f32::from(offset) / f32::from(PULSE_RISE)
    } else {
        1.0 - f32::from(offset - PULSE_RISE) / f32::from(CYCLE - PULSE_RISE)
    };
    fill_level(ctx, intensity);
}

/// Ramp up to full color, then hand over to [`EffectId::Static`]
pub(super) fn fade_in(ctx: &mut RenderContext<'_>) {
    let intensity = (f32::from(ctx.step) / FADE_STEPS).min(1.0);
    fill_level(ctx, intensity);
    if intensity >= 1.0 {
        ctx.transition_to(EffectId::Static);
    }
}

/// Ramp down to black, then hand over to [`EffectId::None`]
pub(super) fn fade_out(ctx: &mut RenderContext<'_>) {
    let intensity = (1.0 - f32::from(ctx.step) / FADE_STEPS).max(0.0);
    fill_level(ctx, intensity);
    if intensity <= 0.0 {
        ctx.transition_to(EffectId::None);
    }
}

/// Sine wave travelling along the group
pub(super) fn wave(ctx: &mut RenderContext<'_>) {
    let color = ctx.params.color1;
    let step = ctx.step;
    with_elements!(&mut ctx.frame, |leds| wave_fill(leds, color, step));
}

/// Value of the travelling sine wave (-1.0 - 1.0) at a group position
#[allow(clippy::cast_precision_loss)]
pub(super) fn wave_sample(step: u16, index: usize) -> f32 {
    libm::sinf(f32::from(step) / 10.0 + index as f32 / 2.0)
}

fn wave_fill<E: Element>(leds: &mut [E], color: Rgb, step: u16) {
    for (index, led) in leds.iter_mut().enumerate() {
        let intensity = f32::midpoint(wave_sample(step, index), 1.0);
        *led = E::level(color, intensity);
    }
}

fn fill_level(ctx: &mut RenderContext<'_>, intensity: f32) {
    let color = ctx.params.color1;
    with_elements!(&mut ctx.frame, |leds| leds.fill(Element::level(color, intensity)));
}
