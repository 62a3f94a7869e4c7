//! Randomly lit elements

use super::RenderContext;
use crate::buffer::Frame;
use crate::color::{BLACK, Rgb};
use crate::element::Element;
use crate::random::{RandomSource, random_index};

/// Per-frame decay of old sparkles
const SPARKLE_DECAY: f32 = 0.8;
/// Random blink only redraws on every n-th step
const BLINK_EVERY: u16 = 5;
/// Chance in percent that an element is lit by random blink
const BLINK_CHANCE: u32 = 30;

/// Light a tenth of the group at random positions while old sparkles fade
///
/// Positions are drawn independently, so one frame may pick an element twice.
pub(super) fn sparkle(ctx: &mut RenderContext<'_>) {
    let color = ctx.params.color1;
    with_elements!(&mut ctx.frame, |leds| sparkle_frame(leds, color, &mut *ctx.random));
}

/// Every fifth step, light each element with a 30% chance
///
/// Color strips get an independent random color per lit element.
pub(super) fn random_blink(ctx: &mut RenderContext<'_>) {
    if !ctx.step.is_multiple_of(BLINK_EVERY) {
        return;
    }

    let random = &mut *ctx.random;
    match &mut ctx.frame {
        Frame::Binary(states) => {
            for state in states.iter_mut() {
                *state = random.random_below(100) < BLINK_CHANCE;
            }
        }
        Frame::Color(colors) => {
            for color in colors.iter_mut() {
                *color = if random.random_below(100) < BLINK_CHANCE {
                    random_color(random)
                } else {
                    BLACK
                };
            }
        }
    }
}

fn sparkle_frame<E: Element>(leds: &mut [E], color: Rgb, random: &mut dyn RandomSource) {
    for led in leds.iter_mut() {
        *led = led.decay(SPARKLE_DECAY);
    }

    let count = (leds.len() / 10).max(1);
    for _ in 0..count {
        let position = random_index(random, leds.len());
        leds[position] = E::lit(color);
    }
}

#[allow(clippy::cast_possible_truncation)]
fn random_color(random: &mut dyn RandomSource) -> Rgb {
    Rgb {
        r: random.random_below(256) as u8,
        g: random.random_below(256) as u8,
        b: random.random_below(256) as u8,
    }
}
