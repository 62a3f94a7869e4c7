//! Fire simulation
//!
//! Color strips run a heat model over the group-relative heat map: every
//! frame the heat cools, drifts away from the start of the group, and new
//! sparks ignite near the start. Heat is then mapped onto a red, yellow and
//! white ramp. Binary strips just flicker at random.

use super::RenderContext;
use crate::buffer::Frame;
use crate::color::heat_color;
use crate::random::{RandomSource, random_index};

/// Chance out of 255 that a spark ignites on a frame
const SPARK_CHANCE: u32 = 120;
/// Sparks ignite within this many elements from the start of the group
const SPARK_ZONE: usize = 7;
/// Heat added by a spark, `[low, high)`
const SPARK_HEAT: (u32, u32) = (160, 255);
/// Chance in percent that a binary element is lit
const FLICKER_CHANCE: u32 = 50;

pub(super) fn fire(ctx: &mut RenderContext<'_>) {
    let random = &mut *ctx.random;
    match &mut ctx.frame {
        Frame::Color(colors) => {
            let heat = &mut ctx.heat[..];
            cool(heat, random);
            rise(heat);
            ignite(heat, random);
            for (color, &temperature) in colors.iter_mut().zip(heat.iter()) {
                *color = heat_color(temperature);
            }
        }
        Frame::Binary(states) => {
            for state in states.iter_mut() {
                *state = random.random_below(100) < FLICKER_CHANCE;
            }
        }
    }
}

/// Cool every cell by a random amount; short groups cool faster
#[allow(clippy::cast_possible_truncation)]
fn cool(heat: &mut [u8], random: &mut dyn RandomSource) {
    let len = u32::try_from(heat.len()).unwrap_or(u32::MAX).max(1);
    let max_cooldown = 100 / len + 2;
    for cell in heat.iter_mut() {
        let cooldown = random.random_range(0, max_cooldown) as u8;
        *cell = cell.saturating_sub(cooldown);
    }
}

/// Drift heat away from the start, blending each cell from the two before it
#[allow(clippy::cast_possible_truncation)]
fn rise(heat: &mut [u8]) {
    for index in (2..heat.len()).rev() {
        let near = u16::from(heat[index - 1]);
        let far = u16::from(heat[index - 2]);
        heat[index] = ((near + far * 2) / 3) as u8;
    }
}

#[allow(clippy::cast_possible_truncation)]
fn ignite(heat: &mut [u8], random: &mut dyn RandomSource) {
    if heat.is_empty() || random.random_below(255) >= SPARK_CHANCE {
        return;
    }
    let index = random_index(random, heat.len().min(SPARK_ZONE));
    let (low, high) = SPARK_HEAT;
    let boosted = u32::from(heat[index]) + random.random_range(low, high);
    heat[index] = boosted.min(255) as u8;
}
