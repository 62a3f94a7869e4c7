//! Effect catalog and dispatch
//!
//! Every effect is a plain function over a [`RenderContext`]. The [`EFFECTS`]
//! table maps each [`EffectId`] to its algorithm and metadata, so dispatch is
//! a single lookup and adding an effect only means adding a table row.

/// Run `$body` with `$leds` bound to the typed element slice of a frame
macro_rules! with_elements {
    ($frame:expr, |$leds:ident| $body:expr) => {
        match $frame {
            $crate::buffer::Frame::Binary(elements) => {
                let $leds: &mut [bool] = elements;
                $body
            }
            $crate::buffer::Frame::Color(elements) => {
                let $leds: &mut [$crate::color::Rgb] = elements;
                $body
            }
        }
    };
}

mod fill;
mod fire;
mod rainbow;
mod scanner;
mod solid;
mod trail;
mod twinkle;
mod wave;

use crate::buffer::Frame;
use crate::params::EffectParameters;
use crate::random::RandomSource;

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EffectId {
    None = 0,
    Static = 1,
    Blink = 2,
    Breathe = 3,
    Pulse = 4,
    FadeIn = 5,
    FadeOut = 6,
    KnightRider = 7,
    Cylon = 8,
    Meteor = 9,
    Fire = 10,
    Waterfall = 11,
    Chase = 12,
    Stack = 13,
    Rainbow = 14,
    Sparkle = 15,
    Marquee = 16,
    Bounce = 17,
    ColorWipe = 18,
    RandomBlink = 19,
    Snake = 20,
    Wave = 21,
}

/// What an effect reads besides the step counter and parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectMemory {
    /// Output is a pure function of step and parameters
    Stateless,
    /// Output builds on the previous frame still held in the buffer
    PriorFrame,
    /// Output is driven by the persistent per-element heat map
    Heat,
}

type EffectFn = fn(&mut RenderContext<'_>);

/// Catalog entry for one effect
#[derive(Clone, Copy)]
pub struct EffectDescriptor {
    pub id: EffectId,
    /// Canonical lowercase name
    pub name: &'static str,
    pub memory: EffectMemory,
    /// Whether the effect draws from the random source
    pub random: bool,
    render: EffectFn,
}

impl EffectDescriptor {
    const fn new(
        id: EffectId,
        name: &'static str,
        memory: EffectMemory,
        random: bool,
        render: EffectFn,
    ) -> Self {
        Self {
            id,
            name,
            memory,
            random,
            render,
        }
    }

    pub(crate) fn render(&self, ctx: &mut RenderContext<'_>) {
        (self.render)(ctx);
    }
}

/// Effect table, indexed by `EffectId as usize`
pub static EFFECTS: [EffectDescriptor; EffectId::COUNT] = {
    use EffectMemory::{Heat, PriorFrame, Stateless};
    [
        EffectDescriptor::new(EffectId::None, "none", Stateless, false, solid::none),
        EffectDescriptor::new(EffectId::Static, "static", Stateless, false, solid::fixed),
        EffectDescriptor::new(EffectId::Blink, "blink", Stateless, false, solid::blink),
        EffectDescriptor::new(EffectId::Breathe, "breathe", Stateless, false, wave::breathe),
        EffectDescriptor::new(EffectId::Pulse, "pulse", Stateless, false, wave::pulse),
        EffectDescriptor::new(EffectId::FadeIn, "fade_in", Stateless, false, wave::fade_in),
        EffectDescriptor::new(EffectId::FadeOut, "fade_out", Stateless, false, wave::fade_out),
        EffectDescriptor::new(
            EffectId::KnightRider,
            "knight_rider",
            Stateless,
            false,
            scanner::knight_rider,
        ),
        EffectDescriptor::new(EffectId::Cylon, "cylon", PriorFrame, false, scanner::cylon),
        EffectDescriptor::new(EffectId::Meteor, "meteor", PriorFrame, false, trail::meteor),
        EffectDescriptor::new(EffectId::Fire, "fire", Heat, true, fire::fire),
        EffectDescriptor::new(
            EffectId::Waterfall,
            "waterfall",
            PriorFrame,
            true,
            trail::waterfall,
        ),
        EffectDescriptor::new(EffectId::Chase, "chase", Stateless, false, scanner::chase),
        EffectDescriptor::new(EffectId::Stack, "stack", Stateless, false, fill::stack),
        EffectDescriptor::new(EffectId::Rainbow, "rainbow", Stateless, false, rainbow::rainbow),
        EffectDescriptor::new(EffectId::Sparkle, "sparkle", PriorFrame, true, twinkle::sparkle),
        EffectDescriptor::new(EffectId::Marquee, "marquee", Stateless, false, scanner::marquee),
        EffectDescriptor::new(EffectId::Bounce, "bounce", Stateless, false, scanner::bounce),
        EffectDescriptor::new(
            EffectId::ColorWipe,
            "color_wipe",
            Stateless,
            false,
            fill::color_wipe,
        ),
        EffectDescriptor::new(
            EffectId::RandomBlink,
            "random_blink",
            PriorFrame,
            true,
            twinkle::random_blink,
        ),
        EffectDescriptor::new(EffectId::Snake, "snake", Stateless, false, scanner::snake),
        EffectDescriptor::new(EffectId::Wave, "wave", Stateless, false, wave::wave),
    ]
};

impl EffectId {
    /// Number of effects in the catalog
    pub const COUNT: usize = 22;

    pub fn from_raw(value: u8) -> Option<Self> {
        EFFECTS.get(usize::from(value)).map(|entry| entry.id)
    }

    /// Resolve a raw id, falling back to [`EffectId::None`] for unknown ids
    pub fn from_raw_or_none(value: u8) -> Self {
        Self::from_raw(value).unwrap_or(Self::None)
    }

    pub fn descriptor(self) -> &'static EffectDescriptor {
        &EFFECTS[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        self.descriptor().name
    }

    /// Look up an effect by name, ignoring ASCII case
    pub fn parse_from_str(s: &str) -> Option<Self> {
        EFFECTS
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(s))
            .map(|entry| entry.id)
    }

    /// Look up an effect by name, falling back to [`EffectId::None`]
    pub fn from_name(s: &str) -> Self {
        Self::parse_from_str(s).unwrap_or(Self::None)
    }

    /// Iterate over every effect in id order
    pub fn all() -> impl Iterator<Item = Self> {
        EFFECTS.iter().map(|entry| entry.id)
    }
}

/// Everything an effect algorithm may read or write during one frame
pub(crate) struct RenderContext<'a> {
    /// Elements of the active group
    pub(crate) frame: Frame<'a>,
    pub(crate) params: &'a EffectParameters,
    pub(crate) step: u16,
    pub(crate) random: &'a mut dyn RandomSource,
    /// Group-relative heat map, empty unless the effect uses [`EffectMemory::Heat`]
    pub(crate) heat: &'a mut [u8],
    transition: Option<EffectId>,
}

impl<'a> RenderContext<'a> {
    pub(crate) fn new(
        frame: Frame<'a>,
        params: &'a EffectParameters,
        step: u16,
        random: &'a mut dyn RandomSource,
        heat: &'a mut [u8],
    ) -> Self {
        Self {
            frame,
            params,
            step,
            random,
            heat,
            transition: None,
        }
    }

    /// Hand over to another effect once this frame is done
    pub(crate) fn transition_to(&mut self, effect: EffectId) {
        self.transition = Some(effect);
    }

    pub(crate) fn take_transition(&mut self) -> Option<EffectId> {
        self.transition.take()
    }
}

/// Position of a dot bouncing between both ends of `len` elements
///
/// The cycle is `2 * len - 2` steps, never shorter than 2.
pub(crate) fn bounce_position(step: u16, len: usize) -> usize {
    let cycle = (len * 2).saturating_sub(2).max(2);
    let offset = usize::from(step) % cycle;
    let position = if offset < len { offset } else { cycle - offset };
    position.min(len - 1)
}
