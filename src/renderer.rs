use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::DisplaySink;
use crate::bounds::GroupRange;
use crate::buffer::StripMode;
use crate::color::Rgb;
use crate::command::Command;
use crate::effect::{EffectId, RenderContext};
use crate::element::ElementState;
use crate::filter::BrightnessFilter;
use crate::params::{EffectParameters, speed_to_interval};
use crate::random::RandomSource;
use crate::state::AnimationState;
use crate::strip::{Strip, StripError};

/// Configuration for the renderer
#[derive(Debug, Clone)]
pub struct RendererConfig {
    pub mode: StripMode,
    pub element_count: usize,
    pub effect: EffectId,
    pub params: EffectParameters,
}

impl RendererConfig {
    /// Configuration of a dark strip with default parameters
    pub const fn new(mode: StripMode, element_count: usize) -> Self {
        Self {
            mode,
            element_count,
            effect: EffectId::None,
            params: EffectParameters::new(),
        }
    }
}

/// Renderer - owns the strip and runs the selected effect on it
///
/// Effect selection only changes what the next frame shows; the buffer is
/// updated by [`Renderer::render`], usually called from a
/// [`FrameScheduler`](crate::FrameScheduler).
pub struct Renderer<R: RandomSource, const N: usize> {
    strip: Strip<N>,
    state: AnimationState,
    params: EffectParameters,
    random: R,
}

impl<R: RandomSource, const N: usize> Renderer<R, N> {
    /// Create a renderer with no effect and default parameters
    pub const fn new(strip: Strip<N>, random: R) -> Self {
        Self {
            strip,
            state: AnimationState::new(),
            params: EffectParameters::new(),
            random,
        }
    }

    /// Create a strip and a renderer for it from configuration
    pub fn with_config(config: &RendererConfig, random: R) -> Result<Self, StripError> {
        let strip = Strip::new(config.mode, config.element_count)?;
        let mut renderer = Self::new(strip, random);
        renderer.set_effect_with_params(config.effect, config.params);
        Ok(renderer)
    }

    pub const fn strip(&self) -> &Strip<N> {
        &self.strip
    }

    pub const fn strip_mut(&mut self) -> &mut Strip<N> {
        &mut self.strip
    }

    pub const fn state(&self) -> &AnimationState {
        &self.state
    }

    pub const fn params(&self) -> &EffectParameters {
        &self.params
    }

    /// Currently selected effect
    pub const fn effect(&self) -> EffectId {
        self.state.effect()
    }

    /// Render one frame of the current effect into the active group
    ///
    /// The step counter advances by one afterwards, whichever effect ran.
    pub fn render(&mut self) {
        let descriptor = self.state.effect().descriptor();
        let (frame, heat) = self.strip.render_target(descriptor.memory);
        let mut ctx = RenderContext::new(
            frame,
            &self.params,
            self.state.step(),
            &mut self.random,
            heat,
        );
        descriptor.render(&mut ctx);

        if let Some(next) = ctx.take_transition() {
            #[cfg(feature = "esp32-log")]
            println!(
                "[Renderer.render] {} finished, continuing with {}",
                descriptor.name,
                next.as_str()
            );
            self.state.transition_to(next);
        }
        self.state.advance();
    }

    /// Write the active group to a sink, applying output brightness
    pub fn write_to<S: DisplaySink>(&self, sink: &mut S) {
        let brightness = BrightnessFilter::new(self.params.brightness);
        for (index, state) in self.strip.group_elements() {
            sink.write(index, brightness.apply(state));
        }
        sink.show();
    }

    /// Select an effect, keeping the current parameters
    pub fn set_effect(&mut self, effect: EffectId) {
        #[cfg(feature = "esp32-log")]
        println!("[Renderer.set_effect] switching to {}", effect.as_str());
        self.state.select(effect);
    }

    /// Select an effect with a full parameter set
    ///
    /// The tick interval follows `params.speed`.
    pub fn set_effect_with_params(&mut self, effect: EffectId, params: EffectParameters) {
        self.params = params;
        self.state.set_interval(params.interval());
        self.set_effect(effect);
    }

    /// Select an effect and change its speed
    pub fn set_effect_with_speed(&mut self, effect: EffectId, speed: u16) {
        self.set_effect_with_params(effect, self.params.with_speed(speed));
    }

    /// Select an effect and change its speed and primary color
    pub fn set_effect_with_color(&mut self, effect: EffectId, speed: u16, color: Rgb) {
        let params = self.params.with_speed(speed).with_color(color);
        self.set_effect_with_params(effect, params);
    }

    /// Select an effect by name, ignoring ASCII case
    ///
    /// Unknown names select [`EffectId::None`].
    pub fn set_effect_by_name(&mut self, name: &str) {
        self.set_effect(EffectId::from_name(name));
    }

    /// Select an effect by raw id, unknown ids select [`EffectId::None`]
    pub fn set_effect_raw(&mut self, id: u8) {
        self.set_effect(EffectId::from_raw_or_none(id));
    }

    /// Set the output brightness of color strips
    pub const fn set_brightness(&mut self, brightness: u8) {
        self.params.brightness = brightness;
    }

    /// Set the primary color without restarting the effect
    pub const fn set_color(&mut self, color: Rgb) {
        self.params.color1 = color;
    }

    /// Set the time between frames in milliseconds
    ///
    /// Only the interval changes, `params.speed` is kept. The phase of the
    /// last update is kept as well.
    pub fn set_interval(&mut self, millis: u16) {
        self.state.set_interval(speed_to_interval(millis));
    }

    /// Time between frames
    pub const fn interval(&self) -> Duration {
        self.state.interval()
    }

    /// Narrow effects to `[start, end]`, clamped into the strip
    pub fn set_group(&mut self, start: usize, end: usize) -> GroupRange {
        self.strip.set_group(start, end)
    }

    /// Extend effects back to the whole strip
    pub fn reset_group(&mut self) {
        self.strip.reset_group();
    }

    /// Overwrite one element until the next frame renders over it
    pub fn set_element(&mut self, index: usize, state: ElementState) {
        self.strip.set_element(index, state);
    }

    /// Turn every element of the strip off
    pub fn clear(&mut self) {
        self.strip.clear();
    }

    /// Apply a queued command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SetEffect(effect) => self.set_effect(effect),
            Command::SetEffectWithParams(effect, params) => {
                self.set_effect_with_params(effect, params);
            }
            Command::SetEffectWithSpeed(effect, speed) => {
                self.set_effect_with_speed(effect, speed);
            }
            Command::SetEffectWithColor(effect, speed, color) => {
                self.set_effect_with_color(effect, speed, color);
            }
            Command::SetBrightness(brightness) => self.set_brightness(brightness),
            Command::SetColor(color) => self.set_color(color),
            Command::SetInterval(millis) => self.set_interval(millis),
            Command::SetGroup { start, end } => {
                self.set_group(start, end);
            }
            Command::ResetGroup => self.reset_group(),
            Command::Clear => self.clear(),
        }
    }

    pub(crate) fn is_due(&self, now: Instant) -> bool {
        self.state.is_due(now)
    }

    pub(crate) fn mark(&mut self, now: Instant) {
        self.state.mark(now);
    }
}
