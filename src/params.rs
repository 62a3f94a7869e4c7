use embassy_time::Duration;

use crate::color::{BLUE, RED, Rgb, WHITE};

/// Default tick interval in milliseconds
pub const DEFAULT_SPEED: u16 = 100;

/// Tunable parameters of an effect
///
/// Most effects only read `color1`; `option1`/`option2` are free-form knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectParameters {
    /// Tick interval in milliseconds, smaller is faster
    pub speed: u16,
    /// Output brightness of color strips
    pub brightness: u8,
    pub color1: Rgb,
    pub color2: Rgb,
    pub color3: Rgb,
    pub option1: u8,
    pub option2: u8,
}

impl Default for EffectParameters {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectParameters {
    pub const fn new() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            brightness: 255,
            color1: WHITE,
            color2: BLUE,
            color3: RED,
            option1: 0,
            option2: 0,
        }
    }

    /// Set the tick interval in milliseconds
    #[must_use]
    pub const fn with_speed(mut self, speed: u16) -> Self {
        self.speed = speed;
        self
    }

    /// Set the output brightness
    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Set the primary color
    #[must_use]
    pub const fn with_color(mut self, color: Rgb) -> Self {
        self.color1 = color;
        self
    }

    /// Set all three palette slots
    #[must_use]
    pub const fn with_palette(mut self, color1: Rgb, color2: Rgb, color3: Rgb) -> Self {
        self.color1 = color1;
        self.color2 = color2;
        self.color3 = color3;
        self
    }

    /// Set both option bytes
    #[must_use]
    pub const fn with_options(mut self, option1: u8, option2: u8) -> Self {
        self.option1 = option1;
        self.option2 = option2;
        self
    }

    /// Tick interval derived from `speed`, never shorter than 1ms
    pub const fn interval(&self) -> Duration {
        speed_to_interval(self.speed)
    }
}

/// Convert a speed in milliseconds to a tick interval
pub(crate) const fn speed_to_interval(speed: u16) -> Duration {
    let millis = if speed == 0 { 1 } else { speed as u64 };
    Duration::from_millis(millis)
}
