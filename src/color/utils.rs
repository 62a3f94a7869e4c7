use crate::color::Rgb;

/// Width of one region of the hue wheel
const HUE_REGION: u8 = 43;

/// Heat level where the fire ramp turns from red to yellow
const HEAT_YELLOW: u8 = 85;
/// Heat level where the fire ramp turns from yellow to white
const HEAT_WHITE: u8 = 170;

/// Scale every channel of a color by `intensity` (0.0 - 1.0)
///
/// Channels are truncated, so an intensity just below 1.0 never rounds up
/// to the input value.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale_color(color: Rgb, intensity: f32) -> Rgb {
    let intensity = intensity.clamp(0.0, 1.0);
    Rgb {
        r: (f32::from(color.r) * intensity) as u8,
        g: (f32::from(color.g) * intensity) as u8,
        b: (f32::from(color.b) * intensity) as u8,
    }
}

/// Convert a position on the 256-step hue wheel to a fully saturated color
///
/// The wheel is split into six regions of 43 steps; inside a region one
/// channel ramps while another stays at full value.
pub const fn hue_wheel(hue: u8) -> Rgb {
    let region = hue / HUE_REGION;
    let remainder = (hue - region * HUE_REGION) * 6;

    let p = 0;
    let q = 255 - remainder;
    let t = remainder;

    let (r, g, b) = match region {
        0 => (255, t, p),
        1 => (q, 255, p),
        2 => (p, 255, t),
        3 => (p, q, 255),
        4 => (t, p, 255),
        _ => (255, p, q),
    };
    Rgb { r, g, b }
}

/// Map a heat value to the red -> yellow -> white fire ramp
pub const fn heat_color(temperature: u8) -> Rgb {
    if temperature < HEAT_YELLOW {
        Rgb {
            r: temperature * 3,
            g: 0,
            b: 0,
        }
    } else if temperature < HEAT_WHITE {
        Rgb {
            r: 255,
            g: (temperature - HEAT_YELLOW) * 3,
            b: 0,
        }
    } else {
        Rgb {
            r: 255,
            g: 255,
            b: (temperature - HEAT_WHITE) * 3,
        }
    }
}
