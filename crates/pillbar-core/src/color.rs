//! ARGB colors and the interpolation used while a pill changes hands.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 8-bit-per-channel color with straight (non-premultiplied) alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(0xff, 0xff, 0xff, 0xff);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Opaque color from RGB channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(0xff, r, g, b)
    }

    /// Unpack a `0xAARRGGBB` word
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Pack into a `0xAARRGGBB` word
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parse a hex color string
    /// Accepts formats: "#AARRGGBB", "#RRGGBB", "#RGB", with or without the leading '#'
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            // Short form: RGB -> RRGGBB
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Self::rgb(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            8 => u32::from_str_radix(hex, 16).ok().map(Self::from_argb),
            _ => None,
        }
    }

    /// Composite this color over an opaque background, returning opaque RGB
    pub fn over(self, background: Rgba) -> Rgba {
        let alpha = self.a as f32 / 255.0;
        let mix = |fg: u8, bg: u8| lerp_channel(bg, fg, alpha);
        Rgba::rgb(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_argb())
    }
}

/// Linearly interpolate every channel (alpha included) from `from` towards `to`
///
/// `fraction` is clamped to [0, 1] first, NaN counts as 0. Each channel is
/// rounded half-up, so `blend(a, b, 0.5)` lands on the upper midpoint when
/// the exact midpoint falls between two integers.
pub fn blend(from: Rgba, to: Rgba, fraction: f32) -> Rgba {
    let t = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };

    Rgba {
        a: lerp_channel(from.a, to.a, t),
        r: lerp_channel(from.r, to.r, t),
        g: lerp_channel(from.g, to.g, t),
        b: lerp_channel(from.b, to.b, t),
    }
}

#[inline]
fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    let from = from as f32;
    let value = from + (to as f32 - from) * t;
    (value + 0.5).floor().clamp(0.0, 255.0) as u8
}
