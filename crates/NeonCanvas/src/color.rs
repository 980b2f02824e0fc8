//! # Color Codec
//!
//! Scene colors arrive packed as `0xRRGGBBAA`. This module splits them into 8-bit channels and
//! implements the HSV round trip used by the glow effect to brighten or dim a color.

use serde::{Deserialize, Serialize};

/// RGBA color with 8-bit channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpacks a `0xRRGGBBAA` value.
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: (packed >> 24) as u8,
            g: (packed >> 16) as u8,
            b: (packed >> 8) as u8,
            a: packed as u8,
        }
    }

    /// Packs back into `0xRRGGBBAA`.
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 24) | ((self.g as u32) << 16) | ((self.b as u32) << 8) | self.a as u32
    }

    /// Scales the HSV value channel by `multiplier`, clamping it at 1.0.
    ///
    /// Hue and saturation are preserved and alpha is passed through untouched.
    /// `multiplier` must be non-negative; there is no lower clamp.
    pub fn brighten(self, multiplier: f32) -> Self {
        let mut hsv = Hsv::from_rgb(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );
        hsv.v = (hsv.v * multiplier).min(1.0);
        let (r, g, b) = hsv.to_rgb();
        Self {
            r: to_channel(r),
            g: to_channel(g),
            b: to_channel(b),
            a: self.a,
        }
    }
}

impl From<u32> for Rgba8 {
    fn from(packed: u32) -> Self {
        Self::from_packed(packed)
    }
}

/// Splits a packed `0xRRGGBBAA` color into its channels.
pub fn decompose(color: u32) -> Rgba8 {
    Rgba8::from_packed(color)
}

/// See [`Rgba8::brighten`].
pub fn brighten(multiplier: f32, color: Rgba8) -> Rgba8 {
    color.brighten(multiplier)
}

fn to_channel(x: f32) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// A color in HSV space. All components are normalized, hue included (0.0 - 1.0 is one full turn).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    /// Converts normalized RGB to HSV.
    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let v = max;
        let d = max - min;

        if d <= f32::EPSILON {
            return Self { h: 0.0, s: 0.0, v };
        }

        let s = d / max;
        let h = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };

        Self { h, s, v }
    }

    /// Converts back to normalized RGB.
    pub fn to_rgb(self) -> (f32, f32, f32) {
        let Self { h, s, v } = self;
        if s <= f32::EPSILON {
            return (v, v, v);
        }

        let h = h.rem_euclid(1.0) * 6.0;
        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match sector as u32 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        }
    }
}
