//! Color types and conversion functions.
//!
//! Provides `Rgb` (8-bit channels, rendered as canonical `#RRGGBB`) and
//! `Hsl` (fractional hue/saturation/lightness), plus the pure conversions
//! between them used by the palette deriver and the HSL-based moods.

use std::fmt;
use std::str::FromStr;

use crate::error::SwatchError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An 8-bit RGB color.
///
/// Displays and serializes as canonical uppercase hex `"#RRGGBB"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL color with every component in [0, 1].
///
/// `h` is a fraction of a full turn, so 0.5 is 180 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// An additive offset applied to an [`Hsl`] color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HslShift {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from channel values, clamping each to [0, 255].
    pub fn from_clamped(r: i32, g: i32, b: i32) -> Self {
        let ch = |v: i32| v.clamp(0, 255) as u8;
        Self::new(ch(r), ch(g), ch(b))
    }

    /// Parses `"#RRGGBB"` or `"RRGGBB"` (case insensitive).
    ///
    /// Exactly six hex digits are required; shorthand and alpha forms are
    /// rejected with `SwatchError::InvalidColor`.
    pub fn from_hex(hex: &str) -> Result<Self, SwatchError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Err(SwatchError::InvalidColor(format!(
                "expected 6 hex digits, got {:?}",
                hex
            )));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SwatchError::InvalidColor(format!(
                "non-hex digit in {:?}",
                hex
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| SwatchError::InvalidColor(format!("{hex:?}: {e}")))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Returns the canonical `"#RRGGBB"` form.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl Hsl {
    /// Builds an HSL color from degrees and percentages.
    pub fn from_degrees(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            h: (hue / 360.0).rem_euclid(1.0),
            s: (saturation / 100.0).clamp(0.0, 1.0),
            l: (lightness / 100.0).clamp(0.0, 1.0),
        }
    }

    /// Applies an additive shift: hue wraps modulo one turn, saturation and
    /// lightness clamp to [0, 1].
    pub fn shifted(self, shift: HslShift) -> Self {
        Self {
            h: (self.h + shift.h).rem_euclid(1.0),
            s: (self.s + shift.s).clamp(0.0, 1.0),
            l: (self.l + shift.l).clamp(0.0, 1.0),
        }
    }
}

/// Adds a `#` prefix when missing and uppercases the result.
///
/// Does not validate; `"not-a-color"` becomes `"#NOT-A-COLOR"`.
pub fn normalize_hex(input: &str) -> String {
    let upper = input.to_uppercase();
    if upper.starts_with('#') {
        upper
    } else {
        format!("#{upper}")
    }
}

/// Converts RGB to HSL.
///
/// Lightness is the midpoint of the max and min channel; the hue sector is
/// picked by whichever channel is the maximum. Grays have h = s = 0.
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    let r = f64::from(c.r) / 255.0;
    let g = f64::from(c.g) / 255.0;
    let b = f64::from(c.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl { h: h / 6.0, s, l }
}

/// Converts HSL to RGB, rounding each channel to the nearest integer.
pub fn hsl_to_rgb(c: Hsl) -> Rgb {
    if c.s == 0.0 {
        let gray = to_channel(c.l);
        return Rgb::new(gray, gray, gray);
    }

    let q = if c.l < 0.5 {
        c.l * (1.0 + c.s)
    } else {
        c.l + c.s - c.l * c.s
    };
    let p = 2.0 * c.l - q;

    Rgb::new(
        to_channel(hue_to_channel(p, q, c.h + 1.0 / 3.0)),
        to_channel(hue_to_channel(p, q, c.h)),
        to_channel(hue_to_channel(p, q, c.h - 1.0 / 3.0)),
    )
}

/// Piecewise channel value for hue position `t`, breakpoints at 1/6, 1/2, 2/3.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
