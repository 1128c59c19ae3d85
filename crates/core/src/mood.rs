//! Mood-based random color generators.
//!
//! Each [`Mood`] maps to one generator with a fixed shape and randomized
//! parameters. All randomness comes from the caller's [`RandomSource`].

use std::fmt;
use std::str::FromStr;

use crate::color::{hsl_to_rgb, Hsl, Rgb};
use crate::error::SwatchError;
use crate::prng::RandomSource;
use serde::{Deserialize, Serialize};

/// A color-generation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Pastel,
    Vibrant,
    Dark,
    Light,
    Neon,
    Earth,
    Muted,
    Warm,
    Cool,
    Monochrome,
}

impl Mood {
    /// Every mood, in canonical order.
    pub const ALL: [Mood; 10] = [
        Mood::Pastel,
        Mood::Vibrant,
        Mood::Dark,
        Mood::Light,
        Mood::Neon,
        Mood::Earth,
        Mood::Muted,
        Mood::Warm,
        Mood::Cool,
        Mood::Monochrome,
    ];

    /// The lowercase tag used in CLI arguments and serialized data.
    pub fn tag(self) -> &'static str {
        match self {
            Mood::Pastel => "pastel",
            Mood::Vibrant => "vibrant",
            Mood::Dark => "dark",
            Mood::Light => "light",
            Mood::Neon => "neon",
            Mood::Earth => "earth",
            Mood::Muted => "muted",
            Mood::Warm => "warm",
            Mood::Cool => "cool",
            Mood::Monochrome => "monochrome",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Mood {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|m| m.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SwatchError::UnknownMood(s.to_string()))
    }
}

/// Saturated base tones for `neon`: `None` marks a channel drawn from [0, 100).
const NEON_PATTERNS: [[Option<u8>; 3]; 6] = [
    [Some(255), None, None],
    [None, Some(255), None],
    [None, None, Some(255)],
    [Some(255), Some(255), None],
    [Some(255), None, Some(255)],
    [None, Some(255), Some(255)],
];

/// Browns and tans for `earth`.
const EARTH_TONES: [[i32; 3]; 6] = [
    [139, 90, 43],
    [160, 120, 80],
    [101, 67, 33],
    [194, 178, 128],
    [133, 94, 66],
    [92, 64, 51],
];

/// Generates one color for the given mood.
pub fn generate(mood: Mood, rng: &mut impl RandomSource) -> Rgb {
    match mood {
        Mood::Pastel => uniform_channels(rng, 155, 255),
        Mood::Vibrant => uniform_channels(rng, 0, 256),
        Mood::Dark => uniform_channels(rng, 0, 100),
        Mood::Light => uniform_channels(rng, 205, 255),
        Mood::Neon => neon(rng),
        Mood::Earth => earth(rng),
        Mood::Muted => {
            let hue = rng.next_range(0.0, 360.0);
            let sat = rng.next_range(25.0, 45.0);
            let light = rng.next_range(55.0, 75.0);
            hsl_to_rgb(Hsl::from_degrees(hue, sat, light))
        }
        Mood::Warm => {
            let hue = if rng.chance(0.5) {
                rng.next_range(0.0, 60.0)
            } else {
                rng.next_range(300.0, 360.0)
            };
            let sat = rng.next_range(60.0, 90.0);
            let light = rng.next_range(45.0, 65.0);
            hsl_to_rgb(Hsl::from_degrees(hue, sat, light))
        }
        Mood::Cool => {
            let hue = rng.next_range(120.0, 240.0);
            let sat = rng.next_range(55.0, 85.0);
            let light = rng.next_range(45.0, 70.0);
            hsl_to_rgb(Hsl::from_degrees(hue, sat, light))
        }
        Mood::Monochrome => {
            let v = rng.next_int(50, 206);
            Rgb::from_clamped(v, v, v)
        }
    }
}

/// Picks a mood uniformly from `moods` and generates a color for it.
///
/// An empty slice means every mood.
pub fn generate_from_moods(moods: &[Mood], rng: &mut impl RandomSource) -> Rgb {
    let pool: &[Mood] = if moods.is_empty() { &Mood::ALL } else { moods };
    let mood = pool[rng.next_index(pool.len())];
    generate(mood, rng)
}

/// Generates a color for a raw mood tag, falling back to `vibrant` when the
/// tag is not recognized.
pub fn generate_tagged(tag: &str, rng: &mut impl RandomSource) -> Rgb {
    let mood = tag.parse().unwrap_or_else(|_| {
        tracing::debug!(tag, "unknown mood tag, using vibrant");
        Mood::Vibrant
    });
    generate(mood, rng)
}

fn uniform_channels(rng: &mut impl RandomSource, low: i32, high: i32) -> Rgb {
    let r = rng.next_int(low, high);
    let g = rng.next_int(low, high);
    let b = rng.next_int(low, high);
    Rgb::from_clamped(r, g, b)
}

fn neon(rng: &mut impl RandomSource) -> Rgb {
    let pattern = NEON_PATTERNS[rng.next_index(NEON_PATTERNS.len())];
    let mut channel = |fixed: Option<u8>| fixed.map_or_else(|| rng.next_int(0, 100), i32::from);
    let r = channel(pattern[0]);
    let g = channel(pattern[1]);
    let b = channel(pattern[2]);
    Rgb::from_clamped(r, g, b)
}

fn earth(rng: &mut impl RandomSource) -> Rgb {
    let [r, g, b] = EARTH_TONES[rng.next_index(EARTH_TONES.len())];
    Rgb::from_clamped(
        r + rng.next_int(-20, 20),
        g + rng.next_int(-20, 20),
        b + rng.next_int(-20, 20),
    )
}
