//! Light and dark UI palettes derived from a single primary color.
//!
//! A [`Palette`] holds one color per [`Role`]. Five roles are computed by
//! shifting the primary color in HSL space, six are fixed per [`Mode`], and
//! `primary` is the input itself. The three sources are disjoint role tables
//! merged by [`Palette::assemble`].

use std::fmt;
use std::ops::Index;

use crate::color::{hsl_to_rgb, normalize_hex, rgb_to_hsl, Hsl, HslShift, Rgb};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A named palette slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Primary,
    Secondary,
    Accent,
    Background,
    Surface,
    Text,
    Headline,
    Muted,
    Border,
    Success,
    Warning,
    Danger,
}

impl Role {
    /// Every role, in canonical order. Exporters emit fields in this order.
    pub const ALL: [Role; 12] = [
        Role::Primary,
        Role::Secondary,
        Role::Accent,
        Role::Background,
        Role::Surface,
        Role::Text,
        Role::Headline,
        Role::Muted,
        Role::Border,
        Role::Success,
        Role::Warning,
        Role::Danger,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
            Role::Accent => "accent",
            Role::Background => "background",
            Role::Surface => "surface",
            Role::Text => "text",
            Role::Headline => "headline",
            Role::Muted => "muted",
            Role::Border => "border",
            Role::Success => "success",
            Role::Warning => "warning",
            Role::Danger => "danger",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Light or dark UI variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    pub fn tag(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }
}

/// One color per [`Role`].
///
/// Serializes as a map keyed by role tag, in canonical role order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; 12],
}

impl Palette {
    /// Merges role tables into a palette.
    ///
    /// Returns `None` if any role is missing or appears in more than one
    /// entry, so no table can override another.
    pub fn assemble(tables: &[&[(Role, Rgb)]]) -> Option<Self> {
        let mut slots: [Option<Rgb>; 12] = [None; 12];
        for &(role, color) in tables.iter().flat_map(|t| t.iter()) {
            if slots[role.index()].replace(color).is_some() {
                return None;
            }
        }
        let mut colors = [Rgb::new(0, 0, 0); 12];
        for (dst, slot) in colors.iter_mut().zip(slots) {
            *dst = slot?;
        }
        Some(Self { colors })
    }

    pub fn get(&self, role: Role) -> Rgb {
        self.colors[role.index()]
    }

    /// Iterates `(role, color)` pairs in canonical role order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, Rgb)> + '_ {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

impl Index<Role> for Palette {
    type Output = Rgb;

    fn index(&self, role: Role) -> &Rgb {
        &self.colors[role.index()]
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.colors.len()))?;
        for (role, color) in self.iter() {
            map.serialize_entry(role.tag(), &color)?;
        }
        map.end()
    }
}

/// The light and dark palettes derived from one primary color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DualPalette {
    pub light: Palette,
    pub dark: Palette,
}

impl DualPalette {
    pub fn get(&self, mode: Mode) -> &Palette {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    /// The palette returned for input that is not a valid hex color.
    pub fn fallback() -> Self {
        Self {
            light: default_palette(Mode::Light),
            dark: default_palette(Mode::Dark),
        }
    }
}

const fn shift(h: f64, s: f64, l: f64) -> HslShift {
    HslShift { h, s, l }
}

const LIGHT_SHIFTS: [(Role, HslShift); 5] = [
    (Role::Secondary, shift(0.08, -0.05, 0.08)),
    (Role::Accent, shift(-0.07, 0.08, -0.04)),
    (Role::Muted, shift(0.0, -0.35, 0.30)),
    (Role::Border, shift(0.0, -0.45, 0.42)),
    (Role::Surface, shift(0.0, -0.50, 0.48)),
];

const DARK_SHIFTS: [(Role, HslShift); 5] = [
    (Role::Secondary, shift(-0.08, 0.04, -0.08)),
    (Role::Accent, shift(0.07, 0.12, 0.12)),
    (Role::Muted, shift(0.0, -0.35, -0.25)),
    (Role::Border, shift(0.0, -0.45, -0.35)),
    (Role::Surface, shift(0.0, -0.30, -0.45)),
];

const LIGHT_FIXED: [(Role, Rgb); 6] = [
    (Role::Background, Rgb::new(0xFF, 0xFF, 0xFF)),
    (Role::Text, Rgb::new(0x11, 0x18, 0x27)),
    (Role::Headline, Rgb::new(0x0B, 0x11, 0x20)),
    (Role::Success, Rgb::new(0x16, 0xA3, 0x4A)),
    (Role::Warning, Rgb::new(0xCA, 0x8A, 0x04)),
    (Role::Danger, Rgb::new(0xDC, 0x26, 0x26)),
];

const DARK_FIXED: [(Role, Rgb); 6] = [
    (Role::Background, Rgb::new(0x02, 0x06, 0x17)),
    (Role::Text, Rgb::new(0xE5, 0xE7, 0xEB)),
    (Role::Headline, Rgb::new(0xF8, 0xFA, 0xFC)),
    (Role::Success, Rgb::new(0x22, 0xC5, 0x5E)),
    (Role::Warning, Rgb::new(0xFA, 0xCC, 0x15)),
    (Role::Danger, Rgb::new(0xF8, 0x71, 0x71)),
];

// Fallback colors, in canonical role order.
const DEFAULT_LIGHT: [Rgb; 12] = [
    Rgb::new(0x3B, 0x82, 0xF6),
    Rgb::new(0x8B, 0x5C, 0xF6),
    Rgb::new(0x10, 0xB9, 0x81),
    Rgb::new(0xFF, 0xFF, 0xFF),
    Rgb::new(0xF9, 0xFA, 0xFB),
    Rgb::new(0x11, 0x18, 0x27),
    Rgb::new(0x0B, 0x11, 0x20),
    Rgb::new(0xE5, 0xE7, 0xEB),
    Rgb::new(0xCB, 0xD5, 0xF5),
    Rgb::new(0x16, 0xA3, 0x4A),
    Rgb::new(0xCA, 0x8A, 0x04),
    Rgb::new(0xDC, 0x26, 0x26),
];

const DEFAULT_DARK: [Rgb; 12] = [
    Rgb::new(0x3B, 0x82, 0xF6),
    Rgb::new(0x8B, 0x5C, 0xF6),
    Rgb::new(0x10, 0xB9, 0x81),
    Rgb::new(0x02, 0x06, 0x17),
    Rgb::new(0x11, 0x18, 0x27),
    Rgb::new(0xE5, 0xE7, 0xEB),
    Rgb::new(0xF8, 0xFA, 0xFC),
    Rgb::new(0x33, 0x41, 0x55),
    Rgb::new(0x1F, 0x29, 0x37),
    Rgb::new(0x22, 0xC5, 0x5E),
    Rgb::new(0xFA, 0xCC, 0x15),
    Rgb::new(0xF8, 0x71, 0x71),
];

fn shifts(mode: Mode) -> &'static [(Role, HslShift)] {
    match mode {
        Mode::Light => &LIGHT_SHIFTS,
        Mode::Dark => &DARK_SHIFTS,
    }
}

fn fixed_roles(mode: Mode) -> &'static [(Role, Rgb)] {
    match mode {
        Mode::Light => &LIGHT_FIXED,
        Mode::Dark => &DARK_FIXED,
    }
}

/// The hardcoded palette used when the input color cannot be parsed.
pub fn default_palette(mode: Mode) -> Palette {
    Palette {
        colors: match mode {
            Mode::Light => DEFAULT_LIGHT,
            Mode::Dark => DEFAULT_DARK,
        },
    }
}

/// Derives the light and dark palettes for `primary`.
///
/// The input is normalized first (`#` added, uppercased). Input that is not
/// six hex digits yields [`DualPalette::fallback`]; this never fails.
pub fn derive(primary: &str) -> DualPalette {
    let normalized = normalize_hex(primary);
    let Ok(rgb) = Rgb::from_hex(&normalized) else {
        tracing::debug!(input = primary, "unparseable primary color, using default palette");
        return DualPalette::fallback();
    };
    let base = rgb_to_hsl(rgb);
    DualPalette {
        light: derive_mode(rgb, base, Mode::Light),
        dark: derive_mode(rgb, base, Mode::Dark),
    }
}

fn derive_mode(primary: Rgb, base: Hsl, mode: Mode) -> Palette {
    let computed: Vec<(Role, Rgb)> = shifts(mode)
        .iter()
        .map(|&(role, offset)| (role, hsl_to_rgb(base.shifted(offset))))
        .collect();
    let primary = [(Role::Primary, primary)];
    Palette::assemble(&[&primary[..], fixed_roles(mode), &computed[..]])
        .unwrap_or_else(|| default_palette(mode))
}
