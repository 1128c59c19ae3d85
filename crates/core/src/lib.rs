#![deny(unsafe_code)]
//! Core of swatch: random "mood" colors, light/dark UI palette derivation,
//! and palette export.
//!
//! Provides `Rgb`/`Hsl` color types and conversions, the ten `Mood`
//! generators driven by an injected `RandomSource`, `derive` for turning one
//! primary color into a twelve-role `DualPalette`, and `export` for rendering
//! saved palettes as Tailwind, CSS, SCSS, JSON, Android XML, SwiftUI, or Figma
//! tokens. Every operation is total: bad input degrades instead of failing.

pub mod color;
pub mod error;
pub mod export;
pub mod i18n;
pub mod mood;
pub mod palette;
pub mod prng;

pub use color::{Hsl, Rgb};
pub use error::SwatchError;
pub use export::{export, export_localized, ExportFormat, PaletteBundle};
pub use i18n::Language;
pub use mood::{generate, generate_from_moods, generate_tagged, Mood};
pub use palette::{derive, DualPalette, Mode, Palette, Role};
pub use prng::{RandomSource, Xorshift64};
