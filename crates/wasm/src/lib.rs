#![deny(unsafe_code)]
//! WASM bindings for swatch.
//!
//! The browser front end owns the carousel timer, saved-color list, and
//! layout; it calls into these bindings with plain strings and receives
//! colors, palette JSON, or export text back. Unknown mood, format, or
//! language tags are reported as `JsError`; everything else degrades the
//! same way the core does.

use swatch_core::{
    derive, export_localized, generate_from_moods, generate_tagged, ExportFormat, Language, Mood,
    PaletteBundle, SwatchError, Xorshift64,
};
use wasm_bindgen::prelude::*;

/// Stateful color source for the carousel: one seeded stream plus the
/// currently selected moods.
#[wasm_bindgen]
pub struct ColorGenerator {
    rng: Xorshift64,
    moods: Vec<Mood>,
}

#[wasm_bindgen]
impl ColorGenerator {
    /// Creates a generator drawing from every mood.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> ColorGenerator {
        ColorGenerator {
            rng: Xorshift64::new(seed),
            moods: Mood::ALL.to_vec(),
        }
    }

    /// Restricts generation to `moods`. An empty list means every mood.
    #[wasm_bindgen(js_name = setMoods)]
    pub fn set_moods(&mut self, moods: Vec<String>) -> Result<(), JsError> {
        self.moods = parse_moods(&moods).map_err(to_js)?;
        Ok(())
    }

    /// Returns the next canonical `#RRGGBB` color.
    #[wasm_bindgen(js_name = nextColor)]
    pub fn next_color(&mut self) -> String {
        generate_from_moods(&self.moods, &mut self.rng).to_hex()
    }
}

/// Generates one color for `mood`; unknown tags use the vibrant generator.
#[wasm_bindgen(js_name = generateColor)]
pub fn generate_color(mood: &str, seed: u64) -> String {
    generate_tagged(mood, &mut Xorshift64::new(seed)).to_hex()
}

/// Generates one color from a mood picked among `moods` (all when empty).
#[wasm_bindgen(js_name = generateColorFromMoods)]
pub fn generate_color_from_moods(moods: Vec<String>, seed: u64) -> Result<String, JsError> {
    let moods = parse_moods(&moods).map_err(to_js)?;
    Ok(generate_from_moods(&moods, &mut Xorshift64::new(seed)).to_hex())
}

/// Returns `{ "light": {...}, "dark": {...} }` for `color` as JSON.
#[wasm_bindgen(js_name = derivePalette)]
pub fn derive_palette(color: &str) -> Result<String, JsError> {
    palette_json(color).map_err(|e| JsError::new(&e.to_string()))
}

/// Renders the saved colors in `format`, with messages in `language`.
#[wasm_bindgen(js_name = exportPalettes)]
pub fn export_palettes(
    colors: Vec<String>,
    format: &str,
    language: &str,
) -> Result<String, JsError> {
    export_text(&colors, format, language).map_err(to_js)
}

/// Mood tags in canonical order.
#[wasm_bindgen]
pub fn moods() -> Vec<String> {
    Mood::ALL.iter().map(|m| m.tag().to_string()).collect()
}

/// Export format tags.
#[wasm_bindgen]
pub fn formats() -> Vec<String> {
    ExportFormat::ALL
        .iter()
        .map(|f| f.tag().to_string())
        .collect()
}

fn to_js(e: SwatchError) -> JsError {
    JsError::new(&e.to_string())
}

fn parse_moods(tags: &[String]) -> Result<Vec<Mood>, SwatchError> {
    tags.iter().map(|t| t.parse()).collect()
}

fn palette_json(color: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string(&derive(color))
}

fn export_text(colors: &[String], format: &str, language: &str) -> Result<String, SwatchError> {
    let format: ExportFormat = format.parse()?;
    let lang = Language::resolve(language);
    let bundles = PaletteBundle::from_colors(colors);
    Ok(export_localized(&bundles, format, lang))
}
