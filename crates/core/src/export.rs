//! Text exporters for derived palettes.
//!
//! Every format emits all twelve roles for both modes of every bundle, in
//! canonical role order, labelled with the bundle's source color.

use std::fmt;
use std::str::FromStr;

use crate::color::normalize_hex;
use crate::error::SwatchError;
use crate::i18n::Language;
use crate::palette::{derive, DualPalette, Mode, Palette, Role};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A supported export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Tailwind,
    Css,
    Scss,
    Json,
    Android,
    SwiftUi,
    Figma,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 7] = [
        ExportFormat::Tailwind,
        ExportFormat::Css,
        ExportFormat::Json,
        ExportFormat::Scss,
        ExportFormat::Android,
        ExportFormat::SwiftUi,
        ExportFormat::Figma,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            ExportFormat::Tailwind => "tailwind",
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Json => "json",
            ExportFormat::Android => "android",
            ExportFormat::SwiftUi => "swiftui",
            ExportFormat::Figma => "figma",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ExportFormat {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportFormat::ALL
            .into_iter()
            .find(|f| f.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SwatchError::UnknownFormat(s.to_string()))
    }
}

/// One saved color with its derived palettes, ready for export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteBundle {
    pub id: String,
    pub color: String,
    pub palettes: DualPalette,
}

impl PaletteBundle {
    /// Derives the palettes for `color` and wraps them under `id`.
    pub fn new(id: impl Into<String>, color: &str) -> Self {
        Self {
            id: id.into(),
            color: normalize_hex(color),
            palettes: derive(color),
        }
    }

    /// Builds one bundle per color with ids `palette-1`, `palette-2`, ...
    pub fn from_colors<S: AsRef<str>>(colors: &[S]) -> Vec<Self> {
        colors
            .iter()
            .enumerate()
            .map(|(i, c)| Self::new(format!("palette-{}", i + 1), c.as_ref()))
            .collect()
    }

    fn label(&self, position: usize) -> String {
        format!("Palette {} ({})", position + 1, self.color)
    }
}

/// Exports `bundles` in `format`, with English messages.
pub fn export(bundles: &[PaletteBundle], format: ExportFormat) -> String {
    export_localized(bundles, format, Language::En)
}

/// Exports `bundles` in `format`.
///
/// An empty selection yields the localized "no palette selected" message
/// rather than an empty document.
pub fn export_localized(bundles: &[PaletteBundle], format: ExportFormat, lang: Language) -> String {
    if bundles.is_empty() {
        return lang.no_palette().to_string();
    }
    match format {
        ExportFormat::Tailwind => tailwind(bundles),
        ExportFormat::Css => css(bundles),
        ExportFormat::Scss => scss(bundles),
        ExportFormat::Json => json(bundles),
        ExportFormat::Android => android(bundles),
        ExportFormat::SwiftUi => swiftui(bundles),
        ExportFormat::Figma => figma(bundles),
    }
}

fn tailwind(bundles: &[PaletteBundle]) -> String {
    const INDENT: &str = "        ";
    let mut lines = vec![
        "module.exports = {".to_string(),
        "  theme: {".to_string(),
        "    extend: {".to_string(),
        "      colors: {".to_string(),
    ];
    for (i, bundle) in bundles.iter().enumerate() {
        lines.push(format!("{INDENT}// {}", bundle.label(i)));
        lines.push(format!("{INDENT}{}: {{", js_key(&bundle.id)));
        for mode in Mode::ALL {
            lines.push(format!("{INDENT}  {}: {{", mode.tag()));
            for (role, color) in bundle.palettes.get(mode).iter() {
                lines.push(format!("{INDENT}    {role}: \"{color}\","));
            }
            lines.push(format!("{INDENT}  }},"));
        }
        lines.push(format!("{INDENT}}},"));
    }
    lines.extend(
        ["      },", "    },", "  },", "}"]
            .into_iter()
            .map(String::from),
    );
    lines.join("\n")
}

fn css(bundles: &[PaletteBundle]) -> String {
    let block = |bundle: &PaletteBundle, palette: &Palette| -> String {
        palette
            .iter()
            .map(|(role, color)| format!("  --{}-{role}: {color};", bundle.id))
            .collect::<Vec<_>>()
            .join("\n")
    };
    bundles
        .iter()
        .enumerate()
        .map(|(i, bundle)| {
            format!(
                "/* {} */\n:root {{\n{}\n}}\n[data-theme=\"dark\"] {{\n{}\n}}",
                bundle.label(i).replace("*/", "* /"),
                block(bundle, &bundle.palettes.light),
                block(bundle, &bundle.palettes.dark),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn scss(bundles: &[PaletteBundle]) -> String {
    bundles
        .iter()
        .enumerate()
        .map(|(i, bundle)| {
            let mut lines = vec![format!("// {}", bundle.label(i))];
            for mode in Mode::ALL {
                lines.extend(bundle.palettes.get(mode).iter().map(|(role, color)| {
                    format!("${}-{}-{role}: {color};", bundle.id, mode.tag())
                }));
            }
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    id: &'a str,
    color: &'a str,
    light: &'a Palette,
    dark: &'a Palette,
}

fn json(bundles: &[PaletteBundle]) -> String {
    let entries: Vec<JsonEntry<'_>> = bundles
        .iter()
        .map(|b| JsonEntry {
            id: &b.id,
            color: &b.color,
            light: &b.palettes.light,
            dark: &b.palettes.dark,
        })
        .collect();
    to_pretty_json(&entries)
}

fn android(bundles: &[PaletteBundle]) -> String {
    let mut lines = vec![
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>".to_string(),
        "<resources>".to_string(),
    ];
    for (i, bundle) in bundles.iter().enumerate() {
        lines.push(format!("  <!-- {} -->", xml_comment_text(&bundle.label(i))));
        let name = resource_name(&bundle.id);
        for mode in Mode::ALL {
            lines.extend(bundle.palettes.get(mode).iter().map(|(role, color)| {
                format!(
                    "  <color name=\"{name}_{}_{role}\">{color}</color>",
                    mode.tag()
                )
            }));
        }
    }
    lines.push("</resources>".to_string());
    lines.join("\n")
}

fn swiftui(bundles: &[PaletteBundle]) -> String {
    let instance = |palette: &Palette| -> String {
        palette
            .iter()
            .map(|(role, color)| format!("        {role}: \"{color}\""))
            .collect::<Vec<_>>()
            .join(",\n")
    };
    let mut sections: Vec<String> = bundles
        .iter()
        .enumerate()
        .map(|(i, bundle)| {
            format!(
                "// {}\nstruct {}Palette {{\n    static let light = ThemePalette(\n{}\n    )\n    static let dark = ThemePalette(\n{}\n    )\n}}",
                bundle.label(i),
                pascal_case(&bundle.id),
                instance(&bundle.palettes.light),
                instance(&bundle.palettes.dark),
            )
        })
        .collect();
    let fields: Vec<String> = Role::ALL
        .iter()
        .map(|role| format!("    let {role}: String"))
        .collect();
    sections.push(format!("struct ThemePalette {{\n{}\n}}", fields.join("\n")));
    sections.join("\n\n")
}

#[derive(Serialize)]
struct FigmaToken<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    value: &'a DualPalette,
    description: String,
}

struct FigmaTokens<'a>(&'a [PaletteBundle]);

impl Serialize for FigmaTokens<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for bundle in self.0 {
            let token = FigmaToken {
                kind: "color",
                value: &bundle.palettes,
                description: format!("Palette {}", bundle.color),
            };
            map.serialize_entry(&bundle.id, &token)?;
        }
        map.end()
    }
}

fn figma(bundles: &[PaletteBundle]) -> String {
    to_pretty_json(&FigmaTokens(bundles))
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        tracing::error!(error = %e, "palette serialization failed");
        String::new()
    })
}

/// Bare key when `id` is a valid JS identifier, quoted string otherwise.
fn js_key(id: &str) -> String {
    let mut chars = id.chars();
    let is_ident = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_ident {
        id.to_string()
    } else {
        format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

/// XML comments may not contain `--`.
fn xml_comment_text(text: &str) -> String {
    let mut out = text.to_string();
    while out.contains("--") {
        out = out.replace("--", "-");
    }
    out
}

/// Android resource names allow only `[A-Za-z0-9_]`.
fn resource_name(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// `palette-1` -> `Palette1`
fn pascal_case(id: &str) -> String {
    id.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect::<String>())
                .unwrap_or_default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn single() -> Vec<PaletteBundle> {
        PaletteBundle::from_colors(&["#3B82F6"])
    }

    fn pair() -> Vec<PaletteBundle> {
        PaletteBundle::from_colors(&["#3B82F6", "10b981"])
    }

    // -- Format tags --

    #[test]
    fn format_tags_round_trip_through_from_str() {
        for format in ExportFormat::ALL {
            assert_eq!(format.tag().parse::<ExportFormat>().unwrap(), format);
        }
        assert_eq!("SwiftUI".parse::<ExportFormat>().unwrap(), ExportFormat::SwiftUi);
    }

    #[test]
    fn unknown_format_is_a_parse_error() {
        let err = "pdf".parse::<ExportFormat>().unwrap_err();
        assert!(matches!(err, SwatchError::UnknownFormat(ref t) if t == "pdf"));
    }

    // -- Bundles --

    #[test]
    fn from_colors_numbers_ids_and_normalizes_colors() {
        let bundles = pair();
        assert_eq!(bundles[0].id, "palette-1");
        assert_eq!(bundles[1].id, "palette-2");
        assert_eq!(bundles[1].color, "#10B981");
        assert_eq!(bundles[1].palettes, derive("#10B981"));
    }

    // -- Empty selection --

    #[test]
    fn empty_selection_returns_message_for_every_format() {
        for format in ExportFormat::ALL {
            assert_eq!(export(&[], format), "No palette selected.");
            assert_eq!(
                export_localized(&[], format, Language::De),
                "Keine Palette ausgewählt."
            );
        }
    }

    // -- Shared guarantees --

    #[test]
    fn every_format_contains_label_and_all_values() {
        let bundles = pair();
        for format in ExportFormat::ALL {
            let out = export(&bundles, format);
            for bundle in &bundles {
                if !matches!(format, ExportFormat::Json | ExportFormat::Figma) {
                    assert!(
                        out.contains(&bundle.color),
                        "{format}: missing label for {}",
                        bundle.color
                    );
                }
                for mode in Mode::ALL {
                    for (role, color) in bundle.palettes.get(mode).iter() {
                        assert!(
                            out.contains(&color.to_hex()),
                            "{format}: missing {role} {color}"
                        );
                    }
                }
            }
        }
    }

    // -- CSS --

    #[test]
    fn css_emits_root_and_dark_blocks() {
        let out = export(&single(), ExportFormat::Css);
        assert!(out.starts_with("/* Palette 1 (#3B82F6) */\n:root {\n"));
        let dark_at = out.find("[data-theme=\"dark\"] {").expect("dark block");
        let (light, dark) = out.split_at(dark_at);
        assert!(light.contains("--palette-1-primary: #3B82F6;"));
        assert!(dark.contains("--palette-1-primary: #3B82F6;"));
        assert!(light.contains("--palette-1-background: #FFFFFF;"));
        assert!(dark.contains("--palette-1-background: #020617;"));
    }

    #[test]
    fn css_fields_follow_canonical_order() {
        let out = export(&single(), ExportFormat::Css);
        let light_block = out.split("[data-theme").next().unwrap();
        let mut last = 0;
        for role in Role::ALL {
            let pos = light_block
                .find(&format!("--palette-1-{role}:"))
                .unwrap_or_else(|| panic!("missing {role}"));
            assert!(pos > last, "{role} out of order");
            last = pos;
        }
    }

    // -- SCSS --

    #[test]
    fn scss_declares_light_then_dark_variables() {
        let out = export(&single(), ExportFormat::Scss);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "// Palette 1 (#3B82F6)");
        assert_eq!(lines[1], "$palette-1-light-primary: #3B82F6;");
        assert_eq!(lines[12], "$palette-1-light-danger: #DC2626;");
        assert_eq!(lines[13], "$palette-1-dark-primary: #3B82F6;");
        assert_eq!(lines[24], "$palette-1-dark-danger: #F87171;");
        assert_eq!(lines.len(), 25);
    }

    // -- JSON --

    #[test]
    fn json_parses_back_with_twelve_role_keys() {
        let bundles = pair();
        let out = export(&bundles, ExportFormat::Json);
        let parsed: Value = serde_json::from_str(&out).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), bundles.len());
        for entry in entries {
            for mode in ["light", "dark"] {
                let obj = entry[mode].as_object().unwrap();
                assert_eq!(obj.len(), 12);
                for role in Role::ALL {
                    assert!(obj.contains_key(role.tag()), "missing {role}");
                }
            }
        }
        assert_eq!(entries[0]["id"], "palette-1");
        assert_eq!(entries[1]["color"], "#10B981");
    }

    #[test]
    fn json_uses_two_space_indent() {
        let out = export(&single(), ExportFormat::Json);
        assert!(out.starts_with("[\n  {\n    \"id\": \"palette-1\","), "{out}");
    }

    // -- Tailwind --

    #[test]
    fn tailwind_nests_palettes_under_theme_colors() {
        let out = export(&single(), ExportFormat::Tailwind);
        assert!(out.starts_with("module.exports = {\n  theme: {\n    extend: {\n      colors: {"));
        assert!(out.contains("        // Palette 1 (#3B82F6)\n        \"palette-1\": {"));
        assert!(out.contains("          light: {\n            primary: \"#3B82F6\","));
        assert!(out.contains("          dark: {\n            primary: \"#3B82F6\","));
        assert!(out.ends_with("}"));
    }

    #[test]
    fn js_key_quotes_only_non_identifiers() {
        assert_eq!(js_key("brand"), "brand");
        assert_eq!(js_key("_x$1"), "_x$1");
        assert_eq!(js_key("palette-1"), "\"palette-1\"");
        assert_eq!(js_key("1st"), "\"1st\"");
        assert_eq!(js_key("a\"b"), "\"a\\\"b\"");
    }

    // -- Android --

    #[test]
    fn android_uses_valid_resource_names() {
        let out = export(&single(), ExportFormat::Android);
        assert!(out.contains("<resources>\n  <!-- Palette 1 (#3B82F6) -->"));
        assert!(out.contains("<color name=\"palette_1_light_primary\">#3B82F6</color>"));
        assert!(out.contains("<color name=\"palette_1_dark_background\">#020617</color>"));
        assert!(out.ends_with("</resources>"));
        assert_eq!(out.matches("<color ").count(), 24);
    }

    #[test]
    fn android_comment_never_contains_double_dash() {
        let bundles = vec![PaletteBundle::new("x", "not--a--color")];
        let out = export(&bundles, ExportFormat::Android);
        let comment = out.lines().find(|l| l.contains("<!--")).unwrap();
        let body = comment.trim().trim_start_matches("<!--").trim_end_matches("-->");
        assert!(!body.contains("--"), "{comment}");
    }

    // -- SwiftUI --

    #[test]
    fn swiftui_declares_struct_per_bundle_and_shared_palette() {
        let out = export(&pair(), ExportFormat::SwiftUi);
        assert!(out.contains("// Palette 1 (#3B82F6)\nstruct Palette1Palette {"));
        assert!(out.contains("struct Palette2Palette {"));
        assert!(out.contains("    static let light = ThemePalette(\n        primary: \"#3B82F6\",\n"));
        assert!(out.contains("        danger: \"#DC2626\"\n    )"));
        assert_eq!(out.matches("struct ThemePalette {").count(), 1);
        for role in Role::ALL {
            assert!(out.contains(&format!("    let {role}: String")));
        }
    }

    #[test]
    fn pascal_case_splits_on_dashes_and_underscores() {
        assert_eq!(pascal_case("palette-1"), "Palette1");
        assert_eq!(pascal_case("brand_main-dark"), "BrandMainDark");
        assert_eq!(pascal_case("--x"), "X");
    }

    // -- Figma --

    #[test]
    fn figma_tokens_are_keyed_by_bundle_id() {
        let out = export(&pair(), ExportFormat::Figma);
        let parsed: Value = serde_json::from_str(&out).unwrap();
        let token = &parsed["palette-1"];
        assert_eq!(token["type"], "color");
        assert_eq!(token["description"], "Palette #3B82F6");
        assert_eq!(token["value"]["light"]["primary"], "#3B82F6");
        assert_eq!(token["value"]["dark"]["background"], "#020617");
        assert_eq!(parsed.as_object().unwrap().len(), 2);
    }

    #[test]
    fn figma_keys_keep_bundle_order() {
        let out = export(&pair(), ExportFormat::Figma);
        let first = out.find("\"palette-1\"").unwrap();
        let second = out.find("\"palette-2\"").unwrap();
        assert!(first < second);
    }

    // -- Degraded input --

    #[test]
    fn unparseable_color_exports_default_palette() {
        let bundles = PaletteBundle::from_colors(&["oops"]);
        let out = export(&bundles, ExportFormat::Css);
        assert!(out.contains("/* Palette 1 (#OOPS) */"));
        assert!(out.contains("--palette-1-secondary: #8B5CF6;"));
    }
}
