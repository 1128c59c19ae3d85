//! User-facing labels in the supported languages.

use std::fmt;
use std::str::FromStr;

use crate::error::SwatchError;
use crate::export::ExportFormat;
use crate::mood::Mood;
use crate::palette::{Mode, Role};
use serde::{Deserialize, Serialize};

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::De];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// Resolves a language code leniently: anything other than exactly `de`
    /// is English.
    pub fn resolve(code: &str) -> Self {
        match code {
            "de" => Language::De,
            _ => Language::En,
        }
    }

    /// Text returned by the exporter when no palette is selected.
    pub fn no_palette(self) -> &'static str {
        match self {
            Language::En => "No palette selected.",
            Language::De => "Keine Palette ausgewählt.",
        }
    }

    pub fn mode_label(self, mode: Mode) -> &'static str {
        match (self, mode) {
            (Language::En, Mode::Light) => "Light mode",
            (Language::En, Mode::Dark) => "Dark mode",
            (Language::De, Mode::Light) => "Heller Modus",
            (Language::De, Mode::Dark) => "Dunkler Modus",
        }
    }

    pub fn role_label(self, role: Role) -> &'static str {
        match self {
            Language::En => match role {
                Role::Primary => "Primary",
                Role::Secondary => "Secondary",
                Role::Accent => "Accent",
                Role::Background => "Background",
                Role::Surface => "Surface",
                Role::Text => "Text",
                Role::Headline => "Headline",
                Role::Muted => "Muted",
                Role::Border => "Border",
                Role::Success => "Success",
                Role::Warning => "Warning",
                Role::Danger => "Danger",
            },
            Language::De => match role {
                Role::Primary => "Primär",
                Role::Secondary => "Sekundär",
                Role::Accent => "Akzent",
                Role::Background => "Hintergrund",
                Role::Surface => "Fläche",
                Role::Text => "Text",
                Role::Headline => "Überschrift",
                Role::Muted => "Gedämpft",
                Role::Border => "Rahmen",
                Role::Success => "Erfolg",
                Role::Warning => "Warnung",
                Role::Danger => "Fehler",
            },
        }
    }

    pub fn mood_label(self, mood: Mood) -> &'static str {
        match self {
            Language::En => match mood {
                Mood::Pastel => "Pastel",
                Mood::Vibrant => "Vibrant",
                Mood::Dark => "Dark",
                Mood::Light => "Light",
                Mood::Neon => "Neon",
                Mood::Earth => "Earthy",
                Mood::Muted => "Muted",
                Mood::Warm => "Warm",
                Mood::Cool => "Cool",
                Mood::Monochrome => "Monochrome",
            },
            Language::De => match mood {
                Mood::Pastel => "Pastell",
                Mood::Vibrant => "Kräftig",
                Mood::Dark => "Dunkel",
                Mood::Light => "Hell",
                Mood::Neon => "Neon",
                Mood::Earth => "Erdig",
                Mood::Muted => "Gedämpft",
                Mood::Warm => "Warm",
                Mood::Cool => "Kühl",
                Mood::Monochrome => "Monochrom",
            },
        }
    }

    pub fn format_label(self, format: ExportFormat) -> &'static str {
        match self {
            Language::En => match format {
                ExportFormat::Tailwind => "Tailwind Config",
                ExportFormat::Css => "CSS Custom Properties",
                ExportFormat::Scss => "SCSS variables",
                ExportFormat::Json => "JSON",
                ExportFormat::Android => "Android XML",
                ExportFormat::SwiftUi => "SwiftUI Colors",
                ExportFormat::Figma => "Figma Tokens",
            },
            Language::De => match format {
                ExportFormat::Tailwind => "Tailwind-Konfiguration",
                ExportFormat::Css => "CSS-Custom Properties",
                ExportFormat::Scss => "SCSS-Variablen",
                ExportFormat::Json => "JSON",
                ExportFormat::Android => "Android-XML",
                ExportFormat::SwiftUi => "SwiftUI-Farben",
                ExportFormat::Figma => "Figma Tokens",
            },
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SwatchError::UnknownLanguage(s.to_string()))
    }
}
