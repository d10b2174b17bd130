//! Built-in theme presets.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use uismith_color::Color;

use crate::error::ThemeError;
use crate::palette::{FooterBackground, Theme};

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Default UiSmith theme (slate background, green accent).
    UiSmith,
    /// Neutral zinc grays with a violet accent.
    Zinc,
    /// Deep green surfaces.
    Emerald,
    /// Light theme on an off-white background.
    Paper,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::UiSmith => "uismith",
            Self::Zinc => "zinc",
            Self::Emerald => "emerald",
            Self::Paper => "paper",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::UiSmith => "UiSmith",
            Self::Zinc => "Zinc",
            Self::Emerald => "Emerald",
            Self::Paper => "Paper",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 4] = [
            ThemePreset::UiSmith,
            ThemePreset::Zinc,
            ThemePreset::Emerald,
            ThemePreset::Paper,
        ];
        &PRESETS
    }

    pub fn theme(self) -> Theme {
        match self {
            Self::UiSmith => Theme::default(),
            Self::Zinc => preset(
                0x18181b, 0xe4e4e7, 0xfafafa, 0xd4d4d8, 0xa78bfa, 0x3f3f46,
            ),
            Self::Emerald => preset(
                0x022c22, 0xd1fae5, 0xecfdf5, 0xa7f3d0, 0x34d399, 0x065f46,
            ),
            Self::Paper => preset(
                0xf8fafc, 0x334155, 0x0f172a, 0x475569, 0x16a34a, 0x94a3b8,
            ),
        }
    }
}

fn preset(
    background: u32,
    foreground: u32,
    title_foreground: u32,
    body_foreground: u32,
    accent: u32,
    border: u32,
) -> Theme {
    Theme {
        background: Color::from_hex(background),
        foreground: Color::from_hex(foreground),
        title_foreground: Color::from_hex(title_foreground),
        body_foreground: Color::from_hex(body_foreground),
        accent: Color::from_hex(accent),
        border: Color::from_hex(border),
        footer_background: FooterBackground::Transparent,
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ThemePreset {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ThemeError::UnknownName {
                kind: "preset",
                name: s.to_string(),
            })
    }
}

/// Convenience free function for ergonomic imports.
pub fn preset_theme(preset: ThemePreset) -> Theme {
    preset.theme()
}
